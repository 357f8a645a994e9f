//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The app shell (active tab, signed-in user, modal visibility) is the only
//! state shared through context. Modal form state lives in the modal itself
//! and is dropped when it closes.

pub mod shell;
