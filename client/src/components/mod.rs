//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `RwSignal<AppShell>` from Leptos
//! context; the auth modal owns its own form state.

pub mod auth_modal;
pub mod sidebar;
pub mod tab_content;
