//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts browser `fetch` (via `gloo-net`) to the `AuthTransport` seam
//! and builds the configured `AuthHandler`.

pub mod api;
