//! # client
//!
//! Leptos + WASM frontend for Re-Meals: a sidebar with placeholder tab
//! panels and the sign-up/login modal.
//!
//! All auth behavior lives in `remeals-auth`; this crate binds its form
//! state to inputs, runs submissions on the browser event loop through a
//! `gloo-net` transport, and applies the returned events to the app shell.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// Install browser logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
