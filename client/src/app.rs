//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use remeals_auth::AuthEvent;

use crate::components::{auth_modal::AuthModal, sidebar::Sidebar, tab_content::TabContent};
use crate::state::shell::AppShell;

/// Root application component.
///
/// Provides the app shell context and renders the sidebar, the active tab
/// panel, and the auth modal when it is open.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shell = RwSignal::new(AppShell::default());
    provide_context(shell);

    // Remount the modal only when it opens or closes.
    let modal_mode = Memo::new(move |_| shell.with(|s| s.auth_modal));
    let current_user = Memo::new(move |_| shell.with(|s| s.current_user.clone()));

    let on_close = Callback::new(move |()| shell.update(AppShell::close_auth));
    let on_events = Callback::new(move |events: Vec<AuthEvent>| shell.update(|s| s.apply_all(&events)));

    view! {
        <Title text="Re-Meals"/>

        <main class="app">
            <Sidebar/>
            <section class="app__content">
                <TabContent/>
                {move || {
                    current_user
                        .get()
                        .map(|user| {
                            view! {
                                <div class="session-strip">
                                    "Logged in as " <strong>{user.username}</strong>
                                    <span class="session-strip__email">{user.email}</span>
                                </div>
                            }
                        })
                }}
                {move || modal_mode.get().map(|mode| view! { <AuthModal initial_mode=mode on_close on_events/> })}
            </section>
        </main>
    }
}
