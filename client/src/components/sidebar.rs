//! Left navigation with role-aware tabs and the account section.

use leptos::prelude::*;

use crate::state::shell::AppShell;

/// Sidebar listing the tabs visible to the current user, plus either the
/// sign-up/login button or the signed-in user with a logout action.
#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = expect_context::<RwSignal<AppShell>>();

    let items = move || {
        shell
            .with(AppShell::nav_items)
            .into_iter()
            .map(|item| {
                let is_active = move || shell.with(|s| s.visible_tab() == item.tab);
                view! {
                    <button
                        class="sidebar__item"
                        data-tab=item.tab.id().to_string()
                        class:sidebar__item--active=is_active
                        on:click=move |_| shell.update(|s| s.select_tab(item.tab))
                    >
                        <span class="sidebar__icon" aria-hidden="true">{item.icon}</span>
                        <span class="sidebar__label">{item.label}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let account = move || match shell.with(|s| s.current_user.clone()) {
        Some(user) => view! {
            <div class="sidebar__account">
                <span class="sidebar__username">{user.username}</span>
                <span class="sidebar__email">{user.email}</span>
                <button class="btn sidebar__logout" on:click=move |_| shell.update(AppShell::logout)>
                    "Log out"
                </button>
            </div>
        }
        .into_any(),
        None => view! {
            <button class="btn btn--primary sidebar__auth" on:click=move |_| shell.update(AppShell::open_auth)>
                "Sign up / Log in"
            </button>
        }
        .into_any(),
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Re-Meals"</div>
            <div class="sidebar__items">{items}</div>
            <div class="sidebar__footer">{account}</div>
        </nav>
    }
}
