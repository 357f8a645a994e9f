//! Placeholder panel for the active sidebar tab.

use leptos::prelude::*;

use crate::state::shell::AppShell;

#[component]
pub fn TabContent() -> impl IntoView {
    let shell = expect_context::<RwSignal<AppShell>>();
    let tab = Memo::new(move |_| shell.with(AppShell::visible_tab));

    view! {
        <article class="tab-content">
            <h1 class="tab-content__title">{move || tab.get().title()}</h1>
            <p class="tab-content__blurb">{move || tab.get().blurb()}</p>
        </article>
    }
}
