//! Sign-up / login modal.
//!
//! ARCHITECTURE
//! ============
//! The modal owns an `RwSignal<AuthForms>` created on open and dropped on
//! close. Submits snapshot credentials with `begin_*` (refused while a
//! required field is empty or a request is in flight), run the request on
//! the browser event loop, apply the outcome with `finish_*`, and hand the
//! resulting events to the parent through `on_events`.

#[cfg(test)]
#[path = "auth_modal_test.rs"]
mod auth_modal_test;

use leptos::prelude::*;
use remeals_auth::{AuthEvent, AuthForms, AuthMode, FormStatus, LoginField, SignupField};

fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Signup => "Create your account",
        AuthMode::Login => "Welcome back",
    }
}

fn submit_label(mode: AuthMode, loading: bool) -> &'static str {
    match (mode, loading) {
        (AuthMode::Signup, false) => "Create account",
        (AuthMode::Signup, true) => "Creating account...",
        (AuthMode::Login, false) => "Login",
        (AuthMode::Login, true) => "Logging in...",
    }
}

/// Input widget type and label for each sign-up field.
fn signup_input(field: SignupField) -> (&'static str, &'static str) {
    match field {
        SignupField::Username => ("text", "Username"),
        SignupField::FirstName => ("text", "First name"),
        SignupField::LastName => ("text", "Last name"),
        SignupField::BirthDate => ("date", "Date of birth"),
        SignupField::Phone => ("tel", "Phone"),
        SignupField::Email => ("email", "Email"),
        SignupField::Password => ("password", "Password"),
    }
}

/// Modal overlay with sign-up and login tabs.
#[component]
pub fn AuthModal(
    initial_mode: AuthMode,
    on_close: Callback<()>,
    on_events: Callback<Vec<AuthEvent>>,
) -> impl IntoView {
    let forms = RwSignal::new(AuthForms::open(initial_mode));
    let mode = Memo::new(move |_| forms.with(|f| f.mode));

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--auth"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{move || heading(mode.get())}</h2>
                    <button
                        class="dialog__close"
                        on:click=on_close_click
                        aria-label="Close authentication dialog"
                    >
                        "✕"
                    </button>
                </div>
                <div class="auth-tabs">
                    <button
                        class="auth-tabs__tab"
                        class:auth-tabs__tab--active=move || mode.get() == AuthMode::Signup
                        on:click=move |_| forms.update(|f| f.set_mode(AuthMode::Signup))
                    >
                        "Sign up"
                    </button>
                    <button
                        class="auth-tabs__tab"
                        class:auth-tabs__tab--active=move || mode.get() == AuthMode::Login
                        on:click=move |_| forms.update(|f| f.set_mode(AuthMode::Login))
                    >
                        "Login"
                    </button>
                </div>
                <Show
                    when=move || mode.get() == AuthMode::Signup
                    fallback=move || view! { <LoginForm forms on_events/> }
                >
                    <SignupForm forms on_events/>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn SignupForm(forms: RwSignal<AuthForms>, on_events: Callback<Vec<AuthEvent>>) -> impl IntoView {
    let loading = move || forms.with(|f| f.signup_status.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = forms.try_update(AuthForms::begin_signup).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::auth_handler().submit_signup(&credentials).await;
            let fallback = outcome.events.clone();
            let events = forms.try_update(|f| f.finish_signup(outcome)).unwrap_or(fallback);
            on_events.run(events);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, on_events);
        }
    };

    let inputs = SignupField::ALL
        .into_iter()
        .map(|field| {
            let (kind, label) = signup_input(field);
            view! {
                <label class="auth-field">
                    <span class="auth-field__label">{label}</span>
                    <input
                        class="auth-input"
                        type=kind
                        name=field.key()
                        required
                        prop:value=move || forms.with(|f| f.signup.get(field).to_owned())
                        on:input=move |ev| forms.update(|f| f.signup.set(field, event_target_value(&ev)))
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <form class="auth-form" on:submit=on_submit>
            {inputs}
            <FormStatusLine status=Signal::derive(move || forms.with(|f| f.active_status().clone()))/>
            <button class="btn btn--primary auth-form__submit" type="submit" disabled=loading>
                {move || submit_label(AuthMode::Signup, loading())}
            </button>
        </form>
    }
}

#[component]
fn LoginForm(forms: RwSignal<AuthForms>, on_events: Callback<Vec<AuthEvent>>) -> impl IntoView {
    let loading = move || forms.with(|f| f.login_status.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = forms.try_update(AuthForms::begin_login).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::auth_handler().submit_login(&credentials).await;
            let fallback = outcome.events.clone();
            let events = forms.try_update(|f| f.finish_login(outcome)).unwrap_or(fallback);
            on_events.run(events);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, on_events);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-field">
                <span class="auth-field__label">"Username or email"</span>
                <input
                    class="auth-input"
                    type="text"
                    name="identifier"
                    required
                    prop:value=move || forms.with(|f| f.login.identifier.clone())
                    on:input=move |ev| forms.update(|f| f.login.set(LoginField::Identifier, event_target_value(&ev)))
                />
            </label>
            <label class="auth-field">
                <span class="auth-field__label">"Password"</span>
                <input
                    class="auth-input"
                    type="password"
                    name="password"
                    required
                    prop:value=move || forms.with(|f| f.login.password.clone())
                    on:input=move |ev| forms.update(|f| f.login.set(LoginField::Password, event_target_value(&ev)))
                />
            </label>
            <FormStatusLine status=Signal::derive(move || forms.with(|f| f.active_status().clone()))/>
            <button class="btn btn--primary auth-form__submit" type="submit" disabled=loading>
                {move || submit_label(AuthMode::Login, loading())}
            </button>
        </form>
    }
}

/// Inline success or error text for the active form. Nothing while loading.
#[component]
fn FormStatusLine(#[prop(into)] status: Signal<FormStatus>) -> impl IntoView {
    view! {
        {move || {
            status.with(|s| {
                s.visible_error()
                    .map(|e| view! { <p class="auth-status auth-status--error">{e.to_owned()}</p> }.into_any())
                    .or_else(|| {
                        s.visible_message()
                            .map(|m| view! { <p class="auth-status auth-status--ok">{m.to_owned()}</p> }.into_any())
                    })
            })
        }}
    }
}
