//! App shell state: sidebar tabs, current user, and auth modal visibility.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar, tab panels, and auth modal all read this through a shared
//! `RwSignal<AppShell>`. Auth submissions report back as [`AuthEvent`]s,
//! which [`AppShell::apply`] folds in.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use remeals_auth::{AuthEvent, AuthMode, LoggedUser};

/// Sidebar destinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tab {
    #[default]
    Home,
    Donate,
    GetMeals,
    Dashboard,
    Delivery,
}

impl Tab {
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Home => 0,
            Self::Donate => 1,
            Self::GetMeals => 2,
            Self::Dashboard => 3,
            Self::Delivery => 4,
        }
    }

    /// Panel heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Donate => "Donate",
            Self::GetMeals => "Get meals",
            Self::Dashboard => "Dashboard",
            Self::Delivery => "Delivery",
        }
    }

    /// Placeholder copy shown in the panel body.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Home => "Rescue surplus meals and route them to people who need them.",
            Self::Donate => "Offer surplus food from your restaurant or branch.",
            Self::GetMeals => "Request meals for your community.",
            Self::Dashboard => "Manage donations, requests, and warehouse stock.",
            Self::Delivery => "Track pickups and drop-offs assigned to delivery staff.",
        }
    }

    fn is_member_tab(self) -> bool {
        matches!(self, Self::Donate | Self::GetMeals)
    }
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub tab: Tab,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn item(tab: Tab, label: &'static str, icon: &'static str) -> NavItem {
    NavItem { tab, label, icon }
}

const HOME: NavItem = item(Tab::Home, "Home", "🏠");

/// Sidebar entries visible to `user`.
#[must_use]
pub fn nav_items(user: Option<&LoggedUser>) -> Vec<NavItem> {
    match user {
        Some(u) if u.is_admin => vec![
            HOME,
            item(Tab::Dashboard, "Dashboard", "🛠️"),
            item(Tab::Delivery, "Delivery", "🚚"),
        ],
        Some(u) if u.is_delivery_staff => vec![HOME, item(Tab::Delivery, "Delivery board", "🚚")],
        _ => vec![HOME, item(Tab::Donate, "Donate", "💚"), item(Tab::GetMeals, "Get meals", "🍽️")],
    }
}

/// Map a requested tab to one `user` may see. Home is always reachable.
#[must_use]
pub fn normalize_tab(requested: Tab, user: Option<&LoggedUser>) -> Tab {
    match (requested, user) {
        (Tab::Home, _) => Tab::Home,
        (Tab::Dashboard | Tab::Delivery, None) => Tab::Home,
        (tab, Some(u)) if u.is_admin && tab.is_member_tab() => Tab::Dashboard,
        (tab, Some(u)) if !u.is_admin && u.is_delivery_staff && tab < Tab::Delivery => Tab::Delivery,
        (tab, _) => tab,
    }
}

/// Where a freshly authenticated user lands.
#[must_use]
pub fn landing_tab(user: &LoggedUser) -> Tab {
    if user.is_admin {
        Tab::Dashboard
    } else if user.is_delivery_staff {
        Tab::Delivery
    } else {
        Tab::Donate
    }
}

/// Top-level view state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppShell {
    /// Tab last chosen by the user, before normalization.
    pub active_tab: Tab,
    pub current_user: Option<LoggedUser>,
    /// `Some(mode)` while the auth modal is open; `mode` is its initial form.
    pub auth_modal: Option<AuthMode>,
}

impl AppShell {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Tab actually rendered for the current user.
    #[must_use]
    pub fn visible_tab(&self) -> Tab {
        normalize_tab(self.active_tab, self.current_user.as_ref())
    }

    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(self.current_user.as_ref())
    }

    /// Open the auth modal on the sign-up form.
    pub fn open_auth(&mut self) {
        self.auth_modal = Some(AuthMode::Signup);
    }

    pub fn close_auth(&mut self) {
        self.auth_modal = None;
    }

    /// Apply one auth event. Mode changes belong to the modal and are ignored.
    pub fn apply(&mut self, event: &AuthEvent) {
        match event {
            AuthEvent::Authenticated(user) => {
                log::info!("signed in as {}", user.username);
                self.active_tab = landing_tab(user);
                self.current_user = Some(user.clone());
                self.auth_modal = None;
            }
            AuthEvent::ModalClosed => self.auth_modal = None,
            AuthEvent::ModeChanged(_) => {}
        }
    }

    pub fn apply_all(&mut self, events: &[AuthEvent]) {
        for event in events {
            self.apply(event);
        }
    }

    /// Forget the user and return to Home.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            log::info!("signed out {}", user.username);
        }
        self.active_tab = Tab::Home;
    }
}
