use super::*;

fn member() -> LoggedUser {
    LoggedUser { username: "pat".to_owned(), email: "pat@example.com".to_owned(), ..LoggedUser::default() }
}

fn admin() -> LoggedUser {
    LoggedUser { is_admin: true, ..member() }
}

fn driver() -> LoggedUser {
    LoggedUser { is_delivery_staff: true, ..member() }
}

fn tabs(items: &[NavItem]) -> Vec<Tab> {
    items.iter().map(|i| i.tab).collect()
}

// =============================================================
// AppShell defaults
// =============================================================

#[test]
fn shell_default_is_anonymous_home_without_modal() {
    let shell = AppShell::default();
    assert_eq!(shell.active_tab, Tab::Home);
    assert!(shell.current_user.is_none());
    assert!(shell.auth_modal.is_none());
}

#[test]
fn tab_ids_are_stable() {
    let ids: Vec<u8> = [Tab::Home, Tab::Donate, Tab::GetMeals, Tab::Dashboard, Tab::Delivery]
        .into_iter()
        .map(Tab::id)
        .collect();
    assert_eq!(ids, [0, 1, 2, 3, 4]);
}

// =============================================================
// nav_items
// =============================================================

#[test]
fn anonymous_and_members_see_public_tabs() {
    assert_eq!(tabs(&nav_items(None)), [Tab::Home, Tab::Donate, Tab::GetMeals]);
    assert_eq!(tabs(&nav_items(Some(&member()))), [Tab::Home, Tab::Donate, Tab::GetMeals]);
}

#[test]
fn admins_see_dashboard_and_delivery() {
    assert_eq!(tabs(&nav_items(Some(&admin()))), [Tab::Home, Tab::Dashboard, Tab::Delivery]);
}

#[test]
fn drivers_see_delivery_board() {
    let items = nav_items(Some(&driver()));
    assert_eq!(tabs(&items), [Tab::Home, Tab::Delivery]);
    assert_eq!(items[1].label, "Delivery board");
}

// =============================================================
// normalize_tab
// =============================================================

#[test]
fn home_is_always_reachable() {
    for user in [None, Some(member()), Some(admin()), Some(driver())] {
        assert_eq!(normalize_tab(Tab::Home, user.as_ref()), Tab::Home);
    }
}

#[test]
fn anonymous_staff_tabs_fall_back_to_home() {
    assert_eq!(normalize_tab(Tab::Dashboard, None), Tab::Home);
    assert_eq!(normalize_tab(Tab::Delivery, None), Tab::Home);
    assert_eq!(normalize_tab(Tab::Donate, None), Tab::Donate);
    assert_eq!(normalize_tab(Tab::GetMeals, None), Tab::GetMeals);
}

#[test]
fn admins_are_redirected_from_member_tabs() {
    let user = admin();
    assert_eq!(normalize_tab(Tab::Donate, Some(&user)), Tab::Dashboard);
    assert_eq!(normalize_tab(Tab::GetMeals, Some(&user)), Tab::Dashboard);
    assert_eq!(normalize_tab(Tab::Delivery, Some(&user)), Tab::Delivery);
}

#[test]
fn drivers_are_redirected_to_delivery() {
    let user = driver();
    for tab in [Tab::Donate, Tab::GetMeals, Tab::Dashboard] {
        assert_eq!(normalize_tab(tab, Some(&user)), Tab::Delivery);
    }
}

#[test]
fn admin_flag_wins_over_driver_flag() {
    let user = LoggedUser { is_delivery_staff: true, ..admin() };
    assert_eq!(normalize_tab(Tab::Dashboard, Some(&user)), Tab::Dashboard);
    assert_eq!(landing_tab(&user), Tab::Dashboard);
}

#[test]
fn landing_tab_by_role() {
    assert_eq!(landing_tab(&member()), Tab::Donate);
    assert_eq!(landing_tab(&admin()), Tab::Dashboard);
    assert_eq!(landing_tab(&driver()), Tab::Delivery);
}

// =============================================================
// Auth events
// =============================================================

#[test]
fn open_auth_starts_on_signup() {
    let mut shell = AppShell::default();
    shell.open_auth();
    assert_eq!(shell.auth_modal, Some(AuthMode::Signup));
    shell.close_auth();
    assert_eq!(shell.auth_modal, None);
}

#[test]
fn authenticated_event_signs_in_and_closes_modal() {
    let mut shell = AppShell::default();
    shell.open_auth();
    shell.apply_all(&[AuthEvent::Authenticated(member()), AuthEvent::ModalClosed]);

    assert_eq!(shell.current_user, Some(member()));
    assert_eq!(shell.auth_modal, None);
    assert_eq!(shell.visible_tab(), Tab::Donate);
}

#[test]
fn mode_change_leaves_shell_untouched() {
    let mut shell = AppShell::default();
    shell.open_auth();
    let before = shell.clone();
    shell.apply(&AuthEvent::ModeChanged(AuthMode::Login));
    assert_eq!(shell, before);
}

#[test]
fn logout_clears_user_and_returns_home() {
    let mut shell = AppShell::default();
    shell.apply(&AuthEvent::Authenticated(admin()));
    assert_eq!(shell.visible_tab(), Tab::Dashboard);

    shell.logout();
    assert!(shell.current_user.is_none());
    assert_eq!(shell.visible_tab(), Tab::Home);
    assert_eq!(tabs(&shell.nav_items()), [Tab::Home, Tab::Donate, Tab::GetMeals]);
}

#[test]
fn visible_tab_tracks_user_changes() {
    let mut shell = AppShell::default();
    shell.select_tab(Tab::Delivery);
    assert_eq!(shell.visible_tab(), Tab::Home);

    shell.current_user = Some(driver());
    assert_eq!(shell.visible_tab(), Tab::Delivery);
}
