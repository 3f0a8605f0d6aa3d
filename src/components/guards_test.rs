use super::*;
use crate::net::types::User;

fn make_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@plant.example".to_owned(),
        role,
        phone: None,
        company_name: None,
        department: None,
        location: None,
        bio: None,
        profile_image: None,
        created_at: None,
        updated_at: None,
    }
}

fn signed_out() -> SessionState {
    SessionState::default()
}

fn checking() -> SessionState {
    let mut state = SessionState::default();
    state.begin_check();
    state
}

fn signed_in(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.apply_sign_in(make_user(role));
    state
}

// =============================================================
// authed_decision
// =============================================================

#[test]
fn authed_allows_a_signed_in_session() {
    assert_eq!(authed_decision(&signed_in(Role::Sales)), GuardDecision::Allow);
}

#[test]
fn authed_holds_while_the_first_check_runs() {
    assert_eq!(authed_decision(&checking()), GuardDecision::Loading);
}

#[test]
fn authed_redirects_a_signed_out_visitor_to_login() {
    assert_eq!(
        authed_decision(&signed_out()),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn authed_still_allows_during_a_recheck_of_a_live_session() {
    let mut state = signed_in(Role::Planning);
    state.begin_check();
    assert_eq!(authed_decision(&state), GuardDecision::Allow);
}

#[test]
fn authed_treats_authenticated_without_user_as_signed_out() {
    let state = SessionState {
        authenticated: true,
        ..SessionState::default()
    };
    assert_eq!(authed_decision(&state), GuardDecision::Redirect("/login"));
}

// =============================================================
// admin_decision
// =============================================================

#[test]
fn admin_allows_an_admin() {
    assert_eq!(admin_decision(&signed_in(Role::Admin)), GuardDecision::Allow);
}

#[test]
fn admin_sends_a_signed_in_non_admin_home() {
    // Wrong role never mounts the protected children.
    assert_eq!(
        admin_decision(&signed_in(Role::User)),
        GuardDecision::Redirect("/")
    );
    assert_eq!(
        admin_decision(&signed_in(Role::Production)),
        GuardDecision::Redirect("/")
    );
}

#[test]
fn admin_sends_a_signed_out_visitor_to_login() {
    assert_eq!(
        admin_decision(&signed_out()),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn admin_holds_while_the_first_check_runs() {
    assert_eq!(admin_decision(&checking()), GuardDecision::Loading);
}

#[test]
fn admin_does_not_trust_an_unknown_role() {
    assert_eq!(
        admin_decision(&signed_in(Role::Unknown("Admin".to_owned()))),
        GuardDecision::Redirect("/")
    );
}

// =============================================================
// guest_decision
// =============================================================

#[test]
fn guest_allows_a_signed_out_visitor() {
    assert_eq!(guest_decision(&signed_out()), GuardDecision::Allow);
}

#[test]
fn guest_allows_while_the_first_check_runs_with_no_user_yet() {
    assert_eq!(guest_decision(&checking()), GuardDecision::Allow);
}

#[test]
fn guest_sends_a_signed_in_admin_home() {
    assert_eq!(
        guest_decision(&signed_in(Role::Admin)),
        GuardDecision::Redirect("/")
    );
}

#[test]
fn guest_holds_during_a_recheck_of_a_live_session() {
    let mut state = signed_in(Role::Npd);
    state.begin_check();
    assert_eq!(guest_decision(&state), GuardDecision::Loading);
}

// =============================================================
// Post-login / post-logout flips
// =============================================================

#[test]
fn decisions_flip_when_a_login_lands() {
    let mut state = signed_out();
    assert_eq!(authed_decision(&state), GuardDecision::Redirect("/login"));

    state.begin_request();
    state.apply_sign_in(make_user(Role::Stores));
    state.finish_request();

    assert_eq!(authed_decision(&state), GuardDecision::Allow);
    assert_eq!(guest_decision(&state), GuardDecision::Redirect("/"));
}

#[test]
fn decisions_flip_when_a_logout_lands() {
    let mut state = signed_in(Role::Admin);
    assert_eq!(admin_decision(&state), GuardDecision::Allow);

    state.begin_request();
    state.clear_session();
    state.finish_request();

    assert_eq!(authed_decision(&state), GuardDecision::Redirect("/login"));
    assert_eq!(guest_decision(&state), GuardDecision::Allow);
}
