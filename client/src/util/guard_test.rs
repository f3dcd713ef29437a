use super::*;
use crate::net::types::{Identity, Role};

fn seeker(authenticated: bool) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        phone: "555-0100".to_owned(),
        address: "1 Main St".to_owned(),
        role: Role::Seeker,
        skills: None,
        authenticated,
    }
}

#[test]
fn redirects_when_loaded_and_no_user() {
    let state = SessionState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_while_loading() {
    let state = SessionState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_when_authenticated() {
    let state = SessionState { user: Some(seeker(true)), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn redirects_when_user_present_but_flag_unset() {
    let state = SessionState { user: Some(seeker(false)), loading: false };
    assert!(should_redirect_unauth(&state));
}
