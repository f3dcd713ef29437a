use std::collections::HashSet;

use super::*;

#[test]
fn demo_user_ids_are_unique() {
    let ids: HashSet<_> = DEMO_USERS.iter().map(|u| u.id).collect();
    assert_eq!(ids.len(), DEMO_USERS.len());
}

#[test]
fn admin_ids_are_unique() {
    let ids: HashSet<_> = ADMIN_IDENTITIES.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), ADMIN_IDENTITIES.len());
}

#[test]
fn find_demo_user_matches_credentials() {
    let identity = find_demo_user("jane@skillmatch.test", "jane123").expect("fixture exists");
    assert_eq!(identity.id, "demo-seeker-1");
    assert_eq!(identity.role, Role::Seeker);
    assert!(!identity.authenticated);
}

#[test]
fn find_demo_user_email_is_case_insensitive() {
    assert!(find_demo_user("JANE@skillmatch.TEST", "jane123").is_some());
}

#[test]
fn find_demo_user_trims_email() {
    assert!(find_demo_user("  jane@skillmatch.test  ", "jane123").is_some());
}

#[test]
fn find_demo_user_password_is_exact() {
    assert!(find_demo_user("jane@skillmatch.test", "JANE123").is_none());
    assert!(find_demo_user("jane@skillmatch.test", "").is_none());
}

#[test]
fn find_demo_user_unknown_email_is_none() {
    assert!(find_demo_user("nobody@skillmatch.test", "jane123").is_none());
}

#[test]
fn provider_fixture_carries_skills() {
    let identity = find_demo_user("carlos@skillmatch.test", "carlos123").unwrap();
    assert_eq!(identity.role, Role::Provider);
    assert!(identity.skills.as_deref().unwrap_or_default().contains("plumbing"));
}

#[test]
fn find_admin_matches_and_distinguishes_roles() {
    let admin = find_admin("admin@skillmatch.test", "admin123").expect("fixture exists");
    assert_eq!(admin.role, AdminRole::Admin);

    let root = find_admin("root@skillmatch.test", "super123").expect("fixture exists");
    assert_eq!(root.role, AdminRole::SuperAdmin);
    assert!(root.permissions.contains(&"admins:manage"));
}

#[test]
fn every_admin_has_permissions() {
    assert!(ADMIN_IDENTITIES.iter().all(|a| !a.permissions.is_empty()));
}
