use super::*;

fn seeker(id: &str) -> Identity {
    Identity {
        id: id.to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        phone: "555-0100".to_owned(),
        address: "1 Main St".to_owned(),
        role: Role::Seeker,
        skills: None,
        authenticated: false,
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Seeker).unwrap(), r#""seeker""#);
    assert_eq!(serde_json::to_string(&Role::Provider).unwrap(), r#""provider""#);
}

#[test]
fn identity_round_trip() {
    let mut identity = seeker("u1");
    identity.skills = Some("plumbing".to_owned());
    identity.authenticated = true;
    let json = serde_json::to_string(&identity).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, identity);
}

#[test]
fn identity_parses_without_authenticated_flag() {
    // Blobs written before the flag existed must still parse.
    let json = r#"{
        "id": "u1",
        "name": "Alice",
        "email": "alice@example.com",
        "phone": "555-0100",
        "address": "1 Main St",
        "role": "seeker"
    }"#;
    let restored: Identity = serde_json::from_str(json).unwrap();
    assert!(!restored.authenticated);
    assert_eq!(restored.skills, None);
}

#[test]
fn identity_omits_absent_skills() {
    let json = serde_json::to_value(seeker("u1")).unwrap();
    assert!(json.get("skills").is_none());
}
