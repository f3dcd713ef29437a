use super::*;

fn subject() -> Subject {
    Subject { id: "u1".to_owned(), email: "jane@example.com".to_owned() }
}

#[test]
fn new_profile_takes_identity_from_subject() {
    let req = CreateProfileRequest {
        full_name: "Jane".to_owned(),
        phone: "555".to_owned(),
        user_type: None,
    };
    let new = NewProfile::new(&subject(), &req);
    assert_eq!(new.id, "u1");
    assert_eq!(new.email, "jane@example.com");
    assert_eq!(new.full_name, "Jane");
    assert_eq!(new.phone, "555");
}

#[test]
fn new_profile_defaults_user_type() {
    let req = CreateProfileRequest {
        full_name: "Jane".to_owned(),
        phone: "555".to_owned(),
        user_type: None,
    };
    assert_eq!(NewProfile::new(&subject(), &req).user_type, "customer");
}

#[test]
fn new_profile_keeps_explicit_user_type() {
    let req = CreateProfileRequest {
        full_name: "Jane".to_owned(),
        phone: "555".to_owned(),
        user_type: Some("provider".to_owned()),
    };
    assert_eq!(NewProfile::new(&subject(), &req).user_type, "provider");
}

// Round-trip against a live database; run with `--features live-db-tests`
// and TEST_DATABASE_URL pointing at a migrated instance.
#[cfg(feature = "live-db-tests")]
#[tokio::test]
async fn insert_then_find_round_trip() {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL required");
    let pool = crate::db::init_pool(&url).await.expect("database init");

    let id = format!("live-test-{}", std::process::id());
    let new = NewProfile {
        id: id.clone(),
        email: "live@example.com".to_owned(),
        full_name: "Live Test".to_owned(),
        phone: "555".to_owned(),
        user_type: "customer".to_owned(),
    };

    let created = insert_profile(&pool, &new).await.expect("insert");
    assert_eq!(created.id, id);

    let found = find_profile(&pool, &id).await.expect("find").expect("row exists");
    assert_eq!(found, created);

    let dup = insert_profile(&pool, &new).await;
    assert!(dup.is_err(), "duplicate id must be rejected by the primary key");

    sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(&id)
        .execute(&pool)
        .await
        .expect("cleanup");
}
