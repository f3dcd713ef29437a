//! Profile row persistence.
//!
//! TRADE-OFFS
//! ==========
//! `find_profile` + `insert_profile` are not atomic against concurrent
//! requests for the same subject; the `profiles.id` primary key is the real
//! uniqueness guarantee, and a raced duplicate insert surfaces as a database
//! error rather than the friendlier conflict message.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use sqlx::{PgPool, Row};
use wire::{CreateProfileRequest, Profile};

use crate::services::identity::Subject;

/// Fields for a profile row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub user_type: String,
}

impl NewProfile {
    /// Combine the authenticated subject with the request body. The id and
    /// email always come from the provider, never from the caller.
    #[must_use]
    pub fn new(subject: &Subject, req: &CreateProfileRequest) -> Self {
        Self {
            id: subject.id.clone(),
            email: subject.email.clone(),
            full_name: req.full_name.clone(),
            phone: req.phone.clone(),
            user_type: req.user_type_or_default().to_owned(),
        }
    }
}

fn row_to_profile(row: &sqlx::postgres::PgRow) -> Profile {
    Profile {
        id: row.get("id"),
        email: row.get("email"),
        full_name: row.get("full_name"),
        phone: row.get("phone"),
        user_type: row.get("user_type"),
        created_at: row.get("created_at"),
    }
}

/// Fetch the profile row for a subject id, if one exists.
pub async fn find_profile(pool: &PgPool, id: &str) -> Result<Option<Profile>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT id, email, full_name, phone, user_type,
                 to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at
          FROM profiles WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_profile))
}

/// Insert a profile row, returning the created row.
///
/// A duplicate id is rejected by the primary-key constraint and propagates
/// as [`sqlx::Error`].
pub async fn insert_profile(pool: &PgPool, new: &NewProfile) -> Result<Profile, sqlx::Error> {
    let row = sqlx::query(
        r"INSERT INTO profiles (id, email, full_name, phone, user_type)
          VALUES ($1, $2, $3, $4, $5)
          RETURNING id, email, full_name, phone, user_type,
                    to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at",
    )
    .bind(&new.id)
    .bind(&new.email)
    .bind(&new.full_name)
    .bind(&new.phone)
    .bind(&new.user_type)
    .fetch_one(pool)
    .await?;

    Ok(row_to_profile(&row))
}
