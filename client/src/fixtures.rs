//! Static demo-user and admin fixtures.
//!
//! Read-only seed data for local demo sign-in and the admin console. Nothing
//! here is mutated at runtime; saved copies of demo users live in the
//! profile store like any other identity.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::net::types::{Identity, Role};

/// Role of an administrative identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

/// Fixed administrative identity. Not an [`Identity`]: admins never enter
/// the marketplace profile store.
#[derive(Clone, Copy, Debug)]
pub struct AdminIdentity {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: AdminRole,
    pub permissions: &'static [&'static str],
}

/// Fixed admin console accounts.
pub const ADMIN_IDENTITIES: &[AdminIdentity] = &[
    AdminIdentity {
        id: "admin-1",
        name: "Morgan Reyes",
        email: "admin@skillmatch.test",
        password: "admin123",
        role: AdminRole::Admin,
        permissions: &["users:read", "providers:read", "listings:moderate"],
    },
    AdminIdentity {
        id: "admin-2",
        name: "Sam Okafor",
        email: "root@skillmatch.test",
        password: "super123",
        role: AdminRole::SuperAdmin,
        permissions: &["users:read", "users:write", "providers:read", "providers:write", "listings:moderate", "admins:manage"],
    },
];

/// Fixed demo marketplace account with its sign-in password.
#[derive(Clone, Copy, Debug)]
pub struct DemoUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub role: Role,
    pub skills: Option<&'static str>,
}

impl DemoUser {
    /// Materialize the fixture as a store-ready identity. The flag starts
    /// false; the store forces it on save.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            phone: self.phone.to_owned(),
            address: self.address.to_owned(),
            role: self.role,
            skills: self.skills.map(str::to_owned),
            authenticated: false,
        }
    }
}

/// Fixed demo accounts shown on the login page.
pub const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        id: "demo-seeker-1",
        name: "Jane Doe",
        email: "jane@skillmatch.test",
        password: "jane123",
        phone: "555-0100",
        address: "1 Main St",
        role: Role::Seeker,
        skills: None,
    },
    DemoUser {
        id: "demo-provider-1",
        name: "Carlos Vega",
        email: "carlos@skillmatch.test",
        password: "carlos123",
        phone: "555-0101",
        address: "2 Side St",
        role: Role::Provider,
        skills: Some("plumbing, tiling"),
    },
];

/// Match demo credentials. Email comparison ignores case; the password must
/// match exactly.
#[must_use]
pub fn find_demo_user(email: &str, password: &str) -> Option<Identity> {
    DEMO_USERS
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email.trim()) && u.password == password)
        .map(DemoUser::identity)
}

/// Match admin credentials the same way.
#[must_use]
pub fn find_admin(email: &str, password: &str) -> Option<&'static AdminIdentity> {
    ADMIN_IDENTITIES
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
}
