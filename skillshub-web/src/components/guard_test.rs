//! Tests for the route-guard decision function.
//!
//! The ordering is the contract under test: loading is checked strictly
//! before identity, identity strictly before role.

use skillshub_shared::models::{User, UserRole};
use uuid::Uuid;

use crate::components::guard::{GuardDecision, decide};

fn user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: "visitor@example.com".to_string(),
        name: None,
        username: None,
        role,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_loading_always_waits() {
    // No redirect may fire while the stored session is still being read back,
    // whatever the identity snapshot currently says.
    assert_eq!(decide(true, None, false), GuardDecision::Wait);
    assert_eq!(decide(true, None, true), GuardDecision::Wait);
    let admin = user(UserRole::Admin);
    assert_eq!(decide(true, Some(&admin), true), GuardDecision::Wait);
    let plain = user(UserRole::User);
    assert_eq!(decide(true, Some(&plain), true), GuardDecision::Wait);
}

#[test]
fn test_anonymous_goes_to_login() {
    assert_eq!(decide(false, None, false), GuardDecision::ToLogin);
    // Identity is checked before role: an anonymous visitor on an admin
    // screen lands on login, not on the public landing.
    assert_eq!(decide(false, None, true), GuardDecision::ToLogin);
}

#[test]
fn test_authenticated_renders() {
    let plain = user(UserRole::User);
    assert_eq!(decide(false, Some(&plain), false), GuardDecision::Render);
}

#[test]
fn test_non_admin_is_bounced_from_admin_screens() {
    let plain = user(UserRole::User);
    assert_eq!(decide(false, Some(&plain), true), GuardDecision::ToHome);
    let admin = user(UserRole::Admin);
    assert_eq!(decide(false, Some(&admin), true), GuardDecision::Render);
}
