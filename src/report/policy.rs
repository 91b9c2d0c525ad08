//! Per-item visibility and priority rules.
//!
//! Both rules are pure functions of (item, user), kept apart from the
//! renderers so they can be unit-tested and swapped without touching the
//! rendering pipeline.

use crate::types::{Item, Role, User};

/// Value ceiling for items visible to regular users.
const USER_VALUE_LIMIT: f64 = 500.0;

/// Value floor above which an admin's row is highlighted.
const PRIORITY_VALUE_FLOOR: f64 = 1000.0;

/// Decide whether an item appears in the report for this user.
///
/// Admins see every item; regular users see items up to the value limit;
/// unknown roles see nothing.
pub fn visible_to(item: &Item, user: &User) -> bool {
    match user.role {
        Role::Admin => true,
        Role::User => item.value <= USER_VALUE_LIMIT,
        Role::Unknown => false,
    }
}

/// Decide whether a row gets priority highlighting.
///
/// A rendering hint, not a visibility rule: only admin reports carry
/// highlighted rows, on items above the priority floor.
pub fn is_priority(item: &Item, user: &User) -> bool {
    user.role == Role::Admin && item.value > PRIORITY_VALUE_FLOOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: f64) -> Item {
        Item { id: 1, name: "widget".to_string(), value }
    }

    fn user(role: Role) -> User {
        User { name: "Ana".to_string(), role }
    }

    #[test]
    fn test_admin_sees_everything() {
        assert!(visible_to(&item(0.0), &user(Role::Admin)));
        assert!(visible_to(&item(500.0), &user(Role::Admin)));
        assert!(visible_to(&item(1_000_000.0), &user(Role::Admin)));
    }

    #[test]
    fn test_user_sees_items_up_to_limit() {
        assert!(visible_to(&item(499.99), &user(Role::User)));
        assert!(visible_to(&item(500.0), &user(Role::User)));
        assert!(!visible_to(&item(500.01), &user(Role::User)));
        assert!(!visible_to(&item(900.0), &user(Role::User)));
    }

    #[test]
    fn test_unknown_role_sees_nothing() {
        assert!(!visible_to(&item(0.0), &user(Role::Unknown)));
        assert!(!visible_to(&item(100.0), &user(Role::Unknown)));
    }

    #[test]
    fn test_priority_requires_admin_and_high_value() {
        assert!(is_priority(&item(1000.01), &user(Role::Admin)));
        assert!(is_priority(&item(1500.0), &user(Role::Admin)));
        // Floor is exclusive
        assert!(!is_priority(&item(1000.0), &user(Role::Admin)));
        // Non-admins never get the highlight
        assert!(!is_priority(&item(1500.0), &user(Role::User)));
        assert!(!is_priority(&item(1500.0), &user(Role::Unknown)));
    }

    #[test]
    fn test_predicates_do_not_mutate_inputs() {
        let it = item(1500.0);
        let us = user(Role::Admin);
        let it_before = it.clone();
        let us_before = us.clone();

        visible_to(&it, &us);
        is_priority(&it, &us);

        assert_eq!(it, it_before);
        assert_eq!(us, us_before);
    }
}
