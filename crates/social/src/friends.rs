//! Symmetric friendship graph.
//!
//! Invariant: `b ∈ friends(a)` iff `a ∈ friends(b)`, and no user is its own
//! friend. Both endpoints are resolved before anything is mutated, so a
//! failed call leaves the graph untouched.

use filmorate_core::{DomainError, DomainResult, Entity, UserId};
use filmorate_store::EntityStore;
use filmorate_users::User;

fn ensure_distinct(a: UserId, b: UserId, reason: &'static str) -> DomainResult<()> {
    if a == b {
        return Err(DomainError::validation(reason));
    }
    Ok(())
}

fn require_user<S: EntityStore<User>>(users: &S, id: UserId) -> DomainResult<&User> {
    users
        .find_by_id(id)
        .ok_or_else(|| DomainError::not_found(User::KIND, id))
}

fn set_edge<S: EntityStore<User>>(
    users: &mut S,
    from: UserId,
    to: UserId,
    present: bool,
) -> DomainResult<bool> {
    let user = users
        .find_by_id_mut(from)
        .ok_or_else(|| DomainError::not_found(User::KIND, from))?;
    Ok(if present {
        user.add_friend(to)
    } else {
        user.remove_friend(to)
    })
}

/// Make `a` and `b` friends. Adding an existing edge is a no-op.
pub fn add_friend<S: EntityStore<User>>(
    users: &mut S,
    a: UserId,
    b: UserId,
) -> DomainResult<()> {
    ensure_distinct(a, b, "cannot friend self")?;
    require_user(&*users, a)?;
    require_user(&*users, b)?;

    let forward = set_edge(users, a, b, true)?;
    let backward = set_edge(users, b, a, true)?;
    if forward || backward {
        tracing::debug!(%a, %b, "friendship added");
    }
    Ok(())
}

/// Remove the edge between `a` and `b`. Removing a missing edge is a no-op.
pub fn remove_friend<S: EntityStore<User>>(
    users: &mut S,
    a: UserId,
    b: UserId,
) -> DomainResult<()> {
    ensure_distinct(a, b, "cannot unfriend self")?;
    require_user(&*users, a)?;
    require_user(&*users, b)?;

    let forward = set_edge(users, a, b, false)?;
    let backward = set_edge(users, b, a, false)?;
    if forward || backward {
        tracing::debug!(%a, %b, "friendship removed");
    }
    Ok(())
}

/// Friends of `a`, resolved through the store in ascending id order.
///
/// A friend id that no longer resolves is reported as `NotFound` rather than
/// skipped.
pub fn friends_of<S: EntityStore<User>>(users: &S, a: UserId) -> DomainResult<Vec<User>> {
    let user = require_user(users, a)?;
    user.friends()
        .iter()
        .map(|id| require_user(users, *id).cloned())
        .collect()
}

/// Users who are friends with both `a` and `b`, in ascending id order.
pub fn common_friends<S: EntityStore<User>>(
    users: &S,
    a: UserId,
    b: UserId,
) -> DomainResult<Vec<User>> {
    ensure_distinct(a, b, "cannot intersect a user's friends with their own")?;
    let left = require_user(users, a)?;
    let right = require_user(users, b)?;

    left.friends()
        .intersection(right.friends())
        .map(|id| require_user(users, *id).cloned())
        .collect()
}
