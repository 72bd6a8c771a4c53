use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use filmorate_core::{Entity, EntityKind, UserId};

/// Caller-supplied user payload, before validation and id assignment.
///
/// Every field is optional on the wire so that validation, not
/// deserialization, decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDraft {
    /// Ignored on create; required on update.
    pub id: Option<UserId>,
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// A draft that passed validation (see [`crate::validate_user`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUser {
    pub(crate) email: String,
    pub(crate) login: String,
    pub(crate) name: Option<String>,
    pub(crate) birthday: NaiveDate,
}

impl ValidatedUser {
    /// Whether the display name will fall back to the login.
    pub fn needs_default_name(&self) -> bool {
        self.name.as_deref().is_none_or(|n| n.trim().is_empty())
    }

    fn display_name(&self) -> String {
        if self.needs_default_name() {
            self.login.clone()
        } else {
            self.name.clone().unwrap_or_default()
        }
    }
}

/// Entity: User.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    login: String,
    name: String,
    birthday: NaiveDate,
    #[serde(default)]
    friends: BTreeSet<UserId>,
}

impl User {
    /// Build a user from validated fields. A blank name defaults to the login.
    pub fn from_validated(id: UserId, valid: ValidatedUser) -> Self {
        let name = valid.display_name();
        Self {
            id,
            email: valid.email,
            login: valid.login,
            name,
            birthday: valid.birthday,
            friends: BTreeSet::new(),
        }
    }

    /// Replace every validated field, keeping the id and the friends set.
    pub fn apply_update(&mut self, valid: ValidatedUser) {
        self.name = valid.display_name();
        self.email = valid.email;
        self.login = valid.login;
        self.birthday = valid.birthday;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    pub fn friends(&self) -> &BTreeSet<UserId> {
        &self.friends
    }

    pub fn is_friend_of(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    /// Returns `true` if the edge was new.
    pub fn add_friend(&mut self, friend: UserId) -> bool {
        self.friends.insert(friend)
    }

    /// Returns `true` if the edge existed.
    pub fn remove_friend(&mut self, friend: UserId) -> bool {
        self.friends.remove(&friend)
    }
}

impl Entity for User {
    type Id = UserId;

    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}
