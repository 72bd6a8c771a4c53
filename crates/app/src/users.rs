//! User application service.

use std::sync::Arc;

use filmorate_core::{Clock, DomainError, DomainResult, Entity, UserId};
use filmorate_films::Film;
use filmorate_store::{EntityStore, InMemoryEntityStore};
use filmorate_users::{validate_user, User, UserDraft};

use crate::dataset::SharedDataset;

/// Orchestrates validation, the user store and the friendship graph.
pub struct UserService<U = InMemoryEntityStore<User>, F = InMemoryEntityStore<Film>> {
    dataset: Arc<SharedDataset<U, F>>,
    clock: Arc<dyn Clock>,
}

impl<U, F> Clone for UserService<U, F> {
    fn clone(&self) -> Self {
        Self {
            dataset: Arc::clone(&self.dataset),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<U, F> UserService<U, F>
where
    U: EntityStore<User>,
    F: EntityStore<Film>,
{
    pub fn new(dataset: Arc<SharedDataset<U, F>>, clock: Arc<dyn Clock>) -> Self {
        Self { dataset, clock }
    }

    pub fn list_users(&self) -> DomainResult<Vec<User>> {
        let data = self.dataset.read()?;
        Ok(data.users.list().into_iter().cloned().collect())
    }

    /// Validate and store a new user. Any id on the draft is ignored.
    pub fn create_user(&self, draft: UserDraft) -> DomainResult<User> {
        let valid = validate_user(&draft, self.clock.today())?;
        if valid.needs_default_name() {
            tracing::info!(login = %draft.login, "name is blank, using login");
        }

        let mut data = self.dataset.write()?;
        let user = data
            .users
            .create(User::from_validated(UserId::default(), valid));
        tracing::info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Replace the fields of an existing user. The friends set is kept.
    pub fn update_user(&self, draft: UserDraft) -> DomainResult<User> {
        let id = match draft.id {
            Some(id) => id,
            None => {
                tracing::warn!("user update without id");
                return Err(DomainError::validation("id must be specified"));
            }
        };
        let today = self.clock.today();

        let mut data = self.dataset.write()?;
        let mut user = match data.users.find_by_id(id) {
            Some(existing) => existing.clone(),
            None => {
                tracing::warn!(user_id = %id, "user update for unknown id");
                return Err(DomainError::not_found(User::KIND, id));
            }
        };

        user.apply_update(validate_user(&draft, today)?);
        let user = data.users.update(user)?;
        tracing::info!(user_id = %id, "user updated");
        Ok(user)
    }

    pub fn get_user(&self, id: UserId) -> DomainResult<User> {
        let data = self.dataset.read()?;
        data.users
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(User::KIND, id))
    }

    pub fn add_friend(&self, id: UserId, friend_id: UserId) -> DomainResult<()> {
        let mut data = self.dataset.write()?;
        filmorate_social::add_friend(&mut data.users, id, friend_id)?;
        tracing::info!(user_id = %id, friend_id = %friend_id, "friend added");
        Ok(())
    }

    pub fn remove_friend(&self, id: UserId, friend_id: UserId) -> DomainResult<()> {
        let mut data = self.dataset.write()?;
        filmorate_social::remove_friend(&mut data.users, id, friend_id)?;
        tracing::info!(user_id = %id, friend_id = %friend_id, "friend removed");
        Ok(())
    }

    pub fn get_friends(&self, id: UserId) -> DomainResult<Vec<User>> {
        let data = self.dataset.read()?;
        filmorate_social::friends_of(&data.users, id)
    }

    pub fn get_common_friends(&self, id: UserId, other_id: UserId) -> DomainResult<Vec<User>> {
        let data = self.dataset.read()?;
        filmorate_social::common_friends(&data.users, id, other_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use filmorate_core::{EntityKind, FixedClock};

    fn service() -> UserService {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        UserService::new(Arc::new(SharedDataset::in_memory()), Arc::new(clock))
    }

    fn draft(login: &str, name: Option<&str>) -> UserDraft {
        UserDraft {
            id: None,
            email: format!("{login}@example.com"),
            login: login.to_string(),
            name: name.map(str::to_string),
            birthday: NaiveDate::from_ymd_opt(2000, 1, 1),
        }
    }

    #[test]
    fn create_assigns_id_and_defaults_name() {
        let svc = service();
        let mut d = draft("neo", None);
        d.id = Some(UserId::new(50));

        let user = svc.create_user(d).unwrap();
        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "neo");
        assert_eq!(svc.get_user(UserId::new(1)).unwrap(), user);
    }

    #[test]
    fn create_rejects_invalid_draft_without_storing() {
        let svc = service();
        let mut d = draft("neo", None);
        d.email = "no-at-sign".to_string();

        assert!(svc.create_user(d).unwrap_err().is_validation());
        assert!(svc.list_users().unwrap().is_empty());
    }

    #[test]
    fn update_requires_id() {
        let svc = service();
        let err = svc.update_user(draft("neo", None)).unwrap_err();
        assert_eq!(err, DomainError::validation("id must be specified"));
    }

    #[test]
    fn update_of_unknown_user_is_not_found_even_if_invalid() {
        let svc = service();
        let mut d = draft("bad login", None);
        d.id = Some(UserId::new(3));

        let err = svc.update_user(d).unwrap_err();
        assert_eq!(err, DomainError::NotFound { kind: EntityKind::User, id: 3 });
    }

    #[test]
    fn update_replaces_fields_and_keeps_friends() {
        let svc = service();
        let a = svc.create_user(draft("a", Some("Alpha"))).unwrap();
        let b = svc.create_user(draft("b", None)).unwrap();
        svc.add_friend(a.id(), b.id()).unwrap();

        let mut d = draft("a2", Some(" "));
        d.id = Some(a.id());
        let updated = svc.update_user(d).unwrap();

        assert_eq!(updated.login(), "a2");
        assert_eq!(updated.name(), "a2");
        assert!(updated.is_friend_of(b.id()));
        assert_eq!(svc.get_user(a.id()).unwrap(), updated);
    }

    #[test]
    fn invalid_update_leaves_record_untouched() {
        let svc = service();
        let a = svc.create_user(draft("a", Some("Alpha"))).unwrap();

        let mut d = draft("a", None);
        d.id = Some(a.id());
        d.birthday = NaiveDate::from_ymd_opt(2030, 1, 1);
        assert!(svc.update_user(d).unwrap_err().is_validation());
        assert_eq!(svc.get_user(a.id()).unwrap(), a);
    }

    #[test]
    fn get_missing_user_is_not_found() {
        let err = service().get_user(UserId::new(8)).unwrap_err();
        assert!(err.is_not_found());
    }
}
