//! Field rules for user drafts.
//!
//! Rules are checked in a fixed order and the first violation is returned:
//! email non-empty, email contains `@`, login non-empty and whitespace-free,
//! birthday present and not in the future.

use chrono::NaiveDate;

use filmorate_core::{DomainError, DomainResult};

use crate::user::{UserDraft, ValidatedUser};

/// Validate a draft against the user field rules.
///
/// `today` is the reference date for the birthday rule.
pub fn validate_user(draft: &UserDraft, today: NaiveDate) -> DomainResult<ValidatedUser> {
    let email = draft.email.trim();
    if email.is_empty() {
        tracing::warn!(email = %draft.email, "user rejected: blank email");
        return Err(DomainError::validation("email cannot be empty"));
    }
    if !email.contains('@') {
        tracing::warn!(email = %draft.email, "user rejected: email without '@'");
        return Err(DomainError::validation("email must contain '@'"));
    }

    let login = draft.login.as_str();
    if login.is_empty() || login.chars().any(char::is_whitespace) {
        tracing::warn!(login = %draft.login, "user rejected: bad login");
        return Err(DomainError::validation(
            "login cannot be empty or contain whitespace",
        ));
    }

    let Some(birthday) = draft.birthday else {
        tracing::warn!(login = %draft.login, "user rejected: missing birthday");
        return Err(DomainError::validation("birthday must be specified"));
    };
    if birthday > today {
        tracing::warn!(%birthday, %today, "user rejected: birthday in the future");
        return Err(DomainError::validation("birthday cannot be in the future"));
    }

    Ok(ValidatedUser {
        email: draft.email.clone(),
        login: draft.login.clone(),
        name: draft.name.clone(),
        birthday,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn draft() -> UserDraft {
        UserDraft {
            id: None,
            email: "mail@example.com".to_string(),
            login: "user1".to_string(),
            name: Some("User One".to_string()),
            birthday: NaiveDate::from_ymd_opt(2000, 1, 1),
        }
    }

    fn reason(d: &UserDraft) -> String {
        match validate_user(d, today()).unwrap_err() {
            DomainError::Validation(msg) => msg,
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_draft() {
        let valid = validate_user(&draft(), today()).unwrap();
        assert_eq!(valid.login, "user1");
        assert_eq!(valid.birthday, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn rejects_blank_email() {
        let mut d = draft();
        d.email = "   ".to_string();
        assert_eq!(reason(&d), "email cannot be empty");
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let mut d = draft();
        d.email = "mail.example.com".to_string();
        assert_eq!(reason(&d), "email must contain '@'");
    }

    #[test]
    fn rejects_empty_or_spaced_login() {
        let mut d = draft();
        d.login = String::new();
        assert_eq!(reason(&d), "login cannot be empty or contain whitespace");

        d.login = "user one".to_string();
        assert_eq!(reason(&d), "login cannot be empty or contain whitespace");

        d.login = "user\tone".to_string();
        assert!(validate_user(&d, today()).is_err());
    }

    #[test]
    fn rejects_missing_birthday() {
        let mut d = draft();
        d.birthday = None;
        assert_eq!(reason(&d), "birthday must be specified");
    }

    #[test]
    fn birthday_today_is_accepted_tomorrow_is_not() {
        let mut d = draft();
        d.birthday = Some(today());
        assert!(validate_user(&d, today()).is_ok());

        d.birthday = today().succ_opt();
        assert_eq!(reason(&d), "birthday cannot be in the future");
    }

    #[test]
    fn email_rule_is_checked_before_login_rule() {
        let mut d = draft();
        d.email = String::new();
        d.login = "has space".to_string();
        assert_eq!(reason(&d), "email cannot be empty");
    }

    #[test]
    fn blank_name_is_not_a_validation_error() {
        let mut d = draft();
        d.name = Some(" ".to_string());
        let valid = validate_user(&d, today()).unwrap();
        assert!(valid.needs_default_name());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any login containing whitespace is rejected.
            #[test]
            fn login_with_whitespace_is_rejected(
                head in "[a-z0-9]{0,8}",
                ws in prop::sample::select(vec![" ", "\t", "\n"]),
                tail in "[a-z0-9]{0,8}"
            ) {
                let mut d = draft();
                d.login = format!("{head}{ws}{tail}");
                prop_assert!(validate_user(&d, today()).is_err());
            }

            /// Property: any birthday up to and including today passes.
            #[test]
            fn past_birthdays_pass(days_ago in 0i64..40_000) {
                let mut d = draft();
                d.birthday = Some(today() - chrono::Duration::days(days_ago));
                prop_assert!(validate_user(&d, today()).is_ok());
            }
        }
    }
}
