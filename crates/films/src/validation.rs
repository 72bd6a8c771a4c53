//! Field rules for film drafts.
//!
//! Checked in order, first violation wins: name non-empty, description at
//! most [`MAX_DESCRIPTION_CHARS`] characters, release date present and not
//! before [`EARLIEST_RELEASE_DATE`], release date not in the future, duration
//! positive.

use chrono::NaiveDate;

use filmorate_core::{DomainError, DomainResult};

use crate::film::{FilmDraft, ValidatedFilm};

/// Longest accepted description, counted in characters (not bytes).
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// First public film screening; nothing can be released earlier.
pub const EARLIEST_RELEASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1895, 12, 28) {
    Some(date) => date,
    None => panic!("invalid earliest release date"),
};

/// Validate a draft against the film field rules.
///
/// `today` is the reference date for the "not in the future" rule.
pub fn validate_film(draft: &FilmDraft, today: NaiveDate) -> DomainResult<ValidatedFilm> {
    if draft.name.trim().is_empty() {
        tracing::warn!("film rejected: empty name");
        return Err(DomainError::validation("name cannot be empty"));
    }

    if let Some(description) = &draft.description {
        let len = description.chars().count();
        if len > MAX_DESCRIPTION_CHARS {
            tracing::warn!(len, "film rejected: description too long");
            return Err(DomainError::validation(format!(
                "description cannot exceed {MAX_DESCRIPTION_CHARS} characters"
            )));
        }
    }

    let release_date = match draft.release_date {
        Some(date) if date >= EARLIEST_RELEASE_DATE => date,
        other => {
            tracing::warn!(
                release_date = ?other,
                "film rejected: release date missing or too early"
            );
            return Err(DomainError::validation(
                "release date must be on or after 1895-12-28",
            ));
        }
    };
    if release_date > today {
        tracing::warn!(%release_date, %today, "film rejected: release date in the future");
        return Err(DomainError::validation("release date cannot be in the future"));
    }

    if draft.duration <= 0 {
        tracing::warn!(duration = draft.duration, "film rejected: non-positive duration");
        return Err(DomainError::validation("duration must be positive"));
    }

    Ok(ValidatedFilm {
        name: draft.name.clone(),
        description: draft.description.clone(),
        release_date,
        duration: draft.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn draft() -> FilmDraft {
        FilmDraft {
            id: None,
            name: "name".to_string(),
            description: Some("description".to_string()),
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            duration: 120,
        }
    }

    fn reason(d: &FilmDraft) -> String {
        match validate_film(d, today()).unwrap_err() {
            DomainError::Validation(msg) => msg,
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_name() {
        let mut d = draft();
        d.name = String::new();
        assert_eq!(reason(&d), "name cannot be empty");
        d.name = "  ".to_string();
        assert_eq!(reason(&d), "name cannot be empty");
    }

    #[test]
    fn description_boundary_is_200_characters() {
        let mut d = draft();
        d.description = Some("a".repeat(200));
        assert!(validate_film(&d, today()).is_ok());

        d.description = Some("a".repeat(201));
        assert_eq!(reason(&d), "description cannot exceed 200 characters");
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        let mut d = draft();
        d.description = Some("я".repeat(200));
        assert!(validate_film(&d, today()).is_ok());
    }

    #[test]
    fn missing_description_is_fine() {
        let mut d = draft();
        d.description = None;
        assert!(validate_film(&d, today()).is_ok());
    }

    #[test]
    fn release_date_boundary_is_first_screening() {
        let mut d = draft();
        d.release_date = Some(EARLIEST_RELEASE_DATE);
        assert!(validate_film(&d, today()).is_ok());

        d.release_date = NaiveDate::from_ymd_opt(1895, 12, 27);
        assert_eq!(reason(&d), "release date must be on or after 1895-12-28");

        d.release_date = NaiveDate::from_ymd_opt(1000, 1, 1);
        assert!(validate_film(&d, today()).is_err());
    }

    #[test]
    fn rejects_missing_release_date() {
        let mut d = draft();
        d.release_date = None;
        assert_eq!(reason(&d), "release date must be on or after 1895-12-28");
    }

    #[test]
    fn rejects_future_release_date() {
        let mut d = draft();
        d.release_date = Some(today());
        assert!(validate_film(&d, today()).is_ok());

        d.release_date = today().succ_opt();
        assert_eq!(reason(&d), "release date cannot be in the future");
    }

    #[test]
    fn duration_must_be_positive() {
        let mut d = draft();
        d.duration = 1;
        assert!(validate_film(&d, today()).is_ok());

        d.duration = 0;
        assert_eq!(reason(&d), "duration must be positive");

        d.duration = -1;
        assert_eq!(reason(&d), "duration must be positive");
    }

    #[test]
    fn name_rule_is_checked_first() {
        let mut d = draft();
        d.name = String::new();
        d.duration = 0;
        d.release_date = None;
        assert_eq!(reason(&d), "name cannot be empty");
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

            /// Property: acceptance depends only on the description length threshold.
            #[test]
            fn description_accepted_iff_within_limit(len in 0usize..400) {
                let mut d = draft();
                d.description = Some("x".repeat(len));
                prop_assert_eq!(validate_film(&d, today()).is_ok(), len <= MAX_DESCRIPTION_CHARS);
            }

            /// Property: acceptance depends only on the sign of the duration.
            #[test]
            fn duration_accepted_iff_positive(duration in any::<i32>()) {
                let mut d = draft();
                d.duration = duration;
                prop_assert_eq!(validate_film(&d, today()).is_ok(), duration > 0);
            }
        }
    }
}
