//! Storage account name allocation.
//!
//! Account names are globally unique, lowercase alphanumeric and capped at
//! 24 characters. The allocator derives a timestamped candidate from a base
//! name, asks `az storage account check-name`, and falls back to fresh
//! random suffixes for a bounded number of attempts.

use super::cli::Runner;
use crate::config::{ACCOUNT_NAME_MAX_LEN, NAME_ATTEMPTS_MAX, RANDOM_SUFFIX_LEN};
use colored::Colorize;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Deserialize;
use std::error::Error;

/// `az storage account check-name` response.
#[derive(Deserialize, Debug)]
struct CheckName {
    #[serde(rename = "nameAvailable")]
    name_available: bool,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Allocate a globally-unique account name from `base`.
///
/// The first candidate is `base` plus a UTC timestamp. Each collision logs
/// the substitution and retries with a random suffix, up to
/// [`NAME_ATTEMPTS_MAX`] attempts in total. Exhaustion is fatal.
pub fn allocate_account_name(az: &dyn Runner, base: &str) -> Result<String, Box<dyn Error>> {
    let base = sanitize_base(base);
    let mut name = timestamp_name(&base);

    for attempt in 1..=NAME_ATTEMPTS_MAX {
        if is_name_available(az, &name)? {
            if attempt > 1 {
                log::warn!(
                    "Using substitute storage account name {name}",
                    name = name.green()
                );
            }
            return Ok(name);
        }
        log::warn!(
            "Storage account name {name} is taken (attempt {attempt}/{max}), regenerating",
            name = name.red(),
            max = NAME_ATTEMPTS_MAX
        );
        name = random_name(&base);
    }

    Err(format!(
        "Could not allocate a free storage account name from base '{base}' after {NAME_ATTEMPTS_MAX} attempts"
    )
    .into())
}

/// Availability-check an operator-supplied account name.
///
/// Explicit names are never regenerated; a taken name is fatal.
pub fn verify_account_name(az: &dyn Runner, name: &str) -> Result<(), Box<dyn Error>> {
    if is_name_available(az, name)? {
        Ok(())
    } else {
        Err(format!("Storage account name '{name}' is already taken").into())
    }
}

fn is_name_available(az: &dyn Runner, name: &str) -> Result<bool, Box<dyn Error>> {
    let output = az.run(&format!(
        "az storage account check-name --name {name} --output json"
    ))?;

    let mut deserializer = serde_json::Deserializer::from_str(&output);
    let parsed: CheckName = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing check-name JSON: path={} error={}", e.path(), e))?;

    if !parsed.name_available {
        log::info!(
            "check-name: {name} unavailable, reason={:?} message={:?}",
            parsed.reason,
            parsed.message
        );
    }
    Ok(parsed.name_available)
}

/// Strip `base` down to the lowercase alphanumeric subset Azure accepts.
fn sanitize_base(base: &str) -> String {
    let cleaned: String = base
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if cleaned.is_empty() {
        "tfstate".to_string()
    } else {
        cleaned
    }
}

/// `base` plus a UTC `%y%m%d%H%M` suffix, capped at the account name limit.
fn timestamp_name(base: &str) -> String {
    let suffix = chrono::Utc::now().format("%y%m%d%H%M").to_string();
    truncate_with_suffix(base, &suffix)
}

/// `base` plus a fresh random lowercase suffix.
fn random_name(base: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    truncate_with_suffix(base, &suffix)
}

fn truncate_with_suffix(base: &str, suffix: &str) -> String {
    let keep = ACCOUNT_NAME_MAX_LEN.saturating_sub(suffix.len());
    let head: String = base.chars().take(keep).collect();
    format!("{head}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replies "unavailable" for the first `taken` check-name calls.
    struct CollidingAz {
        taken: usize,
        checks: RefCell<Vec<String>>,
    }

    impl Runner for CollidingAz {
        fn is_available(&self) -> bool {
            true
        }

        fn run(&self, cmd: &str) -> Result<String, Box<dyn Error>> {
            assert!(cmd.starts_with("az storage account check-name"));
            self.checks.borrow_mut().push(cmd.to_string());
            if self.checks.borrow().len() <= self.taken {
                Ok(r#"{"nameAvailable": false, "reason": "AlreadyExists", "message": "taken"}"#
                    .to_string())
            } else {
                Ok(r#"{"nameAvailable": true}"#.to_string())
            }
        }
    }

    #[test]
    fn test_sanitize_base() {
        assert_eq!(sanitize_base("TF-State_01"), "tfstate01");
        assert_eq!(sanitize_base("!!!"), "tfstate");
    }

    #[test]
    fn test_timestamp_name_within_limit() {
        let name = timestamp_name("averyverylongbasenamethatoverflows");
        assert!(name.len() <= ACCOUNT_NAME_MAX_LEN);
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_names_differ() {
        assert_ne!(random_name("tfstate"), random_name("tfstate"));
    }

    #[test]
    fn test_first_candidate_used_when_available() {
        let az = CollidingAz {
            taken: 0,
            checks: RefCell::new(vec![]),
        };
        let name = allocate_account_name(&az, "tfstate").unwrap();
        assert_eq!(az.checks.borrow().len(), 1);
        assert!(name.starts_with("tfstate"));
    }

    #[test]
    fn test_single_collision_generates_one_alternative() {
        let az = CollidingAz {
            taken: 1,
            checks: RefCell::new(vec![]),
        };
        let name = allocate_account_name(&az, "tfstate").unwrap();
        assert_eq!(az.checks.borrow().len(), 2, "original plus one alternative");
        assert!(name.starts_with("tfstate"));
        assert_ne!(
            az.checks.borrow()[0], az.checks.borrow()[1],
            "alternative name must differ from the original"
        );
    }

    #[test]
    fn test_exhaustion_is_fatal() {
        let az = CollidingAz {
            taken: NAME_ATTEMPTS_MAX,
            checks: RefCell::new(vec![]),
        };
        let err = allocate_account_name(&az, "tfstate").unwrap_err();
        assert!(err.to_string().contains("after 5 attempts"));
        assert_eq!(az.checks.borrow().len(), NAME_ATTEMPTS_MAX);
    }

    #[test]
    fn test_explicit_name_taken_is_fatal() {
        let az = CollidingAz {
            taken: 1,
            checks: RefCell::new(vec![]),
        };
        let err = verify_account_name(&az, "tfstateprod").unwrap_err();
        assert!(err.to_string().contains("already taken"));
    }
}
