//! Password strength policy.
//!
//! Evaluates a candidate password against five independent rules and reports
//! per-rule pass/fail so callers can render granular feedback ("3 of 5
//! requirements met") instead of a single verdict.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static SPECIAL_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#).unwrap());

/// Minimum password length accepted by the policy.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Per-rule evaluation result for a candidate password.
///
/// Each flag is independent; a character may satisfy more than one rule.
/// Overall validity is the conjunction of all five flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordValidation {
    /// The password has at least [`MIN_PASSWORD_LENGTH`] characters.
    pub min_length: bool,
    /// The password contains at least one uppercase letter (A-Z).
    pub has_uppercase: bool,
    /// The password contains at least one lowercase letter (a-z).
    pub has_lowercase: bool,
    /// The password contains at least one digit (0-9).
    pub has_number: bool,
    /// The password contains at least one special character.
    pub has_special_char: bool,
}

impl PasswordValidation {
    /// Returns true when every rule passed.
    pub fn is_valid(&self) -> bool {
        self.min_length
            && self.has_uppercase
            && self.has_lowercase
            && self.has_number
            && self.has_special_char
    }

    /// Number of rules the password currently satisfies (0 to 5).
    pub fn satisfied_count(&self) -> usize {
        [
            self.min_length,
            self.has_uppercase,
            self.has_lowercase,
            self.has_number,
            self.has_special_char,
        ]
        .iter()
        .filter(|passed| **passed)
        .count()
    }

    /// Guidance strings for every rule that has not been met yet.
    pub fn unmet_requirements(&self) -> Vec<&'static str> {
        let mut messages = Vec::new();

        if !self.min_length {
            messages.push("Your password should be at least 8 characters long");
        }
        if !self.has_uppercase {
            messages.push("Add at least one capital letter (A-Z)");
        }
        if !self.has_lowercase {
            messages.push("Add at least one lowercase letter (a-z)");
        }
        if !self.has_number {
            messages.push("Add a single number from 0-9");
        }
        if !self.has_special_char {
            messages.push("Add a special character eg ! @ # $ % ^ & * ( ) +");
        }

        messages
    }
}

/// Evaluates a candidate password against all five rules.
///
/// Pure and total: any string is accepted, including the empty string (all
/// flags false). Whitespace counts toward the length rule but satisfies no
/// character-class rule.
pub fn evaluate(password: &str) -> PasswordValidation {
    PasswordValidation {
        min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
        has_uppercase: UPPERCASE.is_match(password),
        has_lowercase: LOWERCASE.is_match(password),
        has_number: NUMBER.is_match(password),
        has_special_char: SPECIAL_CHAR.is_match(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_fails_every_rule() {
        let result = evaluate("");
        assert!(!result.min_length);
        assert!(!result.has_uppercase);
        assert!(!result.has_lowercase);
        assert!(!result.has_number);
        assert!(!result.has_special_char);
        assert!(!result.is_valid());
        assert_eq!(result.satisfied_count(), 0);
        assert_eq!(result.unmet_requirements().len(), 5);
    }

    #[test]
    fn strong_password_passes_every_rule() {
        let result = evaluate("Abcdef1!");
        assert!(result.is_valid());
        assert_eq!(result.satisfied_count(), 5);
        assert!(result.unmet_requirements().is_empty());
    }

    #[test]
    fn min_length_tracks_character_count() {
        assert!(!evaluate("Abcde1!").min_length);
        assert!(evaluate("Abcdef1!").min_length);
        assert!(evaluate("Abcdefg1!").min_length);
    }

    #[test]
    fn missing_classes_are_reported_individually() {
        // No uppercase, no special char
        let result = evaluate("abcdefg1");
        assert!(result.min_length);
        assert!(!result.has_uppercase);
        assert!(result.has_lowercase);
        assert!(result.has_number);
        assert!(!result.has_special_char);
        assert!(!result.is_valid());
        assert_eq!(result.satisfied_count(), 3);
    }

    #[test]
    fn whitespace_counts_toward_length_only() {
        let result = evaluate("        ");
        assert!(result.min_length);
        assert!(!result.has_uppercase);
        assert!(!result.has_lowercase);
        assert!(!result.has_number);
        assert!(!result.has_special_char);
    }

    #[test]
    fn every_listed_special_character_is_accepted() {
        for ch in r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#.chars() {
            let candidate = ch.to_string();
            assert!(
                evaluate(&candidate).has_special_char,
                "expected {:?} to count as a special character",
                ch
            );
        }
    }

    #[test]
    fn dev_account_password_is_valid() {
        assert!(evaluate("P@sw0rd1").is_valid());
    }
}
