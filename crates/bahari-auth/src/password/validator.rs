//! Password policy enforcement for new passwords.

use bahari_core::config::AuthConfig;
use bahari_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
    /// Minimum zxcvbn score for new passwords.
    min_score: zxcvbn::Score,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let min_score = match config.password_min_score {
            0 => zxcvbn::Score::Zero,
            1 => zxcvbn::Score::One,
            2 => zxcvbn::Score::Two,
            3 => zxcvbn::Score::Three,
            _ => zxcvbn::Score::Four,
        };
        Self {
            min_length: config.password_min_length,
            min_score,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < self.min_score {
            return Err(AppError::validation(
                "Password is too weak. Please use a longer or less predictable password.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(validator().validate("Ab1!").is_err());
    }

    #[test]
    fn test_weak_password_rejected() {
        assert!(validator().validate("password").is_err());
    }

    #[test]
    fn test_strong_password_accepted() {
        assert!(validator().validate("mangrove-heron-tide-42").is_ok());
    }
}
