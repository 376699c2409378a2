//! Form validation helpers.
//!
//! Pure, stateless checks used by the login and registration forms. Form
//! failures never reach the store layer.

/// Outcome of a password strength check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordValidation {
    /// True only when every rule is satisfied.
    pub is_valid: bool,

    /// Strength score from 0 to 4; each satisfied rule adds one, capped.
    pub score: u8,

    /// Messages for the unmet rules, in fixed rule order.
    pub errors: Vec<String>,
}

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Score a password against five independent rules: minimum length 8, a
/// lowercase letter, an uppercase letter, a digit, and a special character.
pub fn validate_password(password: &str) -> PasswordValidation {
    let rules: [(bool, &str); 5] = [
        (
            password.chars().count() >= 8,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one number",
        ),
        (
            password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
            "Password must contain at least one special character",
        ),
    ];

    let mut score: u8 = 0;
    let mut errors = Vec::new();

    for (satisfied, message) in rules {
        if satisfied {
            score += 1;
        } else {
            errors.push(message.to_owned());
        }
    }

    PasswordValidation {
        is_valid: errors.is_empty(),
        score: score.min(4),
        errors,
    }
}

/// Check that an email has the `local@domain.tld` shape: no whitespace,
/// exactly one `@` with a non-empty local part, and a `.` inside the domain
/// with at least one character on each side.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
        }
        _ => false,
    }
}

/// Human label for a password score.
pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 | 1 => "Very Weak",
        2 => "Weak",
        3 => "Fair",
        4 => "Strong",
        // Only reachable if the score range is ever extended past the cap.
        5 => "Very Strong",
        _ => "Very Weak",
    }
}

/// Display colour for a password score, as a hex string.
pub fn strength_color(score: u8) -> &'static str {
    match score {
        0 | 1 => "#ff4444",
        2 => "#ff8800",
        3 => "#ffbb00",
        4 => "#00bb00",
        5 => "#00aa00",
        _ => "#ff4444",
    }
}
