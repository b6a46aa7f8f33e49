//! # Mock Login Gate
//!
//! Access control here is demo-grade on purpose: one fixed credential
//! pair, one error string, and a sign-up form that validates its fields
//! but stores nothing. Real account handling is out of scope.

use serde::Deserialize;

use crate::store::UserSession;

pub const DEMO_USERNAME: &str = "John Doe";
pub const DEMO_PASSWORD: &str = "demo123";

/// The only failure the login form ever reports.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Check the fixed demo credentials. Success yields the session to
/// persist; failure is always [`INVALID_CREDENTIALS`].
pub fn login(username: &str, password: &str) -> Result<UserSession, &'static str> {
    if username == DEMO_USERNAME && password == DEMO_PASSWORD {
        Ok(UserSession::logged_in(username))
    } else {
        Err(INVALID_CREDENTIALS)
    }
}

/// Sign-up form fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Validate a sign-up form. The checks run in a fixed order and the first
/// failure wins; success creates no account.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), &'static str> {
    if form.password != form.confirm_password {
        return Err("Passwords do not match!");
    }
    if !looks_like_email(&form.email) {
        return Err("Please enter a valid email address.");
    }
    if form.password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long.");
    }
    Ok(())
}

/// Loose email shape check: some non-space text, an `@`, then a non-space
/// run containing an inner dot. Unanchored, so any matching substring
/// passes.
fn looks_like_email(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' {
            continue;
        }
        if i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        let run: Vec<char> = chars[i + 1..]
            .iter()
            .take_while(|c| !c.is_whitespace())
            .copied()
            .collect();
        if run.len() >= 3 && run[1..run.len() - 1].contains(&'.') {
            return true;
        }
    }
    false
}
