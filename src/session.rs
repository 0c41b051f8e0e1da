//! Admin Session Gate
//!
//! The gate is a client-local flag. Credentials come from build-time
//! configuration and are compared in constant time.

use std::fmt;

use subtle::ConstantTimeEq;

/// Expected admin login pair plus the static header token sent with
/// privileged requests.
#[derive(Clone, PartialEq)]
pub struct AdminCredentials {
    username: String,
    password: String,
    token: String,
}

impl AdminCredentials {
    pub fn new(username: String, password: String, token: String) -> Self {
        Self { username, password, token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Both fields are always compared so timing does not reveal which one
    /// was wrong.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (user_ok & pass_ok).into()
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("token", &"***")
            .finish()
    }
}

/// Outcome of a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    Denied,
    NotConfigured,
}

pub fn check_login(expected: Option<&AdminCredentials>, username: &str, password: &str) -> LoginOutcome {
    match expected {
        None => LoginOutcome::NotConfigured,
        Some(creds) if creds.matches(username, password) => LoginOutcome::Granted,
        Some(_) => LoginOutcome::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> AdminCredentials {
        AdminCredentials::new("skzry".into(), "568876Qqq".into(), "shared-secret".into())
    }

    #[test]
    fn test_correct_pair_opens_gate() {
        assert_eq!(check_login(Some(&creds()), "skzry", "568876Qqq"), LoginOutcome::Granted);
    }

    #[test]
    fn test_wrong_pairs_are_denied() {
        let creds = creds();
        for (user, pass) in [
            ("skzry", "568876qqq"),
            ("Skzry", "568876Qqq"),
            ("", ""),
            ("skzry", ""),
            ("skzry ", "568876Qqq"),
        ] {
            assert_eq!(check_login(Some(&creds), user, pass), LoginOutcome::Denied);
        }
    }

    #[test]
    fn test_unconfigured_gate_never_opens() {
        assert_eq!(check_login(None, "skzry", "568876Qqq"), LoginOutcome::NotConfigured);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", creds());
        assert!(!rendered.contains("568876Qqq"));
        assert!(!rendered.contains("shared-secret"));
    }
}
