//! Carrier account credentials and bearer tokens
//!
//! Neither type prints its secret in `Debug` output, so both are safe to
//! pass through `tracing` fields.

use std::fmt;

/// Environment variable holding the ShipRocket account email
pub const EMAIL_VAR: &str = "SHIPROCKET_EMAIL";

/// Environment variable holding the ShipRocket account password
pub const PASSWORD_VAR: &str = "SHIPROCKET_PASSWORD";

/// Email/password pair used to obtain a bearer token
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `SHIPROCKET_EMAIL` / `SHIPROCKET_PASSWORD`
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let email = lookup(EMAIL_VAR).filter(|v| !v.is_empty())?;
        let password = lookup(PASSWORD_VAR).filter(|v| !v.is_empty())?;
        Some(Self::new(email, password))
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Bearer token returned by the carrier's login endpoint
///
/// Tokens are never cached: every operation that needs one is handed a
/// freshly obtained token by its caller.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Raw token value, for the `Authorization` header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

impl<S: Into<String>> From<S> for BearerToken {
    fn from(s: S) -> Self {
        Self(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_requires_both_values() {
        let mut vars = HashMap::new();
        vars.insert(EMAIL_VAR, "ops@vendor.in".to_string());

        assert!(Credentials::from_lookup(|k| vars.get(k).cloned()).is_none());

        vars.insert(PASSWORD_VAR, "s3cret".to_string());
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(creds.email, "ops@vendor.in");
        assert_eq!(creds.password(), "s3cret");
    }

    #[test]
    fn test_from_lookup_treats_empty_as_unset() {
        let creds = Credentials::from_lookup(|k| match k {
            EMAIL_VAR => Some("ops@vendor.in".to_string()),
            _ => Some(String::new()),
        });

        assert!(creds.is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("ops@vendor.in", "s3cret");
        let token = BearerToken::from("eyJhbGciOi");

        assert!(!format!("{:?}", creds).contains("s3cret"));
        assert_eq!(format!("{:?}", token), "[redacted]");
        assert_eq!(token.to_string(), "[redacted]");
        assert_eq!(token.expose(), "eyJhbGciOi");
    }
}
