//! Reserved administrator credentials.
//!
//! The administrator is a built-in identity, not a registry entry. Its
//! credential pair is read from the environment (typically via `.env`) and
//! falls back to the historical defaults when unset.

/// Default admin login email.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@waste.com";
/// Default admin password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// The credential pair that always authenticates as the built-in admin.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    /// Admin login email.
    pub email: String,
    /// Admin password, compared verbatim at login.
    pub password: String,
}

impl AdminCredentials {
    /// Reads `ECOWASTE_ADMIN_EMAIL` and `ECOWASTE_ADMIN_PASSWORD`, falling
    /// back to the defaults for whichever is unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            email: std::env::var("ECOWASTE_ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            password: std::env::var("ECOWASTE_ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_historical_pair() {
        let creds = AdminCredentials::default();
        assert_eq!(creds.email, "admin@waste.com");
        assert_eq!(creds.password, "admin123");
    }
}
