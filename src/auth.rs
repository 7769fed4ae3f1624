//! Credential verification
//!
//! The demo build ships a hard-coded credential list checked entirely on
//! the client. The [`CredentialVerifier`] trait is the seam where a real
//! backend-backed verifier plugs in without touching call sites.

use serde::{Deserialize, Serialize};

/// Token issued for demo sessions
pub const DEMO_TOKEN: &str = "demo-token";

/// Authenticated user projection kept in the session store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserIdentity {
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}

/// Capability to turn an email/password pair into an identity
pub trait CredentialVerifier {
    /// Returns the identity on success, `None` on bad credentials
    fn verify(&self, email: &str, password: &str) -> Option<UserIdentity>;
}

/// One hard-coded demo account
struct DemoUser {
    email: &'static str,
    password: &'static str,
    role: &'static str,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        email: "doctor@medassyst.ru",
        password: "doctor123",
        role: "doctor",
    },
    DemoUser {
        email: "patient@medassyst.ru",
        password: "patient123",
        role: "patient",
    },
    DemoUser {
        email: "admin@medassyst.ru",
        password: "admin123",
        role: "admin",
    },
    DemoUser {
        email: "demo@medassyst.ru",
        password: "demo123",
        role: "demo",
    },
    DemoUser {
        email: "admin123@gmail.com",
        password: "admin123",
        role: "admin",
    },
];

/// Verifier backed by the static demo account list
#[derive(Debug, Default)]
pub struct DemoCredentials;

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, email: &str, password: &str) -> Option<UserIdentity> {
        let email = email.trim().to_lowercase();

        let account = DEMO_USERS
            .iter()
            .find(|u| u.email == email && u.password == password)?;

        let (first, last) = derive_name(account.email);

        Some(UserIdentity {
            email: account.email.to_string(),
            role: account.role.to_string(),
            first_name: first,
            last_name: last,
        })
    }
}

/// Derive display names from the email local part ("anna.petrova@…" ->
/// "Anna", "Petrova")
fn derive_name(email: &str) -> (String, String) {
    let local = email.split('@').next().unwrap_or_default();
    let mut parts = local.splitn(2, '.');

    let first = capitalize(parts.next().unwrap_or_default());
    let last = capitalize(parts.next().unwrap_or_default());

    (first, last)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let verifier = DemoCredentials;
        let user = verifier.verify("doctor@medassyst.ru", "doctor123").unwrap();
        assert_eq!(user.role, "doctor");
        assert_eq!(user.first_name, "Doctor");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn test_email_trimmed_and_case_insensitive() {
        let verifier = DemoCredentials;
        assert!(verifier
            .verify("  Admin@Medassyst.RU ", "admin123")
            .is_some());
    }

    #[test]
    fn test_password_is_exact() {
        let verifier = DemoCredentials;
        assert!(verifier.verify("doctor@medassyst.ru", "DOCTOR123").is_none());
        assert!(verifier.verify("doctor@medassyst.ru", "").is_none());
    }

    #[test]
    fn test_unknown_email_rejected() {
        let verifier = DemoCredentials;
        assert!(verifier.verify("nobody@medassyst.ru", "doctor123").is_none());
    }

    #[test]
    fn test_dotted_local_part_splits_into_names() {
        let (first, last) = derive_name("anna.petrova@example.com");
        assert_eq!(first, "Anna");
        assert_eq!(last, "Petrova");
    }
}
