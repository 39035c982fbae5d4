//! Session gate: login state for the console menu.
//!
//! # Security
//!
//! This is a format check, not authentication. Credentials are kept in memory
//! for the lifetime of the session only; the password is wiped on drop and
//! never printed by `Debug`.

use zeroize::Zeroizing;

use super::credentials;

/// Login/logout state holder.
#[derive(Default)]
pub struct SessionGate {
    user_id: Option<String>,
    password: Option<Zeroizing<String>>,
    logged_in: bool,
}

impl SessionGate {
    /// Create a gate in the logged-out state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to log in.
    ///
    /// On success both values are retained and the gate is logged in. On
    /// failure nothing changes. Attempts are unlimited.
    pub fn login(&mut self, user_id: &str, password: &str) -> bool {
        if let Err(rule) = credentials::validate(user_id, password) {
            tracing::info!(%rule, "Login rejected");
            return false;
        }

        self.user_id = Some(user_id.to_string());
        self.password = Some(Zeroizing::new(password.to_string()));
        self.logged_in = true;
        tracing::info!(user_id = %user_id, "Login accepted");
        true
    }

    /// Clear the logged-in flag.
    pub fn logout(&mut self) {
        self.logged_in = false;
        tracing::info!("Logged out");
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// User id of the most recent successful login.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

// Password intentionally omitted
impl std::fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGate")
            .field("user_id", &self.user_id)
            .field("has_password", &self.password.is_some())
            .field("logged_in", &self.logged_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        let gate = SessionGate::new();
        assert!(!gate.is_logged_in());
        assert!(gate.user_id().is_none());
    }

    #[test]
    fn test_login_success() {
        let mut gate = SessionGate::new();
        assert!(gate.login("doctor01", "Hospital@2024"));
        assert!(gate.is_logged_in());
        assert_eq!(gate.user_id(), Some("doctor01"));
    }

    #[test]
    fn test_login_failure_leaves_state() {
        let mut gate = SessionGate::new();
        assert!(!gate.login("doc", "Hospital@2024"));
        assert!(!gate.login("doctor01", "hospital2024"));
        assert!(!gate.is_logged_in());
        assert!(gate.user_id().is_none());
    }

    #[test]
    fn test_retry_after_failures() {
        let mut gate = SessionGate::new();
        for _ in 0..50 {
            assert!(!gate.login("doctor01", "nope"));
        }
        assert!(gate.login("doctor01", "Hospital@2024"));
    }

    #[test]
    fn test_logout_and_relogin() {
        let mut gate = SessionGate::new();
        assert!(gate.login("doctor01", "Hospital@2024"));
        gate.logout();
        assert!(!gate.is_logged_in());

        // Logout is unconditional
        gate.logout();
        assert!(!gate.is_logged_in());

        assert!(gate.login("surgeon99", "Scalpel#0001"));
        assert_eq!(gate.user_id(), Some("surgeon99"));
    }

    #[test]
    fn test_debug_hides_password() {
        let mut gate = SessionGate::new();
        gate.login("doctor01", "Hospital@2024");
        let debug = format!("{gate:?}");
        assert!(!debug.contains("Hospital@2024"));
        assert!(debug.contains("has_password: true"));
    }
}
