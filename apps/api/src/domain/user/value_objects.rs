use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Exactly one '@' with a non-empty local part
/// - Domain part contains a '.' that is neither first nor last
/// - No whitespace
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Arguments
    /// * `email` - The email string to validate
    ///
    /// # Returns
    /// * `Ok(Email)` - If email is valid
    /// * `Err(String)` - If email is invalid
    ///
    /// # Example
    /// ```
    /// use pickme_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("jake@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "jake@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    fn is_valid(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        match domain.rfind('.') {
            Some(dot) => dot > 0 && dot < domain.len() - 1,
            None => false,
        }
    }

    /// Wraps an email read back from storage without validating it
    ///
    /// Stored rows may have been written under looser rules than [`Email::new`].
    pub(crate) fn from_stored(email: String) -> Self {
        Email(email)
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Username value object
///
/// # Invariants
/// - Not empty
/// - ASCII letters and digits only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Creates a new Username, rejecting anything that is not alphanumeric
    ///
    /// # Example
    /// ```
    /// use pickme_api::domain::user::value_objects::Username;
    ///
    /// assert!(Username::new("jakejoo").is_ok());
    /// assert!(Username::new("jake joo").is_err());
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, String> {
        let username = username.into();
        if !username.is_empty() && username.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Username(username))
        } else {
            Err(format!("Invalid username: {}", username))
        }
    }

    /// Wraps a username read back from storage without validating it
    pub(crate) fn from_stored(username: String) -> Self {
        Username(username)
    }

    /// Returns the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
