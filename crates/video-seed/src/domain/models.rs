//! Records exchanged with the seeded service.
//!
//! Fixture inputs ([`NewUser`], [`Video`]) are plain data loaded from the
//! catalogue. Values returned by the service ([`UserId`], [`SessionToken`])
//! are opaque and validated only for emptiness.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fixture user before a picture has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address, also the login identifier.
    pub email: String,
    /// Plaintext password used for account creation and login.
    pub password: String,
}

impl NewUser {
    /// Build a fixture user from its parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Attach a picture URL, producing the record sent for creation.
    #[must_use]
    pub fn with_picture(&self, picture: Option<String>) -> UserRecord {
        UserRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            picture,
        }
    }

    /// Credentials used to log this user in.
    #[must_use]
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// A user as sent to the creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Profile picture URL drawn from the catalogue's pool.
    pub picture: Option<String>,
}

/// A fixture video attached to user accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Video {
    /// Video title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// URL of the media file.
    pub url: String,
}

impl Video {
    /// Build a fixture video from its parts.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

/// Email and password pair submitted to the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

impl LoginCredentials {
    /// Login identifier.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plaintext password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validation failures for service-assigned identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserIdError {
    /// The service returned an empty identifier.
    #[error("user id must not be empty")]
    Empty,
}

/// Identifier assigned to a user by the seeded service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap a service-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserIdError::Empty`] when the identifier is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, UserIdError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(UserIdError::Empty);
        }
        Ok(Self(value))
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque bearer credential returned by a successful login.
///
/// `Debug` output is redacted so tokens never reach the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a bearer token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Reveal the raw token for use in an `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    /// Bearer token for subsequent requests.
    pub token: SessionToken,
    /// Identifier of the logged-in user, when the service reports it.
    pub user_id: Option<UserId>,
}

/// A video the service accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachedVideo {
    /// Identifier assigned to the video, when the service reports it.
    pub id: Option<String>,
}
