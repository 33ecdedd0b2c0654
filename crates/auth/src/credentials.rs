use thiserror::Error;

/// The operator admitted by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub username: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password. Please try again.")]
    InvalidCredentials,
}

/// Login contract consulted by the CLI gate.
///
/// - No IO
/// - No panics
pub trait CredentialCheck {
    fn verify(&self, username: &str, password: &str) -> Result<Operator, AuthError>;
}

impl<T> CredentialCheck for &T
where
    T: CredentialCheck + ?Sized,
{
    fn verify(&self, username: &str, password: &str) -> Result<Operator, AuthError> {
        (**self).verify(username, password)
    }
}

impl<T> CredentialCheck for Box<T>
where
    T: CredentialCheck + ?Sized,
{
    fn verify(&self, username: &str, password: &str) -> Result<Operator, AuthError> {
        (**self).verify(username, password)
    }
}

/// A single configured username/password pair.
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs and panic messages.
impl core::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CredentialCheck for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<Operator, AuthError> {
        if username == self.username && password == self.password {
            tracing::info!(username, "operator logged in");
            Ok(Operator {
                username: username.to_string(),
            })
        } else {
            tracing::warn!(username, "login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}
