//! Login form controller

use crate::api::BlogApi;
use crate::session::{SessionStorage, SessionStore};
use blogdash_core::{Credentials, Error, LoginResponse, Result, UserType};
use thiserror::Error as ThisError;
use tracing::{error, info, warn};
use validator::Validate;

/// Why a login attempt failed, with the message shown under the form
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// A field was left blank
    #[error("Please enter both email and password")]
    MissingFields,

    /// 401
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 400
    #[error("Bad request. Please check your inputs")]
    BadRequest,

    /// 404
    #[error("Service not found")]
    ServiceNotFound,

    /// 500
    #[error("Server error. Please try again later")]
    ServerError,

    /// Any other status; carries the server's `message` when present
    #[error("{}", .0.as_deref().unwrap_or("Login failed"))]
    Rejected(Option<String>),

    /// The request never got an answer
    #[error("No response from server. Check your connection")]
    NoResponse,

    /// The server answered 2xx without a token
    #[error("Invalid response from server")]
    InvalidResponse,

    /// Anything else, including failing to persist the session
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl From<&Error> for LoginError {
    fn from(err: &Error) -> Self {
        match err {
            Error::Http { status, message } => match status {
                401 => Self::InvalidCredentials,
                400 => Self::BadRequest,
                404 => Self::ServiceNotFound,
                500 => Self::ServerError,
                _ => Self::Rejected(message.clone().filter(|m| !m.is_empty())),
            },
            Error::NotFound { .. } => Self::ServiceNotFound,
            Error::Network(_) => Self::NoResponse,
            Error::InvalidResponse(_) => Self::InvalidResponse,
            _ => Self::Unexpected,
        }
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginStatus {
    /// Waiting for input
    #[default]
    Idle,
    /// Request in flight; inputs are disabled
    Submitting,
    /// Last attempt failed
    Failed(LoginError),
}

#[derive(Debug, Validate)]
struct LoginInput {
    #[validate(length(min = 1))]
    email: String,
    #[validate(length(min = 1))]
    password: String,
}

/// Email/password form with its submit state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Email as typed
    pub email: String,
    /// Password as typed
    pub password: String,
    status: LoginStatus,
}

impl LoginForm {
    /// Empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status
    pub const fn status(&self) -> &LoginStatus {
        &self.status
    }

    /// Whether inputs and buttons should be disabled
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, LoginStatus::Submitting)
    }

    /// Message to show under the form, if any
    pub fn error_message(&self) -> Option<String> {
        match &self.status {
            LoginStatus::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Validate the inputs and enter the submitting state
    ///
    /// Returns the credentials to send, or `None` when a field is blank (the
    /// validation message is set) or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }

        let input = LoginInput {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        if input.validate().is_err() {
            self.status = LoginStatus::Failed(LoginError::MissingFields);
            return None;
        }

        let credentials = Credentials {
            email: input.email,
            password: input.password,
        };
        self.status = LoginStatus::Submitting;
        Some(credentials)
    }

    /// Settle a login request
    ///
    /// Returns the issued token on success; otherwise records the failure
    /// message and returns `None`.
    pub fn finish(&mut self, result: Result<LoginResponse>) -> Option<String> {
        let outcome = match result {
            Ok(LoginResponse {
                token: Some(token),
            }) if !token.is_empty() => Ok(token),
            Ok(_) => Err(LoginError::InvalidResponse),
            Err(ref err) => {
                warn!(error = %err, "login request failed");
                Err(LoginError::from(err))
            }
        };

        match outcome {
            Ok(token) => {
                self.status = LoginStatus::Idle;
                Some(token)
            }
            Err(err) => {
                self.status = LoginStatus::Failed(err);
                None
            }
        }
    }

    /// Submit the form and, on success, sign the session in
    ///
    /// Returns whether the session is now authenticated. Blank fields never
    /// reach the API.
    pub async fn submit<A, S>(&mut self, api: &A, session: &mut SessionStore<S>) -> bool
    where
        A: BlogApi + ?Sized,
        S: SessionStorage,
    {
        let Some(credentials) = self.begin_submit() else {
            return false;
        };

        let result = api.login(&credentials).await;
        let Some(token) = self.finish(result) else {
            return false;
        };

        self.complete(session, &token, UserType::User)
    }

    /// Continue as guest; never touches the network
    pub fn guest<S: SessionStorage>(&mut self, session: &mut SessionStore<S>) -> bool {
        match session.guest_login() {
            Ok(()) => {
                self.status = LoginStatus::Idle;
                true
            }
            Err(err) => {
                error!(error = %err, "failed to persist guest session");
                self.status = LoginStatus::Failed(LoginError::Unexpected);
                false
            }
        }
    }

    /// Hand an issued token to the session store
    pub fn complete<S: SessionStorage>(
        &mut self,
        session: &mut SessionStore<S>,
        token: &str,
        user_type: UserType,
    ) -> bool {
        match session.login(token, user_type) {
            Ok(()) => {
                info!("login succeeded");
                self.password.clear();
                true
            }
            Err(err) => {
                error!(error = %err, "failed to persist session");
                self.status = LoginStatus::Failed(LoginError::Unexpected);
                false
            }
        }
    }
}
