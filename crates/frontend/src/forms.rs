//! Register and login form handlers
//!
//! Field extraction happens in whatever owns the page (DOM glue, CLI
//! arguments). Handlers receive the already-typed field values and report the
//! outcome through a [`Notifier`], the equivalent of a user-visible alert.

use crate::api::AuthApi;
use crate::session::{SessionError, SessionManager, SessionTokens};
use std::sync::Mutex;
use storefront_core::TokenStore;
use tracing::{info, warn};

pub const REGISTERED_MESSAGE: &str = "Registered! Tokens stored.";
pub const LOGGED_IN_MESSAGE: &str = "Logged in! Tokens stored.";

/// Fields of the registration form
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Fields of the login form
#[derive(Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// A submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Register(RegisterForm),
    Login(LoginForm),
}

impl From<RegisterForm> for FormSubmission {
    fn from(form: RegisterForm) -> Self {
        Self::Register(form)
    }
}

impl From<LoginForm> for FormSubmission {
    fn from(form: LoginForm) -> Self {
        Self::Login(form)
    }
}

/// Sink for user-visible confirmations and errors
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

/// Notifier that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(notification = message, "User notification");
    }
}

/// Notifier that keeps every message, for tests and headless callers
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Alert text shown when a submission fails
pub fn error_message(err: &SessionError) -> String {
    format!("Error: {err}")
}

/// Handlers for the register and login forms
pub struct FormHandlers<A, S, N> {
    session: SessionManager<A, S>,
    notifier: N,
}

impl<A: AuthApi, S: TokenStore, N: Notifier> FormHandlers<A, S, N> {
    pub const fn new(session: SessionManager<A, S>, notifier: N) -> Self {
        Self { session, notifier }
    }

    pub const fn session(&self) -> &SessionManager<A, S> {
        &self.session
    }

    /// Handle a form submission and emit exactly one notification
    pub async fn submit(
        &self,
        submission: FormSubmission,
    ) -> Result<SessionTokens, SessionError> {
        let (result, success_message) = match submission {
            FormSubmission::Register(form) => (
                self.session
                    .register(&form.username, &form.email, &form.password)
                    .await,
                REGISTERED_MESSAGE,
            ),
            FormSubmission::Login(form) => (
                self.session.login(&form.username, &form.password).await,
                LOGGED_IN_MESSAGE,
            ),
        };

        match &result {
            Ok(_) => self.notifier.notify(success_message),
            Err(e) => {
                warn!(error = %e, "Form submission failed");
                self.notifier.notify(&error_message(e));
            }
        }
        result
    }
}
