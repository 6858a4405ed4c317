//! Storefront frontend logic
//!
//! Everything a page needs apart from the DOM itself: the session token
//! lifecycle, handlers for the register and login forms, and the product
//! listing projection.

pub mod api;
pub mod forms;
pub mod listing;
pub mod session;

pub use api::{AuthApi, CatalogApi};
pub use forms::{FormHandlers, FormSubmission, LoginForm, Notifier, RegisterForm};
pub use listing::{ListingView, ProductCard, load_listing};
pub use session::{RefreshOutcome, SessionError, SessionManager, SessionState, SessionTokens};
