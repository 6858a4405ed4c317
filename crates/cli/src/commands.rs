//! CLI commands

use anyhow::{Context as _, Result};
use clap::Subcommand;
use std::path::PathBuf;
use std::time::Duration;
use storefront_core::{FileStore, StorefrontConfig};
use storefront_frontend::{
    FormHandlers, LoginForm, Notifier, RegisterForm, RefreshOutcome, SessionManager,
    SessionState, load_listing,
};
use storefront_frontend::forms::TracingNotifier;
use storefront_http::StorefrontClient;
use storefront_http::types::ProductQuery;
use tracing::{debug, info};

use crate::config;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and store the issued tokens
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log in and store the issued tokens
    Login {
        #[arg(long)]
        username: String,

        #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Replace the stored access token using the stored refresh token
    Refresh,

    /// Show whether a session is stored
    Status,

    /// List products
    Products {
        /// Include unavailable products and use server ordering
        #[arg(long)]
        all: bool,

        /// Ordering field, `-` prefix for descending
        #[arg(long, allow_hyphen_values = true)]
        ordering: Option<String>,

        /// Only products in this category (slug)
        #[arg(long)]
        category: Option<String>,

        /// Print the HTML markup instead of text
        #[arg(long)]
        html: bool,
    },

    /// List product categories
    Categories,
}

/// Resources shared by every command
pub struct Context {
    client: StorefrontClient,
    token_file: PathBuf,
    notifier: Box<dyn Notifier>,
}

impl Context {
    pub fn new(
        settings: &StorefrontConfig,
        data_dir: Option<PathBuf>,
        quiet: bool,
    ) -> Result<Self> {
        let mut builder = StorefrontClient::builder()
            .base_url(&settings.api.base_url)
            .user_agent(&settings.api.user_agent);
        if settings.api.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.api.timeout_secs));
        }
        let client = builder.build().context("Failed to build API client")?;

        let token_file = config::token_file(settings, data_dir);
        debug!(path = %token_file.display(), "Using token store");

        // Quiet mode leaves confirmations to the log
        let notifier: Box<dyn Notifier> = if quiet {
            Box::new(TracingNotifier)
        } else {
            Box::new(StdoutNotifier)
        };

        Ok(Self {
            client,
            token_file,
            notifier,
        })
    }

    fn session(&self) -> SessionManager<StorefrontClient, FileStore> {
        SessionManager::new(self.client.clone(), FileStore::new(&self.token_file))
    }
}

/// Prints notifications to stdout
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

impl Commands {
    pub async fn execute(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Register {
                username,
                email,
                password,
            } => {
                let form = RegisterForm {
                    username,
                    email,
                    password,
                };
                let handlers = FormHandlers::new(ctx.session(), &*ctx.notifier);
                handlers.submit(form.into()).await?;
                Ok(())
            }
            Self::Login { username, password } => {
                let form = LoginForm { username, password };
                let handlers = FormHandlers::new(ctx.session(), &*ctx.notifier);
                handlers.submit(form.into()).await?;
                Ok(())
            }
            Self::Refresh => {
                let outcome = ctx.session().refresh_access().await;
                debug!(?outcome, "Refresh finished");
                if outcome == RefreshOutcome::Refreshed {
                    info!("Access token updated");
                }
                Ok(())
            }
            Self::Status => {
                let state = ctx
                    .session()
                    .state()
                    .context("Failed to read token store")?;
                match state {
                    SessionState::HasSession => println!("session: active"),
                    SessionState::NoSession => println!("session: none"),
                }
                Ok(())
            }
            Self::Products {
                all,
                ordering,
                category,
                html,
            } => {
                let mut query = if all {
                    ProductQuery::all()
                } else {
                    ProductQuery::default()
                };
                if ordering.is_some() {
                    query.ordering = ordering;
                }
                query.category = category;

                let view = load_listing(&ctx.client, &query).await;
                if html {
                    println!("{}", view.render_html());
                } else {
                    print!("{view}");
                }
                Ok(())
            }
            Self::Categories => {
                let categories = ctx
                    .client
                    .list_categories()
                    .await
                    .context("Failed to load categories")?;
                for category in categories {
                    println!("{:<24} {}", category.slug, category.name);
                }
                Ok(())
            }
        }
    }
}
