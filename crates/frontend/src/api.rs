//! Remote API seams
//!
//! The session and listing logic talk to these traits rather than to
//! [`StorefrontClient`] directly, so tests can substitute mocks.

use async_trait::async_trait;
use storefront_http::ClientError;
use storefront_http::StorefrontClient;
use storefront_http::types::{
    AccessToken, Category, LoginRequest, Product, ProductQuery, RefreshRequest, RegisterRequest,
    TokenPair,
};

/// The Auth API: register, login and token refresh
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<TokenPair, ClientError>;
    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ClientError>;
    async fn refresh_access(&self, request: &RefreshRequest) -> Result<AccessToken, ClientError>;
}

/// The Catalog API: products and categories
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CatalogApi {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError>;
    async fn list_categories(&self) -> Result<Vec<Category>, ClientError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthApi for StorefrontClient {
    async fn register(&self, request: &RegisterRequest) -> Result<TokenPair, ClientError> {
        Self::register(self, request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ClientError> {
        Self::login(self, request).await
    }

    async fn refresh_access(&self, request: &RefreshRequest) -> Result<AccessToken, ClientError> {
        Self::refresh_access(self, request).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogApi for StorefrontClient {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        Self::list_products(self, query).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        Self::list_categories(self).await
    }
}
