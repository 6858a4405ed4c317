//! Authentication API client methods

use super::{ClientError, StorefrontClient};
use crate::types::{AccessToken, LoginRequest, RefreshRequest, RegisterRequest, TokenPair};
use reqwest::Method;

pub const REGISTER_PATH: &str = "/api/register/";
pub const LOGIN_PATH: &str = "/api/login/";
pub const TOKEN_REFRESH_PATH: &str = "/api/token/refresh/";

impl StorefrontClient {
    /// Create an account and receive a fresh token pair
    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenPair, ClientError> {
        let req = self.request(Method::POST, REGISTER_PATH).json(request);
        self.execute(req).await
    }

    /// Exchange credentials for a token pair
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ClientError> {
        let req = self.request(Method::POST, LOGIN_PATH).json(request);
        self.execute(req).await
    }

    /// Mint a new access token from a refresh token
    pub async fn refresh_access(
        &self,
        request: &RefreshRequest,
    ) -> Result<AccessToken, ClientError> {
        let req = self.request(Method::POST, TOKEN_REFRESH_PATH).json(request);
        self.execute(req).await
    }
}
