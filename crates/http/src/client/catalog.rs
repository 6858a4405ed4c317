//! Catalog API client methods

use super::{ClientError, StorefrontClient};
use crate::types::{Category, Product, ProductQuery};
use reqwest::Method;

pub const PRODUCTS_PATH: &str = "/api/products/";
pub const CATEGORIES_PATH: &str = "/api/categories/";

impl StorefrontClient {
    /// List products matching `query`, in server order
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        let request = self.request(Method::GET, PRODUCTS_PATH).query(query);
        self.execute(request).await
    }

    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let request = self.request(Method::GET, CATEGORIES_PATH);
        self.execute(request).await
    }
}
