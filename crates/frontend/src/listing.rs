//! Product listing projection and rendering

use crate::api::CatalogApi;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use storefront_http::types::{Product, ProductQuery};
use tracing::error;

/// Descriptions longer than this many characters are cut
pub const DESCRIPTION_LIMIT: usize = 80;
pub const ELLIPSIS: &str = "...";

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_MESSAGE: &str = "No products available at the moment.";
pub const ERROR_PREFIX: &str = "Error loading products: ";
const FAILED_STATUS_MESSAGE: &str = "Failed to load products";

/// Display card for one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    /// e.g. `$24.50`
    pub price_label: String,
    pub image: Option<String>,
    pub in_stock: bool,
    pub summary: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price_label: price_label(product.price),
            image: product.image.clone().filter(|url| !url.is_empty()),
            in_stock: product.in_stock,
            summary: summarize(&product.description),
        }
    }

    pub const fn stock_label(&self) -> &'static str {
        if self.in_stock { "In Stock" } else { "Out of Stock" }
    }

    pub const fn stock_class(&self) -> &'static str {
        if self.in_stock { "stock" } else { "out-of-stock" }
    }

    fn write_html(&self, out: &mut String) {
        out.push_str("<div class=\"product-card\">");
        match &self.image {
            Some(url) => out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"product-image\">",
                html_escape(url),
                html_escape(&self.name)
            )),
            None => out.push_str("<div class=\"product-image placeholder\">No image</div>"),
        }
        out.push_str(&format!(
            "<div class=\"product-info\"><h3>{}</h3><p class=\"price\">{}</p><p class=\"{}\">{}</p><p>{}</p></div>",
            html_escape(&self.name),
            html_escape(&self.price_label),
            self.stock_class(),
            self.stock_label(),
            html_escape(&self.summary)
        ));
        out.push_str("</div>");
    }
}

/// Everything the product list container can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    Loading,
    Empty,
    /// The request failed; carries the reason shown to the user
    Failed(String),
    /// One card per product, in fetch order
    Cards(Vec<ProductCard>),
}

impl ListingView {
    /// Project a fetched collection, preserving order
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            Self::Empty
        } else {
            Self::Cards(products.iter().map(ProductCard::from_product).collect())
        }
    }

    /// Markup for the product list container
    pub fn render_html(&self) -> String {
        match self {
            Self::Loading => format!("<p>{LOADING_MESSAGE}</p>"),
            Self::Empty => format!("<p>{EMPTY_MESSAGE}</p>"),
            Self::Failed(reason) => format!(
                "<p class=\"error\">{ERROR_PREFIX}{}</p>",
                html_escape(reason)
            ),
            Self::Cards(cards) => {
                let mut out = String::new();
                for card in cards {
                    card.write_html(&mut out);
                }
                out
            }
        }
    }
}

impl fmt::Display for ListingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => writeln!(f, "{LOADING_MESSAGE}"),
            Self::Empty => writeln!(f, "{EMPTY_MESSAGE}"),
            Self::Failed(reason) => writeln!(f, "{ERROR_PREFIX}{reason}"),
            Self::Cards(cards) => {
                for card in cards {
                    writeln!(
                        f,
                        "{}  {}  [{}]",
                        card.name,
                        card.price_label,
                        card.stock_label()
                    )?;
                    if let Some(image) = &card.image {
                        writeln!(f, "    image: {image}")?;
                    }
                    if !card.summary.is_empty() {
                        writeln!(f, "    {}", card.summary)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Fetch products and project them into a view
///
/// Request failures become [`ListingView::Failed`] rather than errors.
pub async fn load_listing<C: CatalogApi + ?Sized>(catalog: &C, query: &ProductQuery) -> ListingView {
    match catalog.list_products(query).await {
        Ok(products) => ListingView::from_products(&products),
        Err(e) => {
            error!(error = %e, "Loading products failed");
            let reason = if e.status().is_some() {
                FAILED_STATUS_MESSAGE.to_string()
            } else {
                e.to_string()
            };
            ListingView::Failed(reason)
        }
    }
}

/// `$` followed by the price rounded to two decimals
pub fn price_label(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// First [`DESCRIPTION_LIMIT`] characters, with [`ELLIPSIS`] appended when cut
pub fn summarize(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &description[..cut]),
        None => description.to_string(),
    }
}

fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
