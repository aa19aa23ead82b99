/// Represents a product offered by the store.
///
/// Products are reference data owned by the catalog. The cart embeds a full
/// copy of each product it holds so that the durable mirror can be restored
/// without the catalog being available.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a product picture comes from: an asset bundled with the app or a remote URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    Bundled(u64),
    Remote(String),
}

impl Default for ImageSource {
    fn default() -> Self {
        ImageSource::Remote(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub image: ImageSource,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_content: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "in_stock_default")]
    pub in_stock: bool,
}

fn in_stock_default() -> bool {
    true
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `category` - Catalog category the product is listed under
    /// * `price` - Unit price
    ///
    /// The remaining fields start empty (no image, no description, rating 0)
    /// and the product is in stock.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            image: ImageSource::default(),
            description: String::new(),
            volume: None,
            alcohol_content: None,
            rating: 0.0,
            in_stock: true,
        }
    }

    pub fn with_image(mut self, image: ImageSource) -> Self {
        self.image = image;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_alcohol_content(mut self, alcohol_content: impl Into<String>) -> Self {
        self.alcohol_content = Some(alcohol_content.into());
        self
    }

    /// Sets the rating, clamped to the 0–5 scale used by the catalog.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }
}
