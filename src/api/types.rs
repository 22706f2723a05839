use serde::{Deserialize, Serialize};

use crate::models::recipe::Recipe;
use crate::services::ImageService;

/// Payload of the random-recipe endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RandomRecipeDto {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Public URL of the photo, or of the placeholder picture.
    pub image: String,
}

impl From<Recipe> for RandomRecipeDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            image: ImageService::public_url(recipe.image.as_deref()),
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            category: recipe.category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}
