use serde::{Deserialize, Serialize};

use crate::entities::recipe;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<String>,
    /// Generated filename inside the pictures directory.
    pub image: Option<String>,
}

impl From<recipe::Model> for Recipe {
    fn from(model: recipe::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            instructions: model.instructions,
            category: model.category,
            image: model.image,
        }
    }
}

impl Recipe {
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Text fields submitted by the create and update forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeInput {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub category: String,
}

/// An uploaded photo as received from the browser.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Categories that have a dedicated listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Hot,
    Cold,
    Salad,
    Snack,
    Soup,
    Delivery,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Hot,
        Self::Cold,
        Self::Salad,
        Self::Snack,
        Self::Soup,
        Self::Delivery,
    ];

    /// Value stored in the `category` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Salad => "salad",
            Self::Snack => "snack",
            Self::Soup => "soup",
            Self::Delivery => "delivery",
        }
    }

    #[must_use]
    pub const fn route(&self) -> &'static str {
        match self {
            Self::Hot => "/hot-recipes",
            Self::Cold => "/cold-recipes",
            Self::Salad => "/salad-recipes",
            Self::Snack => "/snacks-recipes",
            Self::Soup => "/soups-recipes",
            Self::Delivery => "/delivery-recipes",
        }
    }

    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Hot => "Hot dishes",
            Self::Cold => "Cold dishes",
            Self::Salad => "Salads",
            Self::Snack => "Snacks",
            Self::Soup => "Soups",
            Self::Delivery => "Delivery",
        }
    }
}
