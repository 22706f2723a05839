//! Domain service for the recipe catalog.
//!
//! Every operation is a single store read or write, optionally paired with a
//! photo file written to or removed from the pictures directory.

use crate::models::recipe::{PhotoUpload, Recipe, RecipeInput};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(String),

    #[error("File system error: {0}")]
    FileSystem(String),
}

impl From<sea_orm::DbErr> for RecipeError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for RecipeError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait RecipeService: Send + Sync {
    /// Saves the photo (if any) under a generated name, then inserts the row.
    ///
    /// The two writes are independent: if the insert fails the photo stays on disk.
    async fn create(
        &self,
        input: RecipeInput,
        photo: Option<PhotoUpload>,
    ) -> Result<Recipe, RecipeError>;

    /// # Errors
    ///
    /// Returns [`RecipeError::NotFound`] if no recipe has this id.
    async fn get(&self, id: i32) -> Result<Recipe, RecipeError>;

    /// All recipes ordered by title.
    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError>;

    /// Recipes whose category equals `category` exactly.
    async fn list_in_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError>;

    /// Title/description substring search. An empty query matches nothing.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeError>;

    /// Overwrites the text fields of a recipe.
    ///
    /// When `photo` is present the previous photo file is deleted and the new one
    /// is stored under a fresh name. Without a photo the image reference is kept.
    async fn update(
        &self,
        id: i32,
        input: RecipeInput,
        photo: Option<PhotoUpload>,
    ) -> Result<Recipe, RecipeError>;

    /// Removes the row. The photo file is left on disk.
    async fn delete(&self, id: i32) -> Result<(), RecipeError>;

    /// Uniform pick over the whole catalog, `None` when it is empty.
    async fn random(&self) -> Result<Option<Recipe>, RecipeError>;

    /// Uniform pick over one category, `None` when it has no recipes.
    async fn random_in_category(&self, category: &str) -> Result<Option<Recipe>, RecipeError>;
}
