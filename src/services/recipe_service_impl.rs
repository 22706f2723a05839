//! `SeaORM` implementation of the `RecipeService` trait.

use crate::db::Store;
use crate::models::recipe::{PhotoUpload, Recipe, RecipeInput};
use crate::services::ImageService;
use crate::services::recipe_service::{RecipeError, RecipeService};
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{error, info};

pub struct SeaOrmRecipeService {
    store: Store,
    images: Arc<ImageService>,
}

impl SeaOrmRecipeService {
    #[must_use]
    pub const fn new(store: Store, images: Arc<ImageService>) -> Self {
        Self { store, images }
    }

    async fn store_photo(&self, photo: &PhotoUpload) -> Result<String, RecipeError> {
        self.images
            .save_upload(photo)
            .await
            .map_err(|e| RecipeError::FileSystem(e.to_string()))
    }

    fn pick(recipes: &[Recipe]) -> Option<Recipe> {
        recipes.choose(&mut rand::rng()).cloned()
    }
}

#[async_trait::async_trait]
impl RecipeService for SeaOrmRecipeService {
    async fn create(
        &self,
        input: RecipeInput,
        photo: Option<PhotoUpload>,
    ) -> Result<Recipe, RecipeError> {
        let image = match &photo {
            Some(upload) => Some(self.store_photo(upload).await?),
            None => None,
        };

        let recipe = self
            .store
            .add_recipe(&input, image.clone())
            .await
            .map_err(|e| {
                error!(image = ?image, "Failed to insert recipe: {e}");
                RecipeError::Database(e.to_string())
            })?;

        info!(id = recipe.id, title = %input.title, "Recipe created");
        Ok(recipe)
    }

    async fn get(&self, id: i32) -> Result<Recipe, RecipeError> {
        self.store
            .get_recipe(id)
            .await?
            .ok_or(RecipeError::NotFound(id))
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.store.list_recipes_by_title().await?)
    }

    async fn list_in_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.store.list_recipes_in_category(category).await?)
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.search_recipes(query).await?)
    }

    async fn update(
        &self,
        id: i32,
        input: RecipeInput,
        photo: Option<PhotoUpload>,
    ) -> Result<Recipe, RecipeError> {
        let existing = self.get(id).await?;
        let mut image = existing.image;

        if let Some(upload) = &photo {
            if let Some(old) = image.as_deref() {
                self.images
                    .remove(old)
                    .await
                    .map_err(|e| RecipeError::FileSystem(e.to_string()))?;
            }
            image = Some(self.store_photo(upload).await?);
        }

        self.store
            .update_recipe(id, &input, image.clone())
            .await
            .map_err(|e| {
                error!(id, "Failed to update recipe: {e}");
                RecipeError::Database(e.to_string())
            })?;

        info!(id, photo_replaced = photo.is_some(), "Recipe updated");

        Ok(Recipe {
            id,
            title: Some(input.title),
            description: Some(input.description),
            instructions: Some(input.instructions),
            category: Some(input.category),
            image,
        })
    }

    async fn delete(&self, id: i32) -> Result<(), RecipeError> {
        let recipe = self.get(id).await?;

        let removed = self.store.remove_recipe(id).await.map_err(|e| {
            error!(id, "Failed to delete recipe: {e}");
            RecipeError::Database(e.to_string())
        })?;

        if !removed {
            return Err(RecipeError::Database(format!(
                "Recipe {id} vanished before it could be deleted"
            )));
        }

        info!(id, image = ?recipe.image, "Recipe deleted");
        Ok(())
    }

    async fn random(&self) -> Result<Option<Recipe>, RecipeError> {
        let recipes = self.store.list_all_recipes().await?;
        Ok(Self::pick(&recipes))
    }

    async fn random_in_category(&self, category: &str) -> Result<Option<Recipe>, RecipeError> {
        let recipes = self.store.list_recipes_in_category(category).await?;
        Ok(Self::pick(&recipes))
    }
}
