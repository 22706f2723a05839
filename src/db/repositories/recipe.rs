use crate::entities::{prelude::*, recipe};
use crate::models::recipe::{Recipe, RecipeInput};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub struct RecipeRepository {
    conn: DatabaseConnection,
}

impl RecipeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, input: &RecipeInput, image: Option<String>) -> Result<Recipe> {
        let active_model = recipe::ActiveModel {
            title: Set(Some(input.title.clone())),
            description: Set(Some(input.description.clone())),
            instructions: Set(Some(input.instructions.clone())),
            category: Set(Some(input.category.clone())),
            image: Set(image),
            ..Default::default()
        };

        let model = active_model.insert(&self.conn).await?;
        Ok(Recipe::from(model))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Recipe>> {
        let model = Recipes::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(Recipe::from))
    }

    pub async fn list_all(&self) -> Result<Vec<Recipe>> {
        let models = Recipes::find().all(&self.conn).await?;
        Ok(models.into_iter().map(Recipe::from).collect())
    }

    pub async fn list_by_title(&self) -> Result<Vec<Recipe>> {
        let models = Recipes::find()
            .order_by_asc(recipe::Column::Title)
            .all(&self.conn)
            .await?;
        Ok(models.into_iter().map(Recipe::from).collect())
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Recipe>> {
        let models = Recipes::find()
            .filter(recipe::Column::Category.eq(category))
            .all(&self.conn)
            .await?;
        Ok(models.into_iter().map(Recipe::from).collect())
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// SQLite's `LIKE` and `lower()` only fold ASCII, so matching happens here
    /// with full Unicode lowercasing.
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        let needle = query.to_lowercase();
        let matches = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        };

        let models = Recipes::find()
            .order_by_asc(recipe::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(models
            .into_iter()
            .filter(|m| matches(&m.title) || matches(&m.description))
            .map(Recipe::from)
            .collect())
    }

    pub async fn update(&self, id: i32, input: &RecipeInput, image: Option<String>) -> Result<()> {
        let active_model = recipe::ActiveModel {
            id: Set(id),
            title: Set(Some(input.title.clone())),
            description: Set(Some(input.description.clone())),
            instructions: Set(Some(input.instructions.clone())),
            category: Set(Some(input.category.clone())),
            image: Set(image),
        };

        active_model.update(&self.conn).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Recipes::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}
