use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{ImageService, RecipeService, SeaOrmRecipeService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub image_service: Arc<ImageService>,

    pub recipe_service: Arc<dyn RecipeService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let image_service = Arc::new(ImageService::new(config.pictures_dir()));
        image_service.ensure_dir().await?;

        let recipe_service = Arc::new(SeaOrmRecipeService::new(
            store.clone(),
            image_service.clone(),
        )) as Arc<dyn RecipeService>;

        Ok(Self {
            config: Arc::new(config),
            store,
            image_service,
            recipe_service,
        })
    }
}
