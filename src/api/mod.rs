use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::models::recipe::Category;
use crate::services::{ImageService, RecipeService};
use crate::state::SharedState;

pub(crate) mod assets;
mod error;
mod form;
mod observability;
mod random;
mod recipes;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use form::RecipeForm;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn images(&self) -> &Arc<ImageService> {
        &self.shared.image_service
    }

    #[must_use]
    pub fn recipes(&self) -> &Arc<dyn RecipeService> {
        &self.shared.recipe_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let static_path = state.config().general.static_path.clone();
    let body_limit = state.config().server.max_upload_mb * 1024 * 1024;

    let mut routes = Router::new()
        .route("/", get(recipes::home))
        .route(
            "/create",
            get(recipes::create_form).post(recipes::create_recipe),
        )
        .route("/all_recipes", get(recipes::all_recipes))
        .route("/recipe_detail/{id}", get(recipes::recipe_detail))
        .route("/recipe/{id}/delete", get(recipes::delete_recipe))
        .route(
            "/recipe/{id}/update",
            get(recipes::update_form).post(recipes::update_recipe),
        )
        .route("/search", get(recipes::search))
        .route("/random_recipe", get(random::random_recipe))
        .route(
            "/random_recipe_by_category",
            get(random::random_recipe_by_category),
        )
        .route("/health", get(system::health))
        .route("/metrics", get(observability::get_metrics))
        .route("/assets/{*path}", get(assets::serve_asset));

    for category in Category::ALL {
        routes = routes.route(
            category.route(),
            get(move |State(state): State<Arc<AppState>>| {
                recipes::category_recipes(state, category)
            }),
        );
    }

    routes
        .with_state(state)
        .nest_service("/static", ServeDir::new(static_path))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::security_headers))
        .layer(middleware::from_fn(observability::request_logging))
}
