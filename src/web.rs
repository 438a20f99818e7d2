use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::render::RenderPages;
use crate::upstream::CatalogSource;

pub(crate) mod details;

/// Presentation settings for the details page, resolved from config
/// once at startup.
pub(crate) struct DetailsPage {
    pub title: String,
    pub template: String,
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub renderer: Arc<dyn RenderPages>,
    pub details: Arc<DetailsPage>,
}

pub(crate) fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/model/details", get(details::model_details))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
