use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use visionaria_core_contact_contracts::ContactFeatureService;

use crate::models::contact::ApiContactChannels;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::get(get_channels))
        .with_state(service)
}

async fn get_channels(service: State<Arc<impl ContactFeatureService>>) -> Json<ApiContactChannels> {
    Json(service.get_channels().into())
}
