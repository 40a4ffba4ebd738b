//! Email subscription handlers

use axum::{extract::State, Json};
use blog_service::dto::{SubscribeRequest, SubscriptionResponse};
use blog_service::SubscriptionService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Subscribe an email address; repeating a signup is not an error
///
/// POST /subscriptions
pub async fn subscribe(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SubscribeRequest>,
) -> ApiResult<Json<SubscriptionResponse>> {
    let service = SubscriptionService::new(state.service_context());
    let response = service.subscribe(&body.email).await?;
    Ok(Json(response))
}
