use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    auth::adapter::incoming::web::extractors::auth::OptionalAuth,
    profile::{
        application::{
            services::view_model_builder::build_template_view,
            use_cases::resolve_profile::{DemoFallback, FetchStrategy, ResolveStatus},
        },
        domain::{templates, view_model::ViewModel},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Deserialize)]
pub struct TemplateViewQuery {
    pub username: Option<String>,
}

#[derive(Serialize)]
pub struct TemplateViewResponse {
    pub status: ResolveStatus,
    pub strategy: FetchStrategy,
    pub fallback: Option<DemoFallback>,
    pub error_message: String,
    pub retryable: bool,
    pub resolved_at: DateTime<Utc>,
    pub view_model: ViewModel,
}

/// Resolve a profile and merge it into the named template.
///
/// Every resolution outcome is a 200; the client reads `status` and shows
/// `error_message` with a retry action when `retryable` is set.
#[get("/api/templates/{template_id}/view")]
pub async fn get_template_view_handler(
    path: web::Path<String>,
    query: web::Query<TemplateViewQuery>,
    auth: OptionalAuth,
    data: web::Data<AppState>,
) -> impl Responder {
    let template_id = path.into_inner();
    let template = match templates::find(&template_id) {
        Some(t) => t,
        None => {
            return ApiResponse::not_found(
                "TEMPLATE_NOT_FOUND",
                &format!("Unknown template: {}", template_id),
            )
        }
    };

    let auth = auth.into_inner();
    let resolution = data
        .resolve_profile_use_case
        .resolve(query.username.as_deref(), &auth)
        .await;

    info!(
        "Template {} resolved as {:?} via {:?}",
        template.id, resolution.status, resolution.strategy
    );

    let view_model = build_template_view(resolution.record.as_ref(), template);

    ApiResponse::success(TemplateViewResponse {
        retryable: resolution.status.is_visible_error(),
        status: resolution.status,
        strategy: resolution.strategy,
        fallback: resolution.fallback,
        error_message: resolution.error_message,
        resolved_at: resolution.resolved_at,
        view_model,
    })
}
