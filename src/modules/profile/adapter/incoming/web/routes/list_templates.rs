use actix_web::{get, Responder};

use crate::{profile::domain::templates, shared::api::ApiResponse};

#[get("/api/templates")]
pub async fn list_templates_handler() -> impl Responder {
    ApiResponse::success(templates::summaries())
}
