pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::profile;

use actix_web::web;
use std::sync::Arc;

use crate::profile::application::use_cases::resolve_profile::ResolveProfileUseCase;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub resolve_profile_use_case: Arc<dyn ResolveProfileUseCase + Send + Sync>,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Templates
    cfg.service(crate::profile::adapter::incoming::web::routes::list_templates_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_template_view_handler);
}
