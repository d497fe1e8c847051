pub mod resolve_profile_service;
pub mod view_model_builder;
pub mod view_session;

pub use resolve_profile_service::ProfileResolver;
pub use view_session::{ProfileViewSession, ViewState};
