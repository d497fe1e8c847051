pub mod profile_api_http;

pub use profile_api_http::{ProfileApiConfig, ProfileApiHttp};
