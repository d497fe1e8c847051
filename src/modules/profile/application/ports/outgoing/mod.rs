pub mod profile_api;

pub use profile_api::{ProfileApi, ProfileApiError};
