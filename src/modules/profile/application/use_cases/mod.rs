pub mod resolve_profile;
