pub mod entities;
pub mod field_map;
pub mod templates;
pub mod view_model;
