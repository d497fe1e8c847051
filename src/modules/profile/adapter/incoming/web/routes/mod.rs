pub mod get_template_view;
pub mod list_templates;

pub use get_template_view::get_template_view_handler;
pub use list_templates::list_templates_handler;
