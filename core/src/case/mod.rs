pub mod builder;
pub mod case_id;
pub mod layout;
pub mod model;
pub mod render;
pub mod templates;
