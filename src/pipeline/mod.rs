pub mod persist;
pub mod render;
pub mod validate;
