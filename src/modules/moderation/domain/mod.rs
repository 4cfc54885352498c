pub mod config;
pub mod value_objects;
