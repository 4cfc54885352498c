pub mod catalog_check;
pub mod cross_validator;
