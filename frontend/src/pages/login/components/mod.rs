pub mod form;
pub mod identity;
