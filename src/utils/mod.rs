pub mod form;
pub mod time;
pub mod validation;
