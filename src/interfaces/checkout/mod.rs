pub mod form;
pub mod script_data;
