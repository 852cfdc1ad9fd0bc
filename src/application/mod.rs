pub mod gateway;
pub mod settings;
