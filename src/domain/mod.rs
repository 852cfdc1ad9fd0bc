pub mod operator;
pub mod order;
pub mod ports;
pub mod submission;
