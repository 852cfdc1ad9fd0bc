pub mod order_writer;
pub mod submission_reader;
