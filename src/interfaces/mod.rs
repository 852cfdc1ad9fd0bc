pub mod checkout;
pub mod csv;
