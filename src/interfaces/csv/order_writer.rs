use crate::domain::order::{META_OPERATOR, META_SENDER_MSISDN, META_TRANSACTION_ID, Order};
use crate::error::Result;
use std::io::Write;

/// Writes annotated orders as CSV.
///
/// One row per order: id, status slug and the three mobile money metadata
/// fields (blank when the order was never annotated).
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(destination),
        }
    }

    pub fn write_orders(&mut self, orders: &[Order]) -> Result<()> {
        self.writer.write_record([
            "order_id",
            "status",
            "operator",
            "sender_msisdn",
            "transaction_id",
        ])?;

        for order in orders {
            self.writer.write_record([
                order.id.to_string().as_str(),
                order.status.to_string().as_str(),
                order.get_meta(META_OPERATOR).unwrap_or(""),
                order.get_meta(META_SENDER_MSISDN).unwrap_or(""),
                order.get_meta(META_TRANSACTION_ID).unwrap_or(""),
            ])?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
