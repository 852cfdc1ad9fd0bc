use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a submissions CSV with the given (order_id, operator, msisdn,
/// transaction_id) rows.
pub fn write_submissions_csv(
    path: &Path,
    rows: &[(u64, &str, &str, &str)],
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["order_id", "operator", "sender_msisdn", "transaction_id"])?;
    for (order_id, operator, msisdn, tx_id) in rows {
        wtr.write_record([order_id.to_string().as_str(), operator, msisdn, tx_id])?;
    }

    wtr.flush()?;
    Ok(())
}
