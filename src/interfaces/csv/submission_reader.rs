use crate::domain::submission::Submission;
use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::io::Read;

/// A checkout submission row tied to the order it pays for.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct SubmissionRecord {
    pub order_id: u64,
    pub operator: String,
    pub sender_msisdn: String,
    pub transaction_id: String,
}

impl SubmissionRecord {
    pub fn into_submission(self) -> (u64, Submission) {
        (
            self.order_id,
            Submission {
                operator: self.operator,
                sender_msisdn: self.sender_msisdn,
                transaction_id: self.transaction_id,
            },
        )
    }
}

/// Reads checkout submissions from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<SubmissionRecord>`,
/// trimming whitespace and tolerating flexible record lengths.
pub struct SubmissionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SubmissionReader<R> {
    /// Creates a new `SubmissionReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes submissions.
    pub fn submissions(self) -> impl Iterator<Item = Result<SubmissionRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(GatewayError::from))
    }
}
