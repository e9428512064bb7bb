use crate::domain::pricing::PricingRequest;
use crate::error::Result;
use std::io::{BufReader, Read};

/// Reads a single pricing request from a JSON source.
///
/// Rule kinds are selected by their `type` field. Unknown kinds, missing fields and a
/// negative `originalPrice` are all reported as errors rather than reaching the engine.
pub struct RequestReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    pub fn read(self) -> Result<PricingRequest> {
        Ok(serde_json::from_reader(self.reader)?)
    }
}
