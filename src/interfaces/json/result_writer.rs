use crate::domain::pricing::PricingResult;
use crate::error::Result;
use std::io::Write;

/// Writes a pricing result as JSON, followed by a newline.
pub struct ResultWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> ResultWriter<W> {
    /// Creates a writer that emits indented JSON.
    pub fn new(sink: W) -> Self {
        Self {
            writer: sink,
            pretty: true,
        }
    }

    /// Switches between indented and single-line output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write(&mut self, result: &PricingResult) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, result)?;
        } else {
            serde_json::to_writer(&mut self.writer, result)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
