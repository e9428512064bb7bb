use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a request document to a temporary file that lives as long as the handle.
pub fn request_file(json: &str) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}
