//! Writing rendered dice to an output stream

use std::io::{self, Write};

/// Write a composed buffer in a single operation and flush it.
///
/// # Arguments
///
/// * `writer` - Destination, usually a locked stdout
/// * `buffer` - Output of [`crate::renderer::compose`]
pub fn emit<W: Write>(writer: &mut W, buffer: &[u8]) -> io::Result<()> {
    writer.write_all(buffer)?;
    writer.flush()?;
    log::debug!("wrote {} bytes", buffer.len());
    Ok(())
}
