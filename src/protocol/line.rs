//! Line codec
//!
//! Stream I/O helpers for the one-line-each-way protocol. Requests and
//! replies are `\n`-terminated UTF-8; a trailing `\r` is tolerated on input.

use std::io::{BufRead, Write};

use crate::error::{IngestError, Result};

use super::Reply;

/// Read the peer's one request line
///
/// Blocks until a complete line arrives or the peer closes. Returns
/// `Ok(None)` when the peer closes before sending anything (silent
/// abandonment); a line that is present but empty is returned as an empty
/// string so the caller can reject it rather than treat it as a disconnect.
pub fn read_request<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf)?;
    if n == 0 {
        return Ok(None);
    }

    strip_terminator(&mut buf);
    let line = String::from_utf8(buf)
        .map_err(|_| IngestError::Network("request is not valid UTF-8".to_string()))?;

    Ok(Some(line))
}

/// Write one request line
pub fn write_request<W: Write>(writer: &mut W, message: &str) -> Result<()> {
    writer.write_all(message.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read the server's one reply line
///
/// A peer that closes before replying is a transport failure, not a reply.
pub fn read_reply<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf)?;
    if n == 0 {
        return Err(IngestError::Network(
            "connection closed before a reply arrived".to_string(),
        ));
    }

    strip_terminator(&mut buf);
    String::from_utf8(buf)
        .map_err(|_| IngestError::Network("reply is not valid UTF-8".to_string()))
}

/// Write one reply line
pub fn write_reply<W: Write>(writer: &mut W, reply: &Reply) -> Result<()> {
    writer.write_all(reply.to_string().as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}
