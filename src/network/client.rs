//! Client Emitter
//!
//! Reference counterpart to the server: opens one connection, sends one
//! formatted message, blocks for exactly one reply line, and surfaces the
//! reply text (or a connection-level failure) to the caller.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;
use std::time::Duration;

use crate::error::{IngestError, Result};
use crate::protocol::{read_reply, write_request};

/// One-shot TCP client for the ingestion protocol
#[derive(Debug, Clone)]
pub struct Client {
    addr: String,
    read_timeout_ms: u64,
    write_timeout_ms: u64,
}

impl Client {
    /// Create a client targeting the given server address
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
        }
    }

    /// Override the per-exchange timeouts (milliseconds, 0 disables)
    pub fn with_timeouts(mut self, read_ms: u64, write_ms: u64) -> Self {
        self.read_timeout_ms = read_ms;
        self.write_timeout_ms = write_ms;
        self
    }

    /// Send one message and return the server's reply line
    ///
    /// Opens a fresh connection, performs the single request/response
    /// exchange, and closes. The reply is returned verbatim ("Ok" or a
    /// diagnostic line); connection-level failures surface as errors.
    pub fn send(&self, message: &str) -> Result<String> {
        let stream = TcpStream::connect(&self.addr).map_err(|e| {
            IngestError::Network(format!("cannot connect to {}: {}", self.addr, e))
        })?;

        stream.set_nodelay(true)?;
        if self.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(self.read_timeout_ms)))?;
        }
        if self.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(self.write_timeout_ms)))?;
        }

        let mut writer = BufWriter::new(stream.try_clone()?);
        write_request(&mut writer, message)?;

        let mut reader = BufReader::new(stream);
        read_reply(&mut reader)
    }

    /// The target server address
    pub fn addr(&self) -> &str {
        &self.addr
    }
}
