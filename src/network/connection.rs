//! Connection Handler
//!
//! Handles a single client connection: read one message, validate, append,
//! reply, close. The handler recovers validation and store failures into a
//! reply line; only transport errors propagate to the caller, and the
//! listener logs those without terminating.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{IngestError, Result};
use crate::protocol::{read_request, write_reply, Reply};
use crate::record::Record;
use crate::store::Store;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Shared handle to the append-only store
    store: Arc<Store>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// Sets up buffered I/O over split read/write handles.
    pub fn new(stream: TcpStream, store: Arc<Store>) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            store,
            peer_addr,
        })
    }

    /// Configure connection timeouts
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let read_stream = self.reader.get_ref();
        let write_stream = self.writer.get_ref();

        if read_ms > 0 {
            read_stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            write_stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Runs the per-connection state machine: await message, validate,
    /// persist, reply. Exactly one reply line is written before teardown.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        // Await the one request line
        let raw = match read_request(&mut self.reader) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                // Peer closed before sending a complete message: no reply
                tracing::debug!("Client {} disconnected before sending", self.peer_addr);
                return Ok(());
            }
            Err(IngestError::Io(ref e)) if is_disconnect(e.kind()) => {
                tracing::debug!("Connection lost to client {}: {}", self.peer_addr, e);
                return Ok(());
            }
            Err(IngestError::Io(ref e)) if is_timeout(e.kind()) => {
                tracing::debug!("Read timeout for client {}", self.peer_addr);
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                return Err(e);
            }
        };

        tracing::trace!("Received message from {}: {:?}", self.peer_addr, raw);

        // Validate, then persist; an empty line is a rejection, not a close
        let reply = self.process_message(&raw);

        // Send the one reply line, then close
        if let Err(e) = write_reply(&mut self.writer, &reply) {
            if let IngestError::Io(ref io_err) = e {
                if is_disconnect(io_err.kind()) {
                    tracing::debug!(
                        "Client {} disconnected before reply could be sent: {}",
                        self.peer_addr,
                        e
                    );
                    return Ok(());
                }
            }
            tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
            return Err(e);
        }

        tracing::debug!("Replied {:?} to {}", reply.to_string(), self.peer_addr);
        Ok(())
    }

    /// Validate one message and append it on success
    fn process_message(&self, raw: &str) -> Reply {
        let record = match Record::parse(raw) {
            Ok(record) => record,
            Err(rejection) => {
                tracing::debug!("Rejected message from {}: {}", self.peer_addr, rejection);
                return Reply::Rejected(rejection);
            }
        };

        match self.store.append(&record) {
            Ok(()) => Reply::Ok,
            Err(e) => {
                // Valid data the server could not save: distinct diagnostic
                tracing::error!("Failed to persist record from {}: {}", self.peer_addr, e);
                Reply::StoreFailure
            }
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

fn is_disconnect(kind: std::io::ErrorKind) -> bool {
    matches!(
        kind,
        std::io::ErrorKind::UnexpectedEof
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::BrokenPipe
    )
}

fn is_timeout(kind: std::io::ErrorKind) -> bool {
    // Unix reports read timeouts as WouldBlock, Windows as TimedOut
    matches!(
        kind,
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
    )
}
