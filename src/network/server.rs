//! TCP Listener
//!
//! Binds the ingestion port, accepts connections, and dispatches each one to
//! a [`Connection`] handler on its own thread. The accept loop is the only
//! sequential driver and never blocks on a connection's I/O.

use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

use super::Connection;

/// TCP ingestion server
pub struct Server {
    config: Config,
    store: Arc<Store>,
    listener: TcpListener,
    shutdown: Arc<AtomicBool>,
}

/// Handle for requesting the accept loop to stop
///
/// The flag is observed at the next accept wakeup; in-flight connections run
/// to completion on their own threads.
#[derive(Clone)]
pub struct ShutdownHandle(Arc<AtomicBool>);

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl Server {
    /// Bind the configured listen address
    pub fn bind(config: Config, store: Arc<Store>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)?;

        Ok(Self {
            config,
            store,
            listener,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The address the server actually bound (resolves port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Get a handle that can stop the accept loop from another thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.shutdown))
    }

    /// Run the accept loop (blocking)
    ///
    /// Each accepted connection gets its own handler thread. Accept errors
    /// are logged and the loop continues: one bad connection never takes the
    /// service down.
    pub fn run(&self) -> Result<()> {
        tracing::info!("Listening on {}", self.listener.local_addr()?);

        for stream in self.listener.incoming() {
            if self.shutdown.load(Ordering::Relaxed) {
                break;
            }

            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!("Failed to accept connection: {}", e);
                    continue;
                }
            };

            let store = Arc::clone(&self.store);
            let read_timeout_ms = self.config.read_timeout_ms;
            let write_timeout_ms = self.config.write_timeout_ms;

            thread::spawn(move || {
                let mut connection = match Connection::new(stream, store) {
                    Ok(connection) => connection,
                    Err(e) => {
                        tracing::warn!("Failed to set up connection: {}", e);
                        return;
                    }
                };

                if let Err(e) = connection.set_timeouts(read_timeout_ms, write_timeout_ms) {
                    tracing::warn!(
                        "Failed to configure timeouts for {}: {}",
                        connection.peer_addr(),
                        e
                    );
                    return;
                }

                // Transport errors were already logged inside the handler
                let _ = connection.handle();
            });
        }

        tracing::info!("Listener stopped");
        Ok(())
    }
}
