//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (plain text, one exchange per connection)
//!
//! ### Request
//! ```text
//! name,email,phone,age\n
//! ```
//! A single UTF-8 line. No framing beyond the line terminator; the server
//! reads until it sees the terminator or the peer closes.
//!
//! ### Response
//! ```text
//! Ok\n
//! ```
//! on success, otherwise a single diagnostic line:
//! ```text
//! Error: <what was wrong>\n
//! ```
//! Validation diagnostics name the first failing field; a persistence
//! failure gets a diagnostic distinct from every validation diagnostic, so
//! the client can tell "bad data" apart from "server could not save good
//! data".

mod line;
mod reply;

pub use line::{read_reply, read_request, write_reply, write_request};
pub use reply::{Reply, OK_LINE, STORE_FAILURE_LINE};
