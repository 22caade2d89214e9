//! Store Module
//!
//! Process-wide, append-only collection of serialized records backed by a
//! text file.
//!
//! ## Responsibilities
//! - Exclusive-append discipline: one mutex serializes all writers
//! - Flush on every write (an accepted record is durable before the reply)
//! - Quiescent snapshot reads for the report collaborator
//!
//! ## File Format
//! ```text
//! name,email,phone,age\n
//! name,email,phone,age\n
//! ...
//! ```
//! One record per line in canonical field order. Readers tolerate trailing
//! blank lines and assume no maximum line count. There is no in-place update
//! or delete; re-ingesting a phone number appends another entry.

mod appender;
mod reader;

pub use appender::Store;
pub use reader::most_recent_by_phone;
