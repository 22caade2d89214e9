//! Record Module
//!
//! The unit of ingestion: one customer submission with four fields in fixed
//! order (name, email, phone, age). A record is either fully valid or the
//! whole message is rejected; there is no partial persistence.
//!
//! ## Canonical line format
//! ```text
//! name,email,phone,age
//! ```
//! This is both the wire request format and the store file format.

mod validator;

pub use validator::{Record, Rejection, PHONE_DIGITS, MAX_AGE};
