//! Error types and error handling for the lexical front end.
//!
//! Every failure carries the position it was detected at, so the driver can
//! point at the offending line of the sanitized source.

pub mod errors;
