//! Data shapes returned by the API.
//!
//! Everything here is built fresh per request and serialized as JSON via
//! `serde`; nothing is persisted.

pub mod bucket;
pub mod envelope;
