//! Types shared between the `ferrite` CLI and anything that consumes the
//! payloads it produces.

pub mod payload;

pub use payload::Payload;
