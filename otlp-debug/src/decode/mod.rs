//! Payload decoding
//!
//! Turns a raw request body into the owned [`ProfileExport`](crate::domain::ProfileExport)
//! tree:
//! - `wire`: protobuf decode and conversion out of the wire schema
//! - `encoding`: `Content-Encoding` handling (gzip) ahead of the protobuf decode

pub mod encoding;
pub mod wire;

pub use encoding::{decode_body, ContentEncoding};
pub use wire::decode;
