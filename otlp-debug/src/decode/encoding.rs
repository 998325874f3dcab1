//! Request body content encodings
//!
//! OTLP/HTTP exporters may compress the body with gzip and announce it through
//! `Content-Encoding`. Only `identity` and `gzip` are accepted.

use crate::decode::wire::decode;
use crate::domain::{IngestError, ProfileExport};
use flate2::read::GzDecoder;
use std::borrow::Cow;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentEncoding {
    #[default]
    Identity,
    Gzip,
}

impl ContentEncoding {
    /// Parse an optional `Content-Encoding` header value; absent means identity
    ///
    /// # Errors
    /// Returns [`IngestError::UnsupportedEncoding`] for anything but identity or gzip
    pub fn from_header(value: Option<&str>) -> Result<Self, IngestError> {
        value.map_or(Ok(Self::Identity), str::parse)
    }
}

impl FromStr for ContentEncoding {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "identity" => Ok(Self::Identity),
            "gzip" | "x-gzip" => Ok(Self::Gzip),
            other => Err(IngestError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// Inflate (if needed) and decode a request body.
///
/// `max_inflated` bounds the decompressed size so a small gzip body cannot
/// expand past the limit the transport applies to raw bodies.
///
/// # Errors
/// Returns an [`IngestError`] when decompression fails, the inflated body
/// exceeds `max_inflated`, or the payload does not decode.
pub fn decode_body(
    body: &[u8],
    encoding: ContentEncoding,
    max_inflated: usize,
) -> Result<ProfileExport, IngestError> {
    let payload = match encoding {
        ContentEncoding::Identity => Cow::Borrowed(body),
        ContentEncoding::Gzip => Cow::Owned(inflate(body, max_inflated)?),
    };
    Ok(decode(&payload)?)
}

fn inflate(body: &[u8], max_inflated: usize) -> Result<Vec<u8>, IngestError> {
    let limit = u64::try_from(max_inflated).unwrap_or(u64::MAX).saturating_add(1);
    let mut inflated = Vec::new();
    GzDecoder::new(body).take(limit).read_to_end(&mut inflated).map_err(IngestError::Decompress)?;

    if inflated.len() > max_inflated {
        return Err(IngestError::InflatedTooLarge { limit: max_inflated });
    }
    Ok(inflated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use otlp_debug_common::proto;
    use prost::Message;
    use std::io::Write;

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    fn one_resource() -> Vec<u8> {
        proto::ExportProfilesServiceRequest {
            resource_profiles: vec![proto::ResourceProfiles::default()],
        }
        .encode_to_vec()
    }

    #[test]
    fn test_content_encoding_parsing() {
        assert_eq!(ContentEncoding::from_header(None).unwrap(), ContentEncoding::Identity);
        assert_eq!(ContentEncoding::from_header(Some("GZIP")).unwrap(), ContentEncoding::Gzip);
        assert_eq!(ContentEncoding::from_header(Some("identity")).unwrap(), ContentEncoding::Identity);
        assert!(matches!(
            ContentEncoding::from_header(Some("br")),
            Err(IngestError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_decode_gzip_body() {
        let body = gzip(&one_resource());
        let export = decode_body(&body, ContentEncoding::Gzip, 1024).expect("gzip body decodes");
        assert_eq!(export.resource_profiles.len(), 1);
    }

    #[test]
    fn test_gzip_garbage_is_decompress_error() {
        let result = decode_body(b"not gzip at all", ContentEncoding::Gzip, 1024);
        assert!(matches!(result, Err(IngestError::Decompress(_))));
    }

    #[test]
    fn test_inflated_size_is_bounded() {
        let body = gzip(&vec![0u8; 4096]);
        let result = decode_body(&body, ContentEncoding::Gzip, 1024);
        assert!(matches!(result, Err(IngestError::InflatedTooLarge { limit: 1024 })));
    }

    #[test]
    fn test_identity_body_decode_error() {
        let result = decode_body(&[0x0a, 0x05, 0x01], ContentEncoding::Identity, 1024);
        assert!(matches!(result, Err(IngestError::Decode(_))));
    }
}
