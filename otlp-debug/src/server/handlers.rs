//! Request handlers for the debug endpoint

use crate::analysis::build_report;
use crate::decode::{decode_body, ContentEncoding};
use crate::domain::IngestError;
use crate::server::sink::frame_report;
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use log::{debug, error, warn};

pub const ACK_BODY: &str = "Debug complete - check logs";

/// `POST /v1/profiles`: decode the export, emit its report, acknowledge.
///
/// Decoding and rendering run on the blocking pool; a large export would
/// otherwise stall the worker serving other requests.
pub async fn ingest_profiles(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    debug!("Received {} byte profiles export", body.len());

    let encoding = match content_encoding(&headers) {
        Ok(encoding) => encoding,
        Err(e) => return reject(&e),
    };

    let max_inflated = state.max_body_bytes;
    let rendered = tokio::task::spawn_blocking(move || {
        decode_body(&body, encoding, max_inflated).map(|export| build_report(&export))
    })
    .await;

    let report = match rendered {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => return reject(&e),
        Err(e) => {
            error!("Report task failed: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response();
        }
    };

    state.sink.emit(&frame_report(&report, chrono::Local::now()));

    if state.echo_report {
        (StatusCode::OK, report).into_response()
    } else {
        (StatusCode::OK, ACK_BODY).into_response()
    }
}

/// Any other method on `/v1/profiles`
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Only POST allowed")
}

/// `/health`: liveness only, the endpoint holds no state worth checking
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

fn content_encoding(headers: &HeaderMap) -> Result<ContentEncoding, IngestError> {
    match headers.get(header::CONTENT_ENCODING) {
        None => Ok(ContentEncoding::Identity),
        Some(value) => value
            .to_str()
            .map_err(|_| IngestError::UnsupportedEncoding(format!("{value:?}")))?
            .parse(),
    }
}

/// Map an input failure to its client-facing response
fn reject(err: &IngestError) -> Response {
    warn!("Rejected profiles export: {err}");
    match err {
        IngestError::Decode(_) | IngestError::Decompress(_) => {
            (StatusCode::BAD_REQUEST, "Failed to unmarshal OTLP").into_response()
        }
        IngestError::UnsupportedEncoding(_) => {
            (StatusCode::UNSUPPORTED_MEDIA_TYPE, err.to_string()).into_response()
        }
        IngestError::InflatedTooLarge { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, err.to_string()).into_response()
        }
    }
}
