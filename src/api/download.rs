//! CSV file download responses.

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};

use crate::domain::CsvExport;

/// Serves a [`CsvExport`] as a browser download.
#[derive(Debug)]
pub struct CsvDownload(pub CsvExport);

impl IntoResponse for CsvDownload {
    fn into_response(self) -> Response {
        let disposition = HeaderValue::from_str(&content_disposition(&self.0.filename))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
        (
            [
                (CONTENT_TYPE, HeaderValue::from_static("text/csv; charset=utf-8")),
                (CONTENT_DISPOSITION, disposition),
            ],
            self.0.content,
        )
            .into_response()
    }
}

/// `attachment` disposition with an ASCII `filename` fallback and the exact
/// name in RFC 5987 `filename*` form.
fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let encoded = urlencoding::encode(filename);
    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}
