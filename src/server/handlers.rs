//! Request handling: the per-request dispatch from URL path to a
//! redirect, a rendered listing, or a streamed file.
//!
//! Every request terminates in exactly one of 200, 301, 401, 403, 404
//! or 500. The 401 outcome lives in the auth middleware; everything
//! else is decided here.

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use http::{header, HeaderValue, StatusCode, Uri};
use tokio_util::io::ReaderStream;
use tracing::{debug, error, warn};

use crate::error::RequestError;
use crate::fs::{list_directory, resolve, ListingResult};

use super::views::render_listing;

// =============================================================================
// Application State
// =============================================================================

/// Read-only per-process state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

struct StateInner {
    /// Absolute, canonicalized served root. The security boundary for
    /// every request.
    root: PathBuf,

    /// Theme name forwarded to listings.
    theme: String,
}

impl AppState {
    /// Create state for a served root. `root` must already be absolute
    /// and canonicalized.
    pub fn new(root: PathBuf, theme: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(StateInner {
                root,
                theme: theme.into(),
            }),
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.inner.root
    }

    pub fn theme(&self) -> &str {
        &self.inner.theme
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Fallback handler serving the whole path space under the root.
pub async fn serve_request(State(state): State<AppState>, uri: Uri) -> Response {
    let raw_path = uri.path();
    let request_path = percent_decode(raw_path);

    let resolved = match resolve(state.root(), &request_path) {
        Ok(resolved) => resolved,
        Err(err) => return err.into_response(),
    };

    let metadata = match tokio::fs::metadata(&resolved.fs_path).await {
        Ok(metadata) => metadata,
        Err(err) => return RequestError::from(err).into_response(),
    };

    if metadata.is_dir() {
        // Directory URLs must end with a separator so relative links in
        // the listing resolve correctly.
        if !raw_path.ends_with('/') {
            return redirect_with_slash(raw_path);
        }
        serve_directory(&state, resolved.fs_path, &resolved.url_path).await
    } else {
        serve_file(resolved.fs_path, metadata.len()).await
    }
}

/// 301 to the same path with a trailing separator appended.
fn redirect_with_slash(raw_path: &str) -> Response {
    let location = format!("{raw_path}/");
    match HeaderValue::from_str(&location) {
        Ok(value) => (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, value)],
        )
            .into_response(),
        Err(_) => RequestError::Internal("invalid redirect location".to_string()).into_response(),
    }
}

/// Build, render, and return a directory listing.
async fn serve_directory(state: &AppState, dir: PathBuf, url_path: &str) -> Response {
    let url_path = url_path.to_string();
    let theme = state.theme().to_string();

    // Directory reads and per-entry stats are blocking filesystem work.
    let listing: Result<ListingResult, RequestError> =
        tokio::task::spawn_blocking(move || list_directory(&dir, &url_path, &theme))
            .await
            .unwrap_or_else(|e| Err(RequestError::Internal(e.to_string())));

    match listing {
        Ok(listing) => Html(render_listing(&listing)).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Stream a file with a mime-guessed content type.
async fn serve_file(path: PathBuf, len: u64) -> Response {
    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(err) => return RequestError::from(err).into_response(),
    };

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    let body = Body::from_stream(ReaderStream::new(file));

    let mut response = body.into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(content_type.as_ref())
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    response
        .headers_mut()
        .insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    response
}

/// Percent-decode a request path, falling back to the raw path when the
/// decoded bytes are not valid UTF-8.
fn percent_decode(path: &str) -> Cow<'_, str> {
    urlencoding::decode(path).unwrap_or(Cow::Borrowed(path))
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Map request errors to HTTP responses with minimal plain-text bodies.
/// Internal details are logged, never sent to the client.
impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RequestError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            RequestError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            RequestError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        match &self {
            RequestError::Forbidden => warn!(status = status.as_u16(), "{}", self),
            RequestError::NotFound => debug!(status = status.as_u16(), "{}", self),
            RequestError::Internal(_) => error!(status = status.as_u16(), "{}", self),
        }

        (status, body).into_response()
    }
}
