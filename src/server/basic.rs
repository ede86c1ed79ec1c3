//! HTTP Basic authentication middleware.
//!
//! Installed only when the server is configured with a credential store;
//! an unconfigured server carries no authentication layer at all. Every
//! rejection carries a `WWW-Authenticate: Basic` challenge with a realm
//! that is stable across requests.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{header, HeaderValue, StatusCode};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use tracing::{debug, warn};

use crate::auth::CredentialStore;

/// Challenge sent with every 401.
pub const WWW_AUTHENTICATE_VALUE: &str = r#"Basic realm="srvdir""#;

/// Gate a request on valid Basic credentials.
///
/// The bcrypt comparison is deliberately slow, so it runs on the
/// blocking pool rather than on the async worker.
pub async fn require_basic_auth(
    State(store): State<Arc<CredentialStore>>,
    credentials: Option<TypedHeader<Authorization<Basic>>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(TypedHeader(credentials)) = credentials else {
        debug!("request without credentials");
        return unauthorized();
    };

    let username = credentials.username().to_string();
    let password = credentials.password().to_string();
    let verified = tokio::task::spawn_blocking({
        let store = Arc::clone(&store);
        move || store.verify(&username, &password)
    })
    .await
    .unwrap_or(false);

    if verified {
        next.run(request).await
    } else {
        warn!(username = credentials.username(), "authentication failed");
        unauthorized()
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(
            header::WWW_AUTHENTICATE,
            HeaderValue::from_static(WWW_AUTHENTICATE_VALUE),
        )],
        "Unauthorized",
    )
        .into_response()
}
