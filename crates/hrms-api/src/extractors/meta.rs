//! Request metadata recorded with activity entries.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use hrms_core::types::RequestMeta;

/// Caller IP, User-Agent, method and URL of the current request.
#[derive(Debug, Clone)]
pub struct ClientMeta(pub RequestMeta);

impl<S: Send + Sync> FromRequestParts<S> for ClientMeta {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientMeta(request_meta(parts)))
    }
}

/// Collect request metadata from the request head.
///
/// The client IP is the first `X-Forwarded-For` hop, then `X-Real-IP`,
/// then the peer address of the connection.
pub fn request_meta(parts: &Parts) -> RequestMeta {
    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
    };

    let ip_address = header("x-forwarded-for")
        .and_then(|v| v.split(',').next().map(|ip| ip.trim().to_string()))
        .or_else(|| header("x-real-ip"))
        .or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        });

    RequestMeta {
        ip_address,
        user_agent: header("user-agent"),
        method: Some(parts.method.to_string()),
        url: Some(parts.uri.to_string()),
    }
}
