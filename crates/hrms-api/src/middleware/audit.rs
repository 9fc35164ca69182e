//! Audit interceptor: records activity for successful mutating requests.
//!
//! Handlers on an audited router return [`Audited`], which renders the
//! usual `ApiResponse` body and attaches an [`AuditOutcome`] carrying the
//! before/after images to the response. After the handler runs,
//! [`audit_interceptor`] maps the HTTP method to an action and hands the
//! entry to the [`ActivityRecorder`] on a background task.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRequestParts, RawPathParams, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use hrms_auth::JwtDecoder;
use hrms_core::types::AuditAction;
use hrms_service::{ActivityEvent, ActivityRecorder};

use crate::dto::response::ApiResponse;
use crate::extractors::auth::authenticate;
use crate::extractors::meta::request_meta;

/// Before/after images a handler attaches to its response.
#[derive(Debug, Clone, Default)]
pub struct AuditOutcome {
    /// Record state before the change.
    pub previous: Option<Value>,
    /// Record state after the change (the response payload).
    pub current: Option<Value>,
}

/// Handler result for audited routes.
#[derive(Debug, Clone)]
pub struct Audited<T> {
    status: StatusCode,
    message: Option<String>,
    data: T,
    previous: Option<Value>,
}

impl<T: Serialize> Audited<T> {
    /// `200 OK` with `data` as the payload.
    pub fn new(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: None,
            data,
            previous: None,
        }
    }

    /// `201 Created` with `data` as the payload.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            ..Self::new(data)
        }
    }

    /// Attach the state before the change.
    pub fn previous<P: Serialize>(mut self, before: &P) -> Self {
        self.previous = serde_json::to_value(before).ok();
        self
    }

    /// Attach a response message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> IntoResponse for Audited<T> {
    fn into_response(self) -> Response {
        let current = serde_json::to_value(&self.data).ok();
        let body = ApiResponse {
            success: true,
            message: self.message,
            data: self.data,
        };
        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(AuditOutcome {
            previous: self.previous,
            current,
        });
        response
    }
}

/// Middleware state: the module name recorded for one group of routes.
#[derive(Debug, Clone)]
pub struct AuditScope {
    module: &'static str,
    recorder: ActivityRecorder,
    decoder: Arc<JwtDecoder>,
}

impl AuditScope {
    /// Bind the interceptor to `module`.
    pub fn new(module: &'static str, recorder: ActivityRecorder, decoder: Arc<JwtDecoder>) -> Self {
        Self {
            module,
            recorder,
            decoder,
        }
    }
}

/// Record CREATE/UPDATE/DELETE activity after a successful handler.
///
/// Must be installed with `route_layer` so the `id` path parameter is
/// visible. Only 2xx responses to POST, PUT, PATCH and DELETE from an
/// authenticated caller are recorded. DELETE entries carry no `new_values`.
pub async fn audit_interceptor(
    State(scope): State<AuditScope>,
    request: Request,
    next: Next,
) -> Response {
    let Some(action) = AuditAction::from_method(request.method().as_str()) else {
        return next.run(request).await;
    };

    let (mut parts, body) = request.into_parts();
    let route_id = RawPathParams::from_request_parts(&mut parts, &())
        .await
        .ok()
        .and_then(|params| {
            params
                .iter()
                .find(|(key, _)| *key == "id")
                .map(|(_, value)| value.to_string())
        });
    let actor_id = authenticate(&parts.headers, &scope.decoder)
        .ok()
        .map(|claims| claims.user_id());
    let meta = request_meta(&parts);

    let response = next.run(Request::from_parts(parts, body)).await;

    if !response.status().is_success() {
        return response;
    }
    let Some(actor_id) = actor_id else {
        debug!(module = scope.module, "Skipping audit for unauthenticated request");
        return response;
    };

    let outcome = response
        .extensions()
        .get::<AuditOutcome>()
        .cloned()
        .unwrap_or_default();
    let new_values = match action {
        AuditAction::Delete => None,
        _ => outcome.current,
    };

    let mut event = ActivityEvent::new(actor_id, scope.module, action)
        .old_values(outcome.previous)
        .new_values(new_values)
        .request(meta);
    if let Some(id) = route_id {
        event = event.record_id(id);
    }
    scope.recorder.spawn_record(event);

    response
}
