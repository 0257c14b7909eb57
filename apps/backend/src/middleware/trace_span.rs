//! Per-request `request` span.
//!
//! Carries `trace_id`, `method`, `path` and the Basic auth `player` (or `-`),
//! so service logs such as `guess_recorded` can be tied back to a caller.
//! Must sit inside `RequestTrace`, which stores the trace id it reads.

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use tracing::{info_span, Instrument};

use crate::extractors::current_user::basic_username;
use crate::middleware::request_trace::trace_id_of;

const ANONYMOUS: &str = "-";

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let player = basic_username(req.headers()).unwrap_or_else(|| ANONYMOUS.to_string());

        let span = info_span!(
            "request",
            trace_id = %trace_id_of(&req),
            method = %req.method(),
            path = %req.path(),
            player = %player,
        );

        Box::pin(self.service.call(req).instrument(span))
    }
}
