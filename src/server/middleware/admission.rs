//! Admission gate middleware
//!
//! Wraps the component API with the fixed-capacity admission gate. A
//! request that cannot take a permit is rejected immediately with HTTP 503
//! and the distinct `capacity_exceeded` error code; nothing is queued.

use crate::core::admission::AdmissionGate;
use crate::utils::error::GatewayError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::ResponseError;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Admission middleware for Actix-web
pub struct AdmissionMiddleware {
    gate: AdmissionGate,
}

impl AdmissionMiddleware {
    /// Create middleware over the given gate
    pub fn new(gate: AdmissionGate) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdmissionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AdmissionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdmissionMiddlewareService {
            service,
            gate: self.gate.clone(),
        }))
    }
}

/// Service implementation for the admission middleware
pub struct AdmissionMiddlewareService<S> {
    service: S,
    gate: AdmissionGate,
}

impl<S, B> Service<ServiceRequest> for AdmissionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.gate.try_acquire() {
            Some(permit) => {
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await;
                    // Permit held across the whole guarded operation and
                    // returned exactly once on every exit path.
                    drop(permit);
                    res.map(ServiceResponse::map_into_left_body)
                })
            }
            None => {
                debug!(path = req.path(), "admission gate saturated, shedding request");
                let rejection = GatewayError::capacity_exceeded(
                    "server is at capacity, please try again later",
                )
                .error_response();
                Box::pin(ready(Ok(req.into_response(rejection).map_into_right_body())))
            }
        }
    }
}
