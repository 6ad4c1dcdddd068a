use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::SimulationRequest;
use super::guidance::AdvisoryGenerator;
use super::service::{AffordabilityService, SimulationError};

/// Router builder exposing the simulation endpoint.
pub fn affordability_router<A>(service: Arc<AffordabilityService<A>>) -> Router
where
    A: AdvisoryGenerator + 'static,
{
    Router::new()
        .route("/api/v1/simulate", post(simulate_handler::<A>))
        .with_state(service)
}

pub(crate) async fn simulate_handler<A>(
    State(service): State<Arc<AffordabilityService<A>>>,
    axum::Json(request): axum::Json<SimulationRequest>,
) -> Response
where
    A: AdvisoryGenerator + 'static,
{
    match service.simulate(request).await {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(SimulationError::Validation(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
                "field": violation.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
