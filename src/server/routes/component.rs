//! Localized component endpoint

use crate::core::generator::catalog;
use crate::core::generator::{LocalizedComponent, available_components, available_languages};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query parameters for the component endpoint
#[derive(Debug, Deserialize)]
pub struct ComponentQuery {
    /// Requested language; defaults to English
    pub lang: Option<String>,
}

/// Wire shape of a component response: the component plus whether it was
/// served from a cache tier
#[derive(Debug, Serialize)]
pub struct ComponentResponse {
    #[serde(flatten)]
    component: LocalizedComponent,
    cached: bool,
}

/// Localized component handler
///
/// Validates the language against the catalog, then resolves the component
/// through the tiered cache. Unknown component types surface as 404 with
/// the list of known types; distributed tier trouble never surfaces here.
pub async fn get_component(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ComponentQuery>,
) -> ActixResult<HttpResponse> {
    let component_type = path.into_inner();
    let lang = query.lang.as_deref().unwrap_or(catalog::FALLBACK_LANGUAGE);

    if !catalog::is_supported_language(lang) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("invalid language code: {}", lang),
            "available_languages": available_languages(),
        })));
    }

    debug!(%component_type, %lang, "component requested");

    match state.coordinator.get(&component_type, lang).await {
        Ok((component, status)) => Ok(HttpResponse::Ok().json(ComponentResponse {
            component,
            cached: status.is_cached(),
        })),
        Err(GatewayError::NotFound(message)) => {
            Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": message,
                "message": "Component type not found",
                "available_components": available_components(),
            })))
        }
        Err(e) => Err(e.into()),
    }
}
