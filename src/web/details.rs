//! The `/model/details` route.
//!
//! Looks a caller-supplied model identifier up in the upstream catalog
//! and answers either with the raw descriptor as JSON or with a
//! rendered details page, depending on the `type` query parameter.

use std::str::FromStr;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::catalog::{self, ModelDescriptor};
use crate::web::AppState;

/// The response formats the route can produce. Only an exact "html"
/// selects the rendered page; every other value means JSON.
#[derive(
    Default, Clone, Copy, PartialEq, Debug, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ResponseMode {
    Html,
    #[default]
    Json,
}

impl ResponseMode {
    fn resolve(requested: Option<&str>) -> ResponseMode {
        requested
            .and_then(|mode| ResponseMode::from_str(mode).ok())
            .unwrap_or_default()
    }
}

#[derive(Deserialize, Default)]
pub(crate) struct DetailsQuery {
    #[serde(rename = "type")]
    pub mode: Option<String>,
    pub model: Option<String>,
}

// Context handed to the page template.
#[derive(Serialize)]
struct DetailsContext<'q> {
    title: &'q str,
    model: Option<&'q ModelDescriptor>,
    parameters: Parameters<'q>,
}

#[derive(Serialize)]
struct Parameters<'q> {
    #[serde(rename = "type")]
    mode: Option<&'q str>,
    model: Option<&'q str>,
}

pub(crate) async fn model_details(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
) -> Response {
    let models = match state.catalog.models().await {
        Ok(models) => models,
        Err(err) => {
            error!("failed to fetch the model catalog: {}", err);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let matched = catalog::first_match(&models, query.model.as_deref());

    // Not an error: the response proceeds with a null model.
    if matched.is_none() {
        warn!("no model matches {:?}", query.model);
    }

    match ResponseMode::resolve(query.mode.as_deref()) {
        ResponseMode::Html => {
            let context = DetailsContext {
                title: &state.details.title,
                model: matched,
                parameters: Parameters {
                    mode: query.mode.as_deref(),
                    model: query.model.as_deref(),
                },
            };

            let context = match serde_json::to_value(&context) {
                Ok(context) => context,
                Err(err) => {
                    error!("failed to build the page context: {}", err);
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            };

            match state.renderer.render(&state.details.template, &context) {
                Ok(page) => Html(page).into_response(),
                Err(err) => {
                    error!("{}", err);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }
        ResponseMode::Json => Json(matched).into_response(),
    }
}
