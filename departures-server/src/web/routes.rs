//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::pipeline::AggregateError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/next", get(next_departures))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Upcoming departures near an address, as JSON.
async fn next_departures(
    State(state): State<AppState>,
    req: Result<Query<NextQuery>, QueryRejection>,
) -> Result<Json<NextResponse>, AppError> {
    let Query(req) = req?;
    let query = req.to_query(state.aggregator.config());
    let result = state.aggregator.aggregate(&query).await?;
    Ok(Json(NextResponse::from(&result)))
}

/// Index page: form plus the departures for the requested (or default)
/// address.
async fn index_page(
    State(state): State<AppState>,
    req: Result<Query<NextQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let (req, rejected) = match req {
        Ok(Query(req)) => (req, None),
        Err(rejection) => (NextQuery::default(), Some(AppError::from(rejection))),
    };
    let query = req.to_query(state.aggregator.config());

    let mut template = IndexTemplate {
        address: query.address.clone(),
        radius: query.radius_meters,
        address_used: None,
        rows: Vec::new(),
        error: None,
    };

    let outcome = match rejected {
        Some(err) => Err(err),
        None => state.aggregator.aggregate(&query).await.map_err(AppError::from),
    };

    let status = match outcome {
        Ok(result) => {
            let now = Utc::now();
            template.address_used = Some(result.address_label);
            template.rows = result
                .results
                .iter()
                .map(|r| DepartureView::from_row(r, now))
                .collect();
            StatusCode::OK
        }
        Err(err) => {
            let status = err.status();
            err.log();
            template.error = Some(err.message().to_string());
            status
        }
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok((status, Html(html)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        }
    }

    fn log(&self) {
        match self {
            AppError::BadRequest { message } => warn!(status = 400, "{message}"),
            AppError::NotFound { message } => warn!(status = 404, "{message}"),
            AppError::Internal { message } => error!(status = 500, "{message}"),
        }
    }
}

impl From<AggregateError> for AppError {
    fn from(e: AggregateError) -> Self {
        if e.is_not_found() {
            AppError::NotFound {
                message: e.to_string(),
            }
        } else {
            AppError::Internal {
                message: e.to_string(),
            }
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}
