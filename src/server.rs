//! HTTP surface of the site: page models, contact validation and submission,
//! and locale switching.

use crate::config::Config;
use crate::contact::{
    ContactFormData, ContactSchema, ContactTransport, SiteTransport, TransportError,
    ValidationOutcome,
};
use crate::i18n::{detect_locale, switch_locale_path, Language};
use crate::pages::{contact_page, home_page, not_found_page};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transport: Arc<SiteTransport>,
}

impl AppState {
    pub fn new(config: Config, transport: SiteTransport) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/switch-locale", get(switch_locale))
        .route("/:locale", get(home))
        .route("/:locale/contacto", get(contact).post(submit_contact))
        .route("/:locale/contacto/validate", post(validate_contact))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Failures a handler turns into an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no page at this path")]
    NotFound(Language),
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("path cannot be used as a redirect target")]
    InvalidRedirect,
    #[error("contact form has invalid fields")]
    InvalidForm(ValidationOutcome),
    #[error("contact delivery failed: {source}")]
    Delivery {
        language: Language,
        #[source]
        source: TransportError,
    },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    valid: bool,
    errors: &'a ValidationOutcome,
}

#[derive(Serialize)]
struct SubmitBody<'a> {
    status: &'a str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(language) => {
                (StatusCode::NOT_FOUND, Json(not_found_page(language))).into_response()
            }
            ApiError::UnsupportedLocale(code) => {
                let detail = format!("unsupported locale: {}", code);
                (StatusCode::BAD_REQUEST, Json(ErrorBody { detail: &detail })).into_response()
            }
            ApiError::InvalidRedirect => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    detail: "path cannot be used as a redirect target",
                }),
            )
                .into_response(),
            ApiError::InvalidForm(outcome) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    valid: false,
                    errors: &outcome,
                }),
            )
                .into_response(),
            ApiError::Delivery { language, source } => {
                error!("Contact delivery failed: {}", source);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(SubmitBody {
                        status: "error",
                        message: language.strings().error_message,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Locale named by the first path segment, or a 404 localized from the path.
fn path_locale(code: &str) -> Result<Language, ApiError> {
    Language::from_code(code).map_err(|_| ApiError::NotFound(detect_locale(&format!("/{}", code))))
}

async fn health() -> &'static str {
    "ok"
}

async fn root(State(state): State<AppState>) -> Redirect {
    Redirect::to(&format!("/{}", state.config.default_locale))
}

async fn home(Path(locale): Path<String>) -> Result<Response, ApiError> {
    let language = path_locale(&locale)?;
    Ok(Json(home_page(language)).into_response())
}

async fn contact(Path(locale): Path<String>) -> Result<Response, ApiError> {
    let language = path_locale(&locale)?;
    Ok(Json(contact_page(language)).into_response())
}

async fn validate_contact(
    Path(locale): Path<String>,
    Json(data): Json<ContactFormData>,
) -> Result<Response, ApiError> {
    let language = path_locale(&locale)?;
    let outcome = ContactSchema::for_language(language).validate(&data);

    Ok(Json(ValidationBody {
        valid: outcome.is_valid(),
        errors: &outcome,
    })
    .into_response())
}

async fn submit_contact(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Json(data): Json<ContactFormData>,
) -> Result<Response, ApiError> {
    let language = path_locale(&locale)?;

    let outcome = ContactSchema::for_language(language).validate(&data);
    if !outcome.is_valid() {
        return Err(ApiError::InvalidForm(outcome));
    }

    state
        .transport
        .send(&data)
        .await
        .map_err(|source| ApiError::Delivery { language, source })?;

    info!("Contact request received in {}", language);
    Ok(Json(SubmitBody {
        status: "success",
        message: language.strings().success_message,
    })
    .into_response())
}

#[derive(Debug, Deserialize)]
struct SwitchLocaleQuery {
    #[serde(default)]
    path: String,
    to: String,
}

/// 303 to the current page in another locale.
///
/// The path comes from the query string, so it may hold bytes that are not
/// legal in a `Location` header; those get a 400.
async fn switch_locale(Query(query): Query<SwitchLocaleQuery>) -> Result<Response, ApiError> {
    let target =
        Language::from_code(&query.to).map_err(|_| ApiError::UnsupportedLocale(query.to.clone()))?;
    let location = HeaderValue::from_str(&switch_locale_path(&query.path, target))
        .map_err(|_| ApiError::InvalidRedirect)?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(detect_locale(uri.path()))
}
