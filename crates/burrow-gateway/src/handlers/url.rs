use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, GetUrlResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::{ShortCode, Shortener};
use burrow_redirector::Redirector;

pub const NOT_FOUND_MESSAGE: &str = "This link was not found.";

pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<CreateUrlResponse>)> {
    let code = state.shortener().shorten(&request.original_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUrlResponse {
            short_url: code.to_url(state.base_url()),
            short_code: code.into(),
            original_url: request.original_url,
        }),
    ))
}

pub async fn get_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GetUrlResponse>> {
    let Ok(code) = ShortCode::new(&short_code) else {
        return Err(AppError::NotFound(short_code));
    };

    let record = state
        .redirector()
        .resolve(&code)
        .await?
        .ok_or(AppError::NotFound(short_code))?;

    Ok(Json(GetUrlResponse {
        short_code: code.into(),
        original_url: record.original_url,
        created_at: record.created_at,
    }))
}

/// `/short` only accepts form posts; a plain visit gets the same answer as an
/// unknown code.
pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

/// Answers `GET /{short_code}` with a `302 Found` pointing at the stored URL.
///
/// An empty stored URL has nowhere to point to and is answered like an
/// unknown code.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    match state.redirector().redirect(&short_code).await? {
        Some(url) if !url.is_empty() => {
            let location = HeaderValue::try_from(url)
                .map_err(|_| AppError::InvalidRedirectTarget(short_code))?;
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        _ => Ok(not_found_handler().await.into_response()),
    }
}
