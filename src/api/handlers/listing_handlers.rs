use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Deserialize;

use crate::api::handlers::{html, redirect_to_listing};
use crate::api::{state::AppState, views};
use crate::domain::RecordId;
use crate::services::{listing, RemovalOutcome, RemovalReport};
use crate::utils::errors::{store_error_status, ApiError};

#[derive(Deserialize)]
pub struct RemovePet {
    #[serde(default)]
    pub pet_id: String,
}

#[derive(Deserialize)]
pub struct RemoveWalker {
    #[serde(default)]
    pub walker_id: String,
}

pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let listing = listing::load_listing(state.get_ref()).await.map_err(|e| {
        log::error!("Failed to load listing: {}", e);
        ApiError::from(e)
    })?;

    Ok(html(StatusCode::OK, views::index_page(&listing, None)))
}

pub async fn remove_pet(
    state: web::Data<AppState>,
    form: web::Form<RemovePet>
) -> HttpResponse {
    let id = RecordId::from(form.into_inner().pet_id);
    let report = listing::remove_pet(state.get_ref(), id).await;
    removal_response(report)
}

pub async fn remove_walker(
    state: web::Data<AppState>,
    form: web::Form<RemoveWalker>
) -> HttpResponse {
    let id = RecordId::from(form.into_inner().walker_id);
    let report = listing::remove_walker(state.get_ref(), id).await;
    removal_response(report)
}

/// Removed and not-found go back to the listing. A store failure renders the
/// refreshed listing with the error instead of hiding it. When the refresh
/// failed as well, no listing is rendered at all.
fn removal_response(report: RemovalReport) -> HttpResponse {
    let error = match report.outcome {
        RemovalOutcome::Skipped | RemovalOutcome::Removed | RemovalOutcome::NotFound => {
            return redirect_to_listing();
        }
        RemovalOutcome::Failed(e) => e,
    };

    let page = match &report.listing {
        Some(Ok(listing)) => views::index_page(listing, Some(error.user_message())),
        _ => views::listing_unavailable_page(error.user_message()),
    };
    html(store_error_status(&error), page)
}
