pub mod listing_handlers;
pub mod pet_handlers;
pub mod walker_handlers;

use actix_web::{http::{header, StatusCode}, HttpResponse};

pub(crate) fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// 303 back to the listing page.
pub(crate) fn redirect_to_listing() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
