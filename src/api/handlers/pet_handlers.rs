use actix_web::{http::StatusCode, web, Responder};

use crate::api::handlers::{html, redirect_to_listing};
use crate::api::{state::AppState, views};
use crate::domain::PetForm;
use crate::services::{submit, SubmissionOutcome};
use crate::utils::errors::store_error_status;

pub async fn new_pet() -> impl Responder {
    html(StatusCode::OK, views::pet_form_page(&PetForm::default(), None, None))
}

pub async fn create_pet(
    state: web::Data<AppState>,
    form: web::Form<PetForm>
) -> impl Responder {
    let form = form.into_inner();

    match submit(state.pets.as_ref(), &form).await {
        SubmissionOutcome::Succeeded(_) => redirect_to_listing(),
        SubmissionOutcome::Rejected(violations) => html(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::pet_form_page(&form, Some(&violations), None),
        ),
        SubmissionOutcome::Failed(e) => html(
            store_error_status(&e),
            views::pet_form_page(&form, None, Some(e.user_message())),
        ),
    }
}
