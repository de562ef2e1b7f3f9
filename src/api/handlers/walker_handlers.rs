use actix_web::{http::StatusCode, web, Responder};

use crate::api::handlers::{html, redirect_to_listing};
use crate::api::{state::AppState, views};
use crate::domain::WalkerForm;
use crate::services::{submit, SubmissionOutcome};
use crate::utils::errors::store_error_status;

pub async fn new_walker() -> impl Responder {
    html(StatusCode::OK, views::walker_form_page(&WalkerForm::default(), None, None))
}

pub async fn create_walker(
    state: web::Data<AppState>,
    form: web::Form<WalkerForm>
) -> impl Responder {
    let form = form.into_inner();

    match submit(state.walkers.as_ref(), &form).await {
        SubmissionOutcome::Succeeded(_) => redirect_to_listing(),
        SubmissionOutcome::Rejected(violations) => html(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::walker_form_page(&form, Some(&violations), None),
        ),
        SubmissionOutcome::Failed(e) => html(
            store_error_status(&e),
            views::walker_form_page(&form, None, Some(e.user_message())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};

    use super::*;
    use crate::domain::record::{RecordStore, StoreError};
    use crate::domain::{Pet, Walker};
    use crate::infrastructure::memory::record_store::{FailingRecordStore, InMemoryRecordStore};
    use crate::routes::routes;

    fn state(walkers: Arc<dyn RecordStore<Walker>>) -> AppState {
        AppState::new(Arc::new(InMemoryRecordStore::<Pet>::new()), walkers)
    }

    #[actix_web::test]
    async fn test_valid_walker_redirects() {
        let walkers = InMemoryRecordStore::<Walker>::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(Arc::new(walkers.clone()))))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/walkers/new")
            .set_form([
                ("name", "Alice"),
                ("email", "alice@example.com"),
                ("phone", "555-1234"),
                ("location", "Park"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let stored = walkers.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email(), "alice@example.com");
    }

    #[actix_web::test]
    async fn test_short_name_and_bad_email_rejected() {
        let walkers = InMemoryRecordStore::<Walker>::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(Arc::new(walkers.clone()))))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/walkers/new")
            .set_form([
                ("name", "Al"),
                ("email", "not-an-email"),
                ("phone", "555-1234"),
                ("location", "Park"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("The Name field must be between 3 and 100 characters long."));
        assert!(html.contains("The Email field is not a valid e-mail address."));
        assert!(!html.contains("phone number"));
        assert!(walkers.is_empty().await);
    }

    #[actix_web::test]
    async fn test_conflict_is_reported_as_store_error() {
        let failing = FailingRecordStore { error: StoreError::Conflict("E11000 duplicate key".into()) };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(Arc::new(failing))))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/walkers/new")
            .set_form([
                ("name", "Alice"),
                ("email", "alice@example.com"),
                ("phone", "555-1234"),
                ("location", "Park"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Database error: a record with this identifier already exists."));
        assert!(!html.contains("E11000"));
    }
}
