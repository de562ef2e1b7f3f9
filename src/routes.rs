use actix_web::web;

use crate::api::handlers::listing_handlers::{index, remove_pet, remove_walker};
use crate::api::handlers::pet_handlers::{create_pet, new_pet};
use crate::api::handlers::walker_handlers::{create_walker, new_walker};

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
    );

    cfg.service(
        web::resource("/pets/new")
            .route(web::get().to(new_pet))
            .route(web::post().to(create_pet))
    );

    cfg.service(
        web::resource("/pets/remove")
            .route(web::post().to(remove_pet))
    );

    cfg.service(
        web::resource("/walkers/new")
            .route(web::get().to(new_walker))
            .route(web::post().to(create_walker))
    );

    cfg.service(
        web::resource("/walkers/remove")
            .route(web::post().to(remove_walker))
    );
}
