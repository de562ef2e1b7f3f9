use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use waqqly::{
    api::state::AppState,
    domain::{Pet, Walker},
    infrastructure::{
        database::mongo_context::MongoContext, mongodb::record_repository::MongoRecordStore,
    },
    routes::routes,
    utils::config::AppConfig,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mongo_context = match MongoContext::init(
        &config.database_url,
        &config.database_name,
        config.store_timeout,
    )
    .await
    {
        Ok(context) => context,
        Err(e) => {
            log::error!("Failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };

    let pets = MongoRecordStore::<Pet>::new(&mongo_context, &config.pet_collection);
    let walkers = MongoRecordStore::<Walker>::new(&mongo_context, &config.walker_collection);

    if let Err(e) = pets.ensure_indexes().await {
        log::warn!("Could not create id index on '{}': {}", pets.collection_name(), e);
    }
    if let Err(e) = walkers.ensure_indexes().await {
        log::warn!("Could not create id index on '{}': {}", walkers.collection_name(), e);
    }

    log::info!(
        "Using database '{}' with collections '{}' and '{}'",
        mongo_context.database_name(),
        pets.collection_name(),
        walkers.collection_name()
    );

    let app_state = AppState::new(Arc::new(pets), Arc::new(walkers));

    log::info!("Server running at http://{}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
