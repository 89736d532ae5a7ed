use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use voyagemate_api::config::AppConfig;
use voyagemate_api::routes;
use voyagemate_api::services::{
    cohere_service::CohereService, gemini_service::GeminiService, hotel_catalog::HotelCatalog,
    user_store::UserStore,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env();
    log::info!(
        "GEMINI_API_KEY: {}",
        if config.gemini_api_key.is_some() { "loaded" } else { "missing" }
    );
    log::info!(
        "COHERE_API_KEY: {}",
        if config.cohere_api_key.is_some() { "loaded" } else { "missing" }
    );

    // Queries that arrive before the load finishes see an empty table.
    let hotels = HotelCatalog::new();
    hotels.load_in_background(config.hotels_csv_path.clone());

    let users = UserStore::with_demo_user(bcrypt::DEFAULT_COST)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let gemini = GeminiService::new(&config);
    let cohere = CohereService::new(&config);

    let bind = (config.host.clone(), config.port);
    log::info!("Attempting to bind to {}:{}", bind.0, bind.1);

    let config_data = web::Data::new(config);
    let gemini_data = web::Data::new(gemini);
    let cohere_data = web::Data::new(cohere);
    let hotels_data = web::Data::new(hotels);
    let users_data = web::Data::new(users);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(config_data.clone())
            .app_data(gemini_data.clone())
            .app_data(cohere_data.clone())
            .app_data(hotels_data.clone())
            .app_data(users_data.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
