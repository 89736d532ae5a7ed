pub mod ai_proxy;
pub mod health;
pub mod hotel;
pub mod planner;
pub mod user;

use actix_web::{error, web, HttpResponse};

use crate::models::ErrorBody;

/// Registers every route. Shared state (`GeminiService`, `CohereService`,
/// `HotelCatalog`, `UserStore`, `AppConfig`) must already be attached to the
/// `App` as `web::Data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/gemini", web::post().to(ai_proxy::gemini))
                .route("/cohere", web::post().to(ai_proxy::cohere))
                .route("/chat-plan", web::post().to(planner::chat_plan))
                .route("/generate-trip", web::post().to(planner::generate_trip))
                .route(
                    "/generate-packing-list",
                    web::post().to(planner::generate_packing_list),
                )
                .route("/search-hotels", web::get().to(hotel::search_hotels))
                .route(
                    "/hotel-details/{hotel_id}",
                    web::get().to(hotel::hotel_details),
                )
                .service(
                    web::scope("/user")
                        .route("/profile/{user_id}", web::get().to(user::get_profile))
                        .route("/update-profile", web::put().to(user::update_profile))
                        .route("/update-password", web::post().to(user::update_password)),
                )
                .route("/auth/login", web::post().to(user::login))
                .route("/debug/users", web::get().to(user::list_users)),
        );
}

// Malformed request bodies get the same {error} shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorBody::new(message)),
        )
        .into()
    })
}
