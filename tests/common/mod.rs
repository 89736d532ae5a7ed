#![allow(dead_code)]

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;

use voyagemate_api::config::AppConfig;
use voyagemate_api::models::hotel::HotelRecord;
use voyagemate_api::routes;
use voyagemate_api::services::{
    cohere_service::CohereService, gemini_service::GeminiService, hotel_catalog::HotelCatalog,
    user_store::UserStore,
};

const TEST_HASH_COST: u32 = 4;

/// What the stub provider answers with.
#[derive(Clone)]
pub enum StubReply {
    /// Gemini candidate text (and Cohere generation text).
    Text(String),
    /// A 200 response without any candidate.
    NoCandidates,
    /// A non-success status, as on auth or quota failures.
    Status(u16),
}

pub struct TestApp {
    pub config: AppConfig,
    pub hotels: HotelCatalog,
    pub users: UserStore,
}

impl TestApp {
    /// App with no provider keys configured and the sample hotel table.
    pub fn new() -> Self {
        Self::with_config(AppConfig {
            jwt_secret: "test_secret".to_string(),
            ..AppConfig::default()
        })
    }

    /// App whose Gemini and Cohere clients talk to a local stub server.
    pub fn with_stub(reply: StubReply) -> Self {
        let base = spawn_stub_provider(reply);
        Self::with_config(AppConfig {
            gemini_api_key: Some("test-gemini-key".to_string()),
            gemini_api_base: base.clone(),
            gemini_model: "gemini-test".to_string(),
            cohere_api_key: Some("test-cohere-key".to_string()),
            cohere_api_base: base,
            jwt_secret: "test_secret".to_string(),
            ..AppConfig::default()
        })
    }

    fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            hotels: HotelCatalog::from_records(sample_hotels()),
            users: UserStore::with_demo_user(TEST_HASH_COST).expect("seed users"),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(GeminiService::new(&self.config)))
            .app_data(web::Data::new(CohereService::new(&self.config)))
            .app_data(web::Data::new(self.hotels.clone()))
            .app_data(web::Data::new(self.users.clone()))
            .configure(routes::configure)
    }
}

/// 25 Mumbai hotels spelled three ways, plus a few elsewhere.
pub fn sample_hotels() -> Vec<HotelRecord> {
    let mut hotels: Vec<HotelRecord> = (0..25)
        .map(|i| {
            let city = match i % 3 {
                0 => "Mumbai",
                1 => "MUMBAI",
                _ => "mumbai",
            };
            HotelRecord {
                property_id: format!("mum-{}", i),
                property_name: format!("Mumbai Stay {}", i),
                city: city.to_string(),
                area: if i == 7 { "Juhu Beach" } else { "Andheri" }.to_string(),
                state: "Maharashtra".to_string(),
                site_review_rating: "4.1".to_string(),
                site_review_count: "120".to_string(),
                image_urls: "https://img.example/a.jpg,https://img.example/b.jpg".to_string(),
                ..Default::default()
            }
        })
        .collect();

    hotels.push(HotelRecord {
        property_id: "goa-1".to_string(),
        property_name: "Palm Grove".to_string(),
        city: "Goa".to_string(),
        area: "Calangute".to_string(),
        state: "Goa".to_string(),
        property_address: "Beach Road".to_string(),
        hotel_overview: "Quiet cottages near the beach".to_string(),
        hotel_star_rating: "3 star".to_string(),
        traveller_rating: "4.3".to_string(),
        site_review_count: "87".to_string(),
        pageurl: "https://hotels.example/goa-1".to_string(),
        ..Default::default()
    });

    hotels
}

/// Starts a throwaway provider on a random local port and returns its base URL.
pub fn spawn_stub_provider(reply: StubReply) -> String {
    let reply = web::Data::new(reply);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(reply.clone())
            .default_service(web::to(stub_handler))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub provider");

    let port = server.addrs()[0].port();
    actix_rt::spawn(server.run());
    format!("http://127.0.0.1:{}", port)
}

async fn stub_handler(req: HttpRequest, reply: web::Data<StubReply>) -> HttpResponse {
    let is_cohere = req.path().ends_with("/v1/generate");

    match reply.get_ref() {
        StubReply::Status(code) => {
            let status = actix_web::http::StatusCode::from_u16(*code)
                .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(json!({"error": {"message": "stub failure"}}))
        }
        StubReply::NoCandidates if is_cohere => {
            HttpResponse::Ok().json(json!({"generations": []}))
        }
        StubReply::NoCandidates => HttpResponse::Ok().json(json!({"candidates": []})),
        StubReply::Text(text) if is_cohere => {
            HttpResponse::Ok().json(json!({"generations": [{"text": text}]}))
        }
        StubReply::Text(text) => HttpResponse::Ok().json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        })),
    }
}
