use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::services::{
    cohere_service::CohereService, gemini_service::GeminiService, hotel_catalog::HotelCatalog,
};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    hotels_loaded: usize,
    services: HashMap<String, ServiceStatus>,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    gemini: web::Data<GeminiService>,
    cohere: web::Data<CohereService>,
    hotels: web::Data<HotelCatalog>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        hotels_loaded: hotels.len(),
        services: HashMap::new(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let gemini_result = check_api_key("GEMINI_API_KEY", gemini.is_configured());
    health
        .services
        .insert("gemini".to_string(), gemini_result.clone());

    let cohere_result = check_api_key("COHERE_API_KEY", cohere.is_configured());
    health
        .services
        .insert("cohere".to_string(), cohere_result.clone());

    // An empty table means the dataset is still loading or failed to load.
    if gemini_result.status != "ok" || cohere_result.status != "ok" || hotels.is_empty() {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_api_key(var: &str, configured: bool) -> ServiceStatus {
    if configured {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} loaded", var)),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("Missing configuration: {}", var)),
        }
    }
}
