use actix_web::{web, HttpResponse, Responder};

use crate::models::{
    prompt::{PromptRequest, TextResponse},
    ErrorBody,
};
use crate::services::{cohere_service::CohereService, gemini_service::GeminiService};

/*
    /api/gemini
*/
pub async fn gemini(
    gemini: web::Data<GeminiService>,
    input: web::Json<PromptRequest>,
) -> impl Responder {
    match gemini.generate_text(&input.prompt, false).await {
        Ok(Some(text)) => HttpResponse::Ok().json(TextResponse { text }),
        Ok(None) => {
            log::error!("Gemini returned no text");
            HttpResponse::InternalServerError().json(ErrorBody::new("Error calling Gemini API"))
        }
        Err(err) => {
            log::error!("Gemini error: {}", err);
            HttpResponse::InternalServerError().json(ErrorBody::new("Error calling Gemini API"))
        }
    }
}

/*
    /api/cohere
*/
pub async fn cohere(
    cohere: web::Data<CohereService>,
    input: web::Json<PromptRequest>,
) -> impl Responder {
    match cohere.generate(&input.prompt).await {
        Ok(text) => HttpResponse::Ok().json(TextResponse { text }),
        Err(err) => {
            log::error!("Cohere error: {}", err);
            HttpResponse::InternalServerError().json(ErrorBody::new("Error calling Cohere API"))
        }
    }
}
