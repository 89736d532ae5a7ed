use actix_web::{web, HttpResponse, Responder};

use crate::models::{
    conversation::ChatPlanRequest,
    itinerary::{GenerateTripRequest, ItineraryPlan},
    packing::{PackingList, PackingListRequest},
    ErrorBody,
};
use crate::services::{gemini_service::GeminiService, plan_normalizer, prompts};

/*
    /api/chat-plan
    Always answers 200 with {assistant_message, plan}.
*/
pub async fn chat_plan(
    gemini: web::Data<GeminiService>,
    input: web::Json<ChatPlanRequest>,
) -> impl Responder {
    let prompt = prompts::chat_plan_prompt(input.conversation());

    match gemini.generate_text(&prompt, true).await {
        Ok(reply) => {
            if reply.is_none() {
                log::warn!("No response text from Gemini for chat-plan");
            }
            HttpResponse::Ok().json(plan_normalizer::normalize_reply(reply.as_deref()))
        }
        Err(err) => {
            log::error!("chat-plan error: {}", err);
            HttpResponse::Ok().json(plan_normalizer::upstream_failure())
        }
    }
}

/*
    /api/generate-trip
*/
pub async fn generate_trip(
    gemini: web::Data<GeminiService>,
    input: web::Json<GenerateTripRequest>,
) -> impl Responder {
    let prompt = prompts::trip_prompt(&input);

    match gemini.generate_json::<ItineraryPlan>(&prompt).await {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(err) => {
            log::error!("generate-trip error: {}", err);
            HttpResponse::InternalServerError().json(ErrorBody::new("Failed to generate trip"))
        }
    }
}

/*
    /api/generate-packing-list
*/
pub async fn generate_packing_list(
    gemini: web::Data<GeminiService>,
    input: web::Json<PackingListRequest>,
) -> impl Responder {
    let prompt = prompts::packing_list_prompt(&input);

    match gemini.generate_json::<PackingList>(&prompt).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => {
            log::error!("generate-packing-list error: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Failed to generate packing list"))
        }
    }
}
