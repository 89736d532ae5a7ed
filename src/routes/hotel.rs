use actix_web::{web, HttpResponse, Responder};

use crate::models::{
    hotel::{HotelSearchQuery, HotelSearchResponse},
    ErrorBody,
};
use crate::services::hotel_catalog::{CatalogError, HotelCatalog};

/*
    /api/search-hotels?city=&area=
*/
pub async fn search_hotels(
    hotels: web::Data<HotelCatalog>,
    params: web::Query<HotelSearchQuery>,
) -> impl Responder {
    match hotels.search(params.city.as_deref(), params.area.as_deref()) {
        Ok(data) => HttpResponse::Ok().json(HotelSearchResponse { data }),
        Err(err @ CatalogError::MissingCriteria) => {
            HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()))
        }
        Err(err) => {
            log::error!("Failed to search hotels: {}", err);
            HttpResponse::InternalServerError().json(ErrorBody::new("Failed to search hotels"))
        }
    }
}

/*
    /api/hotel-details/{hotel_id}
*/
pub async fn hotel_details(
    hotels: web::Data<HotelCatalog>,
    path: web::Path<String>,
) -> impl Responder {
    match hotels.get_by_id(&path.into_inner()) {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(err @ CatalogError::NotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new(err.to_string()))
        }
        Err(err) => {
            log::error!("Failed to fetch hotel details: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Failed to fetch hotel details"))
        }
    }
}
