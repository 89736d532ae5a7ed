use actix_web::{web, HttpResponse, Responder};

use crate::config::AppConfig;
use crate::models::{
    user::{
        LoginRequest, LoginResponse, MessageResponse, ProfileUpdateResponse,
        UpdatePasswordRequest, UpdateProfileRequest,
    },
    ErrorBody,
};
use crate::services::{
    auth_token::generate_token,
    user_store::{UserStore, UserStoreError},
};

/*
    /api/user/profile/{user_id}
*/
pub async fn get_profile(users: web::Data<UserStore>, path: web::Path<String>) -> impl Responder {
    match users.profile(&path.into_inner()) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => error_response(err, "Failed to fetch profile"),
    }
}

/*
    /api/user/update-profile
*/
pub async fn update_profile(
    users: web::Data<UserStore>,
    input: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let user_id = match input.user_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ErrorBody::new("User ID is required")),
    };

    match users.update_profile(user_id, input.name.as_deref(), input.email.as_deref()) {
        Ok(user) => HttpResponse::Ok().json(ProfileUpdateResponse {
            message: "Profile updated successfully".to_string(),
            user,
        }),
        Err(err) => error_response(err, "Failed to update profile"),
    }
}

/*
    /api/user/update-password
*/
pub async fn update_password(
    users: web::Data<UserStore>,
    input: web::Json<UpdatePasswordRequest>,
) -> impl Responder {
    let fields = (
        input.user_id.as_deref().filter(|v| !v.is_empty()),
        input.current_password.as_deref().filter(|v| !v.is_empty()),
        input.new_password.as_deref().filter(|v| !v.is_empty()),
    );
    let (user_id, current, new) = match fields {
        (Some(user_id), Some(current), Some(new)) => (user_id, current, new),
        _ => {
            return HttpResponse::BadRequest().json(ErrorBody::new(
                "User ID, current password, and new password are required",
            ))
        }
    };

    match users.update_password(user_id, current, new) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Password updated successfully".to_string(),
        }),
        Err(err) => error_response(err, "Failed to update password"),
    }
}

/*
    /api/auth/login
*/
pub async fn login(
    users: web::Data<UserStore>,
    config: web::Data<AppConfig>,
    input: web::Json<LoginRequest>,
) -> impl Responder {
    let user = match users.authenticate(&input.email, &input.password) {
        Ok(user) => user,
        Err(err) => return error_response(err, "Login failed"),
    };

    match generate_token(&user.email, &user.id, &config.jwt_secret) {
        Ok(token) => HttpResponse::Ok().json(LoginResponse {
            message: "Login successful".to_string(),
            user,
            token,
        }),
        Err(err) => {
            log::error!("Token generation failed: {}", err);
            HttpResponse::InternalServerError().json(ErrorBody::new("Login failed"))
        }
    }
}

/*
    /api/debug/users
*/
pub async fn list_users(users: web::Data<UserStore>) -> impl Responder {
    HttpResponse::Ok().json(users.list_masked())
}

fn error_response(err: UserStoreError, fallback: &str) -> HttpResponse {
    match err {
        UserStoreError::NotFound => HttpResponse::NotFound().json(ErrorBody::new(err.to_string())),
        UserStoreError::EmailTaken
        | UserStoreError::IncorrectPassword
        | UserStoreError::PasswordTooShort => {
            HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()))
        }
        UserStoreError::InvalidCredentials => {
            HttpResponse::Unauthorized().json(ErrorBody::new(err.to_string()))
        }
        UserStoreError::Hash(_) => {
            log::error!("{}: {}", fallback, err);
            HttpResponse::InternalServerError().json(ErrorBody::new(fallback))
        }
    }
}
