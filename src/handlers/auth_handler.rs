use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::LoginResponse,
    },
};

/// Issues a bearer credential. Empty or wrong inputs surface as the
/// same 401 the service hands back; the store outage case is the only
/// failure with its own status (503).
#[post("/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let user = state
        .user_service
        .authenticate(&request.identifier, &request.secret)
        .await
        .map_err(|e| {
            log::warn!("login rejected: {}", e);
            AppError::from(e)
        })?;

    let token = state.jwt_service.create_token(&user)?;
    log::info!("issued credential for {}", user.username);

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

#[post("/register")]
pub async fn register(
    state: web::Data<Arc<AppState>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}
