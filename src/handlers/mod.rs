use actix_web::{get, web, HttpResponse};

use crate::auth::AuthMiddleware;

pub mod auth_handler;
pub mod quiz_handler;

pub use auth_handler::{login, register};
pub use quiz_handler::submit_quiz;

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "QuizMatch persona service is running"
    }))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Full route table: public endpoints at the root, everything under
/// `/api` behind the bearer-credential gate.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health_check)
        .service(login)
        .service(register)
        .service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                .service(submit_quiz),
        );
}
