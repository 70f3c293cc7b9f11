use std::sync::Arc;

use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::SubmitQuizRequest, response::MatchResponse},
};

/// Protected questionnaire submission. The auth middleware has already
/// verified the credential by the time this runs; the body is checked
/// here, then handed to the match engine together with the verified
/// subject.
#[post("/submit")]
pub async fn submit_quiz(
    req: HttpRequest,
    state: web::Data<Arc<AppState>>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::debug!(
        "submission {} from {}",
        get_request_id(&req).unwrap_or_default(),
        auth.subject()
    );

    let persona = state
        .match_engine
        .evaluate(&request.answers, auth.subject())?;

    Ok(HttpResponse::Ok().json(MatchResponse::from(persona)))
}
