use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};

use quizmatch_server::{
    app_state::AppState, config::Config, handlers, models::domain::User,
    repositories::MemoryUserRepository,
};

fn seeded_state() -> Arc<AppState> {
    // Minimum bcrypt cost (4) keeps bcrypt fast enough for the test suite
    let hash = bcrypt::hash("correct", 4).unwrap();
    let alice = User::new("alice", "Alice Example", &hash);

    let repository = Arc::new(MemoryUserRepository::with_users(vec![alice]));
    Arc::new(AppState::from_parts(Config::test_config(), repository))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .app_data(web::Data::new($state.jwt_service.clone()))
                .configure(handlers::configure),
        )
        .await
    };
}

macro_rules! login_token {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({"identifier": "alice", "secret": "correct"}))
            .to_request();

        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        body["token"]
            .as_str()
            .expect("login returns a token")
            .to_string()
    }};
}

#[actix_web::test]
async fn login_then_submit_returns_a_match() {
    let state = seeded_state();
    let app = test_app!(state);

    let token = login_token!(app);

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"answers": {"q1": "yes", "q2": "no"}}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["name"].as_str().is_some_and(|n| !n.is_empty()));
    assert!(body["personality"].as_str().is_some());
    assert!(body["url"].as_str().is_some());
}

#[actix_web::test]
async fn same_answers_always_match_the_same_persona() {
    let state = seeded_state();
    let app = test_app!(state);

    let token = login_token!(app);

    let mut results = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/submit")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({"answers": {"q1": "yes", "q2": "no"}}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        results.push(body);
    }

    assert_eq!(results[0], results[1]);
}

#[actix_web::test]
async fn issued_token_carries_the_identifier_as_subject() {
    let state = seeded_state();
    let app = test_app!(state);

    let token = login_token!(app);

    let header = format!("Bearer {}", token);
    let claims = state.jwt_service.authenticate(Some(&header)).unwrap();
    assert_eq!(claims.sub, "alice");
}

#[actix_web::test]
async fn submit_without_header_is_unauthorized() {
    let state = seeded_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(serde_json::json!({"answers": {"q1": "yes", "q2": "no"}}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn submit_with_garbage_token_is_unauthorized() {
    let state = seeded_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header(("Authorization", "Bearer garbage"))
        .set_json(serde_json::json!({"answers": {"q1": "yes", "q2": "no"}}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn submit_with_tampered_token_is_unauthorized() {
    let state = seeded_state();
    let app = test_app!(state);

    let token = login_token!(app);
    let mut bytes = token.into_bytes();
    let pos = bytes.len() / 2;
    bytes[pos] = if bytes[pos] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header(("Authorization", format!("Bearer {}", tampered)))
        .set_json(serde_json::json!({"answers": {"q1": "yes", "q2": "no"}}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn submit_with_expired_token_is_unauthorized() {
    let state = seeded_state();
    let app = test_app!(state);

    let expired = state.jwt_service.create_token_with_ttl("alice", -1).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header(("Authorization", format!("Bearer {}", expired)))
        .set_json(serde_json::json!({"answers": {"q1": "yes", "q2": "no"}}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn rejected_submissions_share_one_error_body() {
    let state = seeded_state();
    let app = test_app!(state);

    let expired = state.jwt_service.create_token_with_ttl("alice", -1).unwrap();
    let headers: [Option<String>; 3] = [
        None,
        Some("Bearer garbage".to_string()),
        Some(format!("Bearer {}", expired)),
    ];

    let mut bodies = Vec::new();
    for header in headers {
        let mut req = test::TestRequest::post()
            .uri("/api/submit")
            .set_json(serde_json::json!({"answers": {"q1": "yes", "q2": "no"}}));
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        bodies.push(test::read_body(resp).await);
    }

    // Missing, invalid, and expired credentials must be
    // indistinguishable from outside
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}

#[actix_web::test]
async fn wrong_secret_and_unknown_identifier_are_indistinguishable() {
    let state = seeded_state();
    let app = test_app!(state);

    let wrong_secret = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"identifier": "alice", "secret": "wrong"}))
        .to_request();
    let unknown_user = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"identifier": "mallory", "secret": "correct"}))
        .to_request();

    let resp_wrong = test::call_service(&app, wrong_secret).await;
    let resp_unknown = test::call_service(&app, unknown_user).await;

    assert_eq!(resp_wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp_unknown.status(), StatusCode::UNAUTHORIZED);

    let body_wrong = test::read_body(resp_wrong).await;
    let body_unknown = test::read_body(resp_unknown).await;
    assert_eq!(body_wrong, body_unknown);
}

#[actix_web::test]
async fn register_then_login_then_submit() {
    let state = seeded_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(serde_json::json!({
            "identifier": "bob",
            "secret": "longenoughsecret",
            "display_name": "Bob Example"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"identifier": "bob", "secret": "longenoughsecret"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"answers": {"q1": "maybe", "q2": "sometimes"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn submit_rejects_wrong_question_keys() {
    let state = seeded_state();
    let app = test_app!(state);

    let token = login_token!(app);

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"answers": {"q1": "yes", "q7": "no"}}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
