// src/routes.rs

use std::any::Any;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{categories, health, questions, quiz, search},
    state::AppState,
};

const ALLOWED_METHODS: &str = "GET, PATCH, POST, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Assembles the main application router.
///
/// * Registers the category, question, search and quiz routes.
/// * Turns unknown paths and unsupported methods into JSON errors.
/// * Applies global middleware (CORS headers on every response, Trace, panic catching).
/// * Injects global state (the store handle).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // The CORS layer only adds allow-methods/headers to preflight responses;
    // these fill them in everywhere else, errors included.
    let cors_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{question_id}", delete(questions::delete_question))
        .route("/search", post(search::search_questions))
        .route("/quizzes", post(quiz::next_question))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(cors_headers)
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::route_not_found()
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::InternalServerError(details).into_response()
}
