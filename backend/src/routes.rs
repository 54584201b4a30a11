use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, request_context, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Define routes
    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/featured", get(handlers::list_featured))
        .route("/api/articles/trending", get(handlers::list_flagged_trending))
        .route("/api/articles/:slug", get(handlers::get_article))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/:slug", get(handlers::get_category))
        .route("/api/search", get(handlers::search))
        .route("/api/search/suggestions", get(handlers::search_suggestions))
        .route("/api/search/recent", get(handlers::recent_searches))
        .route("/api/trending/topics", get(handlers::trending_topics))
        .route("/api/trending/articles", get(handlers::trending_articles))
        .route("/api/trending/analytics", get(handlers::trending_analytics))
        .route("/api/auth/signin", post(handlers::sign_in))
        .route("/api/auth/signup", post(handlers::sign_up))
        .route("/api/auth/signout", post(handlers::sign_out))
        .route("/api/auth/me", get(handlers::current_user))
        .route("/api/health", get(handlers::health))
        .layer(middleware::from_fn(request_context::request_context_middleware))
        .with_state(state)
        .layer(cors)
}
