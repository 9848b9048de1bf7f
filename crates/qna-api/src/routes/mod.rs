//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, follow, health, marks, ox, profile, qna, search, uploads, users};
use crate::state::AppState;

/// Create the main API router
///
/// `max_upload_bytes` caps the raw body accepted by the upload route.
pub fn create_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes(max_upload_bytes))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(follow_routes())
        .merge(qna_routes())
        .merge(ox_routes())
        .merge(mark_routes())
        .merge(upload_routes(max_upload_bytes))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/exists/:user_id", get(auth::user_exists))
        .route("/auth/password", put(auth::change_password))
}

/// Profile, search and per-user listings
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", put(profile::update_profile))
        .route("/profile/:user_id", get(profile::get_profile))
        .route("/searching", get(search::search_users))
        .route("/users/:user_id/posts", get(users::get_user_posts))
}

/// Follow graph routes
fn follow_routes() -> Router<AppState> {
    Router::new()
        .route("/follow/:target_user", post(follow::toggle_follow))
        .route("/follow/following/:user_id", get(follow::get_following))
        .route("/follow/follower/:user_id", get(follow::get_followers))
}

/// Q&A routes
fn qna_routes() -> Router<AppState> {
    Router::new()
        .route("/qna", post(qna::create_post).get(qna::list_posts))
        .route("/qna/following", get(qna::following_feed))
        .route(
            "/qna/:id",
            get(qna::get_post)
                .put(qna::update_post)
                .delete(qna::delete_post),
        )
        .route(
            "/qna/:id/comments",
            get(qna::list_comments).post(qna::add_comment),
        )
}

/// O/X poll routes
fn ox_routes() -> Router<AppState> {
    Router::new()
        .route("/ox", post(ox::create_poll).get(ox::list_polls))
        .route("/ox/following", get(ox::following_feed))
        .route(
            "/ox/:id",
            get(ox::get_poll).put(ox::update_poll).delete(ox::delete_poll),
        )
        .route("/ox/vote/:id", post(ox::vote))
}

/// Like and bookmark routes
fn mark_routes() -> Router<AppState> {
    Router::new()
        .route("/like", post(marks::toggle_like))
        .route("/bookmark", post(marks::toggle_bookmark))
        .route("/bookmark/:user_id", get(marks::list_bookmarks))
}

/// Upload route with its own body limit
fn upload_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/uploads/:file_name", post(uploads::upload_file))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
