//! Route definitions
//!
//! All API routes organized by domain and mounted under /app.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, boards, comments, follows, health, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/app", app_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(board_routes())
        .merge(comment_routes())
}

/// Sign-up, login, and certification routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users/sign-up", post(auth::sign_up))
        .route("/users/validate-email", post(auth::validate_email))
        .route("/users/validate-nickname", post(auth::validate_nickname))
        .route("/users/login", post(auth::login))
        .route("/users/send-email", post(auth::send_email))
        .route("/users/login/check-email", post(auth::check_email))
}

/// Account, follow, and per-user board routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/follow", post(follows::toggle_follow))
        .route("/users/:user_id", delete(users::delete_user))
        .route("/users/:user_id/password", patch(users::update_password))
        .route(
            "/users/:user_id/keyword",
            post(users::set_keywords).patch(users::update_keywords),
        )
        .route(
            "/users/:user_id/profile",
            get(users::get_profile).patch(users::update_profile),
        )
        .route(
            "/users/:user_id/profile-image",
            delete(users::delete_profile_image),
        )
        .route("/users/:user_id/following", get(follows::followings))
        .route("/users/:user_id/follower", get(follows::followers))
        .route("/users/:user_id/board", get(users::authored_boards))
        .route("/users/:user_id/board/like", get(users::liked_boards))
}

/// Board, quiz, and board like routes
fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/boards", post(boards::create_board))
        .route("/boards/top/like", get(boards::top_by_likes))
        .route("/boards/top/view", get(boards::top_by_views))
        .route("/boards/:board_id", get(boards::get_board))
        .route(
            "/boards/:board_id/quizzes",
            post(boards::create_quiz).get(boards::list_quizzes),
        )
        .route(
            "/boards/:board_id/like",
            post(boards::toggle_like).get(boards::like_state),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/boards/:board_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/boards/:board_id/comments/:comment_id",
            patch(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/boards/:board_id/comments/:comment_id/like",
            post(comments::toggle_like),
        )
}
