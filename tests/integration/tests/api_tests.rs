//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

/// Sign up a fresh user and return its token
async fn sign_up(server: &TestServer) -> AuthResponse {
    let response = server
        .post("/app/users/sign-up", &RegisterRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_board(server: &TestServer, token: &str) -> i64 {
    let response = server
        .post_auth("/app/boards", token, &CreateBoardRequest::unique())
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.id
}

async fn expect_error(response: reqwest::Response, status: StatusCode, code: &str) {
    let body: ErrorResponse = assert_json(response, status).await.unwrap();
    assert_eq!(body.error.code, code, "message: {}", body.error.message);
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_sign_up_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/app/users/sign-up", &request).await.unwrap();
    let registered: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!registered.jwt.is_empty());
    assert_eq!(registered.token_type, "Bearer");

    let response = server
        .post("/app/users/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let logged_in: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logged_in.user_id, registered.user_id);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/app/users/sign-up", &request).await.unwrap();

    let response = server
        .post("/app/users/validate-email", &json!({ "email": request.email }))
        .await
        .unwrap();
    expect_error(response, StatusCode::CONFLICT, "DUPLICATED_EMAIL").await;
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nobody@moge.dev".to_string(),
        password: TEST_PASSWORD.to_string(),
    };

    let response = server.post("/app/users/login", &login_req).await.unwrap();
    expect_error(response, StatusCode::UNAUTHORIZED, "FAILED_TO_LOGIN").await;
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/app/boards", &CreateBoardRequest::unique())
        .await
        .unwrap();
    expect_error(response, StatusCode::UNAUTHORIZED, "EMPTY_JWT").await;
}

#[tokio::test]
async fn test_email_certification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = format!("cert{}@moge.dev", unique_suffix());

    let response = server
        .post("/app/users/send-email", &json!({ "email": email }))
        .await
        .unwrap();
    let issued: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let code = issued["code"].as_str().unwrap().to_string();

    let wrong = if code == "000000" { "111111" } else { "000000" };
    let response = server
        .post(
            "/app/users/login/check-email",
            &json!({ "email": email, "code": wrong }),
        )
        .await
        .unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "CERTIFICATION_CODE_MISMATCH").await;

    let response = server
        .post(
            "/app/users/login/check-email",
            &json!({ "email": email, "code": code }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_keywords_need_three_categories() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = sign_up(&server).await;
    let path = format!("/app/users/{}/keyword", user.user_id);

    let response = server
        .post_auth(&path, &user.jwt, &json!({ "category_ids": [1, 2] }))
        .await
        .unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "INVALID_KEYWORD_COUNT").await;

    let response = server
        .post_auth(&path, &user.jwt, &json!({ "category_ids": [1, 2, 3] }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_cannot_edit_other_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let me = sign_up(&server).await;
    let other = sign_up(&server).await;

    let response = server
        .patch_auth(
            &format!("/app/users/{}/profile", other.user_id),
            &me.jwt,
            &json!({ "nickname": "intruder" }),
        )
        .await
        .unwrap();
    expect_error(response, StatusCode::FORBIDDEN, "INVALID_USER_JWT").await;
}

// ============================================================================
// Board Like Tests
// ============================================================================

#[tokio::test]
async fn test_board_like_toggle_sequence() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = sign_up(&server).await;
    let board_id = create_board(&server, &user.jwt).await;
    let like_path = format!("/app/boards/{board_id}/like");

    let mut actions = Vec::new();
    for _ in 0..3 {
        let response = server.post_auth_empty(&like_path, &user.jwt).await.unwrap();
        let toggle: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(toggle.subject_id, board_id);
        assert_eq!(toggle.user_id, user.user_id);
        actions.push((toggle.action, toggle.active));
    }
    assert_eq!(
        actions,
        vec![
            ("added".to_string(), true),
            ("removed".to_string(), false),
            ("reactivated".to_string(), true),
        ]
    );

    let response = server.get_auth(&like_path, &user.jwt).await.unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(state.active);
    assert_eq!(state.like_count, 1);

    let response = server.get(&format!("/app/boards/{board_id}")).await.unwrap();
    let board: BoardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(board.like_count, 1);
    assert_eq!(board.view_count, 1);
}

#[tokio::test]
async fn test_like_missing_board() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = sign_up(&server).await;

    let response = server
        .post_auth_empty("/app/boards/999999999/like", &user.jwt)
        .await
        .unwrap();
    expect_error(response, StatusCode::NOT_FOUND, "BOARD_NOT_EXISTS").await;
}

#[tokio::test]
async fn test_invalid_board_id_in_path() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = sign_up(&server).await;

    let response = server
        .post_auth_empty("/app/boards/0/like", &user.jwt)
        .await
        .unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "INVALID_PATH_PARAMETER").await;
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_groups() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = sign_up(&server).await;
    let board_id = create_board(&server, &user.jwt).await;
    let comments_path = format!("/app/boards/{board_id}/comments");

    let response = server
        .post_auth(
            &comments_path,
            &user.jwt,
            &CreateCommentRequest::top_level("first!"),
        )
        .await
        .unwrap();
    let head: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&comments_path).await.unwrap();
    let listed: DataResponse<Vec<CommentResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let group_id = listed.data[0].group_id;
    assert_eq!(listed.data[0].id, head.id);

    let response = server
        .post_auth(
            &comments_path,
            &user.jwt,
            &CreateCommentRequest::reply("agreed", group_id),
        )
        .await
        .unwrap();
    let reply: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &comments_path,
            &user.jwt,
            &CreateCommentRequest::reply("lost", group_id + 1_000_000),
        )
        .await
        .unwrap();
    expect_error(response, StatusCode::NOT_FOUND, "GROUP_NOT_EXISTS").await;

    let response = server
        .post_auth(
            &comments_path,
            &user.jwt,
            &CreateCommentRequest::top_level_in("second head", group_id),
        )
        .await
        .unwrap();
    expect_error(response, StatusCode::CONFLICT, "DUPLICATED_GROUP_PARENT").await;

    // Head with a live reply is only marked deleted
    let response = server
        .delete_auth(&format!("{comments_path}/{}", head.id), &user.jwt)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&comments_path).await.unwrap();
    let listed: DataResponse<Vec<CommentResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.data.len(), 2);
    let head_row = listed.data.iter().find(|c| c.id == head.id).unwrap();
    assert_eq!(head_row.status, "deleted");
    let reply_row = listed.data.iter().find(|c| c.id == reply.id).unwrap();
    assert_eq!(reply_row.parent_id, Some(head.id));
    assert_eq!(reply_row.kind, "reply");

    // Last reply gone: the thread disappears
    let response = server
        .delete_auth(&format!("{comments_path}/{}", reply.id), &user.jwt)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&comments_path).await.unwrap();
    let listed: DataResponse<Vec<CommentResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.data.is_empty());
}

#[tokio::test]
async fn test_comment_like_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = sign_up(&server).await;
    let reader = sign_up(&server).await;
    let board_id = create_board(&server, &author.jwt).await;

    let response = server
        .post_auth(
            &format!("/app/boards/{board_id}/comments"),
            &author.jwt,
            &CreateCommentRequest::top_level("capital of France?"),
        )
        .await
        .unwrap();
    let comment: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let like_path = format!("/app/boards/{board_id}/comments/{}/like", comment.id);

    let response = server.post_auth_empty(&like_path, &reader.jwt).await.unwrap();
    let first: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.action, "added");
    assert_eq!(first.subject_id, comment.id);

    let response = server.post_auth_empty(&like_path, &reader.jwt).await.unwrap();
    let second: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.action, "removed");
    assert!(!second.active);
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_toggle_and_lists() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let fan = sign_up(&server).await;
    let star = sign_up(&server).await;
    let body = FollowRequest {
        user_id: fan.user_id,
        following_id: star.user_id,
    };

    let response = server
        .post_auth("/app/users/follow", &fan.jwt, &body)
        .await
        .unwrap();
    let followed: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(followed.action, "added");

    let followers_path = format!("/app/users/{}/follower?page=1", star.user_id);
    let response = server.get_auth(&followers_path, &fan.jwt).await.unwrap();
    expect_error(response, StatusCode::FORBIDDEN, "INVALID_USER_JWT").await;

    let response = server.get_auth(&followers_path, &star.jwt).await.unwrap();
    let followers: FollowPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(followers.page, 1);
    assert_eq!(followers.users.len(), 1);
    assert_eq!(followers.users[0].user_id, fan.user_id);

    let response = server
        .get_auth(
            &format!("/app/users/{}/following?page=0", fan.user_id),
            &fan.jwt,
        )
        .await
        .unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "INVALID_PAGE").await;
}

#[tokio::test]
async fn test_self_follow_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let me = sign_up(&server).await;
    let body = FollowRequest {
        user_id: me.user_id,
        following_id: me.user_id,
    };

    let response = server
        .post_auth("/app/users/follow", &me.jwt, &body)
        .await
        .unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "CANNOT_FOLLOW_SELF").await;
}
