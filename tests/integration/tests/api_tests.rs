//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, API,
};
use reqwest::StatusCode;
use serde_json::json;

async fn signup(server: &TestServer, prefix: &str) -> (SignupRequest, AuthResponse) {
    let request = SignupRequest::unique(prefix);
    let response = server
        .post(&format!("{API}/auth/signup"), &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (request, auth)
}

async fn create_qna(server: &TestServer, token: &str, content: &str) -> PostResponse {
    let response = server
        .post_auth(&format!("{API}/qna"), token, &ContentRequest::new(content))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
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
async fn test_signup_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server, "sign").await;

    assert_eq!(auth.message, "Signup Successful");
    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(auth.user.user_id, request.user_id);
    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.country, "KR");

    let response = server
        .post(&format!("{API}/auth/login"), &LoginRequest::from_signup(&request))
        .await
        .unwrap();
    let login: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.message, "Login Successful");
    assert!(!login.access_token.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_user_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server, "dup").await;

    let response = server
        .post(&format!("{API}/auth/signup"), &request)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "USER_ID_TAKEN");
}

#[tokio::test]
async fn test_signup_rejects_overlong_user_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupRequest::unique("long");
    request.user_id = "u".repeat(31);

    let response = server
        .post(&format!("{API}/auth/signup"), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server, "pw").await;

    let login = LoginRequest {
        user_id: request.user_id,
        password: "not-the-password".to_string(),
    };
    let response = server.post(&format!("{API}/auth/login"), &login).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_refresh_rotates_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server, "rot").await;
    let request = RefreshRequest {
        refresh_token: auth.refresh_token.clone(),
    };

    let response = server
        .post(&format!("{API}/auth/refresh"), &request)
        .await
        .unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(rotated.refresh_token, auth.refresh_token);

    // The presented refresh token is single-use
    let response = server
        .post(&format!("{API}/auth/refresh"), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_user_exists() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server, "ex").await;

    let response = server
        .get(&format!("{API}/auth/exists/{}", request.user_id))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["exists"], true);

    let response = server
        .get(&format!("{API}/auth/exists/{}", unique_user_id("none")))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["exists"], false);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(&format!("{API}/qna"), &ContentRequest::new("hi"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_qna_lifecycle_with_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, alice_auth) = signup(&server, "alice").await;
    let (_, bob_auth) = signup(&server, "bob").await;

    let post = create_qna(&server, &alice_auth.access_token, "hi").await;
    assert_eq!(post.author, alice.user_id);
    assert_eq!(post.post_type, "qa");
    let path = format!("{API}/qna/{}", post.id);

    let response = server
        .put_auth(&path, &bob_auth.access_token, &ContentRequest::new("hijacked"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_POST_AUTHOR");

    let response = server
        .put_auth(&path, &alice_auth.access_token, &ContentRequest::new("hello"))
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.content, "hello");

    let response = server.delete_auth(&path, &bob_auth.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &alice_auth.access_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("{API}/qna?author={}", alice.user_id))
        .await
        .unwrap();
    let feed: Vec<FeedEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.iter().all(|entry| entry.id != post.id));

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_content_length_bounds() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server, "len").await;

    let response = server
        .post_auth(&format!("{API}/qna"), &auth.access_token, &ContentRequest::new(""))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/ox"),
            &auth.access_token,
            &ContentRequest::new("x".repeat(101)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/ox"),
            &auth.access_token,
            &ContentRequest::new("x".repeat(100)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_comments_on_qna() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice_auth) = signup(&server, "cq").await;
    let (bob, bob_auth) = signup(&server, "cb").await;
    let post = create_qna(&server, &alice_auth.access_token, "what is rust?").await;

    let response = server
        .post_auth(
            &format!("{API}/qna/{}/comments", post.id),
            &bob_auth.access_token,
            &ContentRequest::new("a language"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author, bob.user_id);

    let response = server.get(&format!("{API}/qna/{}", post.id)).await.unwrap();
    let detail: QnaDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.post.id, post.id);
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].content, "a language");
}

// ============================================================================
// O/X Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server, "oxa").await;
    let (_, voter) = signup(&server, "oxv").await;

    let response = server
        .post_auth(
            &format!("{API}/ox"),
            &author.access_token,
            &ContentRequest::new("Is Rust fun?"),
        )
        .await
        .unwrap();
    let poll: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let vote_path = format!("{API}/ox/vote/{}", poll.id);

    let response = server
        .post_auth(&vote_path, &voter.access_token, &VoteRequest { vote: true })
        .await
        .unwrap();
    let tally: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((tally.o_count, tally.x_count, tally.voted), (1, 0, true));

    let response = server
        .post_auth(&vote_path, &voter.access_token, &VoteRequest { vote: false })
        .await
        .unwrap();
    let tally: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((tally.o_count, tally.x_count, tally.voted), (0, 0, false));

    let response = server
        .get_auth(&format!("{API}/ox/{}", poll.id), &voter.access_token)
        .await
        .unwrap();
    let entry: FeedEntry = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entry.o_count, Some(0));
    assert_eq!(entry.voted, Some(false));
}

#[tokio::test]
async fn test_vote_on_missing_poll() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server, "oxm").await;

    let response = server
        .post_auth(
            &format!("{API}/ox/vote/{}", i64::MAX),
            &auth.access_token,
            &VoteRequest { vote: true },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_feed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, alice_auth) = signup(&server, "fa").await;
    let (bob, bob_auth) = signup(&server, "fb").await;
    let (_, carol_auth) = signup(&server, "fc").await;

    let response = server
        .post_auth_empty(&format!("{API}/follow/{}", alice.user_id), &bob_auth.access_token)
        .await
        .unwrap();
    let toggle: FollowToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggle.following);
    assert_eq!(toggle.message, "Successfully Followed");

    let post = create_qna(&server, &alice_auth.access_token, "for my followers").await;

    let response = server
        .get_auth(&format!("{API}/qna/following"), &bob_auth.access_token)
        .await
        .unwrap();
    let feed: Vec<FeedEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.iter().any(|entry| entry.id == post.id));

    let response = server
        .get_auth(&format!("{API}/qna/following"), &carol_auth.access_token)
        .await
        .unwrap();
    let feed: Vec<FeedEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.iter().all(|entry| entry.id != post.id));

    let response = server
        .get(&format!("{API}/profile/{}", alice.user_id))
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.user_id, alice.user_id);
    assert_eq!(profile.follower_count, 1);
    assert_eq!(profile.following_count, 0);

    let response = server
        .get(&format!("{API}/follow/follower/{}", alice.user_id))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["result"][0]["userId"], json!(bob.user_id));

    let response = server
        .post_auth_empty(&format!("{API}/follow/{}", alice.user_id), &bob_auth.access_token)
        .await
        .unwrap();
    let toggle: FollowToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggle.following);
}

#[tokio::test]
async fn test_self_follow_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (me, auth) = signup(&server, "self").await;

    let response = server
        .post_auth_empty(&format!("{API}/follow/{}", me.user_id), &auth.access_token)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "SELF_FOLLOW");
}

#[tokio::test]
async fn test_search_marks_followed_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, _) = signup(&server, "sa").await;
    let (_, bob_auth) = signup(&server, "sb").await;

    server
        .post_auth_empty(&format!("{API}/follow/{}", alice.user_id), &bob_auth.access_token)
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("{API}/searching?q={}", alice.user_id),
            &bob_auth.access_token,
        )
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let hits = body["userList"].as_array().expect("userList array");
    let hit = hits
        .iter()
        .find(|hit| hit["id"] == json!(alice.user_id))
        .expect("alice listed");
    assert_eq!(hit["followed"], true);
}

// ============================================================================
// Like / Bookmark Tests
// ============================================================================

#[tokio::test]
async fn test_like_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server, "like").await;
    let post = create_qna(&server, &auth.access_token, "like me").await;
    let mark = MarkRequest {
        post_id: post.id,
        post_type: "qa".to_string(),
    };

    let response = server
        .post_auth(&format!("{API}/like"), &auth.access_token, &mark)
        .await
        .unwrap();
    let toggle: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggle.liked);
    assert_eq!(toggle.message, "Liked successfully");

    let response = server
        .get_auth(&format!("{API}/qna/{}", post.id), &auth.access_token)
        .await
        .unwrap();
    let detail: QnaDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.post.liked);
    assert_eq!(detail.post.like_count, 1);

    let response = server
        .post_auth(&format!("{API}/like"), &auth.access_token, &mark)
        .await
        .unwrap();
    let toggle: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggle.liked);
}

#[tokio::test]
async fn test_bookmarks_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (me, auth) = signup(&server, "bm").await;
    let post = create_qna(&server, &auth.access_token, "keep this").await;

    let response = server
        .post_auth(
            &format!("{API}/bookmark"),
            &auth.access_token,
            &json!({ "postID": post.id, "postType": "qa" }),
        )
        .await
        .unwrap();
    let toggle: BookmarkToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggle.bookmarked);
    assert_eq!(toggle.message, "Bookmarked successfully");

    let response = server
        .get(&format!("{API}/bookmark/{}", me.user_id))
        .await
        .unwrap();
    let listing: SplitPosts<FeedEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.qna.len(), 1);
    assert_eq!(listing.qna[0].id, post.id);
    assert!(listing.ox.is_empty());
}

#[tokio::test]
async fn test_like_missing_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server, "lm").await;
    let mark = MarkRequest {
        post_id: i64::MAX,
        post_type: "ox".to_string(),
    };

    let response = server
        .post_auth(&format!("{API}/like"), &auth.access_token, &mark)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_returns_public_url() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server, "up").await;

    let response = server
        .post_bytes_auth(
            &format!("{API}/uploads/cat.png"),
            &auth.access_token,
            vec![0x89, b'P', b'N', b'G'],
        )
        .await
        .unwrap();
    let upload: UploadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(upload.message, "Successfully Uploaded");
    assert!(upload.url.ends_with(".png"));
}
