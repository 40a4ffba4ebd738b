//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

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
// Single-Post View Tests
// ============================================================================

#[tokio::test]
async fn test_anonymous_session_counts_once() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, author) = seed_author(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &author, None, true).await.unwrap();
    let path = format!("/api/v1/posts/{}", post.id);

    let first = server.get(&path).await.unwrap();
    assert!(first.headers().get("set-cookie").is_some());
    let page: PostPage = assert_json(first, StatusCode::OK).await.unwrap();
    assert_eq!(page.post.visit_count, 1);
    assert_eq!(page.views.views_range, "7");
    assert_eq!(page.views.series.len(), 7);
    assert_eq!(page.views.series[6].views, 1);
    assert_eq!(page.views.series[6].height_pct, 100);

    // Same cookie, same session
    let again: PostPage = assert_json(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(again.post.visit_count, 1);

    // New session counts again
    let other: PostPage = assert_json(server.get_fresh(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(other.post.visit_count, 2);
    assert_eq!(other.views.total, 2);
    assert_eq!(visit_count(&server.pool, post.id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_signed_in_reader_counts_once_across_sessions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, author) = seed_author(&server.pool).await.unwrap();
    let reader = seed_reader(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &author, None, true).await.unwrap();
    let token = server.token_for(reader.id).unwrap();
    let path = format!("/api/v1/posts/{}", post.id);

    for _ in 0..3 {
        let response = server.get_auth(&path, &token).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    assert_eq!(visit_count(&server.pool, post.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_author_view_not_counted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (user, author) = seed_author(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &author, None, true).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &token)
        .await
        .unwrap();
    let page: PostPage = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.post.visit_count, 0);
    assert!(!page.can_like);
    assert_eq!(visit_count(&server.pool, post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_chart_refresh_does_not_count() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, author) = seed_author(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &author, None, true).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}?views_range=3&partial=1", post.id))
        .await
        .unwrap();
    let chart: ViewChart = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(chart.views_range, "3");
    assert_eq!(chart.views_range_label, "Last 3 days");
    assert!(chart.show_views_likes);
    assert_eq!(chart.series.len(), 3);
    assert_eq!(chart.total, 0);
    assert_eq!(visit_count(&server.pool, post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_concurrent_first_views_all_counted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, author) = seed_author(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &author, None, true).await.unwrap();
    let path = format!("/api/v1/posts/{}", post.id);

    // No cookie store: every request mints its own session
    let url = server.url(&path);
    let mut requests = tokio::task::JoinSet::new();
    for _ in 0..10 {
        requests.spawn(reqwest::get(url.clone()));
    }
    while let Some(response) = requests.join_next().await {
        assert_status(response.unwrap().unwrap(), StatusCode::OK)
            .await
            .unwrap();
    }

    assert_eq!(visit_count(&server.pool, post.id).await.unwrap(), 10);
}

#[tokio::test]
async fn test_hidden_post_is_not_found_for_readers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (user, author) = seed_author(&server.pool).await.unwrap();
    let draft = seed_post(&server.pool, &author, None, false).await.unwrap();
    let path = format!("/api/v1/posts/{}", draft.id);

    let hidden: ErrorBody = assert_json(server.get(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    let missing: ErrorBody = assert_json(
        server.get("/api/v1/posts/1").await.unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await
    .unwrap();
    assert_eq!(hidden.error.code, missing.error.code);

    // The author still sees the draft, with engagement suppressed
    let token = server.token_for(user.id).unwrap();
    let page: PostPage = assert_json(
        server.get_auth(&path, &token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!page.views.show_views_likes);
    assert_eq!(page.views.total, 0);
    assert!(page.views.series.is_empty());
}

#[tokio::test]
async fn test_related_posts_exclude_current() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, author) = seed_author(&server.pool).await.unwrap();
    let older = seed_post(&server.pool, &author, None, true).await.unwrap();
    let post = seed_post(&server.pool, &author, None, true).await.unwrap();
    seed_post(&server.pool, &author, None, false).await.unwrap();

    let page: PostPage = assert_json(
        server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let ids: Vec<&str> = page.related.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![older.id.to_string().as_str()]);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_toggle_cycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, writer) = seed_author(&server.pool).await.unwrap();
    let (reader, _) = seed_author(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &writer, None, true).await.unwrap();
    let token = server.token_for(reader.id).unwrap();
    let path = format!("/api/v1/posts/{}/reactions", post.id);

    let liked: ReactionToggle = assert_json(
        server.post_auth(&path, &token, &json!({})).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(liked.liked);
    assert_eq!(liked.reaction.as_deref(), Some("like"));
    assert_eq!(liked.likes_count, 1);

    let page: PostPage = assert_json(
        server
            .get_auth(&format!("/api/v1/posts/{}", post.id), &token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(page.can_like);
    assert!(page.user_has_liked);
    assert_eq!(page.likes_count, 1);

    let disliked: ReactionToggle = assert_json(
        server
            .post_auth(&path, &token, &json!({ "reaction": "dislike" }))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!disliked.liked);
    assert_eq!(disliked.reaction.as_deref(), Some("dislike"));
    assert_eq!(disliked.likes_count, 0);

    let removed: ReactionToggle = assert_json(
        server
            .post_auth(&path, &token, &json!({ "reaction": "dislike" }))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!removed.liked);
    assert_eq!(removed.reaction, None);
}

#[tokio::test]
async fn test_reaction_preconditions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (writer_user, writer) = seed_author(&server.pool).await.unwrap();
    let reader = seed_reader(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &writer, None, true).await.unwrap();
    let path = format!("/api/v1/posts/{}/reactions", post.id);

    let anonymous: ErrorBody = assert_json(
        server.post(&path, &json!({})).await.unwrap(),
        StatusCode::UNAUTHORIZED,
    )
    .await
    .unwrap();
    assert_eq!(anonymous.error.code, "AUTHENTICATION_REQUIRED");

    // A user without an author profile cannot react either
    let reader_token = server.token_for(reader.id).unwrap();
    let no_profile: ErrorBody = assert_json(
        server.post_auth(&path, &reader_token, &json!({})).await.unwrap(),
        StatusCode::UNAUTHORIZED,
    )
    .await
    .unwrap();
    assert_eq!(no_profile.error.code, "AUTHENTICATION_REQUIRED");

    let own_token = server.token_for(writer_user.id).unwrap();
    let own: ErrorBody = assert_json(
        server.post_auth(&path, &own_token, &json!({})).await.unwrap(),
        StatusCode::BAD_REQUEST,
    )
    .await
    .unwrap();
    assert_eq!(own.error.code, "SELF_REACTION");
    let details = own.error.details.unwrap();
    assert_eq!(details["liked"], false);
    assert_eq!(details["likes_count"], 0);
}

#[tokio::test]
async fn test_reaction_on_missing_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (reader, _) = seed_author(&server.pool).await.unwrap();
    let token = server.token_for(reader.id).unwrap();

    let response = server
        .post_auth("/api/v1/posts/1/reactions", &token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment and Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_comment_awaits_approval() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, author) = seed_author(&server.pool).await.unwrap();
    let reader = seed_reader(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &author, None, true).await.unwrap();
    let token = server.token_for(reader.id).unwrap();
    let path = format!("/api/v1/posts/{}/comments", post.id);

    let created: serde_json::Value = assert_json(
        server
            .post_auth(&path, &token, &json!({ "body": "  Nice post!  " }))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(created["comment"]["body"], "Nice post!");
    assert_eq!(created["comment"]["name"], reader.username.as_str());
    assert_eq!(created["comment"]["is_approved"], false);

    let page: serde_json::Value = assert_json(
        server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(page["comments"], json!([]));

    let empty = server
        .post_auth(&path, &token, &json!({ "body": "   " }))
        .await
        .unwrap();
    assert_status(empty, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_subscription_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let email = format!("reader_{}@example.com", next_id());

    let first: Subscription = assert_json(
        server
            .post("/api/v1/subscriptions", &json!({ "email": email }))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(first.subscribed);
    assert!(!first.already_subscribed);

    let second: Subscription = assert_json(
        server
            .post("/api/v1/subscriptions", &json!({ "email": email.to_uppercase() }))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(second.already_subscribed);
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_author_profile_totals_views() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (user, author) = seed_author(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &author, None, true).await.unwrap();
    seed_post(&server.pool, &author, None, false).await.unwrap();

    server
        .get_fresh(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();

    let profile: AuthorProfile = assert_json(
        server
            .get(&format!("/api/v1/authors/{}", user.username))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(profile.posts.len(), 1);
    assert_eq!(profile.total_views, 1);

    let unknown = server.get("/api/v1/authors/nobody-here").await.unwrap();
    assert_status(unknown, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_category_page_and_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, author) = seed_author(&server.pool).await.unwrap();
    let category = seed_category(&server.pool).await.unwrap();
    let post = seed_post(&server.pool, &author, Some(&category), true)
        .await
        .unwrap();

    let page: serde_json::Value = assert_json(
        server
            .get(&format!("/api/v1/categories/{}/posts", category.slug))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(page["category"]["slug"], category.slug.as_str());
    assert_eq!(page["posts"]["data"][0]["id"], post.id.to_string());

    let results: serde_json::Value = assert_json(
        server
            .get(&format!("/api/v1/search?q={}", post.title.to_lowercase().replace(' ', "+")))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(results["posts"][0]["id"], post.id.to_string());

    let missing = server.get("/api/v1/categories/no-such-slug/posts").await.unwrap();
    assert_status(missing, StatusCode::NOT_FOUND).await.unwrap();
}
