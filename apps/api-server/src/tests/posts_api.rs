//! HTTP contract tests for posts, comments, and reactions.

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use socialite_core::domain::Post;
use socialite_core::ports::BaseRepository;

use super::fixtures::{TEST_EMAIL, auth_header, seeded_post, seeded_user, test_app, test_context};

#[actix_web::test]
async fn listing_requires_authentication() {
    let ctx = test_context();
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::get().uri("/api/posts/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Authentication credentials were not provided.");
}

#[actix_web::test]
async fn create_post_takes_author_from_the_token() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let app = test::init_service(test_app(&ctx)).await;

    // A spoofed author field in the body must be ignored.
    let req = test::TestRequest::post()
        .uri("/api/posts/")
        .insert_header(auth_header(&access))
        .set_json(json!({
            "content": "first post",
            "author_id": Uuid::new_v4(),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["author_id"], user.id.to_string());
    assert_eq!(body["content"], "first post");
}

#[actix_web::test]
async fn create_post_requires_content() {
    let ctx = test_context();
    let (_, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::post()
        .uri("/api/posts/")
        .insert_header(auth_header(&access))
        .set_json(json!({ "content": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "content is required.");
}

#[actix_web::test]
async fn listing_orders_newest_first() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;

    // Insert the newer post first so ordering cannot come from insertion
    // order alone.
    seeded_post(&ctx, &user, "newer").await;
    let mut older = Post::new(user.id, "older".to_string());
    older.created_at = Utc::now() - Duration::minutes(5);
    ctx.state.posts.insert(older).await.unwrap();

    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::get()
        .uri("/api/posts/")
        .insert_header(auth_header(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["content"], "newer");
    assert_eq!(posts[1]["content"], "older");
}

#[actix_web::test]
async fn get_post_returns_the_stored_row() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &user, "hello").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], post.id.to_string());
    assert_eq!(body["author_id"], user.id.to_string());
    assert_eq!(body["content"], "hello");
}

#[actix_web::test]
async fn missing_post_is_not_found() {
    let ctx = test_context();
    let (_, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}/", Uuid::new_v4()))
        .insert_header(auth_header(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Not found.");
}

#[actix_web::test]
async fn malformed_post_id_is_not_found() {
    let ctx = test_context();
    let (_, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::get()
        .uri("/api/posts/not-a-uuid/")
        .insert_header(auth_header(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Not found.");
}

#[actix_web::test]
async fn put_rewrites_the_content() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &user, "draft").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({ "content": "final" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "final");
    assert_eq!(body["created_at"], json!(post.created_at));

    let stored = ctx.state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.content, "final");
    assert_eq!(stored.created_at, post.created_at);
}

#[actix_web::test]
async fn put_requires_content() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &user, "draft").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "content is required.");
}

#[actix_web::test]
async fn any_authenticated_user_can_rewrite_a_post() {
    let ctx = test_context();
    let (author, _) = seeded_user(&ctx, TEST_EMAIL).await;
    let (_, other_access) = seeded_user(&ctx, "mallory@example.com").await;
    let post = seeded_post(&ctx, &author, "original").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&other_access))
        .set_json(json!({ "content": "rewritten by someone else" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Current behavior: no ownership check on update.
    assert_eq!(resp.status(), StatusCode::OK);
    let stored = ctx.state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.content, "rewritten by someone else");
    assert_eq!(stored.author_id, author.id);
}

#[actix_web::test]
async fn patch_without_content_leaves_the_post_unchanged() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &user, "as written").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "as written");
}

#[actix_web::test]
async fn patch_rejects_blank_content() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &user, "as written").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({ "content": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "content is required.");
}

#[actix_web::test]
async fn delete_post_then_lookups_fail() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &user, "short lived").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&access))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}/", post.id))
        .insert_header(auth_header(&access))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn comment_is_created_for_the_requester() {
    let ctx = test_context();
    let (author, _) = seeded_user(&ctx, TEST_EMAIL).await;
    let (commenter, access) = seeded_user(&ctx, "bob@example.com").await;
    let post = seeded_post(&ctx, &author, "discuss").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/comment/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({ "content": "nice one" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["post_id"], post.id.to_string());
    assert_eq!(body["author_id"], commenter.id.to_string());
    assert_eq!(body["content"], "nice one");
    assert_eq!(ctx.comments.count(), 1);
}

#[actix_web::test]
async fn comment_on_missing_post_persists_nothing() {
    let ctx = test_context();
    let (_, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/comment/", Uuid::new_v4()))
        .insert_header(auth_header(&access))
        .set_json(json!({ "content": "into the void" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(ctx.comments.count(), 0);
}

#[actix_web::test]
async fn unauthenticated_comment_persists_nothing() {
    let ctx = test_context();
    let (author, _) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &author, "members only").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/comment/", post.id))
        .set_json(json!({ "content": "drive-by" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Authentication credentials were not provided.");
    assert_eq!(ctx.comments.count(), 0);
}

#[actix_web::test]
async fn comment_requires_content() {
    let ctx = test_context();
    let (author, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &author, "discuss").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/comment/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({ "content": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "content is required.");
    assert_eq!(ctx.comments.count(), 0);
}

#[actix_web::test]
async fn react_rejects_unknown_choice() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &user, "react to me").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/react/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({ "reaction_type": "dislike" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "\"dislike\" is not a valid choice.");
    assert_eq!(ctx.reactions.count(), 0);
}

#[actix_web::test]
async fn react_creates_then_swaps_in_place() {
    let ctx = test_context();
    let (user, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let post = seeded_post(&ctx, &user, "react to me").await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/react/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({ "reaction_type": "like" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["reaction_type"], "like");
    let first_id = body["id"].as_str().unwrap().to_string();

    // Reacting again swaps the type on the same row.
    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/react/", post.id))
        .insert_header(auth_header(&access))
        .set_json(json!({ "reaction_type": "love" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["reaction_type"], "love");
    assert_eq!(body["id"], first_id);
    assert_eq!(ctx.reactions.count(), 1);
}

#[actix_web::test]
async fn react_on_missing_post_is_not_found() {
    let ctx = test_context();
    let (_, access) = seeded_user(&ctx, TEST_EMAIL).await;
    let app = test::init_service(test_app(&ctx)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/react/", Uuid::new_v4()))
        .insert_header(auth_header(&access))
        .set_json(json!({ "reaction_type": "like" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(ctx.reactions.count(), 0);
}

#[actix_web::test]
async fn each_user_gets_their_own_reaction_row() {
    let ctx = test_context();
    let (author, first_access) = seeded_user(&ctx, TEST_EMAIL).await;
    let (_, second_access) = seeded_user(&ctx, "bob@example.com").await;
    let post = seeded_post(&ctx, &author, "popular").await;
    let app = test::init_service(test_app(&ctx)).await;

    for access in [&first_access, &second_access] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/react/", post.id))
            .insert_header(auth_header(access))
            .set_json(json!({ "reaction_type": "haha" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    assert_eq!(ctx.reactions.count(), 2);
}
