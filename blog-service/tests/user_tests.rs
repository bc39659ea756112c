mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/user")
        .json(&json!({
            "name": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "'nicola' created successfully");
}

#[tokio::test]
async fn test_register_user_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post("/api/v1/user")
        .json(&json!({
            "name": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Same email, different name
    let response = app
        .post("/api/v1/user")
        .json(&json!({
            "name": "nicola2",
            "email": "nicola@example.com",
            "password": "pass_word!2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Email already taken!");
}

#[tokio::test]
async fn test_register_user_invalid_name() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/user")
        .json(&json!({
            "name": "nic",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Name must be 5 or more characters long");

    let response = app
        .post("/api/v1/user")
        .json(&json!({
            "name": "n".repeat(65),
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Name must be 64 or fewer characters long");
}

#[tokio::test]
async fn test_register_user_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/user")
        .json(&json!({
            "name": "nicola",
            "email": "not-an-email",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid email format"));
}

#[tokio::test]
async fn test_register_user_short_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/user")
        .json(&json!({
            "name": "nicola",
            "email": "nicola@example.com",
            "password": "short"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Password must be 8 or more characters long");
}

#[tokio::test]
async fn test_register_user_missing_name() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/user")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Name is required");
}

#[tokio::test]
async fn test_concurrent_registrations_one_winner() {
    let app = TestApp::spawn().await;

    let mut handles = Vec::new();
    for i in 0..5 {
        let client = app.api_client.clone();
        let url = format!("{}/api/v1/user", app.address);
        handles.push(tokio::spawn(async move {
            client
                .post(&url)
                .json(&json!({
                    "name": format!("nicola_{}", i),
                    "email": "nicola@example.com",
                    "password": "pass_word!"
                }))
                .send()
                .await
                .expect("Failed to execute request")
                .status()
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.expect("Registration task panicked") {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => {}
            other => panic!("Unexpected status: {}", other),
        }
    }

    // The unique index arbitrates; every race has exactly one winner
    assert_eq!(created, 1);
}

#[tokio::test]
async fn test_get_user_with_posts() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;
    let user_id = app.user_id_of(&token);

    for title in ["First post", "Second post"] {
        let response = app
            .post_authenticated("/api/v1/posts", &token)
            .json(&json!({
                "title": title,
                "content": "Some content",
                "published": true
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .get_authenticated(&format!("/api/v1/user/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], user_id);
    assert_eq!(body["name"], "nicola");
    assert_eq!(body["email"], "nicola@example.com");
    assert!(body["created_at"].is_string());

    let posts = body["posts"].as_array().expect("Missing posts array");
    assert_eq!(posts.len(), 2);

    let titles: Vec<&str> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert!(titles.contains(&"First post"));
    assert!(titles.contains(&"Second post"));

    // Credentials never appear in the profile
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .get_authenticated("/api/v1/user/999999", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User does not exist!");
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .get_authenticated("/api/v1/user/not_a_number", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("Invalid user id"));
}

#[tokio::test]
async fn test_update_user_name() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;
    let user_id = app.user_id_of(&token);

    let response = app
        .patch_authenticated(&format!("/api/v1/user/{}", user_id), &token)
        .json(&json!({ "name": "renamed author" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "'renamed author' edited successfully");

    // Untouched fields survive the partial update
    let response = app
        .get_authenticated(&format!("/api/v1/user/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "renamed author");
    assert_eq!(body["email"], "nicola@example.com");
}

#[tokio::test]
async fn test_update_user_duplicate_email() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;
    let user_id = app.user_id_of(&token);

    app.post("/api/v1/user")
        .json(&json!({
            "name": "other_author",
            "email": "other@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .patch_authenticated(&format!("/api/v1/user/{}", user_id), &token)
        .json(&json!({ "email": "other@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Email already taken!");
}

#[tokio::test]
async fn test_update_user_password_change() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "Original_pass!")
        .await;
    let user_id = app.user_id_of(&token);

    let response = app
        .patch_authenticated(&format!("/api/v1/user/{}", user_id), &token)
        .json(&json!({ "password": "Updated_pass!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    // The old password no longer authenticates
    let response = app
        .post("/api/v1/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Original_pass!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The new one does
    let response = app
        .post("/api/v1/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Updated_pass!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_user_cascades_posts() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;
    let user_id = app.user_id_of(&token);

    let response = app
        .post_authenticated("/api/v1/posts", &token)
        .json(&json!({
            "title": "Doomed post",
            "content": "Going down with the account",
            "published": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let post_id = body["post"]["id"].as_i64().expect("Missing post id");

    let response = app
        .delete_authenticated(&format!("/api/v1/user/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Deleted 'nicola' successfully");

    // The token is still signed correctly, so it passes the middleware;
    // both the user and the cascaded post are gone
    let response = app
        .get_authenticated(&format!("/api/v1/user/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User does not exist!");

    let response = app
        .get_authenticated(&format!("/api/v1/posts/{}", post_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Post does not exist!");
}
