use warden_axum::MessageResponse;

use crate::helpers::{TestApp, get_random_username};

#[tokio::test]
async fn should_return_201_if_valid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&serde_json::json!({
            "username": "testuser",
            "password": "password"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(
        response
            .json::<MessageResponse>()
            .await
            .expect("Could not deserialize response body"),
        MessageResponse::new("User registered successfully")
    );
}

#[tokio::test]
async fn should_return_400_if_username_already_exists() {
    let app = TestApp::new().await;
    let body = serde_json::json!({
        "username": "testuser",
        "password": "password"
    });

    let first = app.post_register(&body).await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.post_register(&body).await;
    assert_eq!(second.status().as_u16(), 400);
    assert_eq!(
        second
            .json::<MessageResponse>()
            .await
            .expect("Could not deserialize response body"),
        MessageResponse::new("Username already exists")
    );
}

#[tokio::test]
async fn should_keep_original_password_when_duplicate_is_rejected() {
    let app = TestApp::new().await;
    let username = get_random_username();

    app.post_register(&serde_json::json!({ "username": username, "password": "original" }))
        .await;
    let response = app
        .post_register(&serde_json::json!({ "username": username, "password": "replacement" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let original = app
        .post_login(&serde_json::json!({ "username": username, "password": "original" }))
        .await;
    assert_eq!(original.status().as_u16(), 200);

    let replacement = app
        .post_login(&serde_json::json!({ "username": username, "password": "replacement" }))
        .await;
    assert_eq!(replacement.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        serde_json::json!({ "username": "", "password": "password" }),
        serde_json::json!({ "username": "   ", "password": "password" }),
        serde_json::json!({ "username": get_random_username(), "password": "" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::new().await;

    let test_cases = [
        serde_json::json!({ "password": "password" }),
        serde_json::json!({ "username": get_random_username() }),
        serde_json::json!({ "username": true, "password": "password" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn concurrent_registrations_admit_exactly_one() {
    let app = TestApp::new().await;
    let body = serde_json::json!({
        "username": get_random_username(),
        "password": "password"
    });

    let responses = register_concurrently(&app, &body, 8).await;
    let created = responses.iter().filter(|status| **status == 201).count();
    let rejected = responses.iter().filter(|status| **status == 400).count();

    assert_eq!(created, 1);
    assert_eq!(rejected, 7);
}

async fn register_concurrently(app: &TestApp, body: &serde_json::Value, count: usize) -> Vec<u16> {
    let mut handles = Vec::with_capacity(count);
    for _ in 0..count {
        let client = app.http_client.clone();
        let url = format!("{}/register", app.address);
        let body = body.clone();
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&body)
                .send()
                .await
                .expect("Failed to execute request.")
                .status()
                .as_u16()
        }));
    }

    let mut statuses = Vec::with_capacity(count);
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    statuses
}
