mod common;

use common::{spawn_app, spawn_app_with_configuration};
use mock_genai::configuration::get_configuration;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

fn create_jwt(payload: serde_json::Value) -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    let header = json!({"alg": "HS256", "typ": "JWT"});

    let header_b64 = URL_SAFE_NO_PAD.encode(header.to_string());
    let payload_b64 = URL_SAFE_NO_PAD.encode(payload.to_string());
    let signature = "test_signature"; // Signature is never validated

    format!("{}.{}.{}", header_b64, payload_b64, signature)
}

fn bearer_for(user_id: &str) -> String {
    create_jwt(json!({ "sub": user_id }))
}

#[tokio::test]
async fn chat_requires_a_bearer_credential() {
    // 1. Arrange
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // 2. Act
    let list = client
        .get(&format!("{}/projects/p1/chat", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let send = client
        .post(&format!("{}/projects/p1/chat", &app.address))
        .json(&json!({"message": "hi"}))
        .send()
        .await
        .expect("Failed to execute request.");

    // 3. Assert
    for response in [list, send] {
        assert_eq!(StatusCode::UNAUTHORIZED, response.status());
        let body = response
            .json::<serde_json::Value>()
            .await
            .expect("Response should be valid JSON");
        assert_eq!("Unauthorized", body["error"]);
    }
}

#[tokio::test]
async fn an_unparseable_token_is_unauthorized() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth("definitely-not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!("Unauthorized", body["error"]);
}

#[tokio::test]
async fn a_token_without_a_usable_subject_is_rejected() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for payload in [json!({"name": "x"}), json!({"sub": ""}), json!({"sub": 42})] {
        let response = client
            .get(&format!("{}/projects/p1/chat", &app.address))
            .bearer_auth(create_jwt(payload.clone()))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            StatusCode::UNAUTHORIZED,
            response.status(),
            "payload accepted: {}",
            payload
        );
        let body = response
            .json::<serde_json::Value>()
            .await
            .expect("Response should be valid JSON");
        assert_eq!("Invalid user ID", body["error"]);
    }
}

#[tokio::test]
async fn a_fresh_thread_lists_no_messages() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let messages = response
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!(0, messages.as_array().expect("Response should be a list").len());
}

#[tokio::test]
async fn sending_returns_the_user_message_and_a_finalized_reply() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .json(&json!({"message": "hello"}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let messages = response
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    let messages = messages.as_array().expect("Response should be a list");
    assert_eq!(2, messages.len());

    let user_message = &messages[0];
    assert_eq!("hello", user_message["content"]);
    assert_eq!("u1", user_message["userId"]);
    assert_eq!(false, user_message["loading"]);

    let ai_message = &messages[1];
    assert!(ai_message["userId"].is_null());
    assert_eq!(false, ai_message["loading"]);
    let reply = ai_message["content"].as_str().expect("content missing");
    assert!(
        (100..=1000).contains(&reply.len()),
        "reply length {} out of bounds",
        reply.len()
    );
}

#[tokio::test]
async fn sent_messages_show_up_when_listing_the_thread() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    client
        .post(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .json(&json!({"message": "hello"}))
        .send()
        .await
        .expect("Failed to execute request.");

    let response = client
        .get(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .send()
        .await
        .expect("Failed to execute request.");

    let messages = response
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!(2, messages.as_array().expect("Response should be a list").len());
}

#[tokio::test]
async fn a_malformed_body_is_rejected_before_anything_is_stored() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .header("Content-Type", "application/json")
        .body(r#"{"message": "#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!("Invalid message format", body["error"]);

    let listed = client
        .get(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .send()
        .await
        .expect("Failed to execute request.")
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!(0, listed.as_array().expect("Response should be a list").len());
}

#[tokio::test]
async fn threads_are_isolated_between_identities() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    client
        .post(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .json(&json!({"message": "from u1"}))
        .send()
        .await
        .expect("Failed to execute request.");

    let other = client
        .get(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u2"))
        .send()
        .await
        .expect("Failed to execute request.")
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!(0, other.as_array().expect("Response should be a list").len());

    let own = client
        .get(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .send()
        .await
        .expect("Failed to execute request.")
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!(2, own.as_array().expect("Response should be a list").len());
}

#[tokio::test]
async fn the_placeholder_is_listed_while_the_reply_is_pending() {
    // 1. Arrange: a delay long enough to probe mid-generation
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.chat.response_delay_ms = 500;
    let app = spawn_app_with_configuration(configuration).await;
    let client = reqwest::Client::new();

    // 2. Act: send, and list the thread while the reply is still pending
    let send = client
        .post(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .json(&json!({"message": "hello"}))
        .send();
    let probe = async {
        tokio::time::sleep(Duration::from_millis(150)).await;
        client
            .get(&format!("{}/projects/p1/chat", &app.address))
            .bearer_auth(bearer_for("u1"))
            .send()
            .await
    };
    let (send, probe) = tokio::join!(send, probe);

    // 3. Assert: the probe saw the loading placeholder, the sender the final reply
    let pending = probe
        .expect("Failed to execute request.")
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    let pending = pending.as_array().expect("Response should be a list");
    assert_eq!(2, pending.len());
    let placeholder = pending
        .iter()
        .find(|m| m["userId"].is_null())
        .expect("placeholder not visible mid-generation");
    assert_eq!(true, placeholder["loading"]);
    assert_eq!("", placeholder["content"]);

    let finalized = send
        .expect("Failed to execute request.")
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    let reply = &finalized.as_array().expect("Response should be a list")[1];
    assert_eq!(placeholder["id"], reply["id"]);
    assert_eq!(placeholder["timestamp"], reply["timestamp"]);
    assert_eq!(false, reply["loading"]);
    assert!(!reply["content"].as_str().expect("content missing").is_empty());
}

#[tokio::test]
async fn an_unauthorized_send_leaves_the_thread_untouched() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/projects/p1/chat", &app.address))
        .json(&json!({"message": "sneaky"}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::UNAUTHORIZED, response.status());

    let listed = client
        .get(&format!("{}/projects/p1/chat", &app.address))
        .bearer_auth(bearer_for("u1"))
        .send()
        .await
        .expect("Failed to execute request.")
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!(0, listed.as_array().expect("Response should be a list").len());
}
