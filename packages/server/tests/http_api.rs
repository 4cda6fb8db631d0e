//! HTTP API integration tests.
//!
//! Exercises the REST surface end to end: room creation, resolution, the
//! join race outcome, swipe recording, and match listing.

mod fixtures;
use fixtures::TestServer;

use serde_json::json;

#[tokio::test]
async fn test_health_endpoint() {
    // given:
    let server = TestServer::start(19080).await;
    let client = reqwest::Client::new();

    // when:
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then:
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_room_returns_code_and_participant() {
    // given:
    let server = TestServer::start(19081).await;
    let client = reqwest::Client::new();

    // when:
    let response = client
        .post(format!("{}/api/rooms", server.base_url()))
        .json(&json!({"allowed_sources": ["Netflix", "Hulu"]}))
        .send()
        .await
        .expect("Failed to send request");

    // then:
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let code = body["code"].as_str().expect("code should be a string");
    assert_eq!(code.len(), 6);
    assert!(body["participant_id"].as_str().is_some());

    // The new room resolves as waiting with the requested filter
    let room: serde_json::Value = client
        .get(format!("{}/api/rooms/{}", server.base_url(), code))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(room["state"], "waiting");
    assert_eq!(room["allowed_sources"], json!(["Netflix", "Hulu"]));
}

#[tokio::test]
async fn test_create_room_empty_sources_rejected() {
    // given:
    let server = TestServer::start(19082).await;
    let client = reqwest::Client::new();

    // when:
    let response = client
        .post(format!("{}/api/rooms", server.base_url()))
        .json(&json!({"allowed_sources": []}))
        .send()
        .await
        .expect("Failed to send request");

    // then:
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_get_room_unknown_code_404() {
    // given:
    let server = TestServer::start(19083).await;
    let client = reqwest::Client::new();

    // when: a well-formed code that no room holds
    let response = client
        .get(format!("{}/api/rooms/MAKO42", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then:
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_get_room_malformed_code_400() {
    // given:
    let server = TestServer::start(19084).await;
    let client = reqwest::Client::new();

    // when: a code outside the alphabet pattern
    let response = client
        .get(format!("{}/api/rooms/AAAAAA", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then:
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_join_then_spectate() {
    // given: a freshly created room
    let server = TestServer::start(19085).await;
    let client = reqwest::Client::new();
    let created: serde_json::Value = client
        .post(format!("{}/api/rooms", server.base_url()))
        .json(&json!({"allowed_sources": ["Netflix"]}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let code = created["code"].as_str().unwrap();

    // when: two sequential join attempts
    let first: serde_json::Value = client
        .post(format!("{}/api/rooms/{}/join", server.base_url(), code))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let second: serde_json::Value = client
        .post(format!("{}/api/rooms/{}/join", server.base_url(), code))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    // then: the first wins slot B, the second spectates an active room
    assert_eq!(first["outcome"], "joined");
    assert!(first["participant_id"].as_str().is_some());
    assert_eq!(first["room"]["state"], "active");
    assert_eq!(second["outcome"], "spectator");
    assert_eq!(second["room"]["state"], "active");
}

#[tokio::test]
async fn test_concurrent_joins_exactly_one_winner() {
    // given: a waiting room
    let server = TestServer::start(19086).await;
    let client = reqwest::Client::new();
    let created: serde_json::Value = client
        .post(format!("{}/api/rooms", server.base_url()))
        .json(&json!({"allowed_sources": ["Netflix"]}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let code = created["code"].as_str().unwrap().to_string();

    // when: 8 joins race over HTTP
    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let url = format!("{}/api/rooms/{}/join", server.base_url(), code);
        handles.push(tokio::spawn(async move {
            let body: serde_json::Value = client
                .post(url)
                .send()
                .await
                .expect("Failed to send request")
                .json()
                .await
                .expect("Failed to parse JSON");
            body["outcome"] == "joined"
        }));
    }

    // then: exactly one joiner is assigned slot B
    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}

#[tokio::test]
async fn test_swipe_and_match_flow() {
    // given: an active room
    let server = TestServer::start(19087).await;
    let client = reqwest::Client::new();
    let created: serde_json::Value = client
        .post(format!("{}/api/rooms", server.base_url()))
        .json(&json!({"allowed_sources": ["Netflix"]}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let code = created["code"].as_str().unwrap();
    let creator = created["participant_id"].as_str().unwrap();

    let joined: serde_json::Value = client
        .post(format!("{}/api/rooms/{}/join", server.base_url(), code))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let partner = joined["participant_id"].as_str().unwrap();

    let swipe_url = format!("{}/api/rooms/{}/swipes", server.base_url(), code);

    // when: the creator likes item 7
    let first: serde_json::Value = client
        .post(&swipe_url)
        .json(&json!({"participant_id": creator, "item_id": "7", "direction": "right"}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    // then: no match yet
    assert_eq!(first["matched"], false);

    // when: the partner likes item 7 too
    let second: serde_json::Value = client
        .post(&swipe_url)
        .json(&json!({"participant_id": partner, "item_id": "7", "direction": "right"}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    // then: the ack reports the match and the list endpoint agrees
    assert_eq!(second["matched"], true);

    let matches: serde_json::Value = client
        .get(format!("{}/api/rooms/{}/matches", server.base_url(), code))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(matches["items"], json!(["7"]));
}

#[tokio::test]
async fn test_swipe_from_unknown_participant_forbidden() {
    // given: an active room and a made-up participant id
    let server = TestServer::start(19088).await;
    let client = reqwest::Client::new();
    let created: serde_json::Value = client
        .post(format!("{}/api/rooms", server.base_url()))
        .json(&json!({"allowed_sources": ["Netflix"]}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let code = created["code"].as_str().unwrap();
    client
        .post(format!("{}/api/rooms/{}/join", server.base_url(), code))
        .send()
        .await
        .expect("Failed to send request");

    // when:
    let response = client
        .post(format!("{}/api/rooms/{}/swipes", server.base_url(), code))
        .json(&json!({
            "participant_id": "00000000-0000-4000-8000-000000000000",
            "item_id": "7",
            "direction": "right"
        }))
        .send()
        .await
        .expect("Failed to send request");

    // then:
    assert_eq!(response.status(), 403);
}
