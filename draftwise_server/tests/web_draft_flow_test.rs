
use axum::http::StatusCode;
use serde_json::{Value, json};

use draftwise_types::errors::Result;

use crate::test_utils::tests::setup_web_app;

async fn start(client: &reqwest::Client, base: &str, mode: &str) -> (StatusCode, Value) {
    let res = client
        .post(format!("{base}/drafts"))
        .json(&json!({ "mode": mode }))
        .send()
        .await
        .unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

async fn submit(client: &reqwest::Client, base: &str, id: &str, hero: u32) -> (StatusCode, Value) {
    let res = client
        .post(format!("{base}/drafts/{id}/actions"))
        .json(&json!({ "hero_id": hero }))
        .send()
        .await
        .unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_start_draft_returns_session() -> Result<()> {
    let (client, base) = setup_web_app().await?;

    let (status, body) = start(&client, &base, "captains_mode").await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["session_id"].is_string());
    assert_eq!(body["state"]["mode"], "captains_mode");
    assert_eq!(body["state"]["current_slot"], 0);
    assert_eq!(body["state"]["total_slots"], 24);
    assert_eq!(body["state"]["phase"], "ban1");
    assert_eq!(body["state"]["next"]["side"], "radiant");
    assert_eq!(body["state"]["next"]["action"], "ban");
    Ok(())
}

#[tokio::test]
async fn test_unknown_mode_is_bad_request() -> Result<()> {
    let (client, base) = setup_web_app().await?;

    let (status, body) = start(&client, &base, "turbo").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_draft_mode");
    Ok(())
}

#[tokio::test]
async fn test_draft_flow_over_http() -> Result<()> {
    let (client, base) = setup_web_app().await?;
    let (_, body) = start(&client, &base, "all_pick").await;
    let id = body["session_id"].as_str().unwrap().to_string();

    let (status, state) = submit(&client, &base, &id, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state["radiant_picks"], json!([1]));
    assert_eq!(state["current_slot"], 1);

    let recs: Value = client
        .get(format!("{base}/drafts/{id}/recommendations?top_n=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(recs[0]["hero_id"], 2);
    assert_eq!(recs[0]["score"], 5.0);
    assert_eq!(recs[1]["hero_id"], 4);
    assert_eq!(recs.as_array().map(Vec::len), Some(2));

    let (status, body) = submit(&client, &base, &id, 1).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "illegal_action");

    let (status, body) = submit(&client, &base, &id, 999).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "unknown_hero");

    let res = client
        .post(format!("{base}/drafts/{id}/undo"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let state: Value = res.json().await.unwrap();
    assert_eq!(state["current_slot"], 0);

    let res = client
        .post(format!("{base}/drafts/{id}/undo"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "empty_history");

    let probability: Value = client
        .get(format!("{base}/drafts/{id}/win-probability"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(probability["radiant"], 0.5);
    assert_eq!(probability["dire"], 0.5);
    Ok(())
}

#[tokio::test]
async fn test_completed_draft_rejects_actions() -> Result<()> {
    let (client, base) = setup_web_app().await?;
    let (_, body) = start(&client, &base, "ap").await;
    let id = body["session_id"].as_str().unwrap().to_string();

    for hero in 1..=10 {
        let (status, _) = submit(&client, &base, &id, hero).await;
        assert_eq!(status, StatusCode::OK);
    }

    let state: Value = client
        .get(format!("{base}/drafts/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state["is_terminal"], true);
    assert_eq!(state["phase"], "completed");
    assert!(state["next"].is_null());

    let (status, body) = submit(&client, &base, &id, 11).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "terminal_draft");

    let res = client
        .get(format!("{base}/drafts/{id}/recommendations"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn test_end_draft_removes_session() -> Result<()> {
    let (client, base) = setup_web_app().await?;
    let (_, body) = start(&client, &base, "cm").await;
    let id = body["session_id"].as_str().unwrap().to_string();

    let res = client
        .delete(format!("{base}/drafts/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(format!("{base}/drafts/{id}")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "session_not_found");
    Ok(())
}
