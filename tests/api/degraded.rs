//! A failing backend never fails the request.

use serde_json::{json, Value};
use winloss::CounterStore;

use crate::support::{namespace, start_server, DownKv};

async fn start_down() -> String {
    start_server(CounterStore::new(DownKv, &namespace())).await
}

#[tokio::test]
async fn read_serves_defaults() {
    let base = start_down().await;

    let resp = reqwest::get(format!("{base}/api/v1/counters/team-a")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["wins"], 0);
    assert_eq!(body["pretty_name"], "team a");
}

#[tokio::test]
async fn unpersisted_mutation_still_reports_success() {
    let base = start_down().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/v1/counters/team-a/win"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["wins"], 1);

    let resp = client
        .delete(format!("{base}/api/v1/counters/team-a/loss"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["losses"], 0);
}

#[tokio::test]
async fn list_and_index_are_empty() {
    let base = start_down().await;

    let body: Value = reqwest::get(format!("{base}/api/v1/counters"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!([]));

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().contains("No counters yet."));
}

#[tokio::test]
async fn delete_still_answers() {
    let base = start_down().await;
    let resp = reqwest::Client::new()
        .delete(format!("{base}/api/v1/counters/team-a"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}
