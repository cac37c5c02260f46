use reqwest::Method;
use serde_json::{json, Value};
use winloss::KvBackend;

use crate::support::start_memory;

async fn send(client: &reqwest::Client, method: Method, url: String) -> Value {
    let resp = client.request(method, url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn unknown_counter_reads_as_zero() {
    let (base, kv) = start_memory().await;

    let body: Value = reqwest::get(format!("{base}/api/v1/counters/team-a"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        body,
        json!({ "name": "team-a", "pretty_name": "team a", "wins": 0, "losses": 0, "draws": 0 })
    );
    assert!(kv.is_empty().unwrap(), "reading must not create the counter");
}

#[tokio::test]
async fn three_wins_then_get() {
    let (base, _kv) = start_memory().await;
    let client = reqwest::Client::new();

    for expected in 1..=3 {
        let body = send(&client, Method::PUT, format!("{base}/api/v1/counters/team-a/win")).await;
        assert_eq!(body["wins"], expected);
    }

    let body = send(&client, Method::GET, format!("{base}/api/v1/counters/team-a")).await;
    assert_eq!(body["wins"], 3);
    assert_eq!(body["losses"], 0);
}

#[tokio::test]
async fn removing_below_zero_persists_zero() {
    let (base, kv) = start_memory().await;
    let client = reqwest::Client::new();

    let body = send(&client, Method::DELETE, format!("{base}/api/v1/counters/team-a/win")).await;
    assert_eq!(body["wins"], 0);

    let raw = kv.get("win-loss/test/counters/team-a").await.unwrap().unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["wins"], 0);
}

#[tokio::test]
async fn loss_and_draw_routes() {
    let (base, _kv) = start_memory().await;
    let client = reqwest::Client::new();

    send(&client, Method::PUT, format!("{base}/api/v1/counters/c/loss")).await;
    send(&client, Method::PUT, format!("{base}/api/v1/counters/c/loss")).await;
    send(&client, Method::PUT, format!("{base}/api/v1/counters/c/draw")).await;
    let body = send(&client, Method::DELETE, format!("{base}/api/v1/counters/c/loss")).await;

    assert_eq!(body["wins"], 0);
    assert_eq!(body["losses"], 1);
    assert_eq!(body["draws"], 1);
}

#[tokio::test]
async fn reset_zeroes_all_fields() {
    let (base, _kv) = start_memory().await;
    let client = reqwest::Client::new();

    send(&client, Method::PUT, format!("{base}/api/v1/counters/c/win")).await;
    send(&client, Method::PUT, format!("{base}/api/v1/counters/c/draw")).await;
    let body = send(&client, Method::POST, format!("{base}/api/v1/counters/c/reset")).await;
    assert_eq!(body["wins"], 0);
    assert_eq!(body["draws"], 0);

    let body = send(&client, Method::GET, format!("{base}/api/v1/counters/c")).await;
    assert_eq!(body["wins"], 0);
    assert_eq!(body["draws"], 0);
}

#[tokio::test]
async fn delete_removes_the_counter() {
    let (base, kv) = start_memory().await;
    let client = reqwest::Client::new();

    send(&client, Method::PUT, format!("{base}/api/v1/counters/c/win")).await;
    let body = send(&client, Method::DELETE, format!("{base}/api/v1/counters/c")).await;
    assert_eq!(body, json!({ "name": "c", "pretty_name": "c", "wins": 0, "losses": 0, "draws": 0 }));
    assert!(kv.is_empty().unwrap());

    // Deleting again is not an error.
    send(&client, Method::DELETE, format!("{base}/api/v1/counters/c")).await;
}

#[tokio::test]
async fn list_returns_saved_names() {
    let (base, kv) = start_memory().await;
    let client = reqwest::Client::new();

    send(&client, Method::PUT, format!("{base}/api/v1/counters/team-a/win")).await;
    send(&client, Method::PUT, format!("{base}/api/v1/counters/team-b/loss")).await;
    kv.put("win-loss/test/counters/", "{}".into()).await.unwrap();
    kv.put("win-loss/other/counters/team-c", "{}".into()).await.unwrap();

    let body = send(&client, Method::GET, format!("{base}/api/v1/counters")).await;
    let mut names: Vec<String> = serde_json::from_value(body).unwrap();
    names.sort();
    assert_eq!(names, vec!["team-a", "team-b"]);
}

#[tokio::test]
async fn list_is_empty_array_when_nothing_stored() {
    let (base, _kv) = start_memory().await;
    let body: Value = reqwest::get(format!("{base}/api/v1/counters"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn unknown_field_returns_404() {
    let (base, kv) = start_memory().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/v1/counters/c/forfeit"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("forfeit"));
    assert!(kv.is_empty().unwrap());
}

#[tokio::test]
async fn health_check() {
    let (base, _kv) = start_memory().await;
    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn win_at_max_saturates() {
    let (base, kv) = start_memory().await;
    kv.put("win-loss/test/counters/big", r#"{"wins":9223372036854775807}"#.into())
        .await
        .unwrap();

    let body = send(&reqwest::Client::new(), Method::PUT, format!("{base}/api/v1/counters/big/win")).await;
    assert_eq!(body["wins"], i64::MAX);
}

#[tokio::test]
async fn name_with_slash_returns_404() {
    let (base, kv) = start_memory().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/v1/counters/a%2Fb/win"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("a/b"));
    assert!(kv.is_empty().unwrap());

    let resp = reqwest::get(format!("{base}/counters/a%2Fb")).await.unwrap();
    assert_eq!(resp.status(), 404);

    let body = send(&client, Method::GET, format!("{base}/api/v1/counters")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn malformed_stored_value_reads_as_zero() {
    let (base, kv) = start_memory().await;
    kv.put("win-loss/test/counters/x", "not json".into()).await.unwrap();

    let body = send(&reqwest::Client::new(), Method::GET, format!("{base}/api/v1/counters/x")).await;
    assert_eq!(
        body,
        json!({ "name": "x", "pretty_name": "x", "wins": 0, "losses": 0, "draws": 0 })
    );
}
