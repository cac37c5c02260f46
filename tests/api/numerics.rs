use serde_json::{json, Value};
use winloss::KvBackend;

use crate::support::start_memory;

async fn get_json(url: String) -> Value {
    let resp = reqwest::get(url).await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn wins_widget_defaults_to_green() {
    let (base, kv) = start_memory().await;
    kv.put("win-loss/test/counters/team-a", r#"{"wins":5}"#.into())
        .await
        .unwrap();

    let body = get_json(format!("{base}/api/v1/counters/team-a/win?numerics")).await;
    assert_eq!(body, json!({ "postfix": "Wins", "color": "green", "data": { "value": 5 } }));
}

#[tokio::test]
async fn widget_uses_requested_color() {
    let (base, kv) = start_memory().await;
    kv.put("win-loss/test/counters/c", r#"{"losses":2,"draws":7}"#.into())
        .await
        .unwrap();

    let body = get_json(format!("{base}/api/v1/counters/c/loss?numerics&color=purple")).await;
    assert_eq!(body, json!({ "postfix": "Losses", "color": "purple", "data": { "value": 2 } }));

    let body = get_json(format!("{base}/api/v1/counters/c/draw?numerics=1")).await;
    assert_eq!(body, json!({ "postfix": "Draws", "color": "gray", "data": { "value": 7 } }));
}

#[tokio::test]
async fn field_get_without_flag_returns_record() {
    let (base, _kv) = start_memory().await;

    let body = get_json(format!("{base}/api/v1/counters/team-a/loss?color=red")).await;
    assert_eq!(
        body,
        json!({ "name": "team-a", "pretty_name": "team a", "wins": 0, "losses": 0, "draws": 0 })
    );
}
