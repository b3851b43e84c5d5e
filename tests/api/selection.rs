use crate::helpers::spawn_app;

#[tokio::test]
async fn add_returns_the_grown_selection() {
    let app = spawn_app().await;

    let body = serde_json::json!({
        "selected": ["emma-foodie-hist"],
        "action": { "type": "add", "id": "sustainable-chef-new" }
    });
    let response = app.post_selection(&body).await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["selected"],
        serde_json::json!(["emma-foodie-hist", "sustainable-chef-new"])
    );
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn adding_twice_does_not_duplicate() {
    let app = spawn_app().await;

    let body = serde_json::json!({
        "selected": ["emma-foodie-hist"],
        "action": { "type": "add", "id": "emma-foodie-hist" }
    });
    let body: serde_json::Value = app.post_selection(&body).await.json().await.unwrap();

    assert_eq!(body["selected"], serde_json::json!(["emma-foodie-hist"]));
}

#[tokio::test]
async fn deselecting_visible_rows_keeps_other_selections() {
    let app = spawn_app().await;

    let body = serde_json::json!({
        "selected": ["a", "b"],
        "action": { "type": "set_all", "ids": ["b", "c"], "checked": false },
        "visible": ["b", "c"]
    });
    let body: serde_json::Value = app.post_selection(&body).await.json().await.unwrap();

    assert_eq!(body["selected"], serde_json::json!(["a"]));
    assert_eq!(body["visible_selected"], 0);
}

#[tokio::test]
async fn selecting_visible_rows_reports_visible_count() {
    let app = spawn_app().await;

    let body = serde_json::json!({
        "selected": ["a"],
        "action": { "type": "set_all", "ids": ["b", "c"], "checked": true },
        "visible": ["b", "c"]
    });
    let body: serde_json::Value = app.post_selection(&body).await.json().await.unwrap();

    assert_eq!(body["selected"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(body["count"], 3);
    assert_eq!(body["visible_selected"], 2);
}

#[tokio::test]
async fn clear_empties_the_selection() {
    let app = spawn_app().await;

    let body = serde_json::json!({
        "selected": ["a", "b"],
        "action": { "type": "clear" }
    });
    let body: serde_json::Value = app.post_selection(&body).await.json().await.unwrap();

    assert_eq!(body["selected"], serde_json::json!([]));
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn selection_returns_400_for_invalid_actions() {
    let app = spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({ "selected": [] }), "missing action"),
        (
            serde_json::json!({ "action": { "type": "toggle", "id": "a" } }),
            "unknown action",
        ),
        (
            serde_json::json!({ "action": { "type": "set_all", "ids": ["a"] } }),
            "set_all without checked",
        ),
    ];

    for (body, description) in test_cases {
        let response = app.post_selection(&body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}
