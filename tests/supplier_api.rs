/// Supplier endpoint tests over the in-memory store
use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn test_index_says_hello() {
    let app = setup_test_app();
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "hello world" }));
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app();
    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let app = setup_test_app();

    let (status, created) = send(&app, "POST", "/supplier", Some(supplier_body("Ada"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "ok");
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/supplier/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);
    assert_eq!(fetched["data"]["name"], "Ada");
    assert_eq!(fetched["data"]["company"], "Ada Trading");
    assert_eq!(fetched["data"]["phone"], "555-0100");
    assert_eq!(fetched["data"]["email"], "ada@example.test");
}

#[tokio::test]
async fn test_list_empty_is_not_found() {
    let app = setup_test_app();
    let (status, body) = send(&app, "GET", "/supplier", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Supplier not found");
}

#[tokio::test]
async fn test_list_returns_all_in_creation_order() {
    let app = setup_test_app();
    let first = create_supplier(&app, "Ada").await;
    let second = create_supplier(&app, "Grace").await;

    let (status, body) = send(&app, "GET", "/supplier", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn test_get_missing_supplier_is_not_found() {
    let app = setup_test_app();
    let (status, body) = send(&app, "GET", "/supplier/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_put_then_get_returns_submitted_fields() {
    let app = setup_test_app();
    let id = create_supplier(&app, "Ada").await;

    let update = json!({
        "name": "Grace",
        "company": "Hopper Compilers",
        "phone": "555-0199",
        "email": "grace@hopper.test",
    });
    let (status, body) = send(&app, "PUT", &format!("/supplier/{id}"), Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);

    let (_, fetched) = send(&app, "GET", &format!("/supplier/{id}"), None).await;
    for field in ["name", "company", "phone", "email"] {
        assert_eq!(fetched["data"][field], update[field], "field {field}");
    }
}

#[tokio::test]
async fn test_put_then_get_keeps_surrounding_whitespace() {
    let app = setup_test_app();
    let id = create_supplier(&app, "Ada").await;

    let update = json!({
        "name": " Grace ",
        "company": "Hopper Compilers ",
        "phone": " 555-0199",
        "email": "grace@hopper.test",
    });
    let (status, body) = send(&app, "PUT", &format!("/supplier/{id}"), Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], " Grace ");

    let (_, fetched) = send(&app, "GET", &format!("/supplier/{id}"), None).await;
    for field in ["name", "company", "phone", "email"] {
        assert_eq!(fetched["data"][field], update[field], "field {field}");
    }
}

#[tokio::test]
async fn test_over_long_field_is_bad_request() {
    let app = setup_test_app();
    let mut body = supplier_body("Ada");
    body["name"] = json!("a".repeat(51));
    let (status, body) = send(&app, "POST", "/supplier", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Supplier name must be at most 50 characters");

    let (status, _) = send(&app, "GET", "/supplier", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_with_missing_field_is_rejected_and_changes_nothing() {
    let app = setup_test_app();
    let id = create_supplier(&app, "Ada").await;

    let partial = json!({ "name": "Grace", "company": "Hopper Compilers", "phone": "555-0199" });
    let (status, _) = send(&app, "PUT", &format!("/supplier/{id}"), Some(partial)).await;
    assert!(status.is_client_error(), "got {status}");

    let (_, fetched) = send(&app, "GET", &format!("/supplier/{id}"), None).await;
    assert_eq!(fetched["data"]["name"], "Ada");
}

#[tokio::test]
async fn test_put_missing_supplier_is_not_found() {
    let app = setup_test_app();
    let (status, _) = send(&app, "PUT", "/supplier/7", Some(supplier_body("Ada"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_blank_name_is_bad_request() {
    let app = setup_test_app();
    let mut body = supplier_body("Ada");
    body["name"] = json!("   ");
    let (status, body) = send(&app, "POST", "/supplier", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Supplier name is required");
}

#[tokio::test]
async fn test_delete_missing_supplier_still_ok() {
    let app = setup_test_app();
    let (status, body) = send(&app, "DELETE", "/supplier/12345", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_delete_removes_supplier() {
    let app = setup_test_app();
    let id = create_supplier(&app, "Ada").await;

    let (status, body) = send(&app, "DELETE", &format!("/supplier/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, _) = send(&app, "GET", &format!("/supplier/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
