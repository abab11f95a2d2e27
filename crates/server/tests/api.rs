mod support;

use axum::{body::Body, http::Request};
use serde_json::json;

use support::{build_app, delete, get_json, post_json, send};

#[tokio::test]
async fn index_serves_html() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let req = Request::builder().uri("/").body(Body::empty())?;
    let (status, content_type, body) = send(&mut app, req).await?;
    assert_eq!(status, 200);
    assert!(content_type.unwrap_or_default().starts_with("text/html"));
    assert_eq!(String::from_utf8(body)?, "<h1>Code Challenge</h1>");
    Ok(())
}

#[tokio::test]
async fn health_and_openapi_document() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = get_json(&mut app, "/health").await?;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, doc) = get_json(&mut app, "/api-docs/openapi.json").await?;
    assert_eq!(status, 200);
    assert!(doc["paths"].get("/restaurant_pizzas").is_some());
    Ok(())
}

#[tokio::test]
async fn list_restaurants_returns_summaries() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = get_json(&mut app, "/restaurants").await?;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Karen's Pizza Shack", "address": "address1"},
            {"id": 2, "name": "Sanjay's Pizza", "address": "address2"},
            {"id": 3, "name": "Kiki's Pizza", "address": "address3"}
        ])
    );
    Ok(())
}

#[tokio::test]
async fn list_pizzas_returns_summaries() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = get_json(&mut app, "/pizzas").await?;
    assert_eq!(status, 200);
    let pizzas = body.as_array().cloned().unwrap_or_default();
    assert_eq!(pizzas.len(), 3);
    assert_eq!(pizzas[0], json!({"id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"}));
    for p in &pizzas {
        assert_eq!(p.as_object().map(|o| o.len()), Some(3), "unexpected fields in {p}");
    }
    Ok(())
}

#[tokio::test]
async fn restaurant_detail_nests_pizzas() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = get_json(&mut app, "/restaurants/2").await?;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "id": 2,
            "name": "Sanjay's Pizza",
            "address": "address2",
            "restaurant_pizzas": [{
                "id": 2,
                "price": 4,
                "restaurant_id": 2,
                "pizza_id": 2,
                "pizza": {"id": 2, "name": "Geri", "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"}
            }]
        })
    );
    Ok(())
}

#[tokio::test]
async fn missing_restaurant_is_404() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    for uri in ["/restaurants/999", "/restaurants/abc"] {
        let (status, body) = get_json(&mut app, uri).await?;
        assert_eq!(status, 404, "{uri}");
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }
    Ok(())
}

#[tokio::test]
async fn delete_restaurant_cascades() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let (status, body) = delete(&mut app, "/restaurants/1").await?;
    assert_eq!(status, 204);
    assert!(body.is_empty());

    let (status, _) = get_json(&mut app, "/restaurants/1").await?;
    assert_eq!(status, 404);

    let (status, body) = delete(&mut app, "/restaurants/1").await?;
    assert_eq!(status, 404);
    assert_eq!(serde_json::from_slice::<serde_json::Value>(&body)?, json!({"error": "Restaurant not found"}));

    let (_, restaurants) = get_json(&mut app, "/restaurants").await?;
    assert_eq!(restaurants.as_array().map(Vec::len), Some(2));
    // pizzas survive the cascade
    let (_, pizzas) = get_json(&mut app, "/pizzas").await?;
    assert_eq!(pizzas.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn create_restaurant_pizza_returns_full_view() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = post_json(
        &mut app,
        "/restaurant_pizzas",
        &json!({"price": 5, "restaurant_id": 3, "pizza_id": 2}),
    )
    .await?;
    assert_eq!(status, 201);
    assert_eq!(
        body,
        json!({
            "id": 4,
            "price": 5,
            "restaurant_id": 3,
            "pizza_id": 2,
            "pizza": {"id": 2, "name": "Geri", "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"},
            "restaurant": {"id": 3, "name": "Kiki's Pizza", "address": "address3"}
        })
    );

    let (_, detail) = get_json(&mut app, "/restaurants/3").await?;
    assert_eq!(detail["restaurant_pizzas"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn price_bounds_are_inclusive() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    for price in [1, 30] {
        let (status, body) = post_json(
            &mut app,
            "/restaurant_pizzas",
            &json!({"price": price, "restaurant_id": 1, "pizza_id": 3}),
        )
        .await?;
        assert_eq!(status, 201, "price {price}");
        assert_eq!(body["price"], price);
    }
    Ok(())
}

#[tokio::test]
async fn float_price_must_be_whole() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = post_json(
        &mut app,
        "/restaurant_pizzas",
        &json!({"price": 5.0, "restaurant_id": 1, "pizza_id": 2}),
    )
    .await?;
    assert_eq!(status, 201);
    assert_eq!(body["price"], 5);
    assert_eq!(body["pizza"]["name"], "Geri");

    let (status, body) = post_json(
        &mut app,
        "/restaurant_pizzas",
        &json!({"price": 5.5, "restaurant_id": 1, "pizza_id": 2}),
    )
    .await?;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"errors": ["validation errors"]}));

    let (_, detail) = get_json(&mut app, "/restaurants/1").await?;
    assert_eq!(detail["restaurant_pizzas"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn invalid_restaurant_pizza_is_rejected_without_writing() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let bodies = [
        json!({"price": 0, "restaurant_id": 1, "pizza_id": 2}),
        json!({"price": 31, "restaurant_id": 1, "pizza_id": 2}),
        json!({"price": 5, "restaurant_id": 1}),
        json!({"price": "cheap", "restaurant_id": 1, "pizza_id": 2}),
        json!({"price": 5, "restaurant_id": 404, "pizza_id": 2}),
        json!({"price": 5, "restaurant_id": 1, "pizza_id": 404}),
    ];
    for body in &bodies {
        let (status, resp) = post_json(&mut app, "/restaurant_pizzas", body).await?;
        assert_eq!(status, 400, "{body}");
        assert_eq!(resp, json!({"errors": ["validation errors"]}));
    }

    let (_, detail) = get_json(&mut app, "/restaurants/1").await?;
    assert_eq!(detail["restaurant_pizzas"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_validation_error() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/restaurant_pizzas")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let (status, _, body) = send(&mut app, req).await?;
    assert_eq!(status, 400);
    assert_eq!(serde_json::from_slice::<serde_json::Value>(&body)?, json!({"errors": ["validation errors"]}));
    Ok(())
}
