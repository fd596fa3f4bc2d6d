//! Cross-layer tests for the catalog crate.
//! Routers are exercised without an access guard; guarding is tested where
//! the routers are composed.

#[cfg(test)]
mod http_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, Response, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::{CatalogAppState, InMemoryProductRepository, admin_router, public_router};

    fn app() -> Router {
        let state = CatalogAppState::new(InMemoryProductRepository::new());
        Router::new().nest(
            "/api",
            public_router(state.clone()).merge(admin_router(state)),
        )
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn borscht() -> Value {
        json!({
            "name": "Borscht",
            "category": "soups",
            "price": 350.0,
            "image": "/img/borscht.jpg",
            "description": "Beet soup",
            "popular": true
        })
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let response = app().oneshot(request("GET", "/api/products", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = app();

        let response = app
            .clone()
            .oneshot(request("POST", "/api/products", Some(borscht())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Product created");
        assert_eq!(body["product"]["id"], 1);
        assert_eq!(body["product"]["popular"], true);

        app.clone()
            .oneshot(request(
                "POST",
                "/api/products",
                Some(json!({"name": "Pelmeni", "category": "mains", "price": 420})),
            ))
            .await
            .unwrap();

        let response = app.oneshot(request("GET", "/api/products", None)).await.unwrap();
        let body = body_json(response).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Borscht", "Pelmeni"]);
        assert_eq!(body[1]["popular"], false);
        assert_eq!(body[1]["image"], "");
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let app = app();
        app.clone()
            .oneshot(request("POST", "/api/products", Some(borscht())))
            .await
            .unwrap();

        let response = app
            .oneshot(request(
                "PUT",
                "/api/products/1",
                Some(json!({"name": "Green borscht", "category": "soups", "price": 300})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Product updated");
        assert_eq!(body["product"]["name"], "Green borscht");
        assert_eq!(body["product"]["price"], 300.0);
        assert_eq!(body["product"]["popular"], false);
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_not_found() {
        let response = app()
            .oneshot(request("PUT", "/api/products/999", Some(borscht())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Product not found"}));
    }

    #[tokio::test]
    async fn test_delete_returns_row_then_not_found() {
        let app = app();
        app.clone()
            .oneshot(request("POST", "/api/products", Some(borscht())))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(request("DELETE", "/api/products/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Product deleted");
        assert_eq!(body["product"]["name"], "Borscht");

        let response = app
            .oneshot(request("DELETE", "/api/products/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_bodies_are_bad_request() {
        let app = app();
        for body in [
            json!({"category": "soups", "price": 1}),
            json!({"name": "X", "price": 1}),
            json!({"name": "X", "category": "soups"}),
            json!({"name": "X", "category": "soups", "price": -5}),
            json!({"name": "X", "category": "soups", "price": "cheap"}),
        ] {
            let response = app
                .clone()
                .oneshot(request("POST", "/api/products", Some(body)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(body_json(response).await["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let response = app()
            .oneshot(request("DELETE", "/api/products/abc", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
