use crate::model::Category;

/// Reserved TLD, resolution is guaranteed to fail without touching the
/// network or racing another test's ephemeral port.
pub(crate) const DEAD_UPSTREAM: &str = "http://upstream.invalid";

pub(crate) const CATEGORIES_BODY: &str = r#"{"trivia_categories":[{"id":"9","name":"General Knowledge"},{"id":"10","name":"Entertainment: Books"},{"id":"11","name":"Entertainment: Film"}]}"#;

pub(crate) fn test_categories() -> Vec<Category> {
    vec![
        Category {
            id: "9".to_string(),
            name: "General Knowledge".to_string(),
        },
        Category {
            id: "10".to_string(),
            name: "Entertainment: Books".to_string(),
        },
        Category {
            id: "11".to_string(),
            name: "Entertainment: Film".to_string(),
        },
    ]
}

/// Serves `body` at /api_category.php on an ephemeral local port and returns
/// the base URL for `Config::test`.
pub(crate) async fn spawn_upstream(body: &'static str) -> String {
    let router = axum::Router::new().route(
        "/api_category.php",
        axum::routing::get(move || async move { body }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
