use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde::Deserialize;
use sqlx::SqlitePool;
use tower::ServiceExt;

use trivia_api::{config::Environment, state::ApiState};

/// A router plus the pool behind it, against a fresh in-memory database
/// seeded with the six standard categories (from the migration) and the
/// six-question test seed.
pub struct TestApp {
    pub client: TestClient,
    pub pool: SqlitePool,
}

/// Build a test app. A single-connection pool keeps every request on the
/// same in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = trivia_db::create_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to create pool");
    trivia_db::migrate(&pool).await.expect("Failed to migrate");

    db::seed_questions(&pool).await;

    let state = ApiState {
        pool: pool.clone(),
        environment: Environment::Development,
    };
    let router = trivia_api::router::router().with_state(state);

    TestApp {
        client: TestClient::new(router),
        pool,
    }
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with a raw (possibly malformed) body
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a PUT request with JSON body
    pub async fn put_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}

/// Database test helper functions
pub mod db {
    use sqlx::SqlitePool;
    use trivia_db::{models::NewQuestion, repositories};

    /// The six-question seed the behavioral scenarios run against.
    /// `category` holds the decimal string of a seeded category id.
    const SEED: [(&str, &str, &str, i64); 6] = [
        ("What is H2O?", "Water", "1", 1),
        ("What planet is red?", "Mars", "1", 1),
        ("Capital of France?", "Paris", "3", 1),
        ("WWII ended in?", "1945", "4", 2),
        ("Who directed \"Inception\"?", "Christopher Nolan", "5", 2),
        ("How many soccer players on field?", "11", "6", 1),
    ];

    pub async fn seed_questions(pool: &SqlitePool) {
        for (question, answer, category, difficulty) in SEED {
            repositories::question::insert(
                pool,
                &NewQuestion {
                    question: question.to_string(),
                    answer: answer.to_string(),
                    category: category.to_string(),
                    difficulty,
                },
            )
            .await
            .expect("Failed to seed question");
        }
    }

    /// Empty both tables, including the migration-seeded categories.
    pub async fn cleanup(pool: &SqlitePool) {
        sqlx::query("DELETE FROM questions")
            .execute(pool)
            .await
            .expect("Failed to clean questions");
        sqlx::query("DELETE FROM categories")
            .execute(pool)
            .await
            .expect("Failed to clean categories");
    }
}
