//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use roster_domain::{Player, PlayerFilter, PlayerFilterParams};
use std::sync::Arc;

use crate::app::App;
use crate::use_cases::management::{ManagementError, PlayerPayload};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/rest/players", get(list_players).post(create_player))
        .route("/rest/players/count", get(count_players))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
}

async fn health() -> &'static str {
    "OK"
}

async fn list_players(
    State(app): State<Arc<App>>,
    params: Result<Query<PlayerFilterParams>, QueryRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let filter = parse_filter(params)?;
    let players = app.use_cases.management.player.list(&filter).await?;
    Ok(Json(players))
}

async fn count_players(
    State(app): State<Arc<App>>,
    params: Result<Query<PlayerFilterParams>, QueryRejection>,
) -> Result<Json<u64>, ApiError> {
    let filter = parse_filter(params)?;
    let count = app.use_cases.management.player.count(&filter).await?;
    Ok(Json(count))
}

async fn create_player(
    State(app): State<Arc<App>>,
    payload: Result<Json<PlayerPayload>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let player = app.use_cases.management.player.create(payload).await?;
    Ok(Json(player))
}

async fn get_player(
    State(app): State<Arc<App>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_id(id)?;
    let player = app.use_cases.management.player.get(id).await?;
    Ok(Json(player))
}

async fn update_player(
    State(app): State<Arc<App>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PlayerPayload>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_id(id)?;
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let player = app.use_cases.management.player.update(id, payload).await?;
    Ok(Json(player))
}

async fn delete_player(
    State(app): State<Arc<App>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(id)?;
    app.use_cases.management.player.delete(id).await?;
    Ok(StatusCode::OK)
}

fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

fn parse_filter(
    params: Result<Query<PlayerFilterParams>, QueryRejection>,
) -> Result<PlayerFilter, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    PlayerFilter::from_params(params).map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::NotFound { .. } => ApiError::NotFound,
            ManagementError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ManagementError::Repo(e) => {
                tracing::error!(error = %e, "Player store failure");
                ApiError::Internal(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryPlayerRepo;
    use crate::infrastructure::ports::{MockPlayerRepo, PlayerRepo, RepoError};
    use crate::test_fixtures::full_payload;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router_with(repo: Arc<dyn PlayerRepo>) -> Router {
        routes().with_state(Arc::new(App::new(repo)))
    }

    fn router() -> Router {
        router_with(Arc::new(InMemoryPlayerRepo::new()))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, body.to_vec())
    }

    async fn create(router: &Router, name: &str) -> Value {
        let body = payload_json(name);
        let (status, bytes) = send(router, json_request(Method::POST, "/rest/players", body)).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&bytes).expect("player json")
    }

    fn payload_json(name: &str) -> Value {
        let payload = full_payload(name);
        serde_json::json!({
            "name": payload.name,
            "title": payload.title,
            "race": payload.race,
            "profession": payload.profession,
            "birthday": payload.birthday,
            "experience": payload.experience,
        })
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, body) = send(&router(), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn create_returns_camel_case_player() {
        let router = router();
        let player = create(&router, "Thrain").await;

        assert_eq!(player["id"], 1);
        assert_eq!(player["race"], "DWARF");
        assert_eq!(player["profession"], "CLERIC");
        assert_eq!(player["banned"], false);
        assert_eq!(player["level"], 4);
        assert_eq!(player["untilNextLevel"], 500);
    }

    #[tokio::test]
    async fn invalid_create_is_bad_request() {
        let mut body = payload_json("Thrain");
        body["title"] = Value::String("x".repeat(31));
        let (status, _) = send(&router(), json_request(Method::POST, "/rest/players", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut body = payload_json("Thrain");
        body["race"] = Value::String("DRAGON".to_string());
        let (status, _) = send(&router(), json_request(Method::POST, "/rest/players", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn id_errors_map_to_400_and_404() {
        let router = router();
        let (status, _) = send(&router, get_request("/rest/players/0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&router, get_request("/rest/players/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&router, get_request("/rest/players/77")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn partial_update_via_post_to_id() {
        let router = router();
        create(&router, "Thrain").await;

        let body = serde_json::json!({ "experience": 300, "banned": true });
        let (status, bytes) =
            send(&router, json_request(Method::POST, "/rest/players/1", body)).await;
        assert_eq!(status, StatusCode::OK);

        let player: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(player["name"], "Thrain");
        assert_eq!(player["banned"], true);
        assert_eq!(player["level"], 2);
        assert_eq!(player["untilNextLevel"], 300);
    }

    #[tokio::test]
    async fn delete_then_delete_again_is_not_found() {
        let router = router();
        create(&router, "Thrain").await;

        let request = || {
            Request::builder()
                .method(Method::DELETE)
                .uri("/rest/players/1")
                .body(Body::empty())
                .expect("request")
        };
        let (status, body) = send(&router, request()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, _) = send(&router, request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_and_count_read_filter_from_query_string() {
        let router = router();
        for name in ["Fili", "Kili", "Bombur", "Bifur"] {
            create(&router, name).await;
        }

        let (status, bytes) = send(
            &router,
            get_request("/rest/players?name=ILI&order=NAME&pageSize=10"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let players: Vec<Value> = serde_json::from_slice(&bytes).expect("json");
        let names: Vec<&str> = players.iter().filter_map(|p| p["name"].as_str()).collect();
        assert_eq!(names, vec!["Fili", "Kili"]);

        let (status, bytes) = send(&router, get_request("/rest/players/count?pageSize=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"4");

        let (_, bytes) = send(&router, get_request("/rest/players")).await;
        let default_page: Vec<Value> = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(default_page.len(), 3);
    }

    #[tokio::test]
    async fn malformed_filter_is_bad_request() {
        let router = router();
        for uri in [
            "/rest/players?pageSize=0",
            "/rest/players?minLevel=high",
            "/rest/players/count?race=DRAGON",
        ] {
            let (status, _) = send(&router, get_request(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[tokio::test]
    async fn store_failure_is_opaque_500() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_count_matching()
            .returning(|_| Err(RepoError::database("players.count", "database is locked")));

        let (status, body) =
            send(&router_with(Arc::new(repo)), get_request("/rest/players/count")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, b"Internal error");
    }
}
