//! Axum router construction for the fleet API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS middleware enabled for cross-origin dashboard access.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the fleet server.
///
/// - `GET /` -- minimal HTML status page
/// - `GET /health` -- liveness probe
/// - `GET /state` -- consistent world snapshot
/// - `POST /cmd/assign_task` -- single task assignment
/// - `POST /cmd/batch` -- batch task assignment
/// - `GET /ws/ticks` -- `WebSocket` tick summary stream
///
/// CORS allows any origin for development dashboards.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/state", get(handlers::get_state))
        .route("/cmd/assign_task", post(handlers::assign_task))
        .route("/cmd/batch", post(handlers::batch))
        .route("/ws/ticks", get(ws::ws_ticks))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use skyfleet_core::{SimClock, SimulationState};
    use skyfleet_drone::{Drone, DroneConfig};
    use skyfleet_types::{Rect, StateView, Vec2, Zone, ZoneType};
    use skyfleet_world::Map2D;
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    use super::*;

    fn test_router() -> Router {
        let clock = SimClock::new(0.2).unwrap();
        let mut map = Map2D::new(100.0, 100.0).unwrap();
        map.add_zone(Zone {
            id: "z_fire".to_owned(),
            name: "Fire-1".to_owned(),
            zone_type: ZoneType::FireRisk,
            rect: Rect::new(42.0, 58.0, 42.0, 58.0),
        })
        .unwrap();

        let mut sim = SimulationState::new(clock, map, DroneConfig::default(), 200, 50);
        sim.spawn_drone(Drone::new("D1", Vec2::new(5.0, 5.0))).unwrap();
        sim.spawn_drone(Drone::new("D2", Vec2::new(95.0, 5.0))).unwrap();

        let state = AppState::new(Arc::new(RwLock::new(sim)));
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(path: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let router = test_router();
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn state_returns_full_snapshot() {
        let router = test_router();
        let response = router
            .oneshot(Request::get("/state").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let view: StateView = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(view.drones.len(), 2);
        assert_eq!(view.zones.len(), 1);
        assert!(view.recent_events.is_empty());
    }

    #[tokio::test]
    async fn assign_task_returns_normalized_task() {
        let router = test_router();
        let body = r#"{"drone_id":"D1","task":{"type":"GOTO","target":{"x":50.0,"y":50.0}}}"#;
        let response = router.oneshot(post_json("/cmd/assign_task", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["ok"], serde_json::json!(true));
        assert_eq!(json["assigned"]["type"], "GOTO");
        assert_eq!(json["assigned"]["id"], "goto_0");
        assert_eq!(json["assigned"]["arrive_eps"], 2.0);
    }

    #[tokio::test]
    async fn unknown_drone_is_404() {
        let router = test_router();
        let body = r#"{"drone_id":"D9","task":{"type":"HOLD","drone_id":"D9"}}"#;
        let response = router.oneshot(post_json("/cmd/assign_task", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Unknown drone_id=D9");
        assert_eq!(json["status"], 404);
    }

    #[tokio::test]
    async fn invalid_task_is_400() {
        let router = test_router();
        let body = r#"{"drone_id":"D1","task":{"type":"PATH","waypoints":[]}}"#;
        let response = router.oneshot(post_json("/cmd/assign_task", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn batch_reports_per_command_outcomes() {
        let router = test_router();
        let body = r#"{"commands":[
            {"drone_id":"D1","task":{"type":"GOTO","target":{"x":10.0,"y":10.0}}},
            {"drone_id":"D9","task":{"type":"HOLD","drone_id":"D9"}},
            {"drone_id":"D2","task":{"type":"HOLD","drone_id":"D2"}}
        ]}"#;
        let response = router.oneshot(post_json("/cmd/batch", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["ok"], serde_json::json!(true));
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["ok"], serde_json::json!(true));
        assert_eq!(results[1]["ok"], serde_json::json!(false));
        assert_eq!(results[1]["error"], "Unknown drone_id=D9");
        assert_eq!(results[2]["ok"], serde_json::json!(true));
    }

    #[tokio::test]
    async fn index_serves_html() {
        let router = test_router();
        let response = router
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert!(content_type.starts_with("text/html"));
    }
}
