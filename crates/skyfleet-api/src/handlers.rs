//! REST endpoint handlers for the fleet API server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Minimal HTML status page |
//! | `GET`  | `/health` | Liveness probe |
//! | `GET`  | `/state` | Consistent world snapshot |
//! | `POST` | `/cmd/assign_task` | Assign one task to one drone |
//! | `POST` | `/cmd/batch` | Assign tasks to many drones |

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use skyfleet_core::command;
use skyfleet_types::{AssignCommand, AssignOutcome, BatchRequest, BatchResponse};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Serve a minimal HTML page showing session status and API links.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let sim = state.sim.read().await;
    let ts = sim.clock.ts();
    let tick = sim.tick();
    let drones = sim.drones.len();
    let zones = sim.map.zones().len();
    let events = sim.events.len();
    drop(sim);

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Skyfleet</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 720px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 110px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
    </style>
</head>
<body>
    <h1>Skyfleet</h1>
    <p>Drone fleet simulation server</p>
    <div>
        <div class="metric"><div class="label">Tick</div><div class="value">{tick}</div></div>
        <div class="metric"><div class="label">Sim time</div><div class="value">{ts:.1}s</div></div>
        <div class="metric"><div class="label">Drones</div><div class="value">{drones}</div></div>
        <div class="metric"><div class="label">Zones</div><div class="value">{zones}</div></div>
        <div class="metric"><div class="label">Events</div><div class="value">{events}</div></div>
    </div>
    <ul>
        <li><a href="/health">GET /health</a></li>
        <li><a href="/state">GET /state</a></li>
        <li><a href="/ws/ticks">GET /ws/ticks</a> (WebSocket)</li>
    </ul>
</body>
</html>"#
    ))
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// Return a consistent snapshot of the whole session.
///
/// The snapshot is built under a single read lock, so it never mixes
/// state from two ticks.
pub async fn get_state(State(state): State<AppState>) -> impl IntoResponse {
    let sim = state.sim.read().await;
    Json(command::snapshot(&sim))
}

/// Assign one task to one drone.
///
/// Returns the normalized task on success; an unknown drone yields 404
/// and an unexecutable task definition yields 400.
pub async fn assign_task(
    State(state): State<AppState>,
    Json(cmd): Json<AssignCommand>,
) -> Result<Json<AssignOutcome>, ApiError> {
    let mut sim = state.sim.write().await;
    let task = command::assign_task(&mut sim, &cmd.drone_id, cmd.task)?;
    Ok(Json(AssignOutcome::success(cmd.drone_id, task)))
}

/// Assign tasks to many drones in one request.
///
/// Commands apply independently in order; per-command failures are
/// reported in the results and never fail the batch.
pub async fn batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Json<BatchResponse> {
    let count = request.commands.len();
    let results = {
        let mut sim = state.sim.write().await;
        command::batch_assign(&mut sim, request.commands)
    };
    let applied = results.iter().filter(|r| r.ok).count();
    info!(count, applied, "batch processed");
    Json(BatchResponse { ok: true, results })
}
