//! Router and request handlers.

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use hexweave_lattice::{Lattice, Pattern, Snapshot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// The process-wide lattice behind its single exclusive lock.
///
/// Every handler takes the lock for its whole body, so a scramble is
/// atomic from any observer's point of view.
pub type SharedLattice = Arc<Mutex<Lattice>>;

/// Build the facade router around a shared lattice.
pub fn build_router(lattice: SharedLattice) -> Router {
    // CORS layer for browser access.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/state", get(state))
        .route("/scramble", post(scramble))
        .route("/reset", post(reset))
        .layer(cors)
        .with_state(lattice)
}

/// Serve the embedded index page.
async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn state(State(lattice): State<SharedLattice>) -> Json<Arc<Snapshot>> {
    let mut lattice = lattice.lock().await;
    Json(lattice.snapshot())
}

#[derive(Debug, Default, Deserialize)]
struct ScrambleRequest {
    steps: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ScrambleResponse {
    swaps: u32,
    #[serde(flatten)]
    state: Arc<Snapshot>,
}

async fn scramble(
    State(lattice): State<SharedLattice>,
    body: Option<Json<ScrambleRequest>>,
) -> Json<ScrambleResponse> {
    let requested = body.and_then(|Json(b)| b.steps).unwrap_or(1);
    let steps = coerce_steps(requested);
    let mut lattice = lattice.lock().await;
    let mut rng = rand::thread_rng();
    let swaps = lattice.scramble(steps, &mut rng);
    tracing::debug!(steps, swaps, "scramble");
    Json(ScrambleResponse {
        swaps,
        state: lattice.snapshot(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ResetRequest {
    size: Option<i64>,
    pattern: Option<String>,
}

async fn reset(
    State(lattice): State<SharedLattice>,
    body: Option<Json<ResetRequest>>,
) -> Json<Arc<Snapshot>> {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    let pattern = req
        .pattern
        .as_deref()
        .and_then(Pattern::from_name)
        .unwrap_or_default();

    let mut lattice = lattice.lock().await;
    match req.size.map(coerce_size) {
        Some(size) if size != lattice.size() => {
            let fresh = Lattice::new(size, pattern)
                .expect("coerced size is always supported")
                .with_key_style(lattice.key_style());
            *lattice = fresh;
        }
        _ => lattice.reset(pattern),
    }
    tracing::debug!(size = lattice.size(), %pattern, "reset");
    Json(lattice.snapshot())
}

// ── Parameter coercion ──────────────────────────────────────────

/// Negative step counts count as zero; anything above `u32::MAX` is
/// already beyond any sane request and saturates.
fn coerce_steps(steps: i64) -> u32 {
    steps.clamp(0, u32::MAX as i64) as u32
}

/// Clamp a requested size into the supported range.
fn coerce_size(size: i64) -> u16 {
    size.clamp(Lattice::MIN_SIZE as i64, Lattice::MAX_SIZE as i64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexweave_lattice::KeyStyle;

    fn shared(size: u16) -> SharedLattice {
        Arc::new(Mutex::new(Lattice::new(size, Pattern::Vertical).unwrap()))
    }

    // ── Coercion ────────────────────────────────────────────────

    #[test]
    fn coerce_steps_floors_negatives() {
        assert_eq!(coerce_steps(-1), 0);
        assert_eq!(coerce_steps(-1_000_000), 0);
        assert_eq!(coerce_steps(0), 0);
        assert_eq!(coerce_steps(250), 250);
        assert_eq!(coerce_steps(i64::MAX), u32::MAX);
    }

    #[test]
    fn coerce_size_clamps_to_supported_range() {
        assert_eq!(coerce_size(3), 5);
        assert_eq!(coerce_size(-10), 5);
        assert_eq!(coerce_size(999), 200);
        assert_eq!(coerce_size(64), 64);
    }

    // ── Router ──────────────────────────────────────────────────

    #[test]
    fn router_builds() {
        let _router = build_router(shared(10));
    }

    // ── Handlers ────────────────────────────────────────────────

    #[tokio::test]
    async fn state_returns_full_dump() {
        let lattice = shared(10);
        let Json(snapshot) = state(State(lattice)).await;
        assert_eq!(snapshot.size(), 10);
        assert_eq!(snapshot.cells().len(), 100);
        assert_eq!(snapshot.cycles().len(), 10);
    }

    #[tokio::test]
    async fn scramble_reports_swaps_within_steps() {
        let lattice = shared(10);
        let Json(resp) = scramble(
            State(lattice),
            Some(Json(ScrambleRequest { steps: Some(40) })),
        )
        .await;
        assert!(resp.swaps <= 40);
        assert_eq!(resp.state.cells().len(), 100);
    }

    #[tokio::test]
    async fn scramble_negative_steps_is_noop() {
        let lattice = shared(8);
        let Json(resp) = scramble(
            State(lattice),
            Some(Json(ScrambleRequest { steps: Some(-7) })),
        )
        .await;
        assert_eq!(resp.swaps, 0);
    }

    #[tokio::test]
    async fn scramble_missing_body_defaults_to_one_step() {
        let lattice = shared(8);
        let Json(resp) = scramble(State(lattice), None).await;
        assert!(resp.swaps <= 1);
    }

    #[tokio::test]
    async fn reset_clamps_size() {
        let lattice = shared(10);
        let Json(snapshot) = reset(
            State(lattice.clone()),
            Some(Json(ResetRequest {
                size: Some(3),
                pattern: None,
            })),
        )
        .await;
        assert_eq!(snapshot.size(), 5);

        let Json(snapshot) = reset(
            State(lattice),
            Some(Json(ResetRequest {
                size: Some(999),
                pattern: None,
            })),
        )
        .await;
        assert_eq!(snapshot.size(), 200);
    }

    #[tokio::test]
    async fn reset_without_size_keeps_current_size() {
        let lattice = shared(12);
        let Json(snapshot) = reset(
            State(lattice),
            Some(Json(ResetRequest {
                size: None,
                pattern: Some("diagonal_1".into()),
            })),
        )
        .await;
        assert_eq!(snapshot.size(), 12);
        assert_eq!(snapshot.cells()["0,0"].doors(), [1, 4]);
    }

    #[tokio::test]
    async fn reset_unknown_pattern_falls_back_to_vertical() {
        let lattice = shared(8);
        let Json(snapshot) = reset(
            State(lattice),
            Some(Json(ResetRequest {
                size: None,
                pattern: Some("garbage".into()),
            })),
        )
        .await;
        // Eight vertical column cycles of length eight.
        assert_eq!(snapshot.cycles().len(), 8);
        assert!(snapshot.cycles().iter().all(|c| c.len() == 8));
        assert_eq!(snapshot.cells()["0,0"].doors(), [0, 3]);
    }

    #[tokio::test]
    async fn reset_missing_body_reseeds_in_place() {
        let lattice = shared(10);
        {
            let mut guard = lattice.lock().await;
            let mut rng = rand::thread_rng();
            guard.scramble(100, &mut rng);
        }
        let Json(snapshot) = reset(State(lattice), None).await;
        assert_eq!(snapshot.size(), 10);
        assert_eq!(snapshot.cells()["3,3"].doors(), [0, 3]);
    }

    #[tokio::test]
    async fn resize_preserves_key_style() {
        let lattice = Arc::new(Mutex::new(
            Lattice::new(10, Pattern::Vertical)
                .unwrap()
                .with_key_style(KeyStyle::Legacy),
        ));
        let Json(snapshot) = reset(
            State(lattice),
            Some(Json(ResetRequest {
                size: Some(6),
                pattern: None,
            })),
        )
        .await;
        assert_eq!(snapshot.key_style(), KeyStyle::Legacy);
        let v = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(v["cells"]["0,0"]["q"], 0);
    }
}
