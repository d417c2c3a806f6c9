//! HTTP handlers

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use folio_core::{OptimizationRecord, PerformancePoint, RiskRecord, WeightRecord};
use serde::{Deserialize, Serialize};

use crate::ServerState;
use crate::mock::PriceWalk;

/// Longest generated price history
pub const MAX_POINTS: usize = 360;

type ApiError = (StatusCode, String);

#[derive(Debug, Deserialize)]
pub struct PricesQuery {
    /// Generate a random-walk history of this many points
    pub points: Option<usize>,
}

pub async fn prices(
    State(state): State<ServerState>,
    Query(query): Query<PricesQuery>,
) -> Result<Json<Vec<PerformancePoint>>, ApiError> {
    match query.points {
        None => Ok(Json(state.portfolio.prices.clone())),
        Some(points) if (1..=MAX_POINTS).contains(&points) => {
            tracing::debug!(points, "generating price history");
            Ok(Json(random_walk(points)))
        }
        Some(points) => Err((
            StatusCode::BAD_REQUEST,
            format!("points must be between 1 and {}, got {}", MAX_POINTS, points),
        )),
    }
}

fn random_walk(points: usize) -> Vec<PerformancePoint> {
    let mut rng = rand::thread_rng();
    PriceWalk::new(10000.0)
        .generate(points, &mut rng)
        .into_iter()
        .map(PerformancePoint::from)
        .collect()
}

pub async fn weights(State(state): State<ServerState>) -> Json<Vec<WeightRecord>> {
    Json(state.portfolio.weights.clone())
}

pub async fn risk(State(state): State<ServerState>) -> Json<Vec<RiskRecord>> {
    Json(state.portfolio.risk.clone())
}

pub async fn optimization(State(state): State<ServerState>) -> Json<Vec<OptimizationRecord>> {
    Json(state.portfolio.optimization.clone())
}

/// Holding in the legacy `/portfolio` payload; weight as a fraction
#[derive(Debug, Serialize)]
pub struct LegacyHolding {
    pub asset: String,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct LegacyPortfolio {
    pub portfolio: Vec<LegacyHolding>,
}

pub async fn portfolio(State(state): State<ServerState>) -> Json<LegacyPortfolio> {
    let portfolio = state
        .portfolio
        .weights
        .iter()
        .map(|w| LegacyHolding {
            asset: w.symbol.clone(),
            weight: w.weight / 100.0,
        })
        .collect();

    Json(LegacyPortfolio { portfolio })
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use crate::{ServerState, router};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = router(ServerState::default())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_sample_prices() {
        let (status, body) = get("/prices").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["date"], "Jan");
        assert_eq!(body[4]["price"], 12000.0);
    }

    #[tokio::test]
    async fn test_generated_prices() {
        let (status, body) = get("/prices?points=12").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(12));
        assert_eq!(body[11]["date"], "2024-12");
    }

    #[tokio::test]
    async fn test_prices_points_out_of_range() {
        let (status, _) = get("/prices?points=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get("/prices?points=10000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_category_endpoints() {
        let (_, weights) = get("/weights").await;
        assert_eq!(weights[2]["symbol"], "MSFT");
        assert_eq!(weights[2]["weight"], 30.0);

        let (_, risk) = get("/risk").await;
        assert_eq!(risk[4]["volatility"], 35.0);

        let (_, optimization) = get("/optimization").await;
        assert_eq!(optimization[0]["weight"], 28.0);
        assert_eq!(optimization[0]["currentWeight"], 25.0);
    }

    #[tokio::test]
    async fn test_legacy_portfolio() {
        let (status, body) = get("/portfolio").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["portfolio"][0]["asset"], "AAPL");
        assert_eq!(body["portfolio"][0]["weight"], 0.25);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _) = get("/orders").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
