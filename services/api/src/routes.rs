use crate::error::AppError;
use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json};
use chrono::{DateTime, Local};
use paintquote::leads::LeadRequest;
use paintquote::quoting::{
    QuoteBreakdown, QuoteEngine, QuoteRequest, QuoteRequestImporter, QuoteSummary,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use tracing::info;

pub(crate) fn quote_routes(engine: Arc<QuoteEngine>) -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/quotes", post(quote_endpoint))
        .route("/api/v1/quotes/batch", post(quote_batch_endpoint))
        .route("/api/v1/leads", post(lead_endpoint))
        .with_state(engine)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Serialize)]
pub(crate) struct QuoteResponse {
    pub(crate) breakdown: QuoteBreakdown,
    pub(crate) summary: QuoteSummary,
}

pub(crate) async fn quote_endpoint(
    State(engine): State<Arc<QuoteEngine>>,
    Json(request): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let breakdown = engine.quote(&request);
    let summary = breakdown.summary();
    Json(QuoteResponse { breakdown, summary })
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteBatchRequest {
    /// Inline CSV export, same columns as the file-based importer.
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuoteBatchResponse {
    pub(crate) quotes: Vec<QuoteBatchEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuoteBatchEntry {
    pub(crate) reference: String,
    pub(crate) breakdown: QuoteBreakdown,
}

pub(crate) async fn quote_batch_endpoint(
    State(engine): State<Arc<QuoteEngine>>,
    Json(payload): Json<QuoteBatchRequest>,
) -> Result<Json<QuoteBatchResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let imported = QuoteRequestImporter::from_reader(reader)?;

    let quotes = imported
        .into_iter()
        .map(|entry| QuoteBatchEntry {
            breakdown: engine.quote(&entry.request),
            reference: entry.reference,
        })
        .collect();

    Ok(Json(QuoteBatchResponse { quotes }))
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadAcknowledgment {
    pub(crate) status: &'static str,
    pub(crate) contact: String,
    pub(crate) received_at: DateTime<Local>,
}

pub(crate) async fn lead_endpoint(Json(lead): Json<LeadRequest>) -> Response {
    match lead.validate() {
        Ok(()) => {
            info!(city = %lead.city, "craftsman lead received");
            let acknowledgment = LeadAcknowledgment {
                status: "received",
                contact: lead.full_name(),
                received_at: Local::now(),
            };
            (StatusCode::ACCEPTED, Json(acknowledgment)).into_response()
        }
        Err(missing) => {
            let payload = json!({ "error": missing.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintquote::quoting::{
        CoatSelection, ColorChange, Condition, Furnishing, MaterialProvider, PricingConfig,
        Quality, Scope, Substrate, WallpaperAction, Zone,
    };

    fn engine() -> Arc<QuoteEngine> {
        Arc::new(QuoteEngine::new(PricingConfig::default()))
    }

    fn sample_request() -> QuoteRequest {
        QuoteRequest {
            walls_area_m2: 20.0,
            ceiling_area_m2: 0.0,
            ceiling_height_m: 2.4,
            scope: Scope::Walls,
            zone: Zone::A,
            substrate: Substrate::PaintedWall,
            wallpaper_action: WallpaperAction::PaintOver,
            condition: Condition::Normal,
            furnishing: Furnishing::HalfFurnished,
            color_change: ColorChange::LightToLight,
            coats: CoatSelection::Auto,
            quality: Quality::Standard,
            material_provided_by: MaterialProvider::Painter,
            rot_enabled: false,
            rot_percent: 0.0,
        }
    }

    #[tokio::test]
    async fn quote_endpoint_returns_breakdown_and_summary() {
        let Json(body) = quote_endpoint(State(engine()), Json(sample_request())).await;

        assert_eq!(body.breakdown.total_before_rot, 7500);
        assert_eq!(body.breakdown.coats, 2);
        assert!(body
            .summary
            .lines
            .iter()
            .any(|line| line.key == "total_after_rot" && line.value == "7 500 kr"));
    }

    #[tokio::test]
    async fn quote_batch_endpoint_prices_inline_csv() {
        let csv = "\
Reference,Walls m2,Ceiling m2,Ceiling Height m,Scope,Zone,Substrate,Wallpaper Action,Condition,Furnishing,Color Change,Coats,Quality,Material Provided By,ROT,ROT Percent
Apartment,20,,,walls,a,painted_wall,,normal,half_furnished,light_to_light,,standard,painter,,
"
        .to_string();

        let Json(body) = quote_batch_endpoint(State(engine()), Json(QuoteBatchRequest { csv }))
            .await
            .expect("batch prices");

        assert_eq!(body.quotes.len(), 1);
        assert_eq!(body.quotes[0].reference, "Apartment");
        assert_eq!(body.quotes[0].breakdown.total_before_rot, 7500);
    }

    #[tokio::test]
    async fn quote_batch_endpoint_rejects_bad_rows() {
        let csv = "\
Reference,Walls m2,Ceiling m2,Ceiling Height m,Scope,Zone,Substrate,Wallpaper Action,Condition,Furnishing,Color Change,Coats,Quality,Material Provided By,ROT,ROT Percent
Apartment,20,,,walls,a,granite,,normal,half_furnished,light_to_light,,standard,painter,,
"
        .to_string();

        let error = quote_batch_endpoint(State(engine()), Json(QuoteBatchRequest { csv }))
            .await
            .expect_err("batch fails");
        assert!(matches!(error, AppError::Import(_)));
    }

    #[tokio::test]
    async fn lead_endpoint_accepts_a_complete_submission() {
        let lead = LeadRequest {
            first_name: "Anna".to_string(),
            last_name: "Lind".to_string(),
            email: "anna.lind@example.com".to_string(),
            phone: "+46 70 123 45 67".to_string(),
            ..LeadRequest::default()
        };

        let response = lead_endpoint(Json(lead)).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn lead_endpoint_rejects_missing_contact_details() {
        let lead = LeadRequest {
            first_name: "Anna".to_string(),
            ..LeadRequest::default()
        };

        let response = lead_endpoint(Json(lead)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
