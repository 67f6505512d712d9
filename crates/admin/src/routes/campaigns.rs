//! Campaign route handlers.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::instrument;

use loyalty_core::forms::NewCampaignForm;
use loyalty_core::navigation::Screen;
use loyalty_core::records::Campaign;
use loyalty_core::scope::CampaignStats;

use crate::db::CampaignRepository;
use crate::error::AppError;
use crate::middleware::{AppJson, RequireAuth, require_screen};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/campaigns", get(index).post(create))
}

#[derive(Debug, Serialize)]
pub struct CampaignsView {
    pub campaigns: Vec<Campaign>,
    pub stats: CampaignStats,
}

/// GET /api/campaigns
#[instrument(skip(current, state))]
async fn index(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<CampaignsView>, AppError> {
    require_screen(&current, Screen::Campaigns)?;

    let campaigns = CampaignRepository::new(state.store())
        .list(&current.scope())
        .await;
    let stats = CampaignStats::collect(&campaigns.iter().collect::<Vec<_>>());

    Ok(Json(CampaignsView { campaigns, stats }))
}

/// POST /api/campaigns
#[instrument(skip(current, state, form))]
async fn create(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    AppJson(form): AppJson<NewCampaignForm>,
) -> Result<(StatusCode, Json<Campaign>), AppError> {
    require_screen(&current, Screen::Campaigns)?;

    let valid = form.validate()?;
    let campaign = CampaignRepository::new(state.store())
        .create(valid, current.active_brand, super::now().date())
        .await;
    tracing::info!(campaign_id = %campaign.id, status = ?campaign.status, "Campaign created");

    Ok((StatusCode::CREATED, Json(campaign)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::super::test_support::{json_body, login, send, test_app};

    #[tokio::test]
    async fn test_future_campaign_is_scheduled() {
        let app = test_app();
        let cookie = login(&app, "admin@mawimbi.com").await;

        let response = send(
            &app,
            Method::POST,
            "/api/campaigns",
            Some(&cookie),
            Some(json!({
                "name": "New Year Seafood Feast",
                "description": "Platter for two with a free dessert",
                "type": "Bundle",
                "startDate": "2099-01-01",
                "endDate": "2099-01-31",
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let campaign = json_body(response).await;
        assert_eq!(campaign["status"], "scheduled");
        assert_eq!(campaign["id"], 5);

        let list = json_body(send(&app, Method::GET, "/api/campaigns", Some(&cookie), None).await).await;
        assert_eq!(list["campaigns"][0]["name"], "New Year Seafood Feast");
        assert_eq!(list["stats"]["scheduled"], 1);
    }

    #[tokio::test]
    async fn test_missing_type_is_rejected() {
        let app = test_app();
        let cookie = login(&app, "admin@mawimbi.com").await;

        let response = send(
            &app,
            Method::POST,
            "/api/campaigns",
            Some(&cookie),
            Some(json!({ "name": "Short", "description": "Too short" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        let fields: Vec<&str> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"description"));
        assert!(fields.contains(&"type"));
        assert!(!fields.contains(&"name"));
    }
}
