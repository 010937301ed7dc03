//! Handler for the admin dashboard summary.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use folio_core::types::Timestamp;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Marketing counters shown on the dashboard. Static until analytics exist.
const TOTAL_PROJECTS_SHOWCASED: u32 = 275;
const HAPPY_CLIENTS: u32 = 254;
const PAGE_VIEWS: u32 = 1247;
const UNIQUE_VISITORS: u32 = 892;
const CONVERSION_RATE: f64 = 3.2;

const RECENT_ACTIONS: [&str; 3] = [
    "New project added",
    "Client feedback received",
    "Portfolio updated",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub action: &'static str,
    pub timestamp: Timestamp,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub page_views: u32,
    pub unique_visitors: u32,
    pub conversion_rate: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_projects: u32,
    pub happy_clients: u32,
    pub recent_activity: Vec<Activity>,
    pub analytics: Analytics,
    /// Live count of stored projects.
    pub project_count: usize,
    /// Live count of messages still marked unread.
    pub unread_messages: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardUser {
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub data: DashboardData,
    pub user: DashboardUser,
}

/// GET /api/admin/dashboard
pub async fn get_dashboard(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardResponse>> {
    let now = Utc::now();
    let recent_activity = RECENT_ACTIONS
        .into_iter()
        .zip(1..)
        .map(|(action, id)| Activity {
            id,
            action,
            timestamp: now,
        })
        .collect();

    let data = DashboardData {
        total_projects: TOTAL_PROJECTS_SHOWCASED,
        happy_clients: HAPPY_CLIENTS,
        recent_activity,
        analytics: Analytics {
            page_views: PAGE_VIEWS,
            unique_visitors: UNIQUE_VISITORS,
            conversion_rate: CONVERSION_RATE,
        },
        project_count: state.projects.count().await,
        unread_messages: state.messages.unread_count().await,
    };

    Ok(Json(DashboardResponse {
        success: true,
        data,
        user: DashboardUser {
            email: session.email().to_string(),
            role: session.role().to_string(),
        },
    }))
}
