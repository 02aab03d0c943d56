//! Dashboard endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{admin::Admin, borrowed_book::BorrowedBook},
    services::dashboard::DashboardStats,
};

/// Aggregate counters for the dashboard cards
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardStats),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.dashboard.stats().await?;
    Ok(Json(stats))
}

/// Borrowed-book records past due and not returned
#[utoipa::path(
    get,
    path = "/dashboard/overdue",
    tag = "dashboard",
    responses(
        (status = 200, description = "Overdue records", body = Vec<BorrowedBook>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_overdue(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BorrowedBook>>> {
    let overdue = state.services.dashboard.overdue().await?;
    Ok(Json(overdue))
}

/// Full admin list
#[utoipa::path(
    get,
    path = "/dashboard/admins",
    tag = "dashboard",
    responses(
        (status = 200, description = "All admins", body = Vec<Admin>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_admins(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Admin>>> {
    let admins = state.services.dashboard.admins().await?;
    Ok(Json(admins))
}
