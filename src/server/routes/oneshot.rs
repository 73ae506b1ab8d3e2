//! One-shot endpoints
//!
//! Mount a view, wait for its fetch to settle, render, unmount. Useful for
//! clients that do not want to poll.

use crate::core::loader::QueryState;
use crate::core::presentation::{DashboardPage, StudentsPage};
use crate::server::routes::{ApiResponse, TableQuery};
use crate::server::state::AppState;
use crate::utils::error::{DashboardError, Result};
use actix_web::{HttpResponse, web};
use tracing::warn;

/// Configure one-shot routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/students", web::get().to(students))
        .route("/api/v1/dashboard", web::get().to(dashboard));
}

/// Mount a temporary view and wait for it to settle
async fn settle_once(state: &AppState) -> Result<QueryState> {
    let session = state
        .views
        .mount(state.source.clone(), state.notifier.clone())?;
    let timeout = state.config.views().load_timeout_duration();

    let settled = tokio::time::timeout(timeout, session.query.settled()).await;
    let _ = state.views.unmount(&session.id);

    settled.map_err(|_| {
        warn!(view_id = %session.id, "Student fetch did not settle in time");
        DashboardError::timeout(format!(
            "Student records did not load within {}s",
            timeout.as_secs()
        ))
    })
}

/// GET /api/v1/students?search=&tab=
pub async fn students(
    state: web::Data<AppState>,
    query: web::Query<TableQuery>,
) -> Result<HttpResponse> {
    let tab = query.tab()?;
    let settled = settle_once(&state).await?;

    let page = StudentsPage::render(&settled, &query.search, tab);
    Ok(ApiResponse::success(page).to_http_response())
}

/// GET /api/v1/dashboard
pub async fn dashboard(state: web::Data<AppState>) -> Result<HttpResponse> {
    let settled = settle_once(&state).await?;

    let page = DashboardPage::render(&settled);
    Ok(ApiResponse::success(page).to_http_response())
}
