//! View session endpoints
//!
//! A client mounts a view, polls its widgets until the fetch has settled,
//! and unmounts it when the page goes away.

use crate::core::export::export_to_csv;
use crate::core::presentation::{DashboardPage, DetailPage, StudentsPage};
use crate::server::routes::{ApiResponse, TableQuery, parse_view_id};
use crate::server::state::AppState;
use crate::utils::error::{DashboardError, Result};
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Configure view routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/views")
            .route("", web::post().to(mount_view))
            .route("/{view_id}", web::delete().to(unmount_view))
            .route("/{view_id}/students", web::get().to(view_students))
            .route("/{view_id}/students/{student_id}", web::get().to(view_student_detail))
            .route("/{view_id}/dashboard", web::get().to(view_dashboard))
            .route("/{view_id}/export", web::post().to(export_view)),
    );
}

/// Mount acknowledgement
#[derive(Debug, Serialize)]
pub struct MountResponse {
    pub view_id: Uuid,
    pub mounted_at: chrono::DateTime<chrono::Utc>,
}

/// Unmount acknowledgement
#[derive(Debug, Serialize)]
pub struct UnmountResponse {
    pub view_id: Uuid,
    pub unmounted: bool,
}

/// POST /api/v1/views
pub async fn mount_view(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = state
        .views
        .mount(state.source.clone(), state.notifier.clone())?;

    Ok(HttpResponse::Accepted().json(ApiResponse::success(MountResponse {
        view_id: session.id,
        mounted_at: session.mounted_at,
    })))
}

/// DELETE /api/v1/views/{view_id}
pub async fn unmount_view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let view_id = parse_view_id(&path)?;
    state.views.unmount(&view_id)?;

    info!(view_id = %view_id, "View unmounted by client");
    Ok(ApiResponse::success(UnmountResponse {
        view_id,
        unmounted: true,
    })
    .to_http_response())
}

/// GET /api/v1/views/{view_id}/students?search=&tab=
pub async fn view_students(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<TableQuery>,
) -> Result<HttpResponse> {
    let view_id = parse_view_id(&path)?;
    let tab = query.tab()?;
    let session = state.views.get(&view_id)?;

    debug!(view_id = %view_id, tab = %tab, "Rendering student table");
    let page = StudentsPage::render(&session.query.state(), &query.search, tab);
    Ok(ApiResponse::success(page).to_http_response())
}

/// GET /api/v1/views/{view_id}/dashboard
pub async fn view_dashboard(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let view_id = parse_view_id(&path)?;
    let session = state.views.get(&view_id)?;

    let page = DashboardPage::render(&session.query.state());
    Ok(ApiResponse::success(page).to_http_response())
}

/// GET /api/v1/views/{view_id}/students/{student_id}
pub async fn view_student_detail(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (view_id, student_id) = path.into_inner();
    let view_id = parse_view_id(&view_id)?;
    let session = state.views.get(&view_id)?;

    let page = DetailPage::render(&session.query.state(), &student_id).ok_or_else(|| {
        DashboardError::not_found(format!("Student {} not found", student_id))
    })?;
    Ok(ApiResponse::success(page).to_http_response())
}

/// POST /api/v1/views/{view_id}/export
pub async fn export_view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let view_id = parse_view_id(&path)?;
    state.views.get(&view_id)?;

    let notification = export_to_csv(&state.notifier);
    Ok(ApiResponse::success(notification).to_http_response())
}
