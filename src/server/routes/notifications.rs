//! Notification polling endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Configure notification routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/notifications", web::get().to(recent_notifications));
}

#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    pub limit: Option<usize>,
}

/// GET /api/v1/notifications?limit=
///
/// Newest last; without `limit` the whole retained history is returned.
pub async fn recent_notifications(
    state: web::Data<AppState>,
    query: web::Query<NotificationQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or_else(|| state.notifier.capacity());
    let notifications = state.notifier.recent(limit);

    ApiResponse::success_with_meta(
        &notifications,
        serde_json::json!({
            "count": notifications.len(),
            "capacity": state.notifier.capacity(),
        }),
    )
    .to_http_response()
}
