//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::DashboardError;

/// Classified cause of a failed `bind`
enum BindFailure {
    InUse,
    Privileged,
    Other,
}

impl BindFailure {
    fn of(error: &std::io::Error) -> Self {
        use std::io::ErrorKind;

        // EADDRINUSE is 48 on macOS and 98 on Linux; EACCES is 13
        match (error.kind(), error.raw_os_error()) {
            (ErrorKind::AddrInUse, _) | (_, Some(48 | 98)) => Self::InUse,
            (ErrorKind::PermissionDenied, _) | (_, Some(13)) => Self::Privileged,
            _ => Self::Other,
        }
    }
}

impl HttpServer {
    /// Turn a bind failure into an operator-facing message with hints
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> DashboardError {
        let message = match BindFailure::of(&error) {
            BindFailure::InUse => format!(
                "\nPort {port} is already in use on {bind_addr}\n\n  \
                 Stop whatever holds it (lsof -ti:{port}) or pick another port:\n    \
                 DASHBOARD_PORT={next} or server.port in config/dashboard.yaml\n",
                next = port.saturating_add(1),
            ),
            BindFailure::Privileged => format!(
                "\nPermission denied for port {port}\n\n  \
                 Ports below 1024 need elevated privileges; try DASHBOARD_PORT=8000\n"
            ),
            BindFailure::Other => format!("Failed to bind to {}: {}", bind_addr, error),
        };
        DashboardError::server(message)
    }
}
