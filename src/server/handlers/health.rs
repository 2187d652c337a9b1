//! Liveness probe.

/// Always `200 OK` with a plain-text `OK` body; never touches the database.
pub async fn health_handler() -> &'static str {
    "OK"
}
