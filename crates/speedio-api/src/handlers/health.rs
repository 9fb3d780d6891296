/// Body of the liveness response.
pub const HEALTH_MESSAGE: &str = "Servidor rodando!";

/// Liveness check. Never touches the database.
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}
