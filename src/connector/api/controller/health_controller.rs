/// `GET /`: liveness probe.
pub async fn health() -> &'static str {
    "Hello, World!"
}
