use axum::Json;
use serde::Serialize;

/// Successful root response
#[derive(Serialize, Debug)]
pub struct RootResponse {
    message: &'static str,
    version: &'static str,
}

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root response from service
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Attendance API is up",
        version: CRATE_VERSION,
    })
}
