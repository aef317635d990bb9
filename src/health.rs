//! Liveness probe.
//!
//! `GET /api/healthz` answers `200 OK` with the plain-text body `OK` as long
//! as the process can serve HTTP. It reads no state and has no failure mode.

/// Health check handler
pub async fn healthz() -> &'static str {
    "OK"
}
