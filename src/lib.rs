pub mod admin;
pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod response;
pub mod server;
pub mod validation;

pub use config::Config;
pub use error::{ApiError, Result};
pub use handlers::AppState;
pub use metrics::HitCounter;
pub use server::{create_app, Server};
pub use validation::{ChirpSubmission, ChirpValidator, ValidationOutcome};
