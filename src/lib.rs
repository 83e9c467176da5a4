//! Greenroom - remote interview session backend.
//!
//! Verifies a candidate's microphone and camera are functional, serves
//! randomized question draws, and moves recorded media through a
//! stage-then-commit upload pipeline: local scratch write, confirmed
//! remote transfer, local cleanup.

pub mod config;
pub mod probe;
pub mod questions;
pub mod session;
pub mod stager;
pub mod utils;

pub use config::SessionConfig;
pub use session::SessionService;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging for the process. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greenroom=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting greenroom v{}", env!("CARGO_PKG_VERSION"));
}
