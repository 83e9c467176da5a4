//! Smoke-check binary: wires the service against the host's real devices
//! and the configured store, runs one device check, and prints a question
//! draw. Media commits stay behind the library API; the HTTP boundary
//! lives elsewhere.

use anyhow::Result;
use greenroom::probe::SignalProbe;
use greenroom::questions::QuestionPool;
use greenroom::session::{DeviceCheckResponse, QuestionsResponse};
use greenroom::stager::HttpObjectStore;
use greenroom::{init_tracing, SessionConfig, SessionService};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::from_json_file(Path::new(&path))?,
        None => SessionConfig::default(),
    };

    let store = Arc::new(HttpObjectStore::new(
        config.store_endpoint.clone(),
        config.bucket.clone(),
    ));
    let probe = SignalProbe::with_default_devices(config.audio.clone());
    let mut service = SessionService::new(config, probe, QuestionPool::default_bank(), store)?;

    let check = DeviceCheckResponse::from(service.check_devices());
    println!("{}", serde_json::to_string_pretty(&check)?);

    let draw = QuestionsResponse {
        questions: service.select_questions()?,
    };
    println!("{}", serde_json::to_string_pretty(&draw)?);

    Ok(())
}
