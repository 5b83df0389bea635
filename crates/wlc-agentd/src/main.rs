mod config;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use prometheus::{Encoder, TextEncoder};
use tracing::{info, warn};

use wlc_core::{
    LifecycleController, StopOptions,
    orchestrator::{MemoryOrchestrator, TracedOrchestrator},
    probe,
};
use wlc_model::{FileBundle, UnitDescriptor};
use wlc_observe::init_logger;
use wlc_prometheus::PrometheusMetrics;

use crate::config::AgentConfig;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) config + logger
    let cfg = AgentConfig::load()?;
    init_logger(&cfg.logger)?;
    info!("logger initialized");

    // 2) backend
    if !probe::in_cluster(&cfg.controller) {
        warn!("not running in cluster, using in-memory orchestrator");
    }
    let client = TracedOrchestrator::new(MemoryOrchestrator::new());

    // 3) controller + metrics
    let metrics = PrometheusMetrics::new()?;
    let controller = Arc::new(
        LifecycleController::new(client, cfg.controller).with_metrics(Arc::new(metrics.clone())),
    );
    controller.health_check().await?;

    // 4) demo unit
    let unit = UnitDescriptor::new("echo", "1.0");
    let mut files = FileBundle::new();
    files
        .insert("app/config/echo.yaml", "greeting: hello")
        .insert("app/config/tls/ca.pem", "-----BEGIN CERTIFICATE-----");
    let args = vec!["serve".to_string()];
    let env = vec!["ECHO_PORT=7052".to_string(), "ECHO_DEBUG".to_string()];

    let handle = controller.start(&unit, &args, &env, files).await?;
    info!(workload = %handle.name, "demo unit started");

    // 5) waiters
    let waiters: Vec<_> = (0..2)
        .map(|_| {
            let controller = controller.clone();
            let unit = unit.clone();
            tokio::spawn(async move { controller.wait(&unit).await })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(200)).await;
    controller.stop(&unit, StopOptions::default()).await?;

    for waiter in waiters {
        let code = waiter.await.context("waiter panicked")??;
        info!(code, "waiter released");
    }

    // 6) metrics dump
    let mut buf = Vec::new();
    TextEncoder::new().encode(&metrics.gather(), &mut buf)?;
    println!("{}", String::from_utf8_lossy(&buf));
    Ok(())
}
