//! Prometheus metrics registry and instruments.
//!
//! This module is framework-agnostic and can be used from any layer.

use lazy_static::lazy_static;
use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("todolist_http_requests_total", "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("metric can be created");

    // Store Metrics
    pub static ref ITEMS_ADDED_TOTAL: IntCounter = IntCounter::new(
        "todolist_items_added_total",
        "Total number of to-do items added"
    ).expect("metric can be created");
    pub static ref ITEMS_GAUGE: IntGauge = IntGauge::new(
        "todolist_items",
        "Current number of to-do items in the store"
    ).expect("metric can be created");

    // Error Metrics
    pub static ref ERRORS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("todolist_errors_total", "Total number of errors"),
        &["error_type"]
    ).expect("metric can be created");
}

/// Initialize metrics registry.
pub fn init_metrics() {
    REGISTRY
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("HTTP_REQUESTS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(ITEMS_ADDED_TOTAL.clone()))
        .expect("ITEMS_ADDED_TOTAL can be registered");
    REGISTRY
        .register(Box::new(ITEMS_GAUGE.clone()))
        .expect("ITEMS_GAUGE can be registered");
    REGISTRY
        .register(Box::new(ERRORS_TOTAL.clone()))
        .expect("ERRORS_TOTAL can be registered");

    tracing::info!("Metrics registry initialized");
}
