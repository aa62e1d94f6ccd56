#![doc(test(attr(deny(warnings))))]

//! Fintrack Core provides the period resolution, rolling summary, and export
//! primitives behind a personal finance tracker's reporting views.

pub mod clock;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod export;
pub mod period;
pub mod summary;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
