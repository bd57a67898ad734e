#![doc(test(attr(deny(warnings))))]

//! Expense Form provides the ledger, category registry and form logic behind a
//! single-screen expense tracker, plus a terminal front-end that drives it.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Form tracing initialized.");
    });
}
