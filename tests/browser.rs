#![cfg(target_arch = "wasm32")]

use bitcoin_tracker_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, TimeProvider};
use bitcoin_tracker_wasm::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_clock_is_wall_time() {
    let clock = BrowserTimeProvider::new();
    // 2020-01-01
    assert!(clock.current_timestamp() > 1_577_836_800_000);
    assert_eq!(clock.format_timestamp(clock.current_timestamp()).len(), 12);
}

#[wasm_bindgen_test]
fn console_logger_filters_by_level() {
    let logger = ConsoleLogger::new_production();
    assert!(!logger.accepts(LogLevel::Debug));
    assert!(logger.accepts(LogLevel::Warn));
    logger.log(LogEntry::new(LogLevel::Info, LogComponent::Presentation("Test"), "hello"));
}
