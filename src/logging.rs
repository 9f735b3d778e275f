//! 日誌初始化
//!
//! 引擎各 crate 只透過 `tracing` 發出事件；訂閱者由應用程式在啟動時安裝

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日誌系統
///
/// 讀取 `RUST_LOG`（預設 `info`），例如 `RUST_LOG=label_calc=debug`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化測試用日誌（debug 等級，可重複呼叫）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
