//! 转发链路指标
//!
//! 通过 `metrics` facade 记录；未安装 recorder 时全部为空操作。

use metrics::{counter, gauge};

/// 记录一行通过去重并进入分发
pub fn record_line_emitted() {
    counter!("log_relay_lines_emitted_total").increment(1);
}

/// 记录一行因与上一行相同而被抑制
pub fn record_line_suppressed() {
    counter!("log_relay_lines_suppressed_total").increment(1);
}

/// 记录一行被丢弃 (格式错误、队列满等)
pub fn record_line_dropped(reason: &'static str) {
    counter!("log_relay_lines_dropped_total", "reason" => reason).increment(1);
}

/// 记录单个 sink 的写入结果
pub fn record_sink_write(sink_name: &str, success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!(
        "log_relay_sink_writes_total",
        "sink" => sink_name.to_string(),
        "status" => status
    )
    .increment(1);
}

/// 记录启动时的连接结果
pub fn record_sink_connection(success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!("log_relay_sink_connections_total", "status" => status).increment(1);
}

/// 当前活跃 sink 数
pub fn set_active_sinks(count: usize) {
    gauge!("log_relay_active_sinks").set(count as f64);
}
