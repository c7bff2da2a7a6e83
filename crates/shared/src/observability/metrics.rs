//! 通知指标
//!
//! 指标名称集中定义，发送路径通过 metrics 宏计数。

/// 发送次数，标签 channel / status
pub const NOTIFICATIONS_SENT_TOTAL: &str = "notifications_sent_total";

/// 因超长被截断的消息数，标签 channel
pub const NOTIFICATIONS_TRUNCATED_TOTAL: &str = "notifications_truncated_total";

/// 注册指标描述，出现在导出端的 HELP 注释中
pub fn describe_metrics() {
    metrics::describe_counter!(
        NOTIFICATIONS_SENT_TOTAL,
        "Total number of simulated notification sends"
    );
    metrics::describe_counter!(
        NOTIFICATIONS_TRUNCATED_TOTAL,
        "Total number of messages truncated to the channel limit"
    );
}

/// 记录一次发送结果
pub fn record_send(channel: &str, success: bool) {
    let status = if success { "success" } else { "failure" };
    metrics::counter!(
        NOTIFICATIONS_SENT_TOTAL,
        "channel" => channel.to_string(),
        "status" => status
    )
    .increment(1);
}

/// 记录一次截断
pub fn record_truncation(channel: &str) {
    metrics::counter!(NOTIFICATIONS_TRUNCATED_TOTAL, "channel" => channel.to_string()).increment(1);
}
