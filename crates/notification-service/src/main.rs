//! 通知服务
//!
//! 加载配置，注册配置中的渠道，并向演示收件人广播一条消息。
//! 命令行参数（如 `notification-service sms push`）覆盖配置中的渠道列表。

use anyhow::Context;
use notification_service::NotificationService;
use notify_shared::config::AppConfig;
use tracing::{info, warn};

const SERVICE_NAME: &str = "notification-service";

fn main() -> anyhow::Result<()> {
    let mut config = AppConfig::load(SERVICE_NAME).context("加载配置失败")?;
    config
        .override_channels(std::env::args().skip(1))
        .context("解析命令行渠道参数失败")?;
    notify_shared::observability::init(&config)?;

    info!(
        channels = ?config.dispatch.channels,
        reject_duplicates = config.dispatch.reject_duplicates,
        "Starting notification-service..."
    );

    let service = NotificationService::from_config(&config.dispatch)?;

    let results = service.broadcast_detailed(
        Some(config.dispatch.demo_recipient.as_str()),
        Some(config.dispatch.demo_message.as_str()),
    );

    for result in &results {
        if result.success {
            info!(channel = %result.channel, message_id = ?result.message_id, "渠道发送成功");
        } else {
            warn!(channel = %result.channel, error = ?result.error, "渠道发送失败");
        }
    }

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
