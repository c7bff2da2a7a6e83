//! 统一可观测性模块
//!
//! 提供日志与指标的统一初始化。指标只通过 metrics facade 记录，
//! 是否导出由宿主进程安装的 recorder 决定。

pub mod metrics;
pub mod tracing;

use ::tracing::info;
use anyhow::Result;

use crate::config::AppConfig;

/// 统一初始化可观测性
///
/// 初始化顺序：
/// 1. Tracing（日志）
/// 2. Metrics（指标描述）
///
/// # Example
///
/// ```ignore
/// use notify_shared::config::AppConfig;
///
/// fn main() -> anyhow::Result<()> {
///     let config = AppConfig::load("notification-service")?;
///     notify_shared::observability::init(&config)?;
///     Ok(())
/// }
/// ```
pub fn init(config: &AppConfig) -> Result<()> {
    tracing::init(&config.observability)?;
    metrics::describe_metrics();

    info!(
        service = %config.service_name,
        environment = %config.environment,
        log_format = %config.observability.log_format,
        "Observability initialized"
    );

    Ok(())
}
