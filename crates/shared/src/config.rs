//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::channel::NotificationChannel;
use crate::error::Result;

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// 分发配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// 启动时按顺序注册的内置渠道
    pub channels: Vec<NotificationChannel>,
    /// 是否拒绝同名渠道的重复注册
    pub reject_duplicates: bool,
    pub demo_recipient: String,
    pub demo_message: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            channels: NotificationChannel::ALL.to_vec(),
            reject_duplicates: false,
            demo_recipient: "user@example.com".to_string(),
            demo_message: "Your order has shipped and will arrive within three business days."
                .to_string(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub observability: ObservabilityConfig,
    pub dispatch: DispatchConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（NOTIFY_ 前缀，`__` 分隔层级，如 NOTIFY_DISPATCH__REJECT_DUPLICATES -> dispatch.reject_duplicates）
    pub fn load(service_name: &str) -> Result<Self> {
        let env = std::env::var("NOTIFY_ENV").unwrap_or_else(|_| "development".to_string());

        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", env))).required(false),
            )
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", service_name)))
                    .required(false),
            )
            // 环境变量覆盖（NOTIFY_DISPATCH__CHANNELS=EMAIL,SMS -> dispatch.channels）
            .add_source(
                Environment::with_prefix("NOTIFY")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("dispatch.channels")
                    .try_parsing(true),
            );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// 用渠道名称列表覆盖配置中的渠道，例如命令行参数
    ///
    /// 列表为空时保留原配置；任一名称无法识别则整体拒绝，原配置不变。
    pub fn override_channels<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let channels = names
            .into_iter()
            .map(|name| name.as_ref().parse::<NotificationChannel>())
            .collect::<Result<Vec<_>>>()?;

        if !channels.is_empty() {
            self.dispatch.channels = channels;
        }
        Ok(())
    }
}
