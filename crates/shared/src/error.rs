//! 统一错误处理模块
//!
//! 通知系统只在边界处（渠道构造、注册、配置加载）返回错误；
//! 发送与广播路径永不返回错误，异常输入一律转为失败结果或截断。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum NotificationError {
    // ==================== 验证错误 ====================
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, NotificationError>;

impl NotificationError {
    /// 构造参数校验错误
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
