//! 内置通知渠道标识
//!
//! 仅用于配置与工厂决定构造哪些内置渠道；分发器本身从不根据渠道类型分支。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotificationError;

/// 内置通知渠道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

impl NotificationChannel {
    /// 全部内置渠道，按默认注册顺序排列
    pub const ALL: [NotificationChannel; 3] = [Self::Email, Self::Sms, Self::Push];

    /// 渠道名称，与发送器的 `channel_name` 一致
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Sms => "SMS",
            Self::Push => "PUSH",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationChannel {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EMAIL" => Ok(Self::Email),
            "SMS" => Ok(Self::Sms),
            "PUSH" => Ok(Self::Push),
            other => Err(NotificationError::invalid_argument(
                "channel",
                format!("未知的通知渠道: {other}"),
            )),
        }
    }
}
