//! 多渠道通知发送器
//!
//! 通过 `NotificationSender` trait 抽象发送行为，各渠道（邮件、短信、APP 推送）
//! 提供独立实现。当前版本为模拟发送（仅记录日志）。新增渠道只需实现同一 trait，
//! 分发器无需改动。
//!
//! 所有实现共同遵守的发送契约：
//! - 收件人缺失或为空白时返回失败结果，而不是错误
//! - 模拟投递完成后返回成功结果
//! - 任何消息（超长或缺失）都不会导致错误或 panic，唯一允许的适配是截断

use std::sync::Arc;

use chrono::{DateTime, Utc};
use notify_shared::channel::NotificationChannel;
use notify_shared::error::Result;
use serde::Serialize;

use crate::notification::Notification;

/// 发送结果
///
/// 统一记录各渠道的发送状态，分发器汇总后返回给调用方。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendResult {
    pub success: bool,
    pub channel: String,
    /// 模拟投递生成的消息标识，仅成功时存在
    pub message_id: Option<String>,
    /// 投递到日志的渲染行，仅成功时存在
    pub delivered: Option<String>,
    pub error: Option<String>,
    pub sent_at: DateTime<Utc>,
}

impl SendResult {
    pub fn success(
        channel: &str,
        message_id: String,
        delivered: String,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            success: true,
            channel: channel.to_string(),
            message_id: Some(message_id),
            delivered: Some(delivered),
            error: None,
            sent_at,
        }
    }

    pub fn failure(channel: &str, reason: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            success: false,
            channel: channel.to_string(),
            message_id: None,
            delivered: None,
            error: Some(reason.into()),
            sent_at,
        }
    }
}

/// 通知发送器 trait，各渠道实现具体的推送逻辑
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSender: Send + Sync {
    /// 渠道身份；名称、上限与预处理规则都由它提供
    fn notification(&self) -> &Notification;

    /// 发送通知到指定收件人，契约见模块文档
    fn send<'a>(&self, recipient: Option<&'a str>, message: Option<&'a str>) -> SendResult;
}

// ---------------------------------------------------------------------------
// 邮件发送器
// ---------------------------------------------------------------------------

/// 模拟邮件发送器，上限 500 字符
///
/// 生产环境中替换为 SMTP 或邮件服务商的 API 调用
#[derive(Debug, Clone)]
pub struct EmailSender {
    notification: Notification,
}

impl EmailSender {
    pub const CHANNEL_NAME: &'static str = "EMAIL";
    pub const MAX_MESSAGE_LENGTH: usize = 500;

    pub fn new() -> Result<Self> {
        Ok(Self {
            notification: Notification::new(Self::CHANNEL_NAME, Self::MAX_MESSAGE_LENGTH)?,
        })
    }
}

impl NotificationSender for EmailSender {
    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn send<'a>(&self, recipient: Option<&'a str>, message: Option<&'a str>) -> SendResult {
        self.notification.deliver(recipient, message)
    }
}

// ---------------------------------------------------------------------------
// 短信发送器
// ---------------------------------------------------------------------------

/// 模拟短信发送器，上限 160 字符
///
/// 生产环境中替换为短信服务商的 API 调用
#[derive(Debug, Clone)]
pub struct SmsSender {
    notification: Notification,
}

impl SmsSender {
    pub const CHANNEL_NAME: &'static str = "SMS";
    pub const MAX_MESSAGE_LENGTH: usize = 160;

    pub fn new() -> Result<Self> {
        Ok(Self {
            notification: Notification::new(Self::CHANNEL_NAME, Self::MAX_MESSAGE_LENGTH)?,
        })
    }
}

impl NotificationSender for SmsSender {
    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn send<'a>(&self, recipient: Option<&'a str>, message: Option<&'a str>) -> SendResult {
        self.notification.deliver(recipient, message)
    }
}

// ---------------------------------------------------------------------------
// APP 推送发送器
// ---------------------------------------------------------------------------

/// 模拟 APP 推送发送器，上限 100 字符
///
/// 生产环境中替换为 APNs / FCM 等推送服务的 SDK 调用
#[derive(Debug, Clone)]
pub struct PushSender {
    notification: Notification,
}

impl PushSender {
    pub const CHANNEL_NAME: &'static str = "PUSH";
    pub const MAX_MESSAGE_LENGTH: usize = 100;

    pub fn new() -> Result<Self> {
        Ok(Self {
            notification: Notification::new(Self::CHANNEL_NAME, Self::MAX_MESSAGE_LENGTH)?,
        })
    }
}

impl NotificationSender for PushSender {
    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn send<'a>(&self, recipient: Option<&'a str>, message: Option<&'a str>) -> SendResult {
        self.notification.deliver(recipient, message)
    }
}

/// 按渠道标识构造内置发送器
pub fn build_sender(channel: NotificationChannel) -> Result<Arc<dyn NotificationSender>> {
    let sender: Arc<dyn NotificationSender> = match channel {
        NotificationChannel::Email => Arc::new(EmailSender::new()?),
        NotificationChannel::Sms => Arc::new(SmsSender::new()?),
        NotificationChannel::Push => Arc::new(PushSender::new()?),
    };
    Ok(sender)
}

// ---------------------------------------------------------------------------
// 测试
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn all_senders() -> Vec<Box<dyn NotificationSender>> {
        vec![
            Box::new(EmailSender::new().unwrap()),
            Box::new(SmsSender::new().unwrap()),
            Box::new(PushSender::new().unwrap()),
        ]
    }

    #[test]
    fn test_builtin_identities() {
        let email = EmailSender::new().unwrap();
        assert_eq!(email.notification().channel_name(), "EMAIL");
        assert_eq!(email.notification().max_message_length(), 500);

        let sms = SmsSender::new().unwrap();
        assert_eq!(sms.notification().channel_name(), "SMS");
        assert_eq!(sms.notification().max_message_length(), 160);

        let push = PushSender::new().unwrap();
        assert_eq!(push.notification().channel_name(), "PUSH");
        assert_eq!(push.notification().max_message_length(), 100);
    }

    #[test]
    fn test_email_send() {
        let result = EmailSender::new().unwrap().send(Some("user@x.com"), Some("hi"));
        assert!(result.success);
        assert_eq!(result.channel, "EMAIL");
        assert_eq!(result.delivered.as_deref(), Some("[EMAIL] To: user@x.com | hi"));
    }

    #[test]
    fn test_sms_send_truncates() {
        let result = SmsSender::new()
            .unwrap()
            .send(Some("+8613800000000"), Some("B".repeat(200).as_str()));
        assert!(result.success);
        let delivered = result.delivered.unwrap();
        assert_eq!(delivered, format!("[SMS] To: +8613800000000 | {}", "B".repeat(160)));
    }

    #[test]
    fn test_push_send() {
        let result = PushSender::new().unwrap().send(Some("device-token-1"), Some("ping"));
        assert!(result.success);
        assert_eq!(result.channel, "PUSH");
        assert!(result.message_id.is_some());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_every_sender_rejects_blank_recipient() {
        for sender in all_senders() {
            for recipient in [None, Some(""), Some("   ")] {
                let result = sender.send(recipient, Some("hello"));
                assert!(!result.success, "{} 应拒绝空收件人", sender.notification().channel_name());
                assert!(result.error.is_some());
            }
        }
    }

    #[test]
    fn test_every_sender_accepts_oversized_and_missing_messages() {
        let long = "A".repeat(1000);
        for sender in all_senders() {
            assert!(sender.send(Some("user@x.com"), Some(long.as_str())).success);
            assert!(sender.send(Some("user@x.com"), None).success);
            assert!(sender.send(Some("user@x.com"), Some("  ")).success);
        }
    }

    #[test]
    fn test_build_sender_matches_channel() {
        for channel in NotificationChannel::ALL {
            let sender = build_sender(channel).unwrap();
            assert_eq!(sender.notification().channel_name(), channel.as_str());
            assert!(sender.notification().max_message_length() >= 10);
        }
    }

    #[test]
    fn test_send_result_serializes() {
        let result = PushSender::new().unwrap().send(None, Some("x"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["channel"], "PUSH");
        assert!(json["message_id"].is_null());
    }
}
