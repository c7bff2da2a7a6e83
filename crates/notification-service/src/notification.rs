//! 渠道身份与消息预处理
//!
//! `Notification` 是每个发送器持有的不可变渠道身份。名称、长度上限与
//! `prepare` 都是具体类型上的固有方法，发送器只能包装它而无法改写它，
//! 因此截断规则与长度下限对所有渠道一致。

use chrono::Utc;
use notify_shared::error::{NotificationError, Result};
use notify_shared::observability::metrics as notify_metrics;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::sender::SendResult;

/// 任何渠道允许的最小消息长度上限
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// 渠道身份
///
/// 构造后字段不可变；`channel_name` 非空白，`max_message_length` 不小于
/// [`MIN_MESSAGE_LENGTH`]。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    channel_name: String,
    max_message_length: usize,
}

impl Notification {
    pub fn new(channel_name: impl Into<String>, max_message_length: usize) -> Result<Self> {
        let channel_name = channel_name.into();

        if channel_name.trim().is_empty() {
            return Err(NotificationError::invalid_argument(
                "channel_name",
                "渠道名称不能为空",
            ));
        }

        if max_message_length < MIN_MESSAGE_LENGTH {
            return Err(NotificationError::invalid_argument(
                "max_message_length",
                format!("必须不小于 {MIN_MESSAGE_LENGTH}，实际 {max_message_length}"),
            ));
        }

        Ok(Self {
            channel_name,
            max_message_length,
        })
    }

    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    pub fn max_message_length(&self) -> usize {
        self.max_message_length
    }

    /// 按渠道上限预处理消息
    ///
    /// 缺失的消息视为空串；超长时取前 `max_message_length` 个字符，
    /// 按 Unicode 标量计数，不会切断多字节字符。纯空白消息原样返回。
    pub fn prepare(&self, message: Option<&str>) -> String {
        let Some(message) = message else {
            return String::new();
        };

        match message.char_indices().nth(self.max_message_length) {
            Some((cut, _)) => message[..cut].to_string(),
            None => message.to_string(),
        }
    }

    /// 收件人非空白时返回原值
    pub fn validate_recipient(recipient: Option<&str>) -> Option<&str> {
        recipient.filter(|r| !r.trim().is_empty())
    }

    /// 渲染模拟投递行：`[<CHANNEL>] To: <recipient> | <prepared message>`
    pub fn render(&self, recipient: &str, prepared: &str) -> String {
        format!("[{}] To: {} | {}", self.channel_name, recipient, prepared)
    }

    /// 按渠道契约执行一次模拟发送
    ///
    /// 收件人为空返回失败结果；消息只会被截断，不会被拒绝。
    /// 该方法不返回错误也不会 panic，各渠道的 `send` 均委托到这里。
    pub fn deliver(&self, recipient: Option<&str>, message: Option<&str>) -> SendResult {
        let sent_at = Utc::now();

        let Some(recipient) = Self::validate_recipient(recipient) else {
            warn!(channel = %self.channel_name, "收件人为空，拒绝发送");
            notify_metrics::record_send(&self.channel_name, false);
            return SendResult::failure(&self.channel_name, "收件人为空", sent_at);
        };

        let prepared = self.prepare(message);
        if message.is_some_and(|original| prepared.len() < original.len()) {
            debug!(
                channel = %self.channel_name,
                original_chars = message.map_or(0, |m| m.chars().count()),
                max_message_length = self.max_message_length,
                "消息超出渠道上限，已截断"
            );
            notify_metrics::record_truncation(&self.channel_name);
        }

        let message_id = Uuid::now_v7().to_string();
        let line = self.render(recipient, &prepared);

        info!(
            channel = %self.channel_name,
            recipient = %recipient,
            message_id = %message_id,
            line = %line,
            "模拟发送通知"
        );
        notify_metrics::record_send(&self.channel_name, true);

        SendResult::success(&self.channel_name, message_id, line, sent_at)
    }
}
