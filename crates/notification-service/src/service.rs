//! 通知分发器
//!
//! 按注册顺序持有发送器，广播时对每个渠道调用同一个 `send`。
//! 分发器只依赖 `NotificationSender` 契约，从不检查具体渠道类型。

use std::sync::Arc;

use indexmap::IndexMap;
use notify_shared::config::DispatchConfig;
use notify_shared::error::{NotificationError, Result};
use tracing::{info, instrument, warn};

use crate::sender::{NotificationSender, SendResult, build_sender};

/// 分发器选项
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceOptions {
    /// 拒绝同名渠道的重复注册
    pub reject_duplicates: bool,
}

/// 通知分发器
#[derive(Default)]
pub struct NotificationService {
    senders: Vec<Arc<dyn NotificationSender>>,
    options: ServiceOptions,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ServiceOptions) -> Self {
        Self {
            senders: Vec::new(),
            options,
        }
    }

    /// 按配置顺序构造并注册内置渠道
    pub fn from_config(config: &DispatchConfig) -> Result<Self> {
        let mut service = Self::with_options(ServiceOptions {
            reject_duplicates: config.reject_duplicates,
        });
        for channel in &config.channels {
            service.register(build_sender(*channel)?)?;
        }
        Ok(service)
    }

    /// 注册发送器，追加到注册表末尾
    ///
    /// 开启 `reject_duplicates` 时，同名渠道的第二次注册返回参数错误。
    pub fn register(&mut self, sender: Arc<dyn NotificationSender>) -> Result<()> {
        let channel_name = sender.notification().channel_name();

        if self.options.reject_duplicates
            && self
                .senders
                .iter()
                .any(|s| s.notification().channel_name() == channel_name)
        {
            warn!(channel = %channel_name, "渠道已注册，拒绝重复注册");
            return Err(NotificationError::invalid_argument(
                "channel_name",
                format!("渠道已注册: {channel_name}"),
            ));
        }

        info!(
            channel = %channel_name,
            max_message_length = sender.notification().max_message_length(),
            "注册通知渠道"
        );
        self.senders.push(sender);
        Ok(())
    }

    /// 向所有已注册渠道广播
    ///
    /// 返回按注册顺序排列的 渠道名 -> 是否成功。同名渠道保留首次出现的位置，
    /// 取最后一次的结果。
    pub fn broadcast(
        &self,
        recipient: Option<&str>,
        message: Option<&str>,
    ) -> IndexMap<String, bool> {
        self.broadcast_detailed(recipient, message)
            .into_iter()
            .map(|result| (result.channel, result.success))
            .collect()
    }

    /// 向所有已注册渠道广播，保留每次发送的完整结果
    #[instrument(skip(self, message), fields(channels = self.senders.len()))]
    pub fn broadcast_detailed(
        &self,
        recipient: Option<&str>,
        message: Option<&str>,
    ) -> Vec<SendResult> {
        let results: Vec<SendResult> = self
            .senders
            .iter()
            .map(|sender| sender.send(recipient, message))
            .collect();

        info!(
            total_channels = results.len(),
            success_count = results.iter().filter(|r| r.success).count(),
            "广播完成"
        );

        results
    }

    /// 已注册渠道名称，按注册顺序排列
    pub fn registered_channels(&self) -> Vec<&str> {
        self.senders
            .iter()
            .map(|s| s.notification().channel_name())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
