//! 通知分发服务
//!
//! 各渠道（邮件、短信、APP 推送）共享同一发送契约，分发器按注册顺序广播，
//! 单个渠道的失败只体现在结果中，不影响其他渠道。

pub mod notification;
pub mod sender;
pub mod service;

pub use notification::{MIN_MESSAGE_LENGTH, Notification};
pub use sender::{EmailSender, NotificationSender, PushSender, SendResult, SmsSender, build_sender};
pub use service::{NotificationService, ServiceOptions};
