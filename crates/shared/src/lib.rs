//! 共享库
//!
//! 包含通知服务共用的配置、错误处理、渠道标识与可观测性基础设施代码。

pub mod channel;
pub mod config;
pub mod error;
pub mod observability;
