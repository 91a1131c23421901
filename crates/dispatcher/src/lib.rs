//! # Dispatcher
//!
//! Host-facing side of the relay.
//!
//! 负责：
//! - 每种宿主事件一个入口，转换为 `Event`
//! - 格式化后交给 `Forwarder`
//! - 伤害回调时延迟判断死亡（宿主在回调之后才确定结果）
//! - Relay 启动/停止生命周期

pub mod dispatcher;
pub mod relay;
pub mod scheduler;

pub use contracts::{EntityState, Event, Scheduler};
pub use dispatcher::{local_clock, Clock, Dispatcher, EntityDamage};
pub use relay::Relay;
pub use scheduler::TickQueue;
