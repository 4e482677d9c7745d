//! Impls - 実装（開発用・テスト用と、プロセス内共有部品）
//!
//! # 含まれる実装
//! - **ConfirmationRouter**: token → latch のプロセス内レジストリ（共有部品）
//! - **ChannelBackend**: メッセージング経由の ConfirmationBackend
//! - **InMemoryChannel**: 開発・テスト用のループバックチャネル
//! - **ScriptedConfirmation / ScriptedBackend**: 固定回数で確認済みになる供給源
//!
//! # 本番用実装
//! 実トランスポート（DDS/MQTT など）に載せる ConfirmationChannel 実装は
//! 別クレートに配置します。router はその場合もそのまま使えます。

pub mod inmem_channel;
pub mod router;
pub mod scripted;

pub use self::inmem_channel::InMemoryChannel;
pub use self::router::{ChannelBackend, ConfirmationRouter};
pub use self::scripted::{ScriptedBackend, ScriptedConfirmation};
