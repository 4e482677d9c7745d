//! ConfirmationChannel port - 確認要求の送信チャネル
//!
//! # プロトコル
//! - Outbound: estimator の correlation token を request topic に publish する。
//!   同じ estimator から何度呼ばれてもよい（毎回が re-announcement であり、
//!   新しい要求ではない）
//! - Inbound: response topic に届いたメッセージは impls::router 側で
//!   token の完全一致により配送される。token 不一致は同じトピックを共有する
//!   他インスタンスのノイズであり、エラーではない
//!
//! トピック名と payload の封筒はデプロイ依存であり、この port の契約には
//! 含まれません。契約は token の対応付けの意味論だけです。

use thiserror::Error;

use crate::domain::CorrelationToken;

/// ChannelError は送信側の失敗
///
/// ライブ実行ドライバにのみ到達します。計画パス（`estimate_finish`）は
/// I/O を行わないため、このエラーを観測しません。
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("confirmation channel is closed")]
    Closed,

    #[error("publish failed: {0}")]
    PublishFailed(String),
}

/// ConfirmationChannel は確認要求を publish する共有エンドポイント
///
/// # 設計原則
/// - プロセス全体で 1 つを共有し、estimator ごとに transport を作らない
/// - 多重化は correlation token で行う
pub trait ConfirmationChannel: Send + Sync {
    fn publish_request(&self, token: CorrelationToken) -> Result<(), ChannelError>;
}
