//! InMemoryChannel - 開発・テスト用のループバックチャネル
//!
//! publish された token をそのまま蓄積します。テストやデモの「確認を出す側」
//! （grantor）は `drain_requests` で要求を観測し、router 経由で応答します。

use std::sync::Mutex;

use crate::domain::CorrelationToken;
use crate::ports::{ChannelError, ConfirmationChannel};

/// InMemoryChannel は publish された要求を蓄積するだけのチャネル
#[derive(Debug, Default)]
pub struct InMemoryChannel {
    published: Mutex<Vec<CorrelationToken>>,
}

impl InMemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 蓄積された要求を publish 順で取り出す（取り出した分は消える）
    pub fn drain_requests(&self) -> Vec<CorrelationToken> {
        let mut published = self.published.lock().unwrap();
        std::mem::take(&mut *published)
    }

    /// まだ取り出されていない要求の数
    pub fn pending_requests(&self) -> usize {
        self.published.lock().unwrap().len()
    }
}

impl ConfirmationChannel for InMemoryChannel {
    fn publish_request(&self, token: CorrelationToken) -> Result<(), ChannelError> {
        let mut published = self.published.lock().unwrap();
        published.push(token);
        Ok(())
    }
}
