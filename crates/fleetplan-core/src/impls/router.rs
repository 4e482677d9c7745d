//! ConfirmationRouter - token → latch のプロセス内レジストリ
//!
//! # 設計原則
//! - broadcast-and-filter ではなく lookup で配送する。インスタンス数が
//!   増えても inbound 1 件あたりのコストは HashMap の 1 引きで済む
//! - レジストリは `Weak` を保持する。estimator が破棄されれば latch の
//!   強参照が消え、遅れて届いた確認は「宛先なし」として静かに捨てられる
//!   （明示的なキャンセルメッセージは送らない）
//!
//! # 学習ポイント
//! - `Weak` による暗黙のキャンセル（購読解除 API を持たない）
//! - 単一 Mutex で守る共有レジストリ

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use tracing::{debug, warn};

use crate::domain::CorrelationToken;
use crate::ports::{
    ChannelError, ConfirmationBackend, ConfirmationChannel, ConfirmationLatch,
    ConfirmationSource, TokenGenerator,
};

/// ConfirmationRouter は inbound の確認メッセージを token で配送
///
/// プロセス全体で 1 つを共有します。メッセージングサブシステムの
/// 受信コールバックから `deliver` を呼んでください。
#[derive(Default)]
pub struct ConfirmationRouter {
    subscriptions: Mutex<HashMap<CorrelationToken, Weak<ConfirmationLatch>>>,
}

impl ConfirmationRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// token の latch を発行して登録する
    ///
    /// 返された `Arc` が estimator 側の唯一の強参照です。estimator が
    /// 破棄されると entry は dead になり、次の掃除で取り除かれます。
    pub fn subscribe(&self, token: CorrelationToken) -> Arc<ConfirmationLatch> {
        let latch = Arc::new(ConfirmationLatch::new());
        let mut subscriptions = self.subscriptions.lock().unwrap();
        subscriptions.insert(token, Arc::downgrade(&latch));
        latch
    }

    /// inbound メッセージの token を配送する
    ///
    /// 完全一致した latch を立てます。該当なしは同じトピックを共有する
    /// 他インスタンス宛のノイズ（または破棄済み estimator 宛）なので、
    /// ログに残すだけでエラーにはしません。
    pub fn deliver(&self, token: CorrelationToken) {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        match subscriptions.get(&token).and_then(Weak::upgrade) {
            Some(latch) => {
                latch.latch();
                debug!(%token, "confirmation delivered");
            }
            None => {
                warn!(%token, "unmatched confirmation token, discarding");
            }
        }
        // ついでに dead entry を掃除する
        subscriptions.retain(|_, weak| weak.strong_count() > 0);
    }

    /// 生きている購読の数（観測用）
    pub fn live_subscriptions(&self) -> usize {
        let subscriptions = self.subscriptions.lock().unwrap();
        subscriptions
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// ChannelConfirmation はメッセージング経由の ConfirmationSource
///
/// 共有チャネルと router 発行の latch、固定の token を束ねます。
struct ChannelConfirmation {
    token: CorrelationToken,
    latch: Arc<ConfirmationLatch>,
    channel: Arc<dyn ConfirmationChannel>,
}

impl ConfirmationSource for ChannelConfirmation {
    fn confirmed(&self) -> bool {
        self.latch.is_latched()
    }

    fn announce(&self) -> Result<(), ChannelError> {
        self.channel.publish_request(self.token)
    }
}

/// ChannelBackend はメッセージング経由の ConfirmationBackend
///
/// `open` のたびに新しい token を採番し、共有 router に登録した
/// ConfirmationSource を返します。
pub struct ChannelBackend {
    router: Arc<ConfirmationRouter>,
    channel: Arc<dyn ConfirmationChannel>,
    tokens: Arc<dyn TokenGenerator>,
}

impl ChannelBackend {
    pub fn new(
        router: Arc<ConfirmationRouter>,
        channel: Arc<dyn ConfirmationChannel>,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            router,
            channel,
            tokens,
        }
    }
}

impl ConfirmationBackend for ChannelBackend {
    fn open(&self) -> Arc<dyn ConfirmationSource> {
        let token = self.tokens.generate_token();
        let latch = self.router.subscribe(token);
        Arc::new(ChannelConfirmation {
            token,
            latch,
            channel: Arc::clone(&self.channel),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryChannel;
    use crate::ports::{SystemClock, UlidTokenGenerator};
    use ulid::Ulid;

    fn backend() -> (Arc<ConfirmationRouter>, Arc<InMemoryChannel>, ChannelBackend) {
        let router = Arc::new(ConfirmationRouter::new());
        let channel = Arc::new(InMemoryChannel::new());
        let backend = ChannelBackend::new(
            Arc::clone(&router),
            channel.clone() as Arc<dyn ConfirmationChannel>,
            Arc::new(UlidTokenGenerator::new(SystemClock)),
        );
        (router, channel, backend)
    }

    #[test]
    fn delivery_latches_only_the_matching_source() {
        let (router, channel, backend) = backend();

        let a = backend.open();
        let b = backend.open();
        a.announce().unwrap();
        b.announce().unwrap();

        let published = channel.drain_requests();
        assert_eq!(published.len(), 2);

        // a の token だけを配送する
        router.deliver(published[0]);

        assert!(a.confirmed());
        assert!(!b.confirmed());
    }

    #[test]
    fn repeated_delivery_is_idempotent() {
        let (router, channel, backend) = backend();

        let source = backend.open();
        source.announce().unwrap();
        let token = channel.drain_requests()[0];

        router.deliver(token);
        router.deliver(token);

        assert!(source.confirmed());
    }

    #[test]
    fn unmatched_token_is_discarded() {
        let (router, _channel, backend) = backend();

        let source = backend.open();
        router.deliver(CorrelationToken::from_ulid(Ulid::new()));

        assert!(!source.confirmed());
    }

    #[test]
    fn dropping_the_source_makes_late_confirmations_unmatched() {
        let (router, channel, backend) = backend();

        let source = backend.open();
        source.announce().unwrap();
        let token = channel.drain_requests()[0];
        assert_eq!(router.live_subscriptions(), 1);

        drop(source);
        assert_eq!(router.live_subscriptions(), 0);

        // 破棄済み estimator 宛の遅延確認は静かに捨てられる
        router.deliver(token);
    }
}
