//! ConfirmationSource port - 確認信号の供給源
//!
//! wait_for_confirmation は確認の「出どころ」をこの trait で抽象化します。
//! メッセージング経由の実装（impls::router::ChannelBackend）と、
//! 固定回数で確認済みになるスクリプト実装（impls::scripted）を
//! Description の設定で選択します。estimator 側のロジックは共通です。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::ports::ChannelError;

/// ConfirmationSource は 1 つの estimator に紐づく確認信号の供給源
///
/// # 契約
/// - `confirmed` は one-way latch の読み取り。一度 true を返したら
///   以後ずっと true を返す
/// - `announce` は外向きの確認要求の（再）発行。計画パスからは呼ばれず、
///   ライブ実行ドライバだけが自分のペースで呼ぶ
pub trait ConfirmationSource: Send + Sync {
    fn confirmed(&self) -> bool;

    fn announce(&self) -> Result<(), ChannelError>;
}

/// ConfirmationBackend は estimator ごとに ConfirmationSource を発行
///
/// チャネル実装では open のたびに新しい correlation token を採番し、
/// 共有 router に登録します（エンドポイントは共有、token はインスタンスごと）。
pub trait ConfirmationBackend: Send + Sync {
    fn open(&self) -> Arc<dyn ConfirmationSource>;
}

/// ConfirmationLatch は確認受信の one-way latch
///
/// # Thread Safety
/// 配送スレッドが `latch` を、計画スレッドが `is_latched` を呼びます。
/// Release/Acquire 順序により、遷移は「前」か「後」のどちらかとしてのみ
/// 観測されます（部分状態は見えない）。一度 true になったら戻りません。
#[derive(Debug, Default)]
pub struct ConfirmationLatch {
    latched: AtomicBool,
}

impl ConfirmationLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latch(&self) {
        self.latched.store(true, Ordering::Release);
    }

    pub fn is_latched(&self) -> bool {
        self.latched.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_is_one_way() {
        let latch = ConfirmationLatch::new();
        assert!(!latch.is_latched());

        latch.latch();
        assert!(latch.is_latched());

        // 再度 latch しても true のまま（リセット手段はない）
        latch.latch();
        assert!(latch.is_latched());
    }
}
