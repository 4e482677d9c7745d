//! TokenGenerator port - correlation token 生成の抽象化
//!
//! テスト容易性のために trait として抽象化しています。
//!
//! # 実装
//! - **UlidTokenGenerator**: ULID ベース（本番用）

use rand::random;
use ulid::Ulid;

use crate::domain::CorrelationToken;
use crate::ports::Clock;

/// TokenGenerator は衝突耐性のある correlation token を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（配送スレッドと計画スレッドの双方から使える）
pub trait TokenGenerator: Send + Sync {
    fn generate_token(&self) -> CorrelationToken;
}

/// UlidTokenGenerator は ULID ベースのトークン生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。timestamp 部分は
/// Clock から、random 部分は `rand` から取ります。
pub struct UlidTokenGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidTokenGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> TokenGenerator for UlidTokenGenerator<C> {
    fn generate_token(&self) -> CorrelationToken {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, random());
        CorrelationToken::from(ulid)
    }
}
