//! Domain identifiers.
//!
//! # CorrelationToken
//! 確認要求と、その応答を対応付けるための識別子です。
//! ULID (Universally Unique Lexicographically Sortable Identifier) を使用します。
//!
//! ## ULID の特性
//! - **128-bit**: 衝突耐性のある識別子空間（UUID と同サイズ）
//! - **分散生成可能**: 調整なしで複数ノードで生成できる
//! - **時刻でソート可能**: timestamp が先頭にあるため、発行順にソートできる
//!
//! 同じトピックを複数のタスクインスタンスが共有するため、応答の紐付けは
//! トークンの完全一致のみで行います（前方一致や部分一致はしない）。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// CorrelationToken は確認要求をその応答に結び付ける
///
/// estimator の生存期間中は不変です。ワイヤ上では opaque な文字列として
/// 扱われます（Display 表現をそのまま payload に載せられる）。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CorrelationToken(Ulid);

impl CorrelationToken {
    /// ULID から CorrelationToken を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for CorrelationToken {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for CorrelationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corr-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_from_distinct_ulids_differ() {
        let a = CorrelationToken::from_ulid(Ulid::new());
        let b = CorrelationToken::from_ulid(Ulid::new());
        assert_ne!(a, b);
    }

    #[test]
    fn display_uses_corr_prefix() {
        let token = CorrelationToken::from_ulid(Ulid::new());
        assert!(token.to_string().starts_with("corr-"));
    }

    #[test]
    fn token_is_ulid_sized() {
        // 128-bit の識別子空間であることを確認
        assert_eq!(std::mem::size_of::<CorrelationToken>(), 16);
    }
}
