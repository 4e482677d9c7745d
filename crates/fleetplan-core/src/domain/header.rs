//! Header - イベントの表示用メタデータ
//!
//! `(category, detail, original_duration_estimate)` の静的な三つ組。
//! ライブの確認状況は参照しません。

use chrono::TimeDelta;

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    category: String,
    detail: String,
    original_duration_estimate: TimeDelta,
}

impl Header {
    pub fn new(
        category: impl Into<String>,
        detail: impl Into<String>,
        original_duration_estimate: TimeDelta,
    ) -> Self {
        Self {
            category: category.into(),
            detail: detail.into(),
            original_duration_estimate,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn original_duration_estimate(&self) -> TimeDelta {
        self.original_duration_estimate
    }
}
