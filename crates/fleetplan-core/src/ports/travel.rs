//! TravelEstimator port - 移動時間見積もりの境界
//!
//! 移動系イベントが使う外部コラボレータです。このコアでは境界だけを定義し、
//! wait_for_confirmation はこの値を受け取りますが参照しません。

use chrono::TimeDelta;

use crate::domain::TaskState;

/// TravelEstimate は 2 状態間の移動コスト
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelEstimate {
    pub duration: TimeDelta,
    pub change_in_charge: f64,
}

/// TravelEstimator は 2 状態間の移動コストを見積もる
///
/// `None` は経路が存在しない（候補スケジュールが不成立）を意味します。
pub trait TravelEstimator: Send + Sync {
    fn estimate(&self, from: &TaskState, to: &TaskState) -> Option<TravelEstimate>;
}

/// NoTravel は移動を伴わないイベント向けの null 実装
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTravel;

impl TravelEstimator for NoTravel {
    fn estimate(&self, _from: &TaskState, _to: &TaskState) -> Option<TravelEstimate> {
        Some(TravelEstimate {
            duration: TimeDelta::zero(),
            change_in_charge: 0.0,
        })
    }
}
