//! TaskState - エージェントの状態スナップショット
//!
//! # 設計原則
//! - 経過時刻と SOC はどちらも optional（未設定 = 追跡していない）
//! - 更新は copy-with-update: 既存の値を書き換えず、新しい値を返す。
//!   estimator の呼び出しをまたいで同じ状態を alias しない

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// TaskState はある時点でのエージェントの状態を表現
///
/// スケジューラは候補スケジュールを探索しながら、この値を
/// `with_time` / `with_battery_soc` で派生させて estimator に渡します。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskState {
    time: Option<DateTime<Utc>>,
    battery_soc: Option<f64>,
}

impl TaskState {
    /// 時刻と SOC の両方が追跡されている状態を作成
    pub fn new(time: DateTime<Utc>, battery_soc: f64) -> Self {
        Self {
            time: Some(time),
            battery_soc: Some(battery_soc),
        }
    }

    /// 何も追跡していない状態を作成
    pub fn untracked() -> Self {
        Self {
            time: None,
            battery_soc: None,
        }
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn battery_soc(&self) -> Option<f64> {
        self.battery_soc
    }

    /// 時刻を差し替えた新しい状態を返す
    pub fn with_time(self, time: DateTime<Utc>) -> Self {
        Self {
            time: Some(time),
            ..self
        }
    }

    /// SOC を差し替えた新しい状態を返す
    pub fn with_battery_soc(self, battery_soc: f64) -> Self {
        Self {
            battery_soc: Some(battery_soc),
            ..self
        }
    }

    /// 時刻が追跡されていればそれを delta だけ進めた新しい状態を返す
    ///
    /// 未追跡なら元の状態をそのまま返します。
    pub fn advanced_by(self, delta: TimeDelta) -> Self {
        match self.time {
            Some(t) => self.with_time(t + delta),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn with_time_does_not_touch_the_original() {
        let original = TaskState::new(t0(), 0.5);
        let updated = original.with_time(t0() + TimeDelta::seconds(5));

        assert_eq!(original.time(), Some(t0()));
        assert_eq!(updated.time(), Some(t0() + TimeDelta::seconds(5)));
        assert_eq!(updated.battery_soc(), Some(0.5));
    }

    #[test]
    fn advanced_by_is_a_no_op_without_a_tracked_time() {
        let state = TaskState::untracked().with_battery_soc(0.8);
        let advanced = state.advanced_by(TimeDelta::seconds(30));
        assert_eq!(advanced.time(), None);
        assert_eq!(advanced.battery_soc(), Some(0.8));
    }
}
