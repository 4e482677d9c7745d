//! Constraints - 見積もり 1 回あたりの制約条件
//!
//! estimator は呼び出しごとにこの値を読み取り専用で受け取ります。

use serde::{Deserialize, Serialize};

/// Constraints は候補スケジュールの実行可否判定に使う制約
///
/// # フィールド
/// - `drain_battery`: false ならバッテリー会計を一切行わない
/// - `threshold_soc`: SOC の下限閾値。`[0, 1]` に clamp される
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    drain_battery: bool,
    threshold_soc: f64,
}

impl Constraints {
    pub fn new(drain_battery: bool, threshold_soc: f64) -> Self {
        Self {
            drain_battery,
            threshold_soc: threshold_soc.clamp(0.0, 1.0),
        }
    }

    pub fn drain_battery(&self) -> bool {
        self.drain_battery
    }

    pub fn threshold_soc(&self) -> f64 {
        self.threshold_soc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped_to_unit_interval() {
        assert_eq!(Constraints::new(true, -0.5).threshold_soc(), 0.0);
        assert_eq!(Constraints::new(true, 1.5).threshold_soc(), 1.0);
        assert_eq!(Constraints::new(true, 0.2).threshold_soc(), 0.2);
    }
}
