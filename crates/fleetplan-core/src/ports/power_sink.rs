//! PowerSink port - 待機中の消費電力モデル
//!
//! estimator が参照する唯一の電力モデルです。待機時間（秒）から SOC の
//! 変化量を計算します。決定的で、副作用を持ちません。

/// PowerSink は待機時間に対する充電量の変化を計算
///
/// 呼び出し側が負の duration を 0 に正規化してから渡すため、実装は
/// 非負の入力だけを想定できます。
pub trait PowerSink: Send + Sync {
    /// `duration_seconds` の待機で消費される SOC（正の値 = 減少量）
    fn compute_change_in_charge(&self, duration_seconds: f64) -> f64;
}

/// ConstantDraw は秒あたり一定の SOC を消費する単純なモデル
///
/// テストとデモ用。実運用ではロボットの電力モデルに合わせた実装を注入します。
#[derive(Debug, Clone, Copy)]
pub struct ConstantDraw {
    soc_per_second: f64,
}

impl ConstantDraw {
    pub fn new(soc_per_second: f64) -> Self {
        Self { soc_per_second }
    }
}

impl PowerSink for ConstantDraw {
    fn compute_change_in_charge(&self, duration_seconds: f64) -> f64 {
        self.soc_per_second * duration_seconds
    }
}
