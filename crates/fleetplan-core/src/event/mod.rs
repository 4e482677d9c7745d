//! Event - イベント見積もり契約
//!
//! タスクの 1 ステップ（イベント）は Description / Estimator のペアで
//! モデル化します。
//!
//! # 二相構造
//! - **Description**: 再利用可能な設定オブジェクト。タスク計画の寿命の間
//!   生き続け、計画試行ごと（またはライブ実行ごと）に estimator を製造する
//! - **Estimator**: 1 回の計画試行・実行に専属する短命オブジェクト。
//!   候補スケジュールが探索されるたびに `estimate_finish` が呼ばれる
//!
//! ここで定義する 4 操作が、周辺フレームワークのあらゆるイベント種別が
//! 満たすべき契約のすべてです。

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::{Constraints, Estimate, Header, Parameters, TaskState};
use crate::ports::TravelEstimator;

pub mod wait_for_confirmation;

/// EventDescription はイベントの再利用可能なテンプレート
pub trait EventDescription: Send + Sync {
    /// 新しい estimator を製造する
    ///
    /// `invariant_initial_state` は構築時点で固定される粗い終了状態として
    /// 取り込まれます。この呼び出しは I/O を行いません。
    fn make_estimator(
        &self,
        invariant_initial_state: TaskState,
        parameters: &Parameters,
    ) -> Arc<dyn EventEstimator>;

    /// 表示用の静的なヘッダを生成する
    fn generate_header(&self, state: &TaskState, parameters: &Parameters) -> Header;
}

/// EventEstimator は 1 回の計画試行・実行に対する見積もり器
pub trait EventEstimator: Send + Sync {
    /// 状態に依存しない所要時間の下界
    ///
    /// スケジューラが見積もりなしで大まかな duration bound を取るのに使います。
    fn invariant_duration(&self) -> TimeDelta;

    /// 構築時に取り込んだ固定の終了状態
    ///
    /// 確認状況による再見積もりを意図的に反映しません（粗い不変量）。
    fn invariant_finish_state(&self) -> TaskState;

    /// 候補スケジュール 1 点に対する見積もり
    ///
    /// `None` は「この候補計画は現在の制約下で不成立」を意味し、
    /// 一時的なエラーではありません。呼び出し側はこの呼び出しを
    /// リトライするのではなく、別のスケジュールを試します。
    fn estimate_finish(
        &self,
        state: TaskState,
        earliest_arrival_time: DateTime<Utc>,
        constraints: &Constraints,
        travel_estimator: &dyn TravelEstimator,
    ) -> Option<Estimate>;
}
