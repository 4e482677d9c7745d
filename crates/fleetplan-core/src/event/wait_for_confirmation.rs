//! wait_for_confirmation - 外部確認を待つイベント
//!
//! ロボットが外部の確認信号を待つイベントです。確認が届くまで、予測される
//! 待機時間を 1 インターバルずつ延長し続け、timeout かバッテリー枯渇で
//! 見積もりを不成立にします。
//!
//! # 状態機械
//! 外から見える状態は {Waiting, Confirmed} の 2 つだけです。確認が届くまで
//! 呼び出しのたびに Waiting を繰り返し、TimedOut / BatteryExhausted は
//! 「その見積もりの不成立」であってオブジェクトの終了ではありません。
//!
//! # 純粋性
//! `estimate_finish` は latch と経過時間を読むだけで、I/O を行いません。
//! 外向きの確認要求（初回を含む）はライブ実行ドライバが `refresh_request` を
//! 自分のペースで呼ぶことで発行されます。計画時の呼び出し側（多数の仮想
//! スケジュールを探索する）は実 I/O を決して起こしません。

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::battery;
use crate::domain::{Constraints, Estimate, Header, Parameters, TaskState};
use crate::event::{EventDescription, EventEstimator};
use crate::impls::ScriptedBackend;
use crate::ports::{
    ChannelError, Clock, ConfirmationBackend, ConfirmationSource, SystemClock, TravelEstimator,
};

/// Description は wait_for_confirmation の再利用可能なテンプレート
///
/// # 設定オブジェクトとしての性質
/// - setter は in place で書き換え、チェーンのために `&mut Self` を返す
/// - 負の duration はここでは受理し、estimator 構築時に 0 に正規化する
/// - clock と confirmation backend は設定で差し替える。デフォルトは
///   SystemClock と「決して確認されない」スクリプト backend（計画専用）
pub struct Description {
    initial_wait_duration: TimeDelta,
    timeout_duration: TimeDelta,
    clock: Arc<dyn Clock>,
    confirmation: Arc<dyn ConfirmationBackend>,
}

impl Description {
    pub fn make(initial_wait_duration: TimeDelta, timeout_duration: TimeDelta) -> Self {
        Self {
            initial_wait_duration,
            timeout_duration,
            clock: Arc::new(SystemClock),
            confirmation: Arc::new(ScriptedBackend::never()),
        }
    }

    pub fn initial_wait_duration(&self) -> TimeDelta {
        self.initial_wait_duration
    }

    pub fn timeout_duration(&self) -> TimeDelta {
        self.timeout_duration
    }

    pub fn set_initial_wait_duration(&mut self, duration: TimeDelta) -> &mut Self {
        self.initial_wait_duration = duration;
        self
    }

    pub fn set_timeout_duration(&mut self, duration: TimeDelta) -> &mut Self {
        self.timeout_duration = duration;
        self
    }

    pub fn set_clock(&mut self, clock: Arc<dyn Clock>) -> &mut Self {
        self.clock = clock;
        self
    }

    pub fn set_confirmation(&mut self, backend: Arc<dyn ConfirmationBackend>) -> &mut Self {
        self.confirmation = backend;
        self
    }

    /// 具象型の Model を製造する
    ///
    /// ライブ実行ドライバは `refresh_request` を呼ぶためにこちらを使います。
    /// I/O は行いません。チャネル backend の場合でも、ここで行われるのは
    /// token の採番と共有 router への登録だけです。
    pub fn make_model(
        &self,
        invariant_initial_state: TaskState,
        parameters: &Parameters,
    ) -> Arc<Model> {
        Arc::new(Model::new(
            invariant_initial_state,
            self.initial_wait_duration,
            self.timeout_duration,
            parameters,
            Arc::clone(&self.clock),
            self.confirmation.open(),
        ))
    }
}

impl EventDescription for Description {
    fn make_estimator(
        &self,
        invariant_initial_state: TaskState,
        parameters: &Parameters,
    ) -> Arc<dyn EventEstimator> {
        self.make_model(invariant_initial_state, parameters)
    }

    fn generate_header(&self, _state: &TaskState, _parameters: &Parameters) -> Header {
        Header::new(
            "Wait for confirmation",
            "Wait until an external confirmation signal arrives or the timeout expires",
            self.initial_wait_duration.max(TimeDelta::zero()),
        )
    }
}

/// Model は wait_for_confirmation の見積もり器
///
/// 1 回の計画試行・ライブ実行に専属します。共有される可変状態は
/// 確認 latch（ConfirmationSource 内）と要求時刻だけで、どちらも
/// atomic / Mutex で守られます。
pub struct Model {
    invariant_finish_state: TaskState,
    invariant_battery_drain: f64,
    initial_wait_duration: TimeDelta,
    timeout_duration: TimeDelta,
    source: Arc<dyn ConfirmationSource>,
    /// 直近の外向き要求の時刻。timeout の経過測定に使う
    request_time: Mutex<DateTime<Utc>>,
    clock: Arc<dyn Clock>,
}

impl Model {
    fn new(
        invariant_initial_state: TaskState,
        initial_wait_duration: TimeDelta,
        timeout_duration: TimeDelta,
        parameters: &Parameters,
        clock: Arc<dyn Clock>,
        source: Arc<dyn ConfirmationSource>,
    ) -> Self {
        // 負の設定値はここで 0 に正規化する
        let initial_wait_duration = initial_wait_duration.max(TimeDelta::zero());
        let timeout_duration = timeout_duration.max(TimeDelta::zero());

        let invariant_battery_drain = battery::drain(
            initial_wait_duration,
            parameters.ambient_sink().map(|sink| sink.as_ref()),
        );

        let request_time = Mutex::new(clock.now());

        Self {
            invariant_finish_state: invariant_initial_state,
            invariant_battery_drain,
            initial_wait_duration,
            timeout_duration,
            source,
            request_time,
            clock,
        }
    }

    /// 外向きの確認要求を（再）発行する
    ///
    /// ライブ実行ドライバが自分のペースで呼びます。要求時刻が更新されるため、
    /// timeout の窓はここから測り直しになります。計画時の呼び出し側は
    /// 決して呼びません。
    pub fn refresh_request(&self) -> Result<(), ChannelError> {
        self.source.announce()?;
        *self.request_time.lock().unwrap() = self.clock.now();
        Ok(())
    }

    /// 確認 latch の現在値
    pub fn confirmed(&self) -> bool {
        self.source.confirmed()
    }

    /// timeout を超過しているか
    ///
    /// timeout は lazy に評価されます。ポーリングされなくなった estimator が
    /// 自発的に timed out になることはないため、スケジューラ側の定期的な
    /// 掃引パスはこのメソッドで stale を検出できます。
    pub fn timed_out(&self) -> bool {
        if self.source.confirmed() {
            return false;
        }
        self.elapsed() > self.timeout_duration
    }

    fn elapsed(&self) -> TimeDelta {
        self.clock.now() - *self.request_time.lock().unwrap()
    }

    /// drain_battery が有効で SOC が追跡されていれば 1 インターバル分を引く
    ///
    /// `None` = バッテリー的に不成立（負になる、または閾値以下）。
    fn debit_battery(&self, state: TaskState, constraints: &Constraints) -> Option<TaskState> {
        if !constraints.drain_battery() {
            return Some(state);
        }
        let Some(soc) = state.battery_soc() else {
            return Some(state);
        };
        let next = battery::apply_drain(soc, self.invariant_battery_drain, constraints)?;
        Some(state.with_battery_soc(next))
    }
}

impl EventEstimator for Model {
    fn invariant_duration(&self) -> TimeDelta {
        if self.source.confirmed() {
            TimeDelta::zero()
        } else {
            self.initial_wait_duration
        }
    }

    fn invariant_finish_state(&self) -> TaskState {
        self.invariant_finish_state
    }

    fn estimate_finish(
        &self,
        state: TaskState,
        earliest_arrival_time: DateTime<Utc>,
        constraints: &Constraints,
        _travel_estimator: &dyn TravelEstimator,
    ) -> Option<Estimate> {
        if !self.source.confirmed() {
            if self.elapsed() > self.timeout_duration {
                debug!("confirmation timeout exceeded, candidate schedule infeasible");
                return None;
            }

            // 待機をもう 1 インターバル分だけ状態に織り込む
            let state = state.advanced_by(self.initial_wait_duration);

            let Some(state) = self.debit_battery(state, constraints) else {
                debug!("battery infeasible while waiting for confirmation");
                return None;
            };

            // イベントはまだ決着していないので finish time は進めない
            return Some(Estimate::new(state, earliest_arrival_time));
        }

        // 確認済み: 1 回分の消費だけ適用し、時間は進めない
        let Some(state) = self.debit_battery(state, constraints) else {
            debug!("battery infeasible upon confirmation");
            return None;
        };

        let finish_time = state.time().unwrap_or(earliest_arrival_time);
        Some(Estimate::new(state, finish_time))
    }
}
