//! fleetplan-core
//!
//! ロボットフリートのタスク計画で使う「イベント見積もり」ライブラリ。
//! タスクの各ステップ（イベント）を実行せずに、所要時間と終了時の状態
//! （経過時刻・バッテリー SOC）を予測するための部品を提供します。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（state, constraints, estimate, header, parameters, ids）
//! - **ports**: 抽象化レイヤー（Clock, TokenGenerator, PowerSink, TravelEstimator,
//!   ConfirmationChannel, ConfirmationSource）
//! - **event**: イベント契約（EventDescription / EventEstimator）と
//!   その最重要インスタンス wait_for_confirmation
//! - **impls**: 開発・テスト用の実装（ConfirmationRouter, InMemoryChannel,
//!   ScriptedConfirmation）
//! - **battery**: 制約・バッテリー評価（純粋関数）
//!
//! # 設計原則
//! - 見積もり（`estimate_finish`）は純粋: I/O は行わない。外向きの確認要求は
//!   ライブ実行ドライバが `refresh_request` を明示的に呼ぶ
//! - メッセージングのエンドポイントはプロセス全体で共有し、
//!   correlation token で多重化する（estimator ごとに transport を作らない）
//! - 「待つ」ことは呼び出し側主導の再ポーリングで表現する。コアのどの操作も
//!   呼び出しスレッドをブロックしない

pub mod battery;
pub mod domain;
pub mod event;
pub mod impls;
pub mod ports;
