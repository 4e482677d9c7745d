//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（時刻、メッセージング、電力モデル、移動時間見積もり）
//! へのインターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - estimator は transport を所有しない。共有エンドポイント（impls::router）を
//!   注入され、correlation token で多重化する
//! - 時刻は Clock 経由で取得する。テストでは FixedClock に差し替える

pub mod channel;
pub mod clock;
pub mod confirmation;
pub mod id_generator;
pub mod power_sink;
pub mod travel;

pub use self::channel::{ChannelError, ConfirmationChannel};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::confirmation::{ConfirmationBackend, ConfirmationLatch, ConfirmationSource};
pub use self::id_generator::{TokenGenerator, UlidTokenGenerator};
pub use self::power_sink::{ConstantDraw, PowerSink};
pub use self::travel::{NoTravel, TravelEstimate, TravelEstimator};
