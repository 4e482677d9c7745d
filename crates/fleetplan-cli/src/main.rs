//! fleetplan demo driver
//!
//! wait_for_confirmation をライブポーリングで動かすデモです。
//! - ループバックチャネル + 共有 router を配線する
//! - grantor 役の tokio タスクが、3 回目の確認要求を見てから確認を返す
//! - ドライバは tick ごとに refresh_request と estimate_finish を呼ぶ
//!   （「待つ」ことは呼び出し側主導の再ポーリングで表現される）

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

use fleetplan_core::domain::{Constraints, Estimate, Parameters, TaskState};
use fleetplan_core::event::EventEstimator;
use fleetplan_core::event::wait_for_confirmation::Description;
use fleetplan_core::impls::{ChannelBackend, ConfirmationRouter, InMemoryChannel};
use fleetplan_core::ports::{
    ConfirmationChannel, ConstantDraw, NoTravel, SystemClock, UlidTokenGenerator,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let router = Arc::new(ConfirmationRouter::new());
    let channel = Arc::new(InMemoryChannel::new());
    let backend = Arc::new(ChannelBackend::new(
        Arc::clone(&router),
        channel.clone() as Arc<dyn ConfirmationChannel>,
        Arc::new(UlidTokenGenerator::new(SystemClock)),
    ));

    // デモ用に短い間隔: 500ms 待機、timeout 5s
    let mut description = Description::make(TimeDelta::milliseconds(500), TimeDelta::seconds(5));
    description.set_confirmation(backend);

    let parameters = Parameters::new().with_ambient_sink(Arc::new(ConstantDraw::new(0.0004)));
    let initial_state = TaskState::new(Utc::now(), 0.9);
    let model = description.make_model(initial_state, &parameters);

    // grantor: 確認要求を観測し、3 件目で確認を返す外部アクター役
    let grantor = {
        let router = Arc::clone(&router);
        let channel = Arc::clone(&channel);
        tokio::spawn(async move {
            let mut seen = 0u32;
            loop {
                for token in channel.drain_requests() {
                    seen += 1;
                    info!(%token, seen, "grantor: request observed");
                    if seen >= 3 {
                        info!(%token, "grantor: confirming");
                        router.deliver(token);
                        return;
                    }
                }
                sleep(Duration::from_millis(50)).await;
            }
        })
    };

    let constraints = Constraints::new(true, 0.2);
    let mut state = initial_state;

    let final_estimate: Option<Estimate> = loop {
        if model.confirmed() {
            // 決着: 時間は進まず、finish time は状態の現在時刻
            break model.estimate_finish(state, Utc::now(), &constraints, &NoTravel);
        }
        if model.timed_out() {
            break None;
        }

        if let Err(error) = model.refresh_request() {
            warn!(%error, "confirmation request failed");
        }

        match model.estimate_finish(state, Utc::now(), &constraints, &NoTravel) {
            Some(estimate) => {
                info!(
                    soc = ?estimate.finish_state().battery_soc(),
                    "still waiting, projected wait extended by one interval"
                );
                state = estimate.finish_state();
            }
            None => break None,
        }

        sleep(Duration::from_millis(500)).await;
    };

    // ループが 3 回目の要求より前に抜けた場合（timeout やバッテリー不成立）、
    // grantor は確認を待ち続けるので中断してから回収する
    grantor.abort();
    let _ = grantor.await;

    match final_estimate {
        Some(estimate) => {
            info!("confirmation received, event finalized");
            println!("{}", serde_json::to_string_pretty(&estimate).unwrap());
        }
        None => warn!("candidate schedule infeasible (timeout or battery exhausted)"),
    }
}
