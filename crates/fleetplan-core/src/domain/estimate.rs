//! Estimate - 見積もり結果
//!
//! 「このイベントが時刻 T に終わるなら、エージェントは状態 S にいる」を表現します。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TaskState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    finish_state: TaskState,
    finish_time: DateTime<Utc>,
}

impl Estimate {
    pub fn new(finish_state: TaskState, finish_time: DateTime<Utc>) -> Self {
        Self {
            finish_state,
            finish_time,
        }
    }

    pub fn finish_state(&self) -> TaskState {
        self.finish_state
    }

    pub fn finish_time(&self) -> DateTime<Utc> {
        self.finish_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn estimate_survives_a_json_roundtrip() {
        let finish_time = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let estimate = Estimate::new(TaskState::new(finish_time, 0.42), finish_time);

        let serialized = serde_json::to_string(&estimate).unwrap();
        let deserialized: Estimate = serde_json::from_str(&serialized).unwrap();

        assert_eq!(estimate, deserialized);
    }

    #[test]
    fn untracked_fields_roundtrip_as_null() {
        let finish_time = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let estimate = Estimate::new(TaskState::untracked(), finish_time);

        let value = serde_json::to_value(&estimate).unwrap();
        assert!(value["finish_state"]["time"].is_null());
        assert!(value["finish_state"]["battery_soc"].is_null());

        let deserialized: Estimate = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized.finish_state().battery_soc(), None);
    }
}
