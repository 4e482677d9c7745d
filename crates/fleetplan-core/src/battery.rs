//! Constraint/battery evaluation.
//!
//! Pure functions, no side effects. The estimator calls these on every
//! `estimate_finish`; nothing here ever touches a transport or a clock.

use chrono::TimeDelta;

use crate::domain::Constraints;
use crate::ports::PowerSink;

/// Charge drained by waiting for `duration` under the given ambient sink.
///
/// A negative duration is normalized to zero before the sink is consulted,
/// so the sink itself never sees an invalid input. With no sink configured
/// the drain is 0.0.
pub fn drain(duration: TimeDelta, sink: Option<&dyn PowerSink>) -> f64 {
    let Some(sink) = sink else {
        return 0.0;
    };
    let duration = duration.max(TimeDelta::zero());
    let seconds = duration.num_milliseconds() as f64 / 1000.0;
    sink.compute_change_in_charge(seconds)
}

/// Applies `charge_delta` to `soc` and judges feasibility.
///
/// Two independent rejection predicates, both checked on every call:
/// - the resulting SOC is `< 0.0`
/// - the resulting SOC is `<= threshold_soc`
///
/// `None` means the candidate schedule is infeasible, never a transient
/// error.
pub fn apply_drain(soc: f64, charge_delta: f64, constraints: &Constraints) -> Option<f64> {
    let next = soc - charge_delta;
    if next < 0.0 {
        return None;
    }
    if next <= constraints.threshold_soc() {
        return None;
    }
    Some(next)
}
