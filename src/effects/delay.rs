use std::time::Duration;

use tracing::debug;

use crate::{Directive, Effect};

const DELAY_TABLE: [(Directive, u32); 5] = [
    (Directive::Delay1, 1),
    (Directive::Delay2, 2),
    (Directive::Delay3, 3),
    (Directive::Delay4, 4),
    (Directive::Delay5, 5),
];

/// The delays that apply, in the order they run, as unit counts.
pub fn delay_plan<S: AsRef<str>>(directives: &[S]) -> Vec<u32> {
    DELAY_TABLE
        .iter()
        .filter(|(directive, _)| directive.is_in(directives))
        .map(|(_, units)| *units)
        .collect()
}

/// Wait for every `delay_*` directive in turn, then record the last one in
/// the `delay` context variable.
///
/// Sleeps are cumulative: `delay_1` and `delay_3` together wait four units.
/// Only the current task waits; dropping the future cancels the remaining
/// sleeps.
pub async fn delay<S: AsRef<str>>(directives: &[S], unit: Duration) -> Effect {
    let plan = delay_plan(directives);
    let Some(&last) = plan.last() else {
        return Effect::new();
    };

    for units in &plan {
        debug!(units, unit_ms = unit.as_millis() as u64, "delaying response");
        tokio::time::sleep(unit * *units).await;
    }

    Effect::new().with_context("delay", i64::from(last))
}
