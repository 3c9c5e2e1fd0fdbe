//! Property tests for the sequential runner.
//!
//! Invariants tested:
//! - N targets at latency L take at least N*L and less than (N+1)*L

use super::paused_runtime;
use proptest::prelude::*;
use shuriken_attack::{Attacker, SequentialRunner};
use shuriken_core::Target;
use std::time::Duration;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn elapsed_within_latency_bounds(n in 0u32..=12, latency_ms in 1u64..=2_000) {
        let rt = paused_runtime();
        rt.block_on(async {
            let latency = Duration::from_millis(latency_ms);
            let attacker = Attacker::builder().latency(latency).build();
            let targets: Vec<Target> = (0..n).map(|i| Target::new(i.to_string())).collect();

            let report = SequentialRunner::builder()
                .build()
                .run(attacker, targets)
                .await
                .unwrap();

            prop_assert!(report.elapsed >= latency * n);
            prop_assert!(report.elapsed < latency * (n + 1));
            Ok(())
        })?;
    }
}
