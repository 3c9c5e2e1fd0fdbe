//! Property tests for the join counter and the join-counted runner.
//!
//! Invariants tested:
//! - wait() returns only after every done() call
//! - the driver resumes after every task has reported, for any N >= 0

use proptest::prelude::*;
use shuriken_core::{FnListener, JoinCounter, Target};
use shuriken_join::{JoinCountedRunner, JoinEvent};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Runtime;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: wait() never returns while a task is still outstanding
    #[test]
    fn counter_waits_for_every_done(
        delays in prop::collection::vec(0u64..=5, 0..=40),
    ) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let counter = JoinCounter::new(delays.len());
            let finished = Arc::new(AtomicUsize::new(0));

            for ms in delays.iter().copied() {
                let guard = counter.guard();
                let finished = Arc::clone(&finished);
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    finished.fetch_add(1, Ordering::SeqCst);
                    drop(guard);
                });
            }

            counter.wait().await;

            prop_assert_eq!(counter.count(), 0);
            prop_assert_eq!(finished.load(Ordering::SeqCst), delays.len());
            Ok(())
        })?;
    }

    /// Property: registering more work with add() extends the barrier
    #[test]
    fn added_work_is_waited_for(initial in 0usize..=10, added in 0usize..=10) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let counter = JoinCounter::new(initial);
            counter.add(added);
            prop_assert_eq!(counter.count(), initial + added);

            for _ in 0..initial + added {
                let counter = counter.clone();
                tokio::spawn(async move { counter.done() });
            }
            counter.wait().await;
            prop_assert_eq!(counter.count(), 0);
            Ok(())
        })?;
    }

    /// Property: the mission completes last, whatever the number of targets
    #[test]
    fn mission_completes_after_every_attack(n in 0usize..=64) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let log = Arc::new(Mutex::new(Vec::new()));
            let l = Arc::clone(&log);
            let runner = JoinCountedRunner::builder()
                .listener(FnListener::new(move |event: &JoinEvent| {
                    l.lock().unwrap().push(matches!(event, JoinEvent::MissionCompleted { .. }));
                }))
                .build();

            let targets: Vec<Target> = (0..n).map(|i| Target::new(i.to_string())).collect();
            let report = runner.run(targets).await.unwrap();

            let log = log.lock().unwrap();
            prop_assert_eq!(report.completed, n);
            prop_assert_eq!(log.len(), n + 1);
            prop_assert!(log[..n].iter().all(|done| !done));
            prop_assert!(log[n]);
            Ok(())
        })?;
    }
}
