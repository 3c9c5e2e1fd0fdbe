//! Join counter stress tests

use shuriken_core::{JoinCounter, Target};
use shuriken_join::JoinCountedRunner;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Test: one barrier over 50k tasks
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[ignore]
async fn stress_join_counted_many_targets() {
    let targets: Vec<Target> = (0..50_000).map(|i| Target::new(i.to_string())).collect();
    let start = Instant::now();

    let report = JoinCountedRunner::builder()
        .work_latency(Duration::from_millis(1))
        .build()
        .run(targets)
        .await
        .unwrap();

    println!("50k joined tasks in {:?}", start.elapsed());
    assert!(report.is_complete());
    assert_eq!(report.completed, 50_000);
}

/// Test: repeated barriers never resume early
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[ignore]
async fn stress_barrier_churn() {
    for round in 0..1_000 {
        let counter = JoinCounter::new(64);
        let finished = Arc::new(AtomicUsize::new(0));

        for _ in 0..64 {
            let guard = counter.guard();
            let finished = Arc::clone(&finished);
            tokio::spawn(async move {
                tokio::task::yield_now().await;
                finished.fetch_add(1, Ordering::SeqCst);
                drop(guard);
            });
        }

        counter.wait().await;
        assert_eq!(finished.load(Ordering::SeqCst), 64, "round {round}");
    }
}
