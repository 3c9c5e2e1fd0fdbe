//! Mutex counter stress tests

use shuriken_mutex::MutexCounter;
use std::time::Instant;

/// Test: 100k locked increments across eight workers
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[ignore]
async fn stress_locked_counter_is_exact() {
    let start = Instant::now();
    let report = MutexCounter::builder()
        .tasks(100_000)
        .build()
        .run()
        .await
        .unwrap();

    println!("100k locked increments");
    println!("Completed in: {:?}", start.elapsed());

    assert_eq!(report.observed, 100_000);
}

/// Test: without the lock, concurrent increments overwrite each other
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[ignore]
async fn stress_unlocked_counter_loses_updates() {
    let mut worst = u64::MAX;
    for _ in 0..5 {
        let report = MutexCounter::builder()
            .tasks(100_000)
            .unlocked()
            .build()
            .run()
            .await
            .unwrap();
        worst = worst.min(report.observed);
        println!(
            "unlocked: observed {} of {} ({} lost)",
            report.observed,
            report.tasks,
            report.missing()
        );
    }

    assert!(worst < 100_000, "expected at least one lost update");
}
