use shuriken_mutex::{CounterMode, MutexCounter};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn locked_and_joined_is_exact() {
    for n in [0, 1, 10, 1000] {
        let report = MutexCounter::builder().tasks(n).build().run().await.unwrap();
        assert_eq!(report.observed, n as u64, "n = {n}");
        assert_eq!(report.mode, CounterMode::Joined);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn every_increment_writes_a_distinct_value() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let w = Arc::clone(&written);
    MutexCounter::builder()
        .tasks(500)
        .on_increment(move |value| w.lock().unwrap().push(value))
        .build()
        .run()
        .await
        .unwrap();

    let written = written.lock().unwrap();
    let distinct: HashSet<u64> = written.iter().copied().collect();
    assert_eq!(written.len(), 500);
    assert_eq!(distinct, (1..=500).collect::<HashSet<u64>>());
}

#[tokio::test(start_paused = true)]
async fn lock_serialises_critical_sections() {
    let report = MutexCounter::builder()
        .tasks(5)
        .hold(Duration::from_millis(100))
        .build()
        .run()
        .await
        .unwrap();
    assert_eq!(report.observed, 5);
    assert!(report.elapsed >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn default_fixed_delay_is_enough_for_quick_work() {
    let report = MutexCounter::builder()
        .fixed_delay(Duration::from_secs(1))
        .build()
        .run()
        .await
        .unwrap();
    assert_eq!(report.observed, 1000);
    assert!(report.elapsed >= Duration::from_secs(1));
}

#[tokio::test]
async fn finished_callback_sees_the_result() {
    let seen = Arc::new(Mutex::new(None));
    let s = Arc::clone(&seen);
    let report = MutexCounter::builder()
        .tasks(20)
        .on_finished(move |report| *s.lock().unwrap() = Some(report.observed))
        .build()
        .run()
        .await
        .unwrap();
    assert_eq!(*seen.lock().unwrap(), Some(report.observed));
}
