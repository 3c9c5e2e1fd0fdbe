use rand::Rng;
use shuriken_attack::{Attacker, FireAndForgetRunner, SequentialRunner, WaitStrategy};
use shuriken_core::{Target, default_targets};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tower::service_fn;

#[tokio::test(start_paused = true)]
async fn concurrent_run_takes_one_latency_not_n() {
    let latency = Duration::from_secs(1);
    let attacker = Attacker::builder().latency(latency).build();

    let sequential = SequentialRunner::builder()
        .build()
        .run(attacker.clone(), default_targets())
        .await
        .unwrap();
    let concurrent = FireAndForgetRunner::builder()
        .build()
        .run(attacker, default_targets())
        .await
        .unwrap();

    assert!(sequential.elapsed >= latency * 4);
    assert!(concurrent.elapsed >= latency);
    assert!(concurrent.elapsed < latency * 2);
    assert!(concurrent.is_complete());
}

#[tokio::test(start_paused = true)]
async fn fixed_delay_always_waits_the_full_delay() {
    let report = FireAndForgetRunner::builder()
        .fixed_delay(Duration::from_secs(2))
        .build()
        .run(Attacker::default(), default_targets())
        .await
        .unwrap();

    // Every attack was done after one second, but the driver cannot know.
    assert!(report.elapsed >= Duration::from_secs(2));
    assert_eq!(report.completed, 4);
}

#[tokio::test(start_paused = true)]
async fn fixed_delay_misses_slow_work() {
    // One target is much slower than the rest.
    let svc = service_fn(|target: Target| async move {
        let ms = if target.as_str() == "slow" { 5_000 } else { 10 };
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok::<_, std::convert::Infallible>(())
    });
    let targets = ["a", "b", "slow", "c"].map(Target::from);

    let report = FireAndForgetRunner::builder()
        .wait_strategy(WaitStrategy::FixedDelay(Duration::from_secs(2)))
        .build()
        .run(svc.clone(), targets.clone())
        .await
        .unwrap();
    assert_eq!(report.launched, 4);
    assert_eq!(report.completed, 3);
    assert!(!report.is_complete());

    let joined = FireAndForgetRunner::builder()
        .build()
        .run(svc, targets)
        .await
        .unwrap();
    assert!(joined.is_complete());
    assert!(joined.elapsed >= Duration::from_secs(5));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn join_counts_every_task_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let svc = service_fn(move |_: Target| {
        let c = Arc::clone(&c);
        let jitter = Duration::from_micros(rand::rng().random_range(0..200));
        async move {
            tokio::time::sleep(jitter).await;
            c.fetch_add(1, Ordering::SeqCst);
            Ok::<_, std::convert::Infallible>(())
        }
    });
    let targets: Vec<Target> = (0..500).map(|i| Target::new(i.to_string())).collect();

    let report = FireAndForgetRunner::builder()
        .build()
        .run(svc, targets)
        .await
        .unwrap();

    assert_eq!(report.completed, 500);
    assert_eq!(calls.load(Ordering::SeqCst), 500);
}
