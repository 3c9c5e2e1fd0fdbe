//! Fire-and-forget stress tests

use shuriken_attack::{Attacker, FireAndForgetRunner};
use shuriken_core::Target;
use std::time::{Duration, Instant};

/// Test: 20k concurrent attacks finish in roughly one latency
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[ignore]
async fn stress_fire_and_forget_join() {
    let latency = Duration::from_millis(100);
    let attacker = Attacker::builder().latency(latency).build();
    let targets: Vec<Target> = (0..20_000).map(|i| Target::new(i.to_string())).collect();
    let start = Instant::now();

    let report = FireAndForgetRunner::builder()
        .build()
        .run(attacker, targets)
        .await
        .unwrap();

    let elapsed = start.elapsed();
    println!("20k concurrent attacks in {:?}", elapsed);

    assert!(report.is_complete());
    assert!(elapsed < latency * 20, "attacks should overlap: {:?}", elapsed);
}
