use shuriken_attack::{Attacker, RunEvent, SequentialRunner};
use shuriken_core::{DemoEvent, FnListener, Target, default_targets};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn targets(n: usize) -> Vec<Target> {
    (0..n).map(|i| Target::new(format!("ninja-{i}"))).collect()
}

#[tokio::test(start_paused = true)]
async fn elapsed_is_bounded_by_n_latencies() {
    let latency = Duration::from_millis(250);
    for n in [1, 2, 4, 7] {
        let attacker = Attacker::builder().latency(latency).build();
        let report = SequentialRunner::builder()
            .build()
            .run(attacker, targets(n))
            .await
            .unwrap();

        let lower = latency * n as u32;
        let upper = latency * (n as u32 + 1);
        assert!(report.elapsed >= lower, "n = {n}: {:?}", report.elapsed);
        assert!(report.elapsed < upper, "n = {n}: {:?}", report.elapsed);
        assert_eq!(report.completed, n);
    }
}

#[tokio::test(start_paused = true)]
async fn attacks_follow_input_order() {
    let started = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&started);
    let attacker = Attacker::builder()
        .on_attack_started(move |target| s.lock().unwrap().push(target.to_string()))
        .build();

    SequentialRunner::builder()
        .build()
        .run(attacker, default_targets())
        .await
        .unwrap();

    assert_eq!(
        *started.lock().unwrap(),
        vec!["Tommy", "Jony", "Bobby", "Andy"]
    );
}

#[tokio::test(start_paused = true)]
async fn each_task_completes_before_the_next_launches() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let e = Arc::clone(&events);
    let runner = SequentialRunner::builder()
        .listener(FnListener::new(move |event: &RunEvent| {
            e.lock().unwrap().push(event.event_type());
        }))
        .build();

    runner
        .run(Attacker::default(), targets(3))
        .await
        .unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            "task_launched",
            "task_completed",
            "task_launched",
            "task_completed",
            "task_launched",
            "task_completed",
            "run_finished",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn run_finished_carries_the_returned_report() {
    let seen = Arc::new(Mutex::new(None));
    let s = Arc::clone(&seen);
    let report = SequentialRunner::builder()
        .name("dojo")
        .on_run_finished(move |report| *s.lock().unwrap() = Some(report.clone()))
        .build()
        .run(Attacker::default(), targets(2))
        .await
        .unwrap();

    assert_eq!(report.runner, "dojo");
    assert_eq!(seen.lock().unwrap().as_ref(), Some(&report));
}
