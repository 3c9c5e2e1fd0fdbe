use shuriken_attack::{AttackEvent, Attacker};
use shuriken_channel::{ChannelEvent, SignalRunner};
use shuriken_core::{DemoEvent, FnListener, Target};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[tokio::test(start_paused = true)]
async fn receive_never_precedes_the_send() {
    let attack_finished = Arc::new(Mutex::new(None::<Instant>));
    let received = Arc::new(Mutex::new(None::<Instant>));

    let a = Arc::clone(&attack_finished);
    let attacker = Attacker::builder()
        .listener(FnListener::new(move |event: &AttackEvent| {
            if let AttackEvent::Finished { .. } = event {
                *a.lock().unwrap() = Some(event.timestamp());
            }
        }))
        .build();

    let r = Arc::clone(&received);
    let runner = SignalRunner::builder()
        .listener(FnListener::new(move |event: &ChannelEvent| {
            if let ChannelEvent::SignalReceived { .. } = event {
                *r.lock().unwrap() = Some(event.timestamp());
            }
        }))
        .build();

    let report = runner.run(attacker, Target::from("Tommy")).await.unwrap();

    assert!(report.signal);
    assert_eq!(report.target.as_str(), "Tommy");
    let finished = attack_finished.lock().unwrap().expect("attack finished");
    let received = received.lock().unwrap().expect("signal received");
    assert!(finished <= received);
}

#[tokio::test(start_paused = true)]
async fn driver_blocks_for_the_whole_attack() {
    let attacker = Attacker::builder()
        .latency(Duration::from_millis(1500))
        .build();
    let report = SignalRunner::builder()
        .build()
        .run(attacker, Target::from("Tommy"))
        .await
        .unwrap();
    assert!(report.elapsed >= Duration::from_millis(1500));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn many_signal_runs_in_parallel() {
    let runner = SignalRunner::builder().build();
    let attacker = Attacker::builder().latency(Duration::from_millis(5)).build();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let runner = runner.clone();
            let attacker = attacker.clone();
            tokio::spawn(async move { runner.run(attacker, Target::new(format!("n{i}"))).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().signal);
    }
}
