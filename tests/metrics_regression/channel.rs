//! Channel metrics regression tests

use super::helpers::*;
use serial_test::serial;
use shuriken_attack::Attacker;
use shuriken_channel::{BufferedChannel, SignalRunner, StreamingRunner};
use shuriken_core::Target;
use std::time::Duration;

#[tokio::test]
#[serial]
async fn signal_metrics_exist() {
    init_recorder();

    let attacker = Attacker::builder().latency(Duration::from_millis(1)).build();
    SignalRunner::builder()
        .name("metrics_signal")
        .build()
        .run(attacker, Target::from("Tommy"))
        .await
        .unwrap();

    assert_counter_exists("shuriken_channel_values_total");
    assert_metric_has_label("shuriken_channel_values_total", "runner", "metrics_signal");
    assert_histogram_exists("shuriken_run_duration_seconds");
    assert_metric_has_label("shuriken_run_duration_seconds", "runner", "metrics_signal");
}

#[tokio::test]
#[serial]
async fn buffered_metrics_exist() {
    init_recorder();

    BufferedChannel::builder()
        .name("metrics_buffered")
        .build()
        .run(["First message"])
        .await
        .unwrap();

    assert_metric_has_label("shuriken_channel_values_total", "runner", "metrics_buffered");
}

#[tokio::test]
#[serial]
async fn streaming_metrics_exist() {
    init_recorder();

    StreamingRunner::builder()
        .name("metrics_streaming")
        .build()
        .run()
        .await
        .unwrap();

    assert_metric_has_label("shuriken_channel_values_total", "runner", "metrics_streaming");
    assert_metric_has_label("shuriken_run_duration_seconds", "runner", "metrics_streaming");
}
