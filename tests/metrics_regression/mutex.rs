//! Mutex counter metrics regression tests

use super::helpers::*;
use serial_test::serial;
use shuriken_mutex::MutexCounter;

#[tokio::test]
#[serial]
async fn counter_metrics_exist() {
    init_recorder();

    MutexCounter::builder()
        .name("metrics_mutex")
        .tasks(10)
        .build()
        .run()
        .await
        .unwrap();

    assert_counter_exists("shuriken_counter_increments_total");
    assert_metric_has_label("shuriken_counter_increments_total", "runner", "metrics_mutex");
    assert_histogram_exists("shuriken_run_duration_seconds");
    assert_metric_has_label("shuriken_run_duration_seconds", "runner", "metrics_mutex");
}
