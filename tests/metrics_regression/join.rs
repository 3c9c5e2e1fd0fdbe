//! Join-counted runner metrics regression tests

use super::helpers::*;
use serial_test::serial;
use shuriken_core::default_targets;
use shuriken_join::JoinCountedRunner;

#[tokio::test]
#[serial]
async fn join_metrics_exist() {
    init_recorder();

    JoinCountedRunner::builder()
        .name("metrics_join")
        .build()
        .run(default_targets())
        .await
        .unwrap();

    assert_counter_exists("shuriken_tasks_launched_total");
    assert_metric_has_label("shuriken_tasks_launched_total", "runner", "metrics_join");
    assert_counter_exists("shuriken_tasks_completed_total");
    assert_metric_has_label("shuriken_tasks_completed_total", "runner", "metrics_join");
    assert_histogram_exists("shuriken_run_duration_seconds");
    assert_metric_has_label("shuriken_run_duration_seconds", "runner", "metrics_join");
}
