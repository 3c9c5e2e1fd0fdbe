use shuriken_channel::{ChannelEvent, StreamingRunner};
use shuriken_core::FnListener;
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn consumer_sees_produced_values_in_order() {
    let produced = Arc::new(Mutex::new(Vec::new()));
    let p = Arc::clone(&produced);
    let report = StreamingRunner::builder()
        .rounds(25)
        .capacity(4)
        .listener(FnListener::new(move |event: &ChannelEvent| {
            if let ChannelEvent::ScoreProduced { score, .. } = event {
                p.lock().unwrap().push(*score);
            }
        }))
        .build()
        .run()
        .await
        .unwrap();

    assert_eq!(report.scores, *produced.lock().unwrap());
}

#[tokio::test]
async fn closure_is_observed_exactly_once() {
    let closed = Arc::new(Mutex::new(Vec::new()));
    let c = Arc::clone(&closed);
    let report = StreamingRunner::builder()
        .on_channel_closed(move |received| c.lock().unwrap().push(received))
        .build()
        .run()
        .await
        .unwrap();

    assert!(report.closed);
    assert_eq!(*closed.lock().unwrap(), vec![3]);
}

#[tokio::test]
async fn same_seed_same_scores() {
    let run = |seed| async move {
        StreamingRunner::builder()
            .rounds(10)
            .seed(Some(seed))
            .build()
            .run()
            .await
            .unwrap()
            .scores
    };
    assert_eq!(run(9).await, run(9).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ordering_holds_across_threads() {
    let report = StreamingRunner::builder()
        .rounds(1000)
        .max_score(1000)
        .seed(Some(3))
        .build()
        .run()
        .await
        .unwrap();

    let expected = StreamingRunner::builder()
        .rounds(1000)
        .max_score(1000)
        .seed(Some(3))
        .build()
        .run()
        .await
        .unwrap();
    assert_eq!(report.scores, expected.scores);
}

#[tokio::test]
async fn unbounded_round_count_streams_without_preallocating() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    let received = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&received);
    let runner = StreamingRunner::builder()
        .rounds(usize::MAX)
        .capacity(usize::MAX)
        .seed(Some(1))
        .on_score_received(move |_, _| {
            r.fetch_add(1, Ordering::SeqCst);
        })
        .build();

    // The run cannot finish; it must keep streaming until the timeout.
    let outcome = tokio::time::timeout(Duration::from_millis(20), runner.run()).await;
    assert!(outcome.is_err());
    assert!(received.load(Ordering::SeqCst) > 0);
}
