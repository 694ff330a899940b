use std::sync::Arc;
use std::time::Duration;

use ddd_rail::prelude_async::*;
use tokio::sync::Barrier;
use tokio::time::timeout;

#[tokio::test]
async fn map_parallel_combines_in_submission_order() {
    let steps = [1, 2, 3].map(|k| move |p: i32| async move { p + k });
    let sum = Container::<i32, &str>::valid(5)
        .map_parallel(steps, |values| values.into_iter().sum::<i32>())
        .await;

    assert_eq!(sum.into_value(), Some(21));
}

#[tokio::test]
async fn map_parallel_keeps_order_regardless_of_completion() {
    let steps = [30u64, 10, 20].map(|delay| {
        move |base: u64| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            base + delay
        }
    });

    let ordered = Container::<u64, &str>::valid(0).map_parallel(steps, |values| values).await;
    assert_eq!(ordered.into_value(), Some(vec![30, 10, 20]));
}

#[tokio::test]
async fn map_parallel_on_invalid_invokes_nothing() {
    let steps = [1, 2, 3].map(|k| {
        move |p: i32| -> std::future::Ready<i32> { panic!("continuation {k} called with {p}") }
    });

    let result = Container::<i32, &str>::invalid("error")
        .map_parallel(steps, |values| values.into_iter().sum::<i32>())
        .await;
    assert_eq!(result.into_errors().unwrap().as_slice(), &["error"]);
}

#[tokio::test]
async fn and_then_parallel_combines_when_all_valid() {
    let steps = [1, 2, 3].map(|k| move |p: i32| async move { Container::<i32, &str>::valid(p + k) });
    let sum = Container::<i32, &str>::valid(5)
        .and_then_parallel(steps, |values| values.into_iter().sum::<i32>())
        .await;

    assert_eq!(sum.into_value(), Some(21));
}

#[tokio::test]
async fn and_then_parallel_harvests_every_failure() {
    let steps = [None, Some("e1"), Some("e2")].map(|failure| {
        move |p: i32| async move {
            match failure {
                Some(error) => Container::invalid(error),
                None => Container::valid(p + 1),
            }
        }
    });

    let result = Container::<i32, &str>::valid(5)
        .and_then_parallel(steps, |values| values.into_iter().sum::<i32>())
        .await;
    assert_eq!(result.into_errors().unwrap().as_slice(), &["e1", "e2"]);
}

#[tokio::test]
async fn and_then_parallel_on_invalid_propagates() {
    let steps = [1, 2].map(|k| move |p: i32| async move { Container::<i32, &str>::valid(p + k) });
    let result = Container::<i32, &str>::invalid("error")
        .and_then_parallel(steps, |values| values.len())
        .await;
    assert!(result.is_invalid());
}

#[tokio::test]
async fn empty_fan_out_combines_nothing() {
    let steps: Vec<fn(i32) -> std::future::Ready<i32>> = Vec::new();
    let result = Container::<i32, &str>::valid(1).map_parallel(steps, |values| values.len()).await;
    assert_eq!(result.into_value(), Some(0));
}

#[tokio::test]
async fn map_parallel_polls_every_continuation_concurrently() {
    // Each step only finishes once all three are waiting on the barrier.
    let barrier = Arc::new(Barrier::new(3));
    let steps = [1, 2, 3].map(|k| {
        let barrier = Arc::clone(&barrier);
        move |p: i32| async move {
            barrier.wait().await;
            p + k
        }
    });

    let sum = timeout(
        Duration::from_secs(2),
        Container::<i32, &str>::valid(5).map_parallel(steps, |values| values.into_iter().sum::<i32>()),
    )
    .await
    .expect("continuations were not polled concurrently");
    assert_eq!(sum.into_value(), Some(21));
}

#[tokio::test]
async fn and_then_parallel_polls_every_continuation_concurrently() {
    let barrier = Arc::new(Barrier::new(3));
    let steps = [1, 2, 3].map(|k| {
        let barrier = Arc::clone(&barrier);
        move |p: i32| async move {
            barrier.wait().await;
            if k == 2 { Container::invalid("two") } else { Container::valid(p + k) }
        }
    });

    let harvested = timeout(
        Duration::from_secs(2),
        Container::<i32, &str>::valid(5).and_then_parallel(steps, |values| values.into_iter().sum::<i32>()),
    )
    .await
    .expect("continuations were not polled concurrently");
    assert_eq!(harvested.into_errors().unwrap().as_slice(), &["two"]);
}
