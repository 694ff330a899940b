use futures_core::future::FusedFuture;

use ddd_rail::prelude_async::*;

async fn load(id: u32) -> Container<u32, &'static str> {
    if id > 0 {
        Container::valid(id)
    } else {
        Container::invalid("unknown id")
    }
}

#[tokio::test]
async fn map_valid_maps_pending_containers() {
    assert_eq!(load(2).map_valid(|id| id * 10).await.into_value(), Some(20));
    assert!(load(0).map_valid(|id| id * 10).await.is_invalid());
}

#[tokio::test]
async fn map_valid_is_fused_after_completion() {
    let mut future = Box::pin(load(1).map_valid(|id| id + 1));
    assert!(!future.is_terminated());

    let value = (&mut future).await;
    assert_eq!(value.into_value(), Some(2));
    assert!(future.is_terminated());
}

#[tokio::test]
async fn and_then_valid_chains_sync_steps() {
    let checked = load(3)
        .and_then_valid(|id| if id % 2 == 0 { Container::valid(id) } else { Container::invalid("odd") })
        .await;
    assert_eq!(checked.into_errors().unwrap().as_slice(), &["odd"]);
}

#[tokio::test]
async fn then_continue_and_then_continue_with_accept_every_kind() {
    let label = load(7).then_continue(Pure(|id: u32| format!("cart-{id}"))).await;
    assert_eq!(label.into_value().as_deref(), Some("cart-7"));

    let summed = load(7)
        .then_continue_with(Deferred(|| async { 3u32 }), AwaitableFallible(|(a, b): (u32, u32)| async move {
            Container::valid(a + b)
        }))
        .await;
    assert_eq!(summed.into_value(), Some(10));

    let skipped = load(0).then_continue(Pure(|id: u32| id + 1)).await;
    assert_eq!(skipped.into_errors().unwrap().as_slice(), &["unknown id"]);
}

#[tokio::test]
async fn persist_on_pending_container() {
    let saved = load(4).persist(|prefix: &'static str, id: u32| async move { format!("{prefix}{id}") }, "cart-").await;
    assert_eq!(saved.into_value().as_deref(), Some("cart-4"));
}

#[tokio::test]
async fn parallel_fan_out_on_pending_containers() {
    let steps = [1, 2, 3].map(|k| move |p: u32| async move { p + k });
    let sum = load(5).map_parallel(steps, |values| values.into_iter().sum::<u32>()).await;
    assert_eq!(sum.into_value(), Some(21));

    let steps = [1, 2].map(|k| move |p: u32| async move { Container::<u32, &str>::valid(p * k) });
    let product = load(5).and_then_parallel(steps, |values| values.into_iter().product::<u32>()).await;
    assert_eq!(product.into_value(), Some(50));
}
