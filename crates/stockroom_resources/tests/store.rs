//! Integration tests for `InventoryStore` and out-of-order fetch handling.
//!
//! These tests verify:
//! - Server rejections and transport errors fold into `Failed`
//! - Stale payloads survive failures
//! - Pending fetches do not clear the previous error
//! - Results of superseded requests are discarded
//! - Warehouse filters are independent of fetch status

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use stockroom_models::{Product, StockLot, Warehouse};
use stockroom_resources::{
    Envelope, FetchError, FetchOutcome, FetchStatus, InventorySource, InventoryStore, Resource,
    WarehouseFilterPatch, WarehouseFilters,
};
use tokio::sync::oneshot;

// ─────────────────────────────────────────────────────────────────────────────
// Scripted source
// ─────────────────────────────────────────────────────────────────────────────

type Reply<T> = Result<Envelope<T>, FetchError>;

/// Source replaying queued warehouse replies in order.
#[derive(Default)]
struct ScriptedSource {
    warehouses: Mutex<Vec<Reply<Vec<Warehouse>>>>,
}

impl ScriptedSource {
    fn with_warehouse_replies(replies: Vec<Reply<Vec<Warehouse>>>) -> Arc<Self> {
        let mut replies = replies;
        replies.reverse();
        Arc::new(Self {
            warehouses: Mutex::new(replies),
        })
    }
}

#[async_trait]
impl InventorySource for ScriptedSource {
    async fn list_warehouses(&self) -> Reply<Vec<Warehouse>> {
        self.warehouses
            .lock()
            .pop()
            .expect("no scripted warehouse reply left")
    }

    async fn warehouse_lots(&self, warehouse_id: &str) -> Reply<Vec<StockLot>> {
        if warehouse_id == "offline" {
            return Err(FetchError::Http("connection refused".into()));
        }
        Ok(Envelope::ok(Vec::new()))
    }

    async fn list_products(&self) -> Reply<Vec<Product>> {
        Ok(Envelope::failure("catalog unavailable"))
    }
}

fn quito() -> Vec<Warehouse> {
    vec![
        Warehouse::new("b1", "Central", "Quito"),
        Warehouse::new("b2", "Norte", "Quito"),
        Warehouse::new("b3", "Puerto", "Guayaquil"),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Failure handling
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn rejection_on_first_fetch_leaves_no_payload() {
    let source = ScriptedSource::with_warehouse_replies(vec![Ok(Envelope::failure("boom"))]);
    let store = InventoryStore::new(source);

    let outcome = store.fetch_warehouses().await;

    assert_eq!(outcome, FetchOutcome::Failed("boom".into()));
    assert_eq!(store.warehouses().status(), FetchStatus::Failed);
    assert_eq!(store.warehouses().error().as_deref(), Some("boom"));
    assert_eq!(store.warehouses().payload(), None);
}

#[tokio::test]
async fn rejection_after_success_keeps_stale_payload() {
    let source = ScriptedSource::with_warehouse_replies(vec![
        Ok(Envelope::ok(quito())),
        Ok(Envelope::failure("boom")),
    ]);
    let store = InventoryStore::new(source);

    assert!(store.fetch_warehouses().await.is_success());
    store.fetch_warehouses().await;

    assert_eq!(store.warehouses().status(), FetchStatus::Failed);
    assert_eq!(store.warehouses().error().as_deref(), Some("boom"));
    assert_eq!(store.warehouses().payload(), Some(quito()));
}

#[tokio::test]
async fn rejection_without_message_uses_fallback() {
    let silent = Envelope {
        success: false,
        result: None,
        message: None,
    };
    let source = ScriptedSource::with_warehouse_replies(vec![Ok(silent)]);
    let store = InventoryStore::new(source);

    store.fetch_warehouses().await;

    assert_eq!(
        store.warehouses().error().as_deref(),
        Some(stockroom_resources::DEFAULT_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn transport_error_is_captured_per_key() {
    let store = InventoryStore::new(ScriptedSource::with_warehouse_replies(Vec::new()));

    let outcome = store.fetch_warehouse_lots("offline").await;
    store.fetch_warehouse_lots("b1").await;

    assert_eq!(
        outcome,
        FetchOutcome::Failed("connection refused".into())
    );
    let lots = store.warehouse_lots();
    assert_eq!(lots.status(&"offline".to_string()), FetchStatus::Failed);
    assert_eq!(lots.status(&"b1".to_string()), FetchStatus::Succeeded);
    assert_eq!(lots.payload(&"b1".to_string()), Some(Vec::new()));
}

#[tokio::test]
async fn products_failure_does_not_touch_warehouses() {
    let source = ScriptedSource::with_warehouse_replies(vec![Ok(Envelope::ok(quito()))]);
    let store = InventoryStore::new(source);

    store.fetch_warehouses().await;
    store.fetch_products().await;

    assert_eq!(store.products().status(), FetchStatus::Failed);
    assert_eq!(store.products().error().as_deref(), Some("catalog unavailable"));
    assert_eq!(store.warehouses().status(), FetchStatus::Succeeded);
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────────────────

async fn wait_for_generation<T>(resource: &Resource<T>, generation: u64) {
    while resource.generation() < generation {
        tokio::task::yield_now().await;
    }
}

async fn wait_for_status<T>(resource: &Resource<T>, status: FetchStatus) {
    while resource.status() != status {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn pending_fetch_keeps_previous_error_visible() {
    let resource = Resource::<Vec<u32>>::new("numbers");
    resource
        .fetch(async { Err(FetchError::Rejected("boom".into())) })
        .await;

    let (tx, rx) = oneshot::channel::<Result<Vec<u32>, FetchError>>();

    let (outcome, ()) = tokio::join!(
        resource.fetch(async { rx.await.expect("sender dropped") }),
        async {
            wait_for_generation(&resource, 2).await;
            assert_eq!(resource.status(), FetchStatus::Loading);
            assert_eq!(resource.error().as_deref(), Some("boom"));
            tx.send(Ok(vec![1])).expect("receiver dropped");
        },
    );

    assert_eq!(outcome, FetchOutcome::Succeeded);
    assert_eq!(resource.error(), None);
}

#[tokio::test]
async fn late_result_of_older_request_is_discarded() {
    let resource = Resource::<Vec<u32>>::new("numbers");
    let (tx_old, rx_old) = oneshot::channel::<Result<Vec<u32>, FetchError>>();
    let (tx_new, rx_new) = oneshot::channel::<Result<Vec<u32>, FetchError>>();

    let (old, new, ()) = tokio::join!(
        resource.fetch(async { rx_old.await.expect("sender dropped") }),
        resource.fetch(async { rx_new.await.expect("sender dropped") }),
        async {
            wait_for_generation(&resource, 2).await;
            tx_new.send(Ok(vec![2])).expect("receiver dropped");
            wait_for_status(&resource, FetchStatus::Succeeded).await;
            tx_old.send(Ok(vec![1])).expect("receiver dropped");
        },
    );

    assert_eq!(old, FetchOutcome::Superseded);
    assert_eq!(new, FetchOutcome::Succeeded);
    assert_eq!(resource.payload(), Some(vec![2]));
}

#[tokio::test]
async fn early_result_of_older_request_is_discarded() {
    let resource = Resource::<Vec<u32>>::new("numbers");
    let (tx_old, rx_old) = oneshot::channel::<Result<Vec<u32>, FetchError>>();
    let (tx_new, rx_new) = oneshot::channel::<Result<Vec<u32>, FetchError>>();

    let (old, new, ()) = tokio::join!(
        resource.fetch(async { rx_old.await.expect("sender dropped") }),
        resource.fetch(async { rx_new.await.expect("sender dropped") }),
        async {
            wait_for_generation(&resource, 2).await;
            tx_old
                .send(Err(FetchError::Http("timeout".into())))
                .expect("receiver dropped");
            tokio::task::yield_now().await;
            assert_eq!(resource.status(), FetchStatus::Loading);
            tx_new.send(Ok(vec![2])).expect("receiver dropped");
        },
    );

    assert_eq!(old, FetchOutcome::Superseded);
    assert_eq!(new, FetchOutcome::Succeeded);
    assert_eq!(resource.error(), None);
    assert_eq!(resource.payload(), Some(vec![2]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_fetches_settle_on_newest_generation() {
    let resource = Arc::new(Resource::<u64>::new("counter"));

    let handles: Vec<_> = (0..16_u64)
        .map(|i| {
            let resource = Arc::clone(&resource);
            tokio::spawn(async move {
                resource
                    .fetch(async move {
                        tokio::time::sleep(std::time::Duration::from_millis(16 - i)).await;
                        Ok(i)
                    })
                    .await
            })
        })
        .collect();

    let mut applied = 0;
    for handle in handles {
        if handle.await.expect("task panicked") == FetchOutcome::Succeeded {
            applied += 1;
        }
    }

    assert_eq!(resource.generation(), 16);
    assert_eq!(resource.status(), FetchStatus::Succeeded);
    assert!(applied >= 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Filters
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn filters_apply_to_fetched_warehouses() {
    let source = ScriptedSource::with_warehouse_replies(vec![Ok(Envelope::ok(quito()))]);
    let store = InventoryStore::new(source);

    store.set_filters(WarehouseFilterPatch::new().city("Quito"));
    assert!(store.filtered_warehouses().is_empty());

    store.fetch_warehouses().await;
    assert_eq!(store.filtered_warehouses().len(), 2);

    store.set_filters(WarehouseFilterPatch::new().warehouse_name("Norte"));
    let filtered = store.filtered_warehouses();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "b2");
}

#[tokio::test]
async fn clear_filters_restores_defaults() {
    let store = InventoryStore::new(ScriptedSource::with_warehouse_replies(Vec::new()));

    store.set_filters(
        WarehouseFilterPatch::new()
            .city("Quito")
            .warehouse_name("Central"),
    );
    store.clear_filters();

    assert_eq!(store.filters(), WarehouseFilters::default());
    assert_eq!(store.warehouses().status(), FetchStatus::Idle);
}
