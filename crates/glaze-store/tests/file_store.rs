use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use glaze_cart::prelude::*;
use glaze_pricing::prelude::*;
use glaze_store::{FileStore, CART_ITEMS_FILE, PRICING_FILE};

fn item(cart: &CartId) -> CartLineItem {
    let spec = WindowSpec::new(
        WindowType::Type14,
        Measurements::new(1100, 900),
        GlassType::Obscured,
        GlassThickness::Mm5,
        ProfileColour::Silver,
    );
    let breakdown = QuoteEngine::default()
        .calculate(&spec)
        .unwrap()
        .materialize()
        .unwrap();
    CartLineItem::new(cart.clone(), &spec, breakdown, Utc::now())
}

#[tokio::test]
async fn items_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let cart = CartId::new("cart-1");
    let stored = item(&cart);

    {
        let store = FileStore::open(dir.path()).await.unwrap();
        store.create(stored.clone()).await.unwrap();
    }

    let store = FileStore::open(dir.path()).await.unwrap();
    let items = store.find_active(&CartFilter::new(&cart)).await.unwrap();
    assert_eq!(items, vec![stored]);
    assert!(dir.path().join(CART_ITEMS_FILE).exists());
    assert!(!dir.path().join(format!("{}.tmp", CART_ITEMS_FILE)).exists());
}

#[tokio::test]
async fn updates_patch_only_matching_items() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    let cart = CartId::new("cart-1");
    let other = CartId::new("cart-2");

    let a = item(&cart);
    let b = item(&cart);
    store.create_many(vec![a.clone(), b.clone(), item(&other)]).await.unwrap();

    let patched = store
        .update_one(&ItemFilter::new(&cart, &a.id), &ItemPatch::quantity(4, Utc::now()))
        .await
        .unwrap();
    assert!(patched);

    let cleared = store
        .update_many(&CartFilter::new(&cart), &ItemPatch::deactivate(Utc::now()))
        .await
        .unwrap();
    assert_eq!(cleared, 2);

    assert!(store.find_active(&CartFilter::new(&cart)).await.unwrap().is_empty());
    assert_eq!(store.find_active(&CartFilter::new(&other)).await.unwrap().len(), 1);

    let all = store.all_items().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().find(|i| i.id == a.id).unwrap().quantity, 4);

    // Inactive rows no longer match.
    let again = store
        .update_one(&ItemFilter::new(&cart, &b.id), &ItemPatch::deactivate(Utc::now()))
        .await
        .unwrap();
    assert!(!again);
}

#[tokio::test]
async fn pricing_table_round_trips_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(FileStore::open(dir.path()).await.unwrap());

    let pricing = PricingStore::new().with_sink(sink.clone());
    let engine = QuoteEngine::new(Arc::new(pricing));
    engine.update_profile_config("grey").await.unwrap();
    engine.update_glass_config("clear", "10mmTuff").await.unwrap();
    assert!(dir.path().join(PRICING_FILE).exists());

    let restored = PricingStore::new().with_sink(sink);
    let table = restored.load().await;
    assert_eq!(table.version, 2);
    assert_eq!(table.profile_colour, Some(ProfileColour::Grey));
    assert_eq!(table.prices.glass, rust_decimal::Decimal::from(550));
}

#[tokio::test]
async fn corrupt_document_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join(CART_ITEMS_FILE), b"{not json")
        .await
        .unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    let err = store
        .find_active(&CartFilter::new(&CartId::new("cart-1")))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[tokio::test]
async fn cart_service_runs_on_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path()).await.unwrap());
    let service = CartService::new(store, QuoteEngine::default());
    let cart = CartId::generate();

    let spec = WindowSpec::with_layout(
        2,
        "fixedTop",
        Measurements::new(1500, 1200),
        GlassType::Clear,
        GlassThickness::Mm4,
        ProfileColour::White,
    );
    service.add(&cart, &spec).await.unwrap();
    let view = service.add(&cart, &spec).await.unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].window_type, WindowType::Type2);
    assert_eq!(view.totals.total_items, 2);

    let saved = service.save_session_cart(&cart).await.unwrap();
    assert_eq!(service.get_cart(&saved).await.unwrap().totals, view.totals);
}

#[tokio::test]
async fn timed_out_writes_do_not_land() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    for micros in [0, 10, 50, 100, 250, 500, 1_000, 5_000, 50_000] {
        let cart = CartId::generate();
        let outcome =
            tokio::time::timeout(Duration::from_micros(micros), store.create(item(&cart))).await;

        // Let any abandoned blocking I/O finish before looking.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let landed = store.find_active(&CartFilter::new(&cart)).await.unwrap();
        assert_eq!(
            landed.len(),
            usize::from(matches!(outcome, Ok(Ok(())))),
            "timeout of {}us",
            micros
        );
    }
}
