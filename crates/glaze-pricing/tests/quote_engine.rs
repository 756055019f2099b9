use std::sync::Arc;

use futures::future::join_all;
use glaze_pricing::prelude::*;
use rust_decimal::Decimal;

fn clear_6mm_white(selection: WindowSelection) -> WindowSpec {
    WindowSpec {
        selection,
        measurements: Measurements::new(1200, 1500),
        glass_type: GlassType::Clear,
        glass_thickness: GlassThickness::Mm6,
        profile_colour: ProfileColour::White,
        quantity: 1,
    }
}

#[test]
fn three_panel_sliding_example() {
    let engine = QuoteEngine::default();
    let spec = clear_6mm_white(WindowSelection::Layout {
        panel_count: 3,
        partition_style: "noPartition".to_string(),
    });

    let breakdown = engine.calculate(&spec).unwrap();
    assert_eq!(breakdown.window_type(), WindowType::Type4);

    // (1.2 - 0.05) × (1.5 - 0.05) m² at 180
    assert_eq!(breakdown.cost_of(Component::Glass), Some(Money::new(30015)));
    assert_eq!(breakdown.cost_of(Component::JambP), Some(Money::new(144000)));
    assert_eq!(breakdown.cost_of(Component::InterLock), Some(Money::new(264000)));
    assert_eq!(breakdown.cost_of(Component::Lock), Some(Money::new(190000)));

    assert_eq!(breakdown.subtotal().unwrap(), Money::new(1427815));
    assert_eq!(breakdown.installation_cost().unwrap(), Money::new(153900));
    assert_eq!(breakdown.total_cost().unwrap(), Money::new(1581715));
}

#[test]
fn materialized_form_matches_deferred_form() {
    let engine = QuoteEngine::default();
    for window_type in WindowType::ALL {
        let spec = clear_6mm_white(WindowSelection::Type { window_type });
        let breakdown = engine.calculate(&spec).unwrap();
        let m = breakdown.materialize().unwrap();

        assert_eq!(m.total_cost, breakdown.total_cost().unwrap());
        assert_eq!(m.total_cost, m.subtotal + m.installation);
        let groups: Money = ComponentGroup::ALL.iter().map(|g| m.group_total(*g)).sum();
        assert_eq!(groups, m.total_cost, "{window_type}");
    }
}

#[test]
fn out_of_range_measurements_are_rejected() {
    let engine = QuoteEngine::default();
    for (h, w) in [(99, 1500), (1200, 0), (10_000, 10_000)] {
        let mut spec = clear_6mm_white(WindowSelection::Type {
            window_type: WindowType::Type1,
        });
        spec.measurements = Measurements::new(h, w);
        assert_eq!(
            engine.calculate(&spec).unwrap_err(),
            PricingError::InvalidMeasurement {
                height_mm: h,
                width_mm: w
            }
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calculations_see_only_their_own_glass() {
    let engine = QuoteEngine::default();
    let area = Decimal::new(16675, 4);

    let updater = {
        let engine = engine.clone();
        tokio::spawn(async move {
            for _ in 0..50 {
                engine.update_glass_config("clear", "4mm").await.unwrap();
                engine.update_glass_config("tinted", "10mmTuff").await.unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let selections: Vec<_> = GlassType::ALL
        .into_iter()
        .flat_map(|t| GlassThickness::ALL.into_iter().map(move |th| (t, th)))
        .filter_map(|(t, th)| GlassSelection::new(t, th).ok())
        .collect();

    let tasks = selections.into_iter().cycle().take(200).map(|glass| {
        let engine = engine.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            let mut spec = clear_6mm_white(WindowSelection::Type {
                window_type: WindowType::Type7,
            });
            spec.glass_type = glass.glass_type;
            spec.glass_thickness = glass.thickness;

            let breakdown = engine.calculate(&spec).unwrap();
            let expected = Money::from_decimal(area * glass.unit_price()).unwrap();
            assert_eq!(breakdown.cost_of(Component::Glass), Some(expected));
        })
    });

    for result in join_all(tasks).await {
        result.unwrap();
    }
    updater.await.unwrap();

    // The live table only ever saw the updater's writes.
    let live = engine.pricing().snapshot();
    assert_eq!(live.version, 100);
    assert_eq!(live.prices.glass, Decimal::from(570));
}

#[tokio::test]
async fn persist_failure_does_not_fail_update() {
    struct Offline;

    #[async_trait::async_trait]
    impl PriceTableSink for Offline {
        async fn save(&self, _table: &PriceTable) -> Result<(), PersistError> {
            Err(PersistError::Unavailable("offline".to_string()))
        }

        async fn load(&self) -> Result<Option<PriceTable>, PersistError> {
            Ok(None)
        }
    }

    let store = PricingStore::new().with_sink(Arc::new(Offline));
    let engine = QuoteEngine::new(Arc::new(store));
    let table = engine.update_profile_config("champagne").await.unwrap();
    assert_eq!(table.prices.jamb_p, Decimal::from(620));
}
