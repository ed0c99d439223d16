use rcatalog::{
    compute_layout, dispatch_card_event, parse_catalog, parse_catalog_str, render_card, render_detail,
    CardEvent, Catalog, CatalogError, CatalogProvider, CatalogWriter, EmbeddedCatalogProvider, ImageSource,
    JsonCatalogProvider, LayoutConfig, NavigationStack, Route, StockBadge, VirtualCatalogProvider,
    Viewport, WindowConfig, WindowedList,
};
use anyhow::Result;
use std::env;
use std::fs;

const THREE_PRODUCTS: &str = r#"{"products": [
    {"id": 1, "name": "Wireless Headphones", "price": 199.99, "image": "https://img.example.com/1.jpg",
     "description": "Over-ear", "category": "Audio", "rating": 4.5, "inStock": true,
     "specifications": {"brand": "SoundWave", "batteryLife": "30 hours"}},
    {"id": 2, "name": "Smart Watch", "price": 249.5, "image": "https://img.example.com/2.jpg",
     "description": "Tracks things", "category": "Wearables", "rating": 4.2, "inStock": true,
     "specifications": {"brand": "FitPulse"}},
    {"id": 7, "name": "Power Bank 20000mAh", "price": 49.99, "image": "https://img.example.com/7.jpg",
     "description": "Charges things", "category": "Electronics", "rating": 4.4, "inStock": false,
     "specifications": {"brand": "ChargeMax", "capacity": "20000mAh", "fastCharging": "65W PD"}}
]}"#;

fn list_for(catalog: &Catalog, width: f32) -> WindowedList<u64> {
    let geometry = compute_layout(width, &LayoutConfig::default());
    let mut list = WindowedList::new(WindowConfig::default(), geometry);
    list.set_items(catalog.products(), |product| product.id);
    list
}

/// Runs passes until nothing is pending.
fn settle(list: &mut WindowedList<u64>, viewport: Viewport) {
    for _ in 0..1000 {
        if list.update(viewport).is_settled() {
            return;
        }
    }
    panic!("window did not settle");
}

#[test]
fn test_three_products_narrow_viewport() -> Result<()> {
    let catalog = parse_catalog_str(THREE_PRODUCTS)?;
    let mut list = list_for(&catalog, 400.0);
    settle(&mut list, Viewport::new(0.0, 800.0));

    assert_eq!(list.geometry().columns, 1);
    let rendered = list.render(catalog.products(), render_card);
    assert_eq!(rendered.len(), 3);
    for (row, item) in rendered.iter().enumerate() {
        assert_eq!(item.view.width, 400.0 - 2.0 * 16.0);
        assert_eq!(item.rect.x, 16.0);
        assert_eq!(item.rect.y, row as f32 * 360.0);
    }
    Ok(())
}

#[test]
fn test_three_products_wide_viewport() -> Result<()> {
    let catalog = parse_catalog_str(THREE_PRODUCTS)?;
    let mut list = list_for(&catalog, 800.0);
    settle(&mut list, Viewport::new(0.0, 800.0));

    assert_eq!(list.geometry().columns, 2);
    let rendered = list.render(catalog.products(), render_card);
    let rows: Vec<f32> = rendered.iter().map(|item| item.rect.y).collect();
    assert_eq!(rows, vec![0.0, 0.0, 360.0]);
    assert!(rendered[0].rect.x < rendered[1].rect.x);
    assert_eq!(rendered[2].rect.x, rendered[0].rect.x);
    assert_eq!(list.content_height(), 720.0);
    Ok(())
}

#[test]
fn test_select_product_seven() -> Result<()> {
    let catalog = parse_catalog_str(THREE_PRODUCTS)?;
    let mut navigation = NavigationStack::new();

    let card = render_card(catalog.get(7).unwrap(), 368.0);
    assert!(dispatch_card_event(card.select(), &catalog, &mut navigation));

    match navigation.current() {
        Route::ProductDetails { product } => assert_eq!(product, catalog.get(7).unwrap()),
        Route::ProductList => panic!("expected details route"),
    }

    let detail = render_detail(navigation.current_product().unwrap());
    assert_eq!(detail.price_text, "$49.99");
    assert_eq!(detail.stock, StockBadge::OutOfStock);
    assert!(!detail.cart_button.enabled);
    let labels: Vec<&str> = detail.spec_rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["Brand", "Capacity", "FastCharging"]);
    Ok(())
}

#[test]
fn test_card_text_is_stable() -> Result<()> {
    let catalog = EmbeddedCatalogProvider::new().load()?;
    for product in catalog.products() {
        let first = render_card(product, 250.0);
        let second = render_card(product, 250.0);
        assert_eq!(first.text(), second.text());

        let price = first.price_text.trim_start_matches('$');
        assert_eq!(price.split('.').nth(1).map(str::len), Some(2));
        assert_eq!(first.rating_text.split('.').nth(1).map(str::len), Some(1));
    }
    Ok(())
}

#[test]
fn test_large_catalog_window_bounds() -> Result<()> {
    let catalog = VirtualCatalogProvider::with_config(10_000, 42).load()?;
    let viewport_height = 700.0;

    for width in [400.0, 1200.0] {
        let mut list = list_for(&catalog, width);
        let capacity = list.capacity(viewport_height);
        let max_offset = list.content_height() - viewport_height;

        let mut offset = 0.0;
        while offset <= max_offset {
            let stats = list.update(Viewport::new(offset, viewport_height));
            assert!(stats.materialized <= capacity, "offset {} width {}", offset, width);
            assert_eq!(list.slot_count(), list.slots().len());
            offset += 997.0;
        }

        // Settled window matches the analytic target range exactly
        let viewport = Viewport::new(123_456.0, viewport_height);
        settle(&mut list, viewport);
        let target = list.target_range(viewport);
        let materialized: Vec<usize> = list.materialized().map(|item| item.index).collect();
        assert_eq!(materialized, target.collect::<Vec<_>>());
        assert!(list.materialized_count() <= capacity);
    }
    Ok(())
}

#[test]
fn test_scroll_to_item_materializes_it() -> Result<()> {
    let catalog = VirtualCatalogProvider::with_config(2_000, 9).load()?;
    let mut list = list_for(&catalog, 400.0);

    for k in [0usize, 1, 57, 999, 1_999] {
        let viewport = Viewport::new(k as f32 * 360.0, 640.0);
        list.update(viewport);
        assert!(list.is_materialized(k), "item {} not materialized", k);

        let item = list.materialized().find(|item| item.index == k).unwrap();
        assert_eq!(*item.key, catalog.products()[k].id);
    }
    Ok(())
}

#[test]
fn test_brotli_catalog_roundtrip() -> Result<()> {
    let path = env::temp_dir().join("integration_catalog.json.br");
    let path = path.to_str().unwrap();
    let _ = fs::remove_file(path);

    let products = VirtualCatalogProvider::with_config(300, 5).generate();
    {
        let mut writer = CatalogWriter::new(path)?;
        for product in &products {
            writer.write_product(product)?;
        }
        assert_eq!(writer.finish()?, 300);
    }

    let provider = JsonCatalogProvider::new(path);
    let catalog = provider.load()?;
    assert_eq!(catalog.products(), products.as_slice());
    assert!(provider.describe().contains("integration_catalog.json.br"));

    let _ = fs::remove_file(path);
    Ok(())
}

#[test]
fn test_lenient_records_and_loud_documents() -> Result<()> {
    let catalog = parse_catalog_str(
        r#"{"products": [
            {"id": 1, "name": "Complete", "price": 10, "specifications": {"brand": "Acme"}},
            {"name": "No id"},
            {"id": "two", "name": "Bad id"},
            {"id": 3, "price": -4, "rating": 9.5, "category": "Garden"},
            {"id": 5, "name": null, "image": null, "price": "9", "specifications": {"weight": null}}
        ]}"#,
    )?;
    assert_eq!(catalog.len(), 3);
    let malformed = catalog.get(5).unwrap();
    assert_eq!(malformed.price, 0.0);
    assert_eq!(render_detail(malformed).name, "Unnamed product");
    assert_eq!(render_card(malformed, 300.0).image, ImageSource::Placeholder);
    let sparse = catalog.get(3).unwrap();
    assert_eq!(sparse.price, 0.0);
    assert_eq!(sparse.rating, 5.0);
    assert_eq!(sparse.brand(), "Unknown");
    assert_eq!(render_card(sparse, 300.0).category_label, "UNKNOWN");

    assert!(matches!(parse_catalog_str("not json"), Err(CatalogError::Json(_))));
    assert!(matches!(parse_catalog_str(r#"{"items": []}"#), Err(CatalogError::MissingProducts)));
    assert!(matches!(
        parse_catalog_str(r#"{"products": [{"name": "x"}]}"#),
        Err(CatalogError::Empty { skipped: 1 })
    ));
    assert!(matches!(
        parse_catalog_str(r#"{"products": [{"id": 4}, {"id": 4}]}"#),
        Err(CatalogError::DuplicateId(4))
    ));
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let result = parse_catalog("/definitely/not/here/products.json");
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to open file"));
}

#[test]
fn test_selection_event_for_unknown_id() -> Result<()> {
    let catalog = parse_catalog_str(THREE_PRODUCTS)?;
    let mut navigation = NavigationStack::new();
    assert!(!dispatch_card_event(CardEvent::Selected { product_id: 42 }, &catalog, &mut navigation));
    assert_eq!(navigation.depth(), 1);
    Ok(())
}
