use std::sync::Arc;

use lmcycle_storefront::storage::{CART_KEY, LOYALTY_KEY, WISHLIST_KEY};
use lmcycle_storefront::{
    Catalog, FileStore, KeyValueStore, MemoryStore, Price, ProductId, QuantityUpdate, Storefront,
    StorefrontConfig, VariantSelection,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Storefront {
    let config = StorefrontConfig { storage_dir: Some(dir.path().to_path_buf()), ..Default::default() };
    Storefront::from_config(config).unwrap()
}

#[test]
fn session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut shop = open(&dir);
        shop.add_product_by_id(ProductId::new(1));
        shop.add_product_by_id(ProductId::new(1));
        shop.add_product_by_id(ProductId::new(13));
        shop.update_quantity(ProductId::new(13), 1);
        shop.toggle_wishlist(ProductId::new(7));
    }

    let shop = open(&dir);
    let ids: Vec<u32> = shop.cart().items().iter().map(|i| i.id().value()).collect();
    assert_eq!(ids, vec![1, 13]);
    assert_eq!(shop.total_items(), 4);
    assert_eq!(shop.cart().total_price(), Price::new(396));
    assert_eq!(shop.loyalty().points, 30);
    assert_eq!(shop.wishlist(), &[ProductId::new(7)]);
}

#[test]
fn keys_stay_disjoint() {
    let dir = TempDir::new().unwrap();
    let mut shop = open(&dir);
    shop.add_product_by_id(ProductId::new(4));
    shop.toggle_wishlist(ProductId::new(4));

    let store = FileStore::open(dir.path()).unwrap();
    let cart: serde_json::Value = serde_json::from_str(&store.get(CART_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(cart[0]["id"], 4);
    assert_eq!(cart[0]["quantity"], 1);
    assert_eq!(store.get(LOYALTY_KEY).unwrap().as_deref(), Some("10"));
    assert_eq!(store.get(WISHLIST_KEY).unwrap().as_deref(), Some("[4]"));
}

#[test]
fn corrupt_cart_is_recovered() {
    let store = Arc::new(MemoryStore::new());
    store.set(CART_KEY, "\"not-json\"").unwrap();
    store.set(LOYALTY_KEY, "lots").unwrap();
    let mut shop = Storefront::open(StorefrontConfig::default(), Catalog::lmcycle(), store.clone()).unwrap();
    assert!(shop.cart().is_empty());
    assert_eq!(shop.loyalty().points, 0);

    shop.add_product_by_id(ProductId::new(2));
    assert_eq!(shop.cart().line_count(), 1);
}

#[test]
fn browse_pick_variant_and_order() {
    let store = Arc::new(MemoryStore::new());
    let mut shop = Storefront::open(StorefrontConfig::default(), Catalog::lmcycle(), store).unwrap();

    let mut selection = VariantSelection::open_family(shop.catalog(), "jexica").unwrap();
    assert!(selection.select(shop.catalog(), ProductId::new(8)));
    shop.add_selected_to_cart(&selection).unwrap();
    shop.add_selected_to_cart(&selection).unwrap();
    assert_eq!(shop.update_quantity(ProductId::new(8), -5), QuantityUpdate::Removed);
    shop.add_selected_to_cart(&selection).unwrap();

    let request = shop.request_clear();
    assert!(!shop.resolve_clear(request, false));

    let handoff = shop.checkout(Some("   ")).unwrap();
    assert_eq!(
        handoff.link.text(),
        "Bonjour, je souhaite commander :\n\n- JEXICA BLEU (x1): 99 TND\n\n*Total: 99 TND*"
    );
    assert_eq!(handoff.bonus_points, 50);
    assert_eq!(handoff.points_total, 80);

    let request = shop.request_clear();
    assert!(shop.resolve_clear(request, true));
    assert!(shop.checkout(None).is_err());
}

#[test]
fn unreadable_cart_file_degrades_to_memory() {
    let dir = TempDir::new().unwrap();
    let cart_file = dir.path().join(format!("{CART_KEY}.json"));
    std::fs::write(&cart_file, [0xff, 0xfe, b'[']).unwrap();

    let mut shop = open(&dir);
    assert!(shop.cart().is_empty());

    // A directory where the temp file goes makes every cart write fail.
    std::fs::create_dir(dir.path().join(format!("{CART_KEY}.json.tmp"))).unwrap();
    let outcome = shop.add_product_by_id(ProductId::new(1)).unwrap();
    assert_eq!(outcome.quantity.value(), 1);
    assert_eq!(shop.cart().line_count(), 1);
    assert_eq!(shop.loyalty().points, 10);
    assert_eq!(std::fs::read(&cart_file).unwrap(), vec![255, 254, 91]);
}
