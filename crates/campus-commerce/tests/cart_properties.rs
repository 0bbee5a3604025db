//! Cart engine behaviour over a shared store.

use campus_commerce::prelude::*;
use campus_store::{BlobStore, MemoryStore};

fn sample(id: &str) -> Listing {
    Catalog::sample().get(&ListingId::new(id)).unwrap().clone()
}

fn engine() -> CartEngine<MemoryStore> {
    CartEngine::load(MemoryStore::new(), &EngineConfig::default())
}

fn assert_invariants(engine: &CartEngine<MemoryStore>) {
    let lines = engine.lines();
    for (i, line) in lines.iter().enumerate() {
        assert!(line.quantity >= 1, "line {} has quantity {}", i, line.quantity);
        assert!(
            lines[i + 1..].iter().all(|other| other.listing.id != line.listing.id),
            "listing {} appears twice",
            line.listing.id
        );
    }

    let expected_count: i64 = lines.iter().map(|l| l.quantity).sum();
    assert_eq!(engine.item_count(), expected_count);

    let expected_total: i64 = lines
        .iter()
        .map(|l| l.listing.price.amount_minor * l.quantity)
        .sum();
    assert_eq!(engine.total().unwrap().amount_minor, expected_total);
}

#[test]
fn invariants_hold_across_mixed_operations() {
    let mut cart = engine();
    let ids = ["1", "2", "3", "1", "8", "3", "10"];
    for id in ids {
        cart.add_one(&sample(id)).unwrap();
        assert_invariants(&cart);
    }

    cart.update_quantity(&"2".into(), 5);
    assert_invariants(&cart);
    cart.update_quantity(&"8".into(), 0);
    assert_invariants(&cart);
    cart.remove_item(&"missing".into());
    assert_invariants(&cart);
    cart.update_quantity(&"missing".into(), 3);
    assert_invariants(&cart);
    cart.add_item(&sample("10"), 4).unwrap();
    assert_invariants(&cart);

    assert_eq!(cart.lines().len(), 4);
    assert!(!cart.is_in_cart(&"8".into()));
}

#[test]
fn adding_twice_doubles_quantity_and_total() {
    let mut cart = engine();
    let lamp = sample("3");

    cart.add_one(&lamp).unwrap();
    cart.add_one(&lamp).unwrap();

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total().unwrap(), lamp.price.try_multiply(2).unwrap());
}

#[test]
fn update_to_zero_removes_line() {
    let mut cart = engine();
    cart.add_item(&sample("6"), 3).unwrap();
    cart.update_quantity(&"6".into(), 0);

    assert!(!cart.is_in_cart(&"6".into()));
    assert_eq!(cart.item_count(), 0);
    assert!(cart.total().unwrap().is_zero());
}

#[test]
fn remove_is_idempotent() {
    let mut cart = engine();
    cart.add_one(&sample("4")).unwrap();
    cart.add_one(&sample("9")).unwrap();

    cart.remove_item(&"4".into());
    let once = cart.cart().clone();
    cart.remove_item(&"4".into());

    assert_eq!(cart.cart(), &once);
    assert_eq!(cart.lines().len(), 1);
}

#[test]
fn save_then_load_restores_lines() {
    let config = EngineConfig::default();
    let mut cart = CartEngine::load(MemoryStore::new(), &config);
    cart.add_item(&sample("2"), 1).unwrap();
    cart.add_item(&sample("5"), 2).unwrap();
    cart.add_one(&sample("7")).unwrap();
    cart.save().unwrap();

    let expected = cart.cart().clone();
    let restored = CartEngine::load(cart.into_store(), &config);

    assert_eq!(restored.cart(), &expected);
    assert_eq!(restored.total().unwrap(), expected.total().unwrap());
}

#[test]
fn clear_persists_empty_cart() {
    let config = EngineConfig::default();
    let mut cart = CartEngine::load(MemoryStore::new(), &config);
    cart.add_one(&sample("1")).unwrap();
    cart.clear_cart();

    let restored = CartEngine::load(cart.into_store(), &config);
    assert!(restored.cart().is_empty());
}

#[test]
fn malformed_blob_loads_as_empty_cart() {
    let config = EngineConfig::default();
    for blob in ["", "null", "[{\"listing\": 1}]", "\u{0}garbage"] {
        let mut store = MemoryStore::new();
        store.set(&config.storage_key, blob).unwrap();

        let cart = CartEngine::load(store, &config);
        assert!(cart.cart().is_empty(), "blob {:?} was not discarded", blob);
    }
}

#[test]
fn snapshot_keeps_price_at_add_time() {
    let mut cart = engine();
    let ball = sample("8");
    cart.add_one(&ball).unwrap();

    let mut repriced = ball.clone();
    repriced.price = Money::from_major(1000, Currency::NGN);
    cart.add_one(&repriced).unwrap();

    assert_eq!(cart.lines()[0].listing.price, ball.price);
    assert_eq!(cart.total().unwrap(), Money::from_major(5000, Currency::NGN));
}

#[test]
fn published_listing_can_be_added() {
    let mut catalog = Catalog::sample();
    let draft = ListingDraft {
        title: "Basketball - Wilson Evolution".into(),
        description: "Indoor ball, barely used.".into(),
        price: Money::from_major(1000, Currency::NGN),
        original_price: None,
        category: Category::Sports,
        condition: Condition::Good,
        images: vec!["https://images.example.com/ball.jpg".into()],
        seller_id: UserId::new("4"),
        seller_name: "David Okonkwo".into(),
        location: "Gym Lobby".into(),
        campus: "Main Campus".into(),
    };
    let published = catalog.publish(draft).unwrap().clone();

    let mut cart = engine();
    cart.add_item(&published, 3).unwrap();
    assert!(cart.is_in_cart(&published.id));
    assert_eq!(cart.total().unwrap(), Money::from_major(3000, Currency::NGN));
}
