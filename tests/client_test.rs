use rust_decimal::Decimal;
use store_framework::mock::MockClient;
use store_framework::{FrameworkError, MemoryStorage, StoreHandle};
use storefront::cart::{Cart, CartAction, CartError};
use storefront::clients::{CartClient, WishlistClient};
use storefront::lifecycle::{Session, SessionError};
use storefront::model::{LineItem, ProductId, WishlistEntry};
use storefront::wishlist::{Wishlist, WishlistAction, WishlistError};

/// Client wrappers tested against a mocked store: checks which action each call sends and
/// how results and errors come back.
#[tokio::test]
async fn test_cart_client_sends_matching_actions() {
    let mut mock = MockClient::<Cart>::new();
    for _ in 0..4 {
        mock.expect_apply().return_ok(());
    }
    let client = CartClient::new(mock.client());

    let item = LineItem::new(3u32, "Falernum", Decimal::new(1600, 2), "/img/3.webp", 2);
    client.add_to_cart(item.clone()).await.unwrap();
    client.update_quantity(ProductId(3), -1).await.unwrap();
    client.remove_from_cart(ProductId(4)).await.unwrap();
    client.clear_cart().await.unwrap();

    assert_eq!(
        mock.take_applied(),
        vec![
            CartAction::Add(item),
            CartAction::UpdateQuantity(ProductId(3), -1),
            CartAction::Remove(ProductId(4)),
            CartAction::Clear,
        ]
    );
    mock.verify();
}

#[tokio::test]
async fn test_cart_client_totals_come_from_snapshot() {
    let mut mock = MockClient::<Cart>::new();
    let mut cart = Cart::new();
    cart.add_to_cart(LineItem::new(1u32, "Gin", Decimal::new(3000, 2), "/g.webp", 2));
    cart.add_to_cart(LineItem::new(2u32, "Tonic", Decimal::new(250, 2), "/t.webp", 4));
    mock.expect_get().return_ok(cart.clone());
    mock.expect_get().return_ok(cart);

    let client = CartClient::new(mock.client());

    assert_eq!(client.total_items().await.unwrap(), 6);
    assert_eq!(client.total_price().await.unwrap(), Decimal::new(7000, 2));

    // Reads never send an action
    assert!(mock.take_applied().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_cart_client_maps_store_errors() {
    let mut mock = MockClient::<Cart>::new();
    mock.expect_apply().return_err(FrameworkError::StoreClosed);
    mock.expect_get().return_err(FrameworkError::StoreDropped);

    let client = CartClient::new(mock.client());

    let result = client.clear_cart().await;
    assert_eq!(
        result,
        Err(CartError::StoreUnavailable(
            FrameworkError::StoreClosed.to_string()
        ))
    );
    assert!(matches!(
        client.snapshot().await,
        Err(CartError::StoreUnavailable(_))
    ));
    mock.verify();
}

#[tokio::test]
async fn test_wishlist_client_membership_is_a_read() {
    let mut mock = MockClient::<Wishlist>::new();
    let mut wishlist = Wishlist::new();
    wishlist.add_to_wishlist(WishlistEntry::new(
        9u32,
        "Bitters",
        Decimal::new(1150, 2),
        "/b.webp",
        "bitters",
    ));
    mock.expect_get().return_ok(wishlist);

    let client = WishlistClient::new(mock.client());

    assert!(client.is_in_wishlist(ProductId(9)).await.unwrap());
    assert!(mock.take_applied().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_wishlist_client_reports_changes() {
    let mut mock = MockClient::<Wishlist>::new();
    mock.expect_apply().return_ok(true);
    mock.expect_apply().return_ok(false);
    mock.expect_apply().return_ok(false);
    mock.expect_apply().return_err(FrameworkError::StoreClosed);

    let client = WishlistClient::new(mock.client());
    let entry = WishlistEntry::new(1u32, "Cynar", Decimal::new(2100, 2), "/c.webp", "cynar");

    assert!(client.add_to_wishlist(entry.clone()).await.unwrap());
    assert!(!client.add_to_wishlist(entry.clone()).await.unwrap());
    assert!(!client.remove_from_wishlist(ProductId(5)).await.unwrap());
    assert!(matches!(
        client.clear_wishlist().await,
        Err(WishlistError::StoreUnavailable(_))
    ));

    assert_eq!(
        mock.take_applied(),
        vec![
            WishlistAction::Add(entry.clone()),
            WishlistAction::Add(entry),
            WishlistAction::Remove(ProductId(5)),
            WishlistAction::Clear,
        ]
    );
    mock.verify();
}

#[tokio::test]
async fn test_client_subscription_follows_published_state() {
    let mock = MockClient::<Cart>::new();
    let client = CartClient::new(mock.client());
    let mut rx = client.subscribe();

    let mut cart = Cart::new();
    cart.add_to_cart(LineItem::new(1u32, "Gin", Decimal::new(3000, 2), "/g.webp", 1));
    mock.publish(cart);

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().total_items(), 1);
}

/// Real cart store with a mocked wishlist whose removal fails after the cart was written.
#[tokio::test]
async fn test_move_to_cart_rolls_back_cart_when_wishlist_fails() {
    let storage = MemoryStorage::new();
    let (cart_actor, cart) = storefront::cart::new(storage.shared());
    tokio::spawn(cart_actor.run());

    let entry = WishlistEntry::new(11u32, "Spoon", Decimal::new(1575, 2), "/s.webp", "spoon");
    let mut wishlist = Wishlist::new();
    wishlist.add_to_wishlist(entry);

    let mut wishlist_mock = MockClient::<Wishlist>::new();
    wishlist_mock.expect_get().return_ok(wishlist.clone());
    wishlist_mock.expect_apply().return_err(FrameworkError::StoreClosed);
    wishlist_mock.expect_get().return_ok(wishlist);
    wishlist_mock.expect_apply().return_err(FrameworkError::StoreClosed);

    let session = Session::from_clients(cart, WishlistClient::new(wishlist_mock.client()));

    // 1. Product not yet in the cart: the added line is removed again
    let result = session.move_to_cart(ProductId(11)).await;
    assert!(matches!(
        result,
        Err(SessionError::Wishlist(WishlistError::StoreUnavailable(_)))
    ));
    assert!(session.cart.cart_items().await.unwrap().is_empty());

    // 2. Product already in the cart: its previous quantity is restored
    let line = LineItem::new(11u32, "Spoon", Decimal::new(1575, 2), "/s.webp", 4);
    session.cart.add_to_cart(line.clone()).await.unwrap();

    assert!(session.move_to_cart(ProductId(11)).await.is_err());
    assert_eq!(session.cart.cart_items().await.unwrap(), vec![line]);

    assert_eq!(
        wishlist_mock.take_applied(),
        vec![
            WishlistAction::Remove(ProductId(11)),
            WishlistAction::Remove(ProductId(11)),
        ]
    );
    wishlist_mock.verify();
    session.shutdown().await.unwrap();
}
