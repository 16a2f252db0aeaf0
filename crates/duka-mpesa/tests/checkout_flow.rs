//! End-to-end checkout: cart totals threaded into a payment attempt.

use duka_commerce::cart::Cart;
use duka_commerce::catalog::Product;
use duka_commerce::checkout::{Order, OrderStatus};
use duka_commerce::Money;
use duka_mpesa::{
    ConfirmBehavior, PaymentFlow, PaymentStatus, PhoneNumber, SandboxGateway, StkPushRequest,
};

#[tokio::test]
async fn cart_to_confirmed_payment() {
    // One turbocharger at 8,500 KES: over the threshold, so delivery is free
    let turbo = Product::new("prod-turbo", "Garrett Turbocharger", Money::new(8_500), 3);
    let mut cart = Cart::new();
    cart.add_item(&turbo, 1).unwrap();

    let totals = cart.totals();
    assert_eq!(totals.subtotal, Money::new(8_500));
    assert_eq!(totals.delivery_fee, Money::zero());
    assert_eq!(totals.total, Money::new(8_500));

    let phone = PhoneNumber::parse("0712345678").unwrap();
    let request = StkPushRequest::for_cart(phone, &cart, &totals).unwrap();
    assert_eq!(request.amount, Money::new(8_500));

    let mut flow = PaymentFlow::new(SandboxGateway::accepting());
    let ack = flow.initiate(&request).await.unwrap();
    assert_eq!(flow.status(), PaymentStatus::Processing);
    assert!(flow.state().checkout_request_id.is_some());

    let confirmed = flow.verify(&ack.checkout_request_id).await;
    assert!(confirmed);
    assert_eq!(flow.status(), PaymentStatus::Success);
}

#[tokio::test]
async fn order_lifecycle_tracks_payment_outcome() {
    let filter = Product::new("prod-filter", "Mann Oil Filter", Money::new(850), 30);
    let mut cart = Cart::new();
    cart.add_item(&filter, 2).unwrap();

    let totals = cart.totals();
    // Below the threshold: flat fee applies
    assert_eq!(totals.delivery_fee, Money::new(200));
    assert_eq!(totals.total, Money::new(1_900));

    let mut order = Order::place(&cart, &totals);
    let phone = PhoneNumber::parse("+254712345678").unwrap();
    let request = StkPushRequest::for_order(phone, &order).unwrap();

    // Customer declines on the handset
    let gateway = SandboxGateway::accepting().with_confirm(ConfirmBehavior::Decline);
    let mut flow = PaymentFlow::new(gateway);

    let ack = flow.initiate(&request).await.unwrap();
    order.mark_processing();

    let confirmed = flow.verify(&ack.checkout_request_id).await;
    assert!(!confirmed);
    order.mark_failed();

    assert_eq!(order.status, OrderStatus::Failed);
    assert_eq!(flow.status(), PaymentStatus::Error);

    // The caller retries after an explicit reset
    flow.reset();
    assert_eq!(flow.status(), PaymentStatus::Idle);
    assert!(flow.state().error.is_none());
}

#[tokio::test]
async fn cart_is_cleared_only_after_confirmation() {
    let plugs = Product::new("prod-plugs", "NGK Spark Plugs", Money::new(450), 40);
    let mut cart = Cart::new();
    cart.add_item(&plugs, 4).unwrap();

    let totals = cart.totals();
    let phone = PhoneNumber::parse("0712345678").unwrap();
    let request = StkPushRequest::for_cart(phone, &cart, &totals).unwrap();

    let mut flow = PaymentFlow::new(SandboxGateway::accepting());
    let ack = flow.initiate(&request).await.unwrap();

    // Cart still intact while the payment is pending
    assert_eq!(cart.item_count(), 4);

    assert!(flow.verify(&ack.checkout_request_id).await);
    cart.clear();

    let totals = cart.totals();
    assert_eq!(totals.subtotal, Money::zero());
    assert_eq!(totals.delivery_fee, Money::zero());
    assert_eq!(totals.total, Money::zero());
}
