use std::path::Path;

/// A small batch of order snapshots: a card payment with gateway info, a card
/// payment only recoverable from the title, and a bank transfer with no card.
pub const ORDERS_FIXTURE: &str = r#"[
    {
        "id": 1001,
        "total": "19.99",
        "payment_method": "stripe",
        "payment_method_title": "Credit Card (Stripe)",
        "meta": {"_stripe_card_brand": "visa"},
        "card": {"last4": "4242", "brand": "visa"}
    },
    {
        "id": 1002,
        "total": "54.00",
        "payment_method": "square",
        "payment_method_title": "Mastercard ending in 4444",
        "meta": {"_square_credit_card_type": "mastercard"}
    },
    {
        "id": 1003,
        "total": "12.50",
        "payment_method": "bacs",
        "payment_method_title": "Direct bank transfer"
    }
]"#;

pub fn write_orders_fixture(path: &Path) {
    std::fs::write(path, ORDERS_FIXTURE).unwrap();
}

pub fn write_settings(path: &Path, json: &str) {
    std::fs::write(path, json).unwrap();
}
