use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Structured card details as stored by a payment gateway on the order.
///
/// Gateways that expose this fill in whatever they have; both fields default to
/// empty and are validated downstream before use.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct GatewayCardInfo {
    #[serde(default)]
    pub last4: String,
    #[serde(default)]
    pub brand: String,
}

/// A plain snapshot of an order at email-composition time.
///
/// This is the only input the card-info lookup ever sees: a value record with the
/// paid total, the payment-method fields, the raw order metadata, and the
/// gateway's structured card details when present. No live commerce object is
/// reached through here.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderSnapshot {
    #[serde(default)]
    pub id: u64,
    pub total: Decimal,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_method_title: String,
    #[serde(default)]
    pub meta: BTreeMap<String, Value>,
    #[serde(default)]
    pub card: Option<GatewayCardInfo>,
}

impl OrderSnapshot {
    /// Looks up a metadata value as text.
    ///
    /// Gateways store metadata loosely typed; scalars are coerced to their string
    /// form, while null, arrays and objects yield nothing. Empty strings also
    /// yield nothing so callers can chain lookups with `or_else`.
    pub fn meta_text(&self, key: &str) -> Option<String> {
        let text = match self.meta.get(key)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => return None,
        };
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_snapshot_deserialization() {
        let json = r#"{
            "id": 1001,
            "total": "19.99",
            "payment_method": "stripe",
            "payment_method_title": "Credit Card (Stripe)",
            "meta": {"_stripe_card_last4": "4242"},
            "card": {"last4": "4242", "brand": "visa"}
        }"#;
        let order: OrderSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 1001);
        assert_eq!(order.total, dec!(19.99));
        assert_eq!(order.payment_method, "stripe");
        assert_eq!(
            order.card,
            Some(GatewayCardInfo {
                last4: "4242".to_string(),
                brand: "visa".to_string(),
            })
        );
    }

    #[test]
    fn test_snapshot_defaults() {
        // Everything except the total is optional.
        let order: OrderSnapshot = serde_json::from_str(r#"{"total": 10}"#).unwrap();
        assert_eq!(order.id, 0);
        assert!(order.payment_method.is_empty());
        assert!(order.payment_method_title.is_empty());
        assert!(order.meta.is_empty());
        assert!(order.card.is_none());
    }

    #[test]
    fn test_meta_text_coerces_scalars() {
        let order: OrderSnapshot = serde_json::from_str(
            r#"{"total": 10, "meta": {"n": 4242, "b": true, "s": "x", "empty": "", "null": null, "list": [1]}}"#,
        )
        .unwrap();
        assert_eq!(order.meta_text("n").as_deref(), Some("4242"));
        assert_eq!(order.meta_text("b").as_deref(), Some("true"));
        assert_eq!(order.meta_text("s").as_deref(), Some("x"));
        assert_eq!(order.meta_text("empty"), None);
        assert_eq!(order.meta_text("null"), None);
        assert_eq!(order.meta_text("list"), None);
        assert_eq!(order.meta_text("missing"), None);
    }
}
