use crate::domain::card::{self, CardInfo};
use crate::domain::order::OrderSnapshot;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Payment method id used for manual/offline entries; never a card.
const OTHER_PAYMENT_METHOD: &str = "other";

/// Metadata keys gateways use for the card's last four digits, tried in order.
const LAST4_META_KEYS: &[&str] = &[
    "_card_last4",
    "_stripe_card_last4",
    "_square_credit_card_last_4",
    "_braintree_card_last4",
    "card_last4",
    "last4",
];

/// Metadata keys gateways use for the card brand, tried in order.
const BRAND_META_KEYS: &[&str] = &[
    "_card_brand",
    "_stripe_card_brand",
    "_square_credit_card_type",
    "_braintree_card_type",
    "card_brand",
    "card_type",
];

/// Patterns scraped from the payment-method title, tried in order: an
/// "ending in 1234" phrase, a masked number ("**** 1234"), and finally any
/// standalone 4-digit run. The last one can pick up unrelated numbers such as
/// order ids or years; titles are the lowest-confidence source either way.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)ending\s+in\s+(\d{4})\b",
        r"[*•]{2,}\s*(\d{4})\b",
        r"\b(\d{4})\b",
    ]
    .into_iter()
    .filter_map(|pattern| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(error) => {
            tracing::error!(%error, pattern, "invalid title pattern");
            None
        }
    })
    .collect()
});

type Strategy = fn(&OrderSnapshot) -> Option<CardInfo>;

/// Ordered lookup chain: the gateway's structured info, then metadata aliases,
/// then scraping the payment-method title.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("gateway", from_gateway),
    ("metadata", from_metadata),
    ("title", from_title),
];

/// Resolves displayable card details for an order, if any.
///
/// Strategies run in order and the first hit wins. This never fails: a missing
/// title, absent metadata or malformed values all just mean no card info.
pub fn resolve(order: &OrderSnapshot) -> Option<CardInfo> {
    if !eligible(order) {
        return None;
    }
    STRATEGIES.iter().find_map(|(_, strategy)| strategy(order))
}

/// Same lookup, with a diagnostic snapshot of the attempt.
///
/// Records the order id, payment method, which strategy hit and the outcome.
/// Raw metadata values stay out of the logs.
pub fn resolve_traced(order: &OrderSnapshot) -> Option<CardInfo> {
    if !eligible(order) {
        tracing::debug!(
            order_id = order.id,
            payment_method = %order.payment_method,
            total = %order.total,
            "order not eligible for card info"
        );
        return None;
    }
    let hit = STRATEGIES
        .iter()
        .find_map(|(name, strategy)| strategy(order).map(|info| (*name, info)));
    match hit {
        Some((strategy, info)) => {
            tracing::debug!(
                order_id = order.id,
                payment_method = %order.payment_method,
                gateway = ?order.card,
                strategy,
                resolved = ?info,
                "card info resolved"
            );
            Some(info)
        }
        None => {
            tracing::debug!(
                order_id = order.id,
                payment_method = %order.payment_method,
                gateway = ?order.card,
                "no card info found"
            );
            None
        }
    }
}

/// Zero-total orders were not paid by card; "other" covers manual methods.
fn eligible(order: &OrderSnapshot) -> bool {
    order.total > Decimal::ZERO
        && !order.payment_method.is_empty()
        && order.payment_method != OTHER_PAYMENT_METHOD
}

fn from_gateway(order: &OrderSnapshot) -> Option<CardInfo> {
    let gateway = order.card.as_ref()?;
    CardInfo::new(gateway.last4.clone(), gateway.brand.clone())
}

fn from_metadata(order: &OrderSnapshot) -> Option<CardInfo> {
    let raw = first_meta(order, LAST4_META_KEYS)?;
    let last4 = card::normalize_last4(&raw)?;
    CardInfo::new(last4, meta_brand(order).unwrap_or_default())
}

fn from_title(order: &OrderSnapshot) -> Option<CardInfo> {
    let title = order.payment_method_title.trim();
    if title.is_empty() {
        return None;
    }
    let last4 = TITLE_PATTERNS.iter().find_map(|re| {
        re.captures(title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })?;
    CardInfo::new(last4, meta_brand(order).unwrap_or_default())
}

/// The brand lookup is independent of where the last4 came from.
fn meta_brand(order: &OrderSnapshot) -> Option<String> {
    first_meta(order, BRAND_META_KEYS)
}

fn first_meta(order: &OrderSnapshot, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| order.meta_text(key))
}
