use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The notification templates that can carry card details.
///
/// Identifiers match the host template ids verbatim (`snake_case` on the wire).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    FailedOrder,
    CustomerOnHoldOrder,
    CustomerProcessingOrder,
    CustomerCompletedOrder,
    CustomerRefundedOrder,
    CustomerNote,
}

impl EmailKind {
    pub const ALL: [Self; 6] = [
        Self::FailedOrder,
        Self::CustomerOnHoldOrder,
        Self::CustomerProcessingOrder,
        Self::CustomerCompletedOrder,
        Self::CustomerRefundedOrder,
        Self::CustomerNote,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::FailedOrder => "failed_order",
            Self::CustomerOnHoldOrder => "customer_on_hold_order",
            Self::CustomerProcessingOrder => "customer_processing_order",
            Self::CustomerCompletedOrder => "customer_completed_order",
            Self::CustomerRefundedOrder => "customer_refunded_order",
            Self::CustomerNote => "customer_note",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Human label for the settings surface.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FailedOrder => "Failed order (admin)",
            Self::CustomerOnHoldOrder => "Order on-hold",
            Self::CustomerProcessingOrder => "Processing order",
            Self::CustomerCompletedOrder => "Completed order",
            Self::CustomerRefundedOrder => "Refunded order",
            Self::CustomerNote => "Customer note",
        }
    }
}

/// Per-template enablement map. Everything defaults to enabled; an email type is
/// only suppressed when explicitly set to `false`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(transparent)]
pub struct EnabledEmails(BTreeMap<EmailKind, bool>);

impl Default for EnabledEmails {
    fn default() -> Self {
        Self(EmailKind::ALL.into_iter().map(|kind| (kind, true)).collect())
    }
}

impl EnabledEmails {
    /// Whether card details may be rendered into the email with this id.
    ///
    /// Fails open: a missing or empty id, an id for a template this crate does
    /// not know, or a kind absent from the persisted map are all enabled.
    pub fn is_enabled(&self, email_id: Option<&str>) -> bool {
        let Some(id) = email_id.filter(|id| !id.is_empty()) else {
            return true;
        };
        match EmailKind::parse(id) {
            Some(kind) => self.0.get(&kind).copied().unwrap_or(true),
            None => true,
        }
    }

    pub fn set(&mut self, kind: EmailKind, enabled: bool) {
        self.0.insert(kind, enabled);
    }

    pub fn get(&self, kind: EmailKind) -> bool {
        self.0.get(&kind).copied().unwrap_or(true)
    }

    /// A copy with every known kind present, for persistence.
    pub fn sanitized(&self) -> Self {
        Self(
            EmailKind::ALL
                .into_iter()
                .map(|kind| (kind, self.get(kind)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_kind_roundtrip() {
        for kind in EmailKind::ALL {
            assert_eq!(EmailKind::parse(kind.id()), Some(kind));
        }
        assert_eq!(EmailKind::parse("new_account"), None);
        assert_eq!(EmailKind::parse(""), None);
    }

    #[test]
    fn test_defaults_all_enabled() {
        let enabled = EnabledEmails::default();
        for kind in EmailKind::ALL {
            assert!(enabled.is_enabled(Some(kind.id())));
        }
    }

    #[test]
    fn test_partial_map_fails_open() {
        let enabled: EnabledEmails = serde_json::from_str(r#"{"failed_order": false}"#).unwrap();
        assert!(!enabled.is_enabled(Some("failed_order")));
        assert!(enabled.is_enabled(Some("customer_note")));
        assert!(enabled.is_enabled(Some("customer_completed_order")));
    }

    #[test]
    fn test_unknown_and_missing_ids_enabled() {
        let mut enabled = EnabledEmails::default();
        enabled.set(EmailKind::CustomerNote, false);
        assert!(enabled.is_enabled(None));
        assert!(enabled.is_enabled(Some("")));
        assert!(enabled.is_enabled(Some("some_third_party_email")));
        assert!(!enabled.is_enabled(Some("customer_note")));
    }

    #[test]
    fn test_sanitized_fills_every_kind() {
        let partial: EnabledEmails = serde_json::from_str(r#"{"customer_note": false}"#).unwrap();
        let full = partial.sanitized();
        assert!(!full.get(EmailKind::CustomerNote));
        let json = serde_json::to_value(&full).unwrap();
        assert_eq!(json.as_object().unwrap().len(), EmailKind::ALL.len());
    }
}
