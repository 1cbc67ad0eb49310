use super::{formatter, resolver};
use crate::domain::email::EnabledEmails;
use crate::domain::order::OrderSnapshot;

/// Composes card-info fragments for the email pipeline.
///
/// Built once from the loaded settings and handed to every render call; holds no
/// ambient state. Each entry point either yields a complete fragment or nothing.
pub struct EmailDecorator {
    enabled_emails: EnabledEmails,
    debug: bool,
}

impl EmailDecorator {
    pub fn new(enabled_emails: EnabledEmails, debug: bool) -> Self {
        Self {
            enabled_emails,
            debug,
        }
    }

    /// Fragment for the order-details section, gated by the per-template
    /// enablement map on `email_id`.
    pub fn order_details_fragment(
        &self,
        order: &OrderSnapshot,
        plain_text: bool,
        email_id: Option<&str>,
    ) -> Option<String> {
        if !self.enabled_emails.is_enabled(email_id) {
            return None;
        }
        self.fragment(order, plain_text)
    }

    /// Fragment for the customer-details section. This section has no
    /// per-template toggle.
    pub fn customer_details_fragment(
        &self,
        order: &OrderSnapshot,
        plain_text: bool,
    ) -> Option<String> {
        self.fragment(order, plain_text)
    }

    fn fragment(&self, order: &OrderSnapshot, plain_text: bool) -> Option<String> {
        let card = if self.debug {
            resolver::resolve_traced(order)
        } else {
            resolver::resolve(order)
        }?;
        Some(if plain_text {
            formatter::plain_fragment(&card)
        } else {
            formatter::html_fragment(&card)
        })
    }
}
