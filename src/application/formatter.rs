use crate::domain::card::CardInfo;

const SECTION_TITLE: &str = "Payment Information";

/// Builds the human-readable phrase: "Visa ending in 4242", or
/// "Card ending in 4242" when the brand is unknown.
pub fn display_text(card: &CardInfo) -> String {
    match &card.brand {
        Some(brand) => format!("{} ending in {}", format_brand(brand), card.last4),
        None => format!("Card ending in {}", card.last4),
    }
}

/// Renders the payment-information block for HTML emails.
pub fn html_fragment(card: &CardInfo) -> String {
    format!(
        "<div class=\"card-info-section\" style=\"margin: 20px 0; padding: 15px; background-color: #f8f9fa; border-left: 4px solid #007cba;\">\
<h3 style=\"margin: 0 0 10px 0; color: #23282d; font-size: 16px;\">{SECTION_TITLE}</h3>\
<p style=\"margin: 0; color: #666; font-size: 14px;\">{}</p>\
</div>",
        escape_html(&display_text(card))
    )
}

/// Renders the payment-information block for plain-text emails.
pub fn plain_fragment(card: &CardInfo) -> String {
    format!(
        "\n{SECTION_TITLE}\n{}\n{}\n\n",
        "-".repeat(SECTION_TITLE.len()),
        display_text(card)
    )
}

/// Gateways store brands as machine tokens; `american_express` reads as
/// "American Express".
fn format_brand(brand: &str) -> String {
    let mut out = String::with_capacity(brand.len());
    let mut at_word_start = true;
    for ch in brand.chars() {
        if ch == '_' || ch.is_whitespace() {
            out.push(' ');
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
