//! Order handoff: the text message sent to the shop and the WhatsApp link carrying it

use std::fmt::Write;
use crate::domain::aggregates::{Cart, Product};

const ORDER_GREETING: &str = "Bonjour, je souhaite commander :";

/// Build the order message for the current cart.
///
/// One line per cart line in cart order, then the total, then the trimmed note if
/// there is one. The output is deterministic for a given cart and note.
pub fn generate_order_message(cart: &Cart, note: Option<&str>) -> String {
    let mut message = format!("{ORDER_GREETING}\n\n");
    for item in cart.items() {
        let _ = writeln!(message, "- {} (x{}): {}", item.product.name(), item.quantity, item.line_total());
    }
    let _ = write!(message, "\n*Total: {}*", cart.total_price());
    if let Some(note) = note.map(str::trim).filter(|n| !n.is_empty()) {
        let _ = write!(message, "\n\nNotes: {note}");
    }
    message
}

/// Single-product inquiry sent from the detail view.
pub fn product_inquiry_message(product: &Product) -> String {
    format!("Bonjour, je suis intéressé par le modèle : {} ({}).", product.name(), product.price())
}

/// A `wa.me` deep link with its text payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatsAppLink {
    base_url: String,
    recipient: String,
    text: String,
}

impl WhatsAppLink {
    pub fn new(base_url: impl Into<String>, recipient: impl Into<String>, text: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), recipient: recipient.into(), text: text.into() }
    }

    pub fn recipient(&self) -> &str { &self.recipient }
    /// The unencoded message.
    pub fn text(&self) -> &str { &self.text }

    pub fn url(&self) -> String {
        format!("{}/{}?text={}", self.base_url.trim_end_matches('/'), self.recipient, urlencoding::encode(&self.text))
    }
}

impl std::fmt::Display for WhatsAppLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.url()) }
}
