//! Card source abstraction.
//!
//! This module defines the [`CardSource`] trait that abstracts over where card
//! text comes from. The web shim reads it from the rendered document; tests and
//! headless callers hand in plain vectors. The catalog index only ever sees
//! [`CardFields`] in document order.

use crate::domain::CardFields;

/// Abstraction over the rendered book cards.
///
/// Implementations yield one [`CardFields`] per card, in the order the cards
/// appear inside their container. The position in that sequence becomes the
/// card's [`NodeId`](crate::domain::NodeId).
///
/// # Implementations
///
/// - `web::page::DomCards`: Reads `.book-card` nodes from the document (wasm only)
/// - `Vec<CardFields>`: In-memory cards, used by tests
///
/// # Examples
///
/// ```
/// use shelfview::catalog::CardSource;
/// use shelfview::domain::CardFields;
///
/// let cards = vec![CardFields::new("가", "저자", "출판사")];
/// assert_eq!(cards.read_cards().len(), 1);
/// ```
pub trait CardSource {
    /// Reads every card in document order.
    ///
    /// There is no failure path. A card whose descendants are missing yields
    /// `None` for those fields.
    fn read_cards(&self) -> Vec<CardFields>;
}

impl CardSource for Vec<CardFields> {
    fn read_cards(&self) -> Vec<CardFields> {
        self.clone()
    }
}

impl CardSource for [CardFields] {
    fn read_cards(&self) -> Vec<CardFields> {
        self.to_vec()
    }
}
