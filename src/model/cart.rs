//! The cart and its line items.
//!
//! [`Cart`] is a plain value: every mutation here is synchronous and pure.
//! Ownership, sequencing and persistence are handled by the cart actor
//! (see [`crate::cart_actor`]).

use serde::{Deserialize, Deserializer, Serialize};

use super::product::{Product, ProductId};

/// One product plus its chosen quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

// Older mirrors may hold negative quantities. They read back as 0, and the
// line is then dropped when the cart is rebuilt.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = i64::deserialize(deserializer)?;
    Ok(u32::try_from(quantity.max(0)).unwrap_or(u32::MAX))
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// `price × quantity` for this line.
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Ordered collection of line items, at most one per product id.
///
/// Insertion order is display order. Every item present has `quantity >= 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of `product`.
    ///
    /// An existing line for the same id is incremented and keeps its position
    /// and its original product snapshot. Otherwise a new line is appended.
    /// A zero quantity is ignored.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.position(&product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartItem::new(product, quantity)),
        }
    }

    /// Sets the quantity of an existing line. Zero removes the line.
    ///
    /// Returns `false` when no line matches `product_id`.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };
        if quantity == 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = quantity;
        }
        true
    }

    /// Returns `false` when no line matches `product_id`.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        match self.position(product_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Takes the `ordered` lines out of the cart.
    ///
    /// Each matching line loses the ordered quantity and is removed when
    /// nothing is left. Lines and units that were not ordered stay. Returns
    /// `false` when nothing matched.
    pub fn settle(&mut self, ordered: &[CartItem]) -> bool {
        let mut changed = false;
        for item in ordered {
            let Some(index) = self.position(&item.product.id) else {
                continue;
            };
            let remaining = self.items[index].quantity.saturating_sub(item.quantity);
            if remaining == 0 {
                self.items.remove(index);
            } else {
                self.items[index].quantity = remaining;
            }
            changed |= item.quantity > 0;
        }
        changed
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| &item.product.id == product_id)
    }
}

// Rebuilding from raw items goes through `add`, so zero quantities are dropped
// and repeated ids collapse into the first line.
impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add(item.product, item.quantity);
        }
        cart
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product::new(id, format!("Product {id}"), "bebidas", price)
    }

    #[test]
    fn test_add_to_empty_cart() {
        let mut cart = Cart::new();
        cart.add(product("a", 12.5), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 37.5);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_same_product_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(product("a", 2.0), 2);
        cart.add(product("b", 1.0), 1);
        cart.add(product("a", 2.0), 5);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].product.id, ProductId::from("a"));
        assert_eq!(cart.items()[0].quantity, 7);
        assert_eq!(cart.items()[1].product.id, ProductId::from("b"));
    }

    #[test]
    fn test_add_keeps_first_snapshot() {
        let mut cart = Cart::new();
        cart.add(product("a", 2.0), 1);
        cart.add(product("a", 3.0), 1);

        assert_eq!(cart.items()[0].product.price, 2.0);
        assert_eq!(cart.total(), 4.0);
    }

    #[test]
    fn test_add_zero_is_ignored() {
        let mut cart = Cart::new();
        cart.add(product("a", 2.0), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add(product("a", 1.0), 4);

        assert!(cart.set_quantity(&"a".into(), 2));
        assert_eq!(cart.get(&"a".into()).map(|item| item.quantity), Some(2));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(product("a", 1.0), 4);
        cart.add(product("b", 1.0), 1);

        assert!(cart.set_quantity(&"a".into(), 0));
        assert_eq!(cart.len(), 1);
        assert!(cart.get(&"a".into()).is_none());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("a", 1.0), 4);
        let before = cart.clone();

        assert!(!cart.set_quantity(&"zzz".into(), 9));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(product("a", 1.0), 1);
        cart.add(product("b", 1.0), 1);

        assert!(cart.remove(&"a".into()));
        assert!(!cart.remove(&"a".into()));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_mixed_cart_totals() {
        let mut cart = Cart::new();
        cart.add(product("a", 10.0), 2);
        cart.add(product("b", 5.5), 1);

        assert_eq!(cart.total(), 25.5);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_settle_keeps_lines_that_were_not_ordered() {
        let mut cart = Cart::new();
        cart.add(product("a", 1.0), 2);
        cart.add(product("b", 1.0), 1);
        let ordered = cart.items().to_vec();

        cart.add(product("a", 1.0), 3);
        cart.add(product("late", 4.0), 1);

        assert!(cart.settle(&ordered));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(&"a".into()).map(|item| item.quantity), Some(3));
        assert!(cart.get(&"b".into()).is_none());
        assert_eq!(cart.get(&"late".into()).map(|item| item.quantity), Some(1));
    }

    #[test]
    fn test_settle_removes_reduced_lines() {
        let mut cart = Cart::new();
        cart.add(product("a", 1.0), 5);
        let ordered = cart.items().to_vec();
        cart.set_quantity(&"a".into(), 2);

        assert!(cart.settle(&ordered));
        assert!(cart.is_empty());
        assert!(!cart.settle(&ordered));
    }

    #[test]
    fn test_from_items_normalizes() {
        let cart = Cart::from(vec![
            CartItem::new(product("a", 1.0), 1),
            CartItem::new(product("b", 1.0), 0),
            CartItem::new(product("a", 1.0), 2),
        ]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }
}
