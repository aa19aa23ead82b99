use serde::{Deserialize, Serialize};

use super::cart::{Cart, CartItem};

/// How the customer pays on delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "dinheiro")]
    Cash,
    #[serde(rename = "debito")]
    Debit,
    #[serde(rename = "credito")]
    Credit,
    #[default]
    #[serde(rename = "pix")]
    Pix,
}

impl PaymentMethod {
    /// All methods in the order the checkout form offers them.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Pix,
        PaymentMethod::Cash,
        PaymentMethod::Debit,
        PaymentMethod::Credit,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "dinheiro",
            PaymentMethod::Debit => "debito",
            PaymentMethod::Credit => "credito",
            PaymentMethod::Pix => "pix",
        }
    }

    /// Label used in the order message.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Debit => "Debito",
            PaymentMethod::Credit => "Credito",
            PaymentMethod::Pix => "Pix",
        }
    }
}

/// Delivery details typed into the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

/// An order handed off to the store.
///
/// Built from a cart snapshot at checkout time; later cart changes do not
/// affect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub customer: Customer,
    pub payment_method: PaymentMethod,
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl Order {
    pub fn new(customer: Customer, payment_method: PaymentMethod, cart: &Cart) -> Self {
        Self {
            customer,
            payment_method,
            items: cart.items().to_vec(),
            total: cart.total(),
        }
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
