use super::error::CheckoutError;
use crate::model::{Cart, Customer, Order, PaymentMethod};

/// What the shopper fills in before placing an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub customer: Customer,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    pub fn new(customer: Customer, payment_method: PaymentMethod) -> Self {
        Self {
            customer,
            payment_method,
        }
    }

    /// Every delivery field must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let fields = [
            ("name", &self.customer.name),
            ("phone", &self.customer.phone),
            ("address", &self.customer.address),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CheckoutError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Builds the order for `cart` with trimmed customer fields.
    pub fn into_order(self, cart: &Cart) -> Result<Order, CheckoutError> {
        self.validate()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let customer = Customer::new(
            self.customer.name.trim(),
            self.customer.phone.trim(),
            self.customer.address.trim(),
        );
        Ok(Order::new(customer, self.payment_method, cart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn form(name: &str, phone: &str, address: &str) -> CheckoutForm {
        CheckoutForm::new(Customer::new(name, phone, address), PaymentMethod::Cash)
    }

    #[test]
    fn test_blank_fields_rejected_in_order() {
        assert!(matches!(
            form(" ", "", "").validate(),
            Err(CheckoutError::MissingField("name"))
        ));
        assert!(matches!(
            form("Ana", "\t", "Rua A, 1").validate(),
            Err(CheckoutError::MissingField("phone"))
        ));
        assert!(matches!(
            form("Ana", "1899", "  ").validate(),
            Err(CheckoutError::MissingField("address"))
        ));
        assert!(form("Ana", "1899", "Rua A, 1").validate().is_ok());
    }

    #[test]
    fn test_empty_cart_rejected() {
        let result = form("Ana", "1899", "Rua A, 1").into_order(&Cart::new());
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn test_order_fields_are_trimmed() {
        let mut cart = Cart::new();
        cart.add(Product::new("1", "Cerveja", "cervejas", 5.0), 2);

        let order = form("  Ana ", "1899 ", " Rua A, 1").into_order(&cart).unwrap();
        assert_eq!(order.customer, Customer::new("Ana", "1899", "Rua A, 1"));
        assert_eq!(order.payment_method, PaymentMethod::Cash);
        assert_eq!(order.total, 10.0);
    }
}
