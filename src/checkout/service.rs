use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use super::error::CheckoutError;
use super::form::CheckoutForm;
use super::launcher::MessageLauncher;
use super::link::deep_link;
use super::summary::order_summary;
use crate::clients::{ActorClient, CartClient};
use crate::config::StoreConfig;
use crate::model::Order;

/// An order that was handed off, with the link that carried it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order: Order,
    pub link: String,
}

/// Turns the current cart into a message to the store.
#[derive(Clone)]
pub struct CheckoutService {
    cart: CartClient,
    launcher: Arc<dyn MessageLauncher>,
    store_name: String,
    whatsapp_number: String,
    greeting: String,
}

impl CheckoutService {
    pub fn new(cart: CartClient, launcher: Arc<dyn MessageLauncher>, config: &StoreConfig) -> Self {
        Self {
            cart,
            launcher,
            store_name: config.store_name.clone(),
            whatsapp_number: config.whatsapp_number.clone(),
            greeting: config.greeting.clone(),
        }
    }

    /// Validates the form, opens the messaging link with the order summary and
    /// takes the ordered lines out of the cart.
    ///
    /// Nothing is confirmed by the store; a successful return only means the
    /// link was handed to the launcher. If the launcher fails the cart is kept.
    /// Lines added while the link was being opened were not ordered and stay.
    #[instrument(skip_all, fields(payment = form.payment_method.code()))]
    pub async fn place_order(&self, form: CheckoutForm) -> Result<PlacedOrder, CheckoutError> {
        form.validate()?;
        let cart = self.cart.snapshot().await?;
        let order = form.into_order(&cart)?;

        let link = deep_link(&self.whatsapp_number, &order_summary(&self.store_name, &order));
        if let Err(e) = self.launcher.open(&link).await {
            warn!(error = %e, "Order handoff failed, keeping cart");
            return Err(e.into());
        }
        info!(items = order.item_count(), total = order.total, "Order handed off");

        // The order is already out; a failure here must not invite a resend.
        if let Err(e) = self.cart.settle(order.items.clone()).await {
            error!(error = %e, "Could not remove ordered lines from cart");
        }
        Ok(PlacedOrder { order, link })
    }

    /// Link for a plain conversation with the store.
    pub fn contact_link(&self) -> String {
        deep_link(&self.whatsapp_number, &self.greeting)
    }

    /// Opens [`CheckoutService::contact_link`].
    pub async fn contact(&self) -> Result<(), CheckoutError> {
        self.launcher.open(&self.contact_link()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::CartAction;
    use crate::checkout::launcher::LaunchError;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{Cart, Customer, PaymentMethod, Product};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLauncher {
        opened: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl MessageLauncher for RecordingLauncher {
        async fn open(&self, url: &str) -> Result<(), LaunchError> {
            if self.fail {
                return Err(LaunchError("no messaging app".into()));
            }
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn config() -> StoreConfig {
        StoreConfig {
            store_name: "Loja".to_string(),
            whatsapp_number: "5500000000000".to_string(),
            greeting: "Oi".to_string(),
            ..StoreConfig::default()
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(Product::new("a", "Cerveja", "cervejas", 5.0), 3);
        cart
    }

    fn form() -> CheckoutForm {
        CheckoutForm::new(Customer::new("Ana", "1899", "Rua A, 1"), PaymentMethod::Pix)
    }

    #[tokio::test]
    async fn test_place_order_opens_link_and_settles_cart() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_get().return_ok(cart());
        mock.expect_action().return_ok(Cart::new());

        let launcher = Arc::new(RecordingLauncher::default());
        let service = CheckoutService::new(CartClient::new(mock.client()), launcher.clone(), &config());

        let placed = service.place_order(form()).await.unwrap();

        assert_eq!(placed.order.total, 15.0);
        assert!(placed.link.starts_with("https://wa.me/5500000000000?text=*Novo%20Pedido%20-%20Loja*"));
        assert!(placed.link.ends_with("*Total%3A%20R%24%2015.00*"));
        assert_eq!(*launcher.opened.lock().unwrap(), vec![placed.link.clone()]);
        match mock.take_actions().as_slice() {
            [CartAction::Settle(ordered)] => assert_eq!(ordered, &placed.order.items),
            other => panic!("Expected Settle action, got {other:?}"),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_settle_failure_still_reports_the_order() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_get().return_ok(cart());
        mock.expect_action().return_err(FrameworkError::ActorClosed);

        let launcher = Arc::new(RecordingLauncher::default());
        let service = CheckoutService::new(CartClient::new(mock.client()), launcher.clone(), &config());

        let placed = service.place_order(form()).await.unwrap();
        assert_eq!(placed.order.total, 15.0);
        assert_eq!(launcher.opened.lock().unwrap().len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_form_touches_nothing() {
        let mock = MockClient::<Cart>::new();
        let launcher = Arc::new(RecordingLauncher::default());
        let service = CheckoutService::new(CartClient::new(mock.client()), launcher.clone(), &config());

        let mut form = form();
        form.customer.address = "   ".to_string();
        let err = service.place_order(form).await.unwrap_err();

        assert!(matches!(err, CheckoutError::MissingField("address")));
        assert!(launcher.opened.lock().unwrap().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_launch_failure_keeps_cart() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_get().return_ok(cart());

        let launcher = Arc::new(RecordingLauncher {
            fail: true,
            ..Default::default()
        });
        let service = CheckoutService::new(CartClient::new(mock.client()), launcher, &config());

        let err = service.place_order(form()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Launch(_)));
        assert!(mock.take_actions().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_contact_link() {
        let mock = MockClient::<Cart>::new();
        let launcher = Arc::new(RecordingLauncher::default());
        let service = CheckoutService::new(CartClient::new(mock.client()), launcher.clone(), &config());

        assert_eq!(service.contact_link(), "https://wa.me/5500000000000?text=Oi");
        service.contact().await.unwrap();
        assert_eq!(launcher.opened.lock().unwrap().len(), 1);
    }
}
