use crate::model::Order;

/// Formats an amount the way the order message shows money: `R$ 12.50`.
///
/// Amounts exactly halfway between two cents round away from zero, as
/// `Number.prototype.toFixed` does; `{:.2}` alone would round them to even.
pub fn money(amount: f64) -> String {
    let cents = amount * 100.0;
    // A binary value can only sit exactly on a half cent when it is a multiple
    // of 1/8, and then `cents` is exact.
    let halfway = (amount * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5;
    let amount = if halfway { cents.round() / 100.0 } else { amount };
    format!("R$ {amount:.2}")
}

/// The order message sent to the store.
///
/// ```text
/// *Novo Pedido - <store>*
///
/// *Cliente:* <name>
/// *Telefone:* <phone>
/// *Endereço:* <address>
/// *Pagamento:* <method>
///
/// *Itens:*
/// 2x Cerveja - R$ 9.00
///
/// *Total: R$ 9.00*
/// ```
pub fn order_summary(store_name: &str, order: &Order) -> String {
    let items = order
        .items
        .iter()
        .map(|item| {
            format!(
                "{}x {} - {}",
                item.quantity,
                item.product.name,
                money(item.subtotal())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "*Novo Pedido - {store_name}*\n\n\
         *Cliente:* {}\n\
         *Telefone:* {}\n\
         *Endereço:* {}\n\
         *Pagamento:* {}\n\n\
         *Itens:*\n\
         {items}\n\n\
         *Total: {}*",
        order.customer.name,
        order.customer.phone,
        order.customer.address,
        order.payment_method.label(),
        money(order.total),
    )
}
