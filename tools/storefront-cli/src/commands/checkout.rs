//! Order summary for the demo cart.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::cart::{demo_cart, Cart, CartTotals};
use storefront_commerce::view::CheckoutState;
use storefront_commerce::Money;

use super::CheckoutArgs;
use crate::context::Context;

/// Summary line in `--json` output. Amounts are decimals in currency units,
/// the same shape `products --json` uses for prices.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryLine<'a> {
    id: &'a str,
    name: &'a str,
    price: f64,
    quantity: u32,
    line_total: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    currency: &'static str,
    lines: Vec<SummaryLine<'a>>,
    subtotal: f64,
    discount: f64,
    total: f64,
    applied_code: Option<&'a str>,
    is_gift: bool,
}

fn summary<'a>(cart: &'a Cart, totals: &'a CartTotals, is_gift: bool) -> Result<Summary<'a>> {
    let lines = cart
        .lines()
        .iter()
        .map(|line| -> Result<SummaryLine<'a>> {
            Ok(SummaryLine {
                id: line.id.as_str(),
                name: &line.name,
                price: line.price.to_decimal(),
                quantity: line.quantity,
                line_total: line.line_total()?.to_decimal(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let shown = totals.rounded();
    Ok(Summary {
        currency: totals.currency.code(),
        lines,
        subtotal: shown.subtotal.to_decimal(),
        discount: shown.discount.to_decimal(),
        total: shown.total.to_decimal(),
        applied_code: totals.applied_code.as_deref(),
        is_gift,
    })
}

/// Label and amount of the discount row, present whenever a code matched.
fn discount_row(totals: &CartTotals) -> Option<(String, String)> {
    let code = totals.applied_code.as_deref()?;
    let amount = totals.rounded().discount;
    Some((format!("Discount ({})", code), negated(amount)))
}

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let cart = demo_cart();
    let discounts = ctx.discount_book()?;

    let mut state = CheckoutState::new();
    state.set_discount_code(args.code.as_str());
    if args.gift {
        state.toggle_gift();
    }

    // Unknown codes are reported by the cart's `warn!` event.
    let totals = state.totals(&cart, &discounts);

    if ctx.output.is_json() {
        ctx.output.json(&summary(&cart, &totals, state.is_gift)?);
        return Ok(());
    }

    let shown = totals.rounded();
    ctx.output.header("Order Summary");
    for line in cart.lines() {
        let line_total = line.line_total()?;
        ctx.output.kv(
            &format!("{} × {}", line.name, line.quantity),
            &line_total.display(),
        );
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &shown.subtotal.display());
    if let Some((label, amount)) = discount_row(&totals) {
        ctx.output.kv(&label, &amount);
    }
    ctx.output.kv("Total", &shown.total.display());

    if state.is_gift {
        ctx.output.success("This order is a gift");
    }

    Ok(())
}

fn negated(amount: Money) -> String {
    format!("-{}", amount.display())
}
