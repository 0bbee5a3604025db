//! Shopping cart commands.

use anyhow::Result;
use campus_commerce::cart::CartEngine;
use campus_commerce::ListingId;
use campus_store::FileStore;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::truncate;

/// Column widths: id, title, unit price, quantity, line total.
const WIDTHS: [usize; 5] = [4, 36, 14, 4, 14];

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;
    ctx.output.debug(&format!(
        "Cart key: {} in {}",
        cart.storage_key(),
        ctx.data_dir().display()
    ));

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show_cart(&cart, ctx),
        CartCommand::Add { id, quantity } => add(&mut cart, &id, quantity, ctx),
        CartCommand::Remove { id } => remove(&mut cart, &id, ctx),
        CartCommand::Set { id, quantity } => set_quantity(&mut cart, &id, quantity, ctx),
        CartCommand::Clear => {
            cart.clear_cart();
            ctx.output.success("Cart cleared");
            show_cart(&cart, ctx)
        }
    }
}

fn show_cart(cart: &CartEngine<FileStore>, ctx: &Context) -> Result<()> {
    let summary = cart.summary()?;

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Shopping Cart");

    if summary.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "TITLE", "PRICE", "QTY", "SUBTOTAL"], &WIDTHS);
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                line.listing_id.as_str(),
                &truncate(&line.title, WIDTHS[1]),
                &line.unit_price.display(),
                &line.quantity.to_string(),
                &line.line_total.display(),
            ],
            &WIDTHS,
        );
    }

    println!();
    ctx.output.kv("items", &summary.item_count.to_string());
    ctx.output.kv("total", &summary.total_display());

    Ok(())
}

fn add(cart: &mut CartEngine<FileStore>, id: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let listing = catalog.get(&ListingId::new(id))?;

    if !listing.is_available() {
        ctx.output
            .warn(&format!("\"{}\" is marked {}", listing.title, listing.status));
    }

    cart.add_item(listing, quantity)?;
    ctx.output
        .success(&format!("Added {} x {}", quantity, listing.title));
    show_cart(cart, ctx)
}

fn remove(cart: &mut CartEngine<FileStore>, id: &str, ctx: &Context) -> Result<()> {
    let id = ListingId::new(id);
    if cart.is_in_cart(&id) {
        cart.remove_item(&id);
        ctx.output.success(&format!("Removed {}", id));
    } else {
        ctx.output.warn(&format!("Listing {} is not in the cart", id));
    }
    show_cart(cart, ctx)
}

fn set_quantity(
    cart: &mut CartEngine<FileStore>,
    id: &str,
    quantity: i64,
    ctx: &Context,
) -> Result<()> {
    let id = ListingId::new(id);
    if !cart.is_in_cart(&id) {
        ctx.output.warn(&format!("Listing {} is not in the cart", id));
    } else if quantity <= 0 {
        ctx.output.success(&format!("Removed {}", id));
    } else {
        ctx.output
            .success(&format!("Set quantity of {} to {}", id, quantity));
    }
    cart.update_quantity(&id, quantity);
    show_cart(cart, ctx)
}
