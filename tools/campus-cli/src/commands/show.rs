//! Listing detail command.

use anyhow::Result;
use campus_commerce::ListingId;
use serde_json::json;

use super::ShowArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let id = ListingId::new(args.id);
    let listing = catalog.get(&id)?;
    let related = catalog.related(&id, ctx.config.engine.related_limit)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "listing": listing, "related": related }));
        return Ok(());
    }

    ctx.output.header(&listing.title);
    ctx.output.kv("price", &listing.price.display());
    if let Some(original) = &listing.original_price {
        ctx.output.kv(
            "original",
            &format!("{} ({}% OFF)", original.display(), listing.discount_percentage()),
        );
    }
    ctx.output.kv("category", listing.category.label());
    ctx.output.kv("condition", listing.condition.label());
    ctx.output.kv("status", &status_badge(listing.status));
    ctx.output.kv("seller", &listing.seller_name);
    if let Some(image) = listing.cover_image() {
        ctx.output.kv("image", image);
    }
    ctx.output
        .kv("location", &format!("{}, {}", listing.location, listing.campus));
    ctx.output
        .kv("posted", &listing.created_at.format("%Y-%m-%d").to_string());
    ctx.output.kv(
        "activity",
        &format!("{} views, {} saved", listing.views, listing.saved),
    );
    println!();
    println!("  {}", listing.description);

    let in_cart = ctx
        .existing_cart()?
        .is_some_and(|cart| cart.is_in_cart(&listing.id));
    if in_cart {
        println!();
        ctx.output.success("In your cart");
    }

    if !related.is_empty() {
        ctx.output.header("Related listings");
        for item in related {
            ctx.output.list_item(&format!(
                "[{}] {} - {}",
                item.id,
                item.title,
                item.price.display()
            ));
        }
    }

    Ok(())
}
