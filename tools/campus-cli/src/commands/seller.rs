//! Seller dashboard command.

use anyhow::Result;
use campus_commerce::UserId;
use serde_json::json;

use super::SellerArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the seller command.
pub fn run(args: SellerArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let seller_id = UserId::new(args.id);
    let profile = catalog.seller(&seller_id)?;
    let listings = catalog.by_seller(&seller_id);
    let stats = catalog.seller_stats(&seller_id)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "profile": profile, "stats": stats, "listings": listings }));
        return Ok(());
    }

    ctx.output.header(&format!("Dashboard: {}", profile.name));
    ctx.output.kv("university", &profile.university);
    ctx.output.kv("joined", &profile.joined_date.format("%B %Y").to_string());
    if let Some(rating) = profile.rating {
        ctx.output.kv(
            "rating",
            &format!("{:.1} ({} reviews)", rating, profile.review_count),
        );
    }
    if profile.verified {
        ctx.output.kv("verified", "yes");
    }
    ctx.output
        .kv("total listings", &stats.total_listings.to_string());
    ctx.output
        .kv("active listings", &stats.active_listings.to_string());
    ctx.output.kv("items sold", &stats.sold_items.to_string());
    ctx.output
        .kv("total earnings", &stats.total_earnings.display());

    ctx.output.header("Listings");
    if listings.is_empty() {
        ctx.output.info("No listings yet");
    }
    for listing in listings {
        ctx.output.list_item(&format!(
            "[{}] {} - {} ({})",
            listing.id,
            listing.title,
            listing.price.display(),
            status_badge(listing.status)
        ));
    }

    Ok(())
}
