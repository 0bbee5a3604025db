//! Listing browse command.

use anyhow::Result;
use campus_commerce::catalog::Listing;
use campus_commerce::search::FilterSpec;
use campus_commerce::Money;

use super::ListingsArgs;
use crate::context::Context;
use crate::output::truncate;

/// Column widths: id, title, price, condition, discount.
const WIDTHS: [usize; 5] = [4, 36, 14, 10, 8];

/// Run the listings command.
pub fn run(args: ListingsArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.config.engine.currency;

    let mut filter = FilterSpec::new()
        .category_value(&args.category)?
        .condition_value(&args.condition)?;
    if let Some(min) = args.min_price {
        filter = filter.min_price(Money::from_major(min, currency));
    }
    if let Some(max) = args.max_price {
        filter = filter.max_price(Money::from_major(max, currency));
    }
    if let Some(campus) = args.campus {
        filter = filter.campus(campus);
    }
    if let Some(search) = args.search {
        filter = filter.search(search);
    }

    let page_size = args.page_size.unwrap_or(ctx.config.engine.default_page_size);
    let page = ctx.catalog().query(&filter, args.page, page_size)?;

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.header(&format!("Listings ({} found)", page.total));

    if page.is_empty() {
        ctx.output.info("No listings match these filters");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "TITLE", "PRICE", "CONDITION", "DISCOUNT"], &WIDTHS);
    for listing in &page.items {
        print_row(listing, ctx);
    }

    println!();
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {} of {})",
        page.start_item(),
        page.end_item(),
        page.total,
        page.page,
        page.total_pages()
    ));
    if page.has_more {
        ctx.output.info(&format!("Next page: --page {}", page.page + 1));
    }

    Ok(())
}

fn print_row(listing: &Listing, ctx: &Context) {
    let discount = match listing.discount_percentage() {
        0 => String::new(),
        pct => format!("{}% OFF", pct),
    };
    ctx.output.table_row(
        &[
            listing.id.as_str(),
            &truncate(&listing.title, WIDTHS[1]),
            &listing.price.display(),
            listing.condition.label(),
            &discount,
        ],
        &WIDTHS,
    );
}
