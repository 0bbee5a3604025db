//! The catalog query engine.

use crate::catalog::Listing;
use crate::error::CommerceError;
use crate::search::{FilterSpec, Page};

/// Filter and paginate a listing collection.
///
/// Matches keep their relative input order. `page` is 1-indexed; a page past
/// the end is empty with `has_more == false` and the real `total`.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidArgument`] if `page` or `page_size` is not
/// positive.
pub fn query(
    listings: &[Listing],
    filter: &FilterSpec,
    page: i64,
    page_size: i64,
) -> Result<Page<Listing>, CommerceError> {
    let page = query_refs(listings, filter, page, page_size)?;
    Ok(page.map(Clone::clone))
}

/// Like [`query`], but borrows the matching listings instead of cloning them.
pub fn query_refs<'a>(
    listings: &'a [Listing],
    filter: &FilterSpec,
    page: i64,
    page_size: i64,
) -> Result<Page<&'a Listing>, CommerceError> {
    if page_size <= 0 {
        return Err(CommerceError::InvalidArgument(format!(
            "page size must be positive, got {}",
            page_size
        )));
    }
    if page <= 0 {
        return Err(CommerceError::InvalidArgument(format!(
            "page must be 1 or greater, got {}",
            page
        )));
    }
    let page = usize::try_from(page)
        .map_err(|_| CommerceError::InvalidArgument(format!("page out of range: {}", page)))?;
    let page_size = usize::try_from(page_size).map_err(|_| {
        CommerceError::InvalidArgument(format!("page size out of range: {}", page_size))
    })?;

    let matches: Vec<&Listing> = listings.iter().filter(|l| filter.matches(l)).collect();
    let total = matches.len();

    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size);
    let items: Vec<&Listing> = matches
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    tracing::debug!(
        candidates = listings.len(),
        total,
        page,
        page_size,
        returned = items.len(),
        "catalog query"
    );

    Ok(Page {
        items,
        total,
        page,
        page_size,
        has_more: end < total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_listings, Category, Condition};
    use crate::money::{Currency, Money};

    fn ids(page: &Page<Listing>) -> Vec<&str> {
        page.items.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_input_order() {
        let listings = sample_listings();
        let page = query(&listings, &FilterSpec::new(), 1, 20).unwrap();

        assert_eq!(page.total, 10);
        assert_eq!(page.items, listings);
        assert!(!page.has_more);
    }

    #[test]
    fn test_textbooks_under_4000() {
        let listings = sample_listings();
        let filter = FilterSpec::new()
            .category(Category::Textbooks)
            .max_price(Money::from_major(4000, Currency::NGN));

        let page = query(&listings, &filter, 1, 20).unwrap();

        assert_eq!(ids(&page), vec!["1", "9"]);
        assert_eq!(page.total, 2);
        for listing in &page.items {
            assert_eq!(listing.category, Category::Textbooks);
            assert!(listing.price.amount_minor <= 400_000);
        }
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let listings = sample_listings();
        let filter = FilterSpec::new()
            .category(Category::Tech)
            .condition(Condition::LikeNew)
            .search("pencil");

        let page = query(&listings, &filter, 1, 20).unwrap();
        assert_eq!(ids(&page), vec!["7"]);
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let listings = sample_listings();
        let filter = FilterSpec::new()
            .min_price(Money::from_major(5000, Currency::NGN))
            .max_price(Money::from_major(1000, Currency::NGN));

        let page = query(&listings, &filter, 1, 20).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn test_pagination_slices() {
        let listings = sample_listings();

        let first = query(&listings, &FilterSpec::new(), 1, 4).unwrap();
        assert_eq!(ids(&first), vec!["1", "2", "3", "4"]);
        assert!(first.has_more);

        let last = query(&listings, &FilterSpec::new(), 3, 4).unwrap();
        assert_eq!(ids(&last), vec!["9", "10"]);
        assert!(!last.has_more);
        assert_eq!(last.total, 10);
    }

    #[test]
    fn test_exact_fit_has_no_more() {
        let listings = sample_listings();
        let page = query(&listings, &FilterSpec::new(), 2, 5).unwrap();
        assert_eq!(page.len(), 5);
        assert!(!page.has_more);
    }

    #[test]
    fn test_rejects_non_positive_pagination() {
        let listings = sample_listings();
        for (page, size) in [(1, 0), (1, -5), (0, 10), (-1, 10)] {
            let result = query(&listings, &FilterSpec::new(), page, size);
            assert!(
                matches!(result, Err(CommerceError::InvalidArgument(_))),
                "page={} size={}",
                page,
                size
            );
        }
    }

    #[test]
    fn test_huge_page_number_is_empty() {
        let listings = sample_listings();
        let page = query(&listings, &FilterSpec::new(), i64::MAX, i64::MAX).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 10);
        assert!(!page.has_more);
    }

    #[test]
    fn test_query_refs_borrows() {
        let listings = sample_listings();
        let page = query_refs(&listings, &FilterSpec::new().search("dorm"), 1, 10).unwrap();

        assert_eq!(page.total, 3);
        assert!(std::ptr::eq(page.items[0], &listings[2]));
        assert!(std::ptr::eq(page.items[1], &listings[5]));
        assert!(std::ptr::eq(page.items[2], &listings[9]));
    }
}
