//! Sample stock generators for demos and tests.
//!
//! Mirrors the shop's dress grid: every combination of price, color,
//! pattern, and size, tagged for subset queries.

use stockroom_core::{Price, StockItem, StockRef, Tag, TagSet};

const DRESS_PRICES_MAJOR: [u64; 4] = [100, 150, 200, 500];
const DRESS_COLORS: [&str; 5] = ["red", "green", "blue", "yellow", "pink"];
const DRESS_PATTERNS: [&str; 3] = ["swirly", "plain", "spots"];
const DRESS_SIZES: [u32; 5] = [8, 10, 12, 14, 16];

/// Lazily yield one dress per combination, referenced `DR1`, `DR2`, ...
pub fn dress_stock() -> impl Iterator<Item = StockItem> {
    let combos = DRESS_PRICES_MAJOR.into_iter().flat_map(|price| {
        DRESS_COLORS.into_iter().flat_map(move |color| {
            DRESS_PATTERNS.into_iter().flat_map(move |pattern| {
                DRESS_SIZES
                    .into_iter()
                    .map(move |size| (price, color, pattern, size))
            })
        })
    });

    combos.enumerate().map(|(idx, (price, color, pattern, size))| {
        let stock_ref =
            StockRef::new(format!("DR{}", idx + 1)).expect("generated refs are valid");
        let tags: TagSet = [
            "dress".to_string(),
            format!("color:{color}"),
            format!("pattern:{pattern}"),
            format!("size:{size}"),
            "loc:dress rail".to_string(),
        ]
        .into_iter()
        .map(|text| Tag::new(text).expect("generated tags are valid"))
        .collect();
        StockItem::new(stock_ref, Price::from_major(price), tags)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn generates_the_full_grid() {
        assert_eq!(dress_stock().count(), 4 * 5 * 3 * 5);
    }

    #[test]
    fn refs_are_unique_so_the_grid_bulk_loads() {
        let mut catalog = Catalog::new();
        let stored = catalog.store_all(dress_stock()).unwrap();
        assert_eq!(stored, 300);
        assert_eq!(catalog.len(), 300);
    }

    #[test]
    fn every_dress_carries_the_rail_tags() {
        let rail = Tag::new("loc:dress rail").unwrap();
        let dress = Tag::new("dress").unwrap();
        for item in dress_stock() {
            assert!(item.tags().contains(&rail));
            assert!(item.tags().contains(&dress));
            assert_eq!(item.tags().len(), 5);
        }
    }

    #[test]
    fn grid_queries_match_one_dress_per_price() {
        let mut catalog = Catalog::new();
        catalog.store_all(dress_stock()).unwrap();

        let search = TagSet::parse("color:red, pattern:swirly, size:12").unwrap();
        // One combination per price point.
        assert_eq!(catalog.find_matching_with_tags(&search).count(), 4);
    }
}
