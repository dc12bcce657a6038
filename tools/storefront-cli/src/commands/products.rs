//! Product listing and category bar.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::{Catalog, Product, MAX_RATING};
use storefront_commerce::search::filter_products;
use storefront_commerce::search::CategoryFilter;
use storefront_commerce::view::ProductListingState;
use storefront_commerce::ProductId;

use super::{CategoriesArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{price_cell, stars};

#[derive(Serialize)]
struct ListingRow<'a> {
    #[serde(flatten)]
    product: &'a Product,
    wishlisted: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    category: &'a str,
    sort: &'a str,
    products: Vec<ListingRow<'a>>,
}

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let mut state = ProductListingState::new();
    state.select_category(&args.category);
    state.select_sort(&args.sort);

    for id in &args.wishlist {
        let id = ProductId::new(id.trim());
        if catalog.get(&id).is_none() {
            ctx.output.warn(&format!("No product with id {}", id));
            continue;
        }
        state.toggle_wishlist(&id);
    }

    let visible = state.visible(&catalog);
    ctx.output.debug(&format!(
        "{} of {} products shown",
        visible.len(),
        catalog.len()
    ));

    if ctx.output.is_json() {
        let listing = Listing {
            category: state.category().as_str(),
            sort: state.sort().as_str(),
            products: visible
                .iter()
                .map(|p| ListingRow {
                    product: *p,
                    wishlisted: state.wishlist.contains(&p.id),
                })
                .collect(),
        };
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} · {}",
        state.category(),
        state.sort().display_name()
    ));

    if visible.is_empty() {
        ctx.output.info("No products in this category");
        return Ok(());
    }

    let name_width = visible.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for product in visible {
        let sale = product.discount_price.map(|d| d.display());
        let mark = if state.wishlist.contains(&product.id) {
            "♥"
        } else {
            " "
        };
        let rating = stars(product.rating, MAX_RATING);
        let reviews = format!("({})", product.review_count);
        let price = price_cell(&product.price.display(), sale.as_deref());
        ctx.output.table_row(
            &[
                mark,
                product.id.as_str(),
                product.name.as_str(),
                rating.as_str(),
                reviews.as_str(),
                price.as_str(),
            ],
            &[1, 4, name_width, 5, 6, 0],
        );
    }

    Ok(())
}

#[derive(Serialize)]
struct CategoryCount<'a> {
    category: &'a str,
    count: usize,
}

fn category_counts(catalog: &Catalog) -> Vec<CategoryCount<'_>> {
    catalog
        .categories()
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: filter_products(catalog.products(), &CategoryFilter::parse(category)).len(),
        })
        .collect()
}

/// Run the categories command.
pub fn run_categories(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let counts = category_counts(&catalog);

    if ctx.output.is_json() {
        if args.counts {
            ctx.output.json(&counts);
        } else {
            ctx.output.json(&catalog.categories());
        }
        return Ok(());
    }

    ctx.output.header("Categories");
    for entry in counts {
        if args.counts {
            ctx.output.kv(entry.category, &entry.count.to_string());
        } else {
            ctx.output.list_item(entry.category);
        }
    }

    Ok(())
}
