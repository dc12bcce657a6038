//! Properties of the listing and checkout computations.

use proptest::prelude::*;
use storefront_commerce::prelude::*;

const CATEGORIES: [&str; 4] = ["Plants", "Pots", "Tools", "Seeds"];

fn arb_products() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(
        (0usize..CATEGORIES.len(), 0i64..20_000, 0u8..=50, 0u32..500),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, cents, rating_tenths, reviews))| {
                Product::new(
                    i.to_string(),
                    format!("Item {i}"),
                    CATEGORIES[category],
                    Money::new(cents, Currency::USD),
                )
                .with_rating(f64::from(rating_tenths) / 10.0)
                .with_reviews(reviews)
            })
            .collect()
    })
}

fn arb_sort() -> impl Strategy<Value = SortOption> {
    prop::sample::select(SortOption::ALL.to_vec())
}

fn sorted_ids(products: &[&Product]) -> Vec<String> {
    let mut ids: Vec<String> = products.iter().map(|p| p.id.to_string()).collect();
    ids.sort();
    ids
}

proptest! {
    #[test]
    fn filter_output_is_subset_matching_category(products in arb_products(), pick in 0usize..CATEGORIES.len()) {
        let catalog = Catalog::new(products).unwrap();
        let category = CATEGORIES[pick];
        let selected = filter_products(catalog.products(), &CategoryFilter::parse(category));

        prop_assert!(selected.iter().all(|p| p.category == category));
        for p in &selected {
            prop_assert!(catalog.get(&p.id).is_some());
        }
        let expected = catalog.products().iter().filter(|p| p.category == category).count();
        prop_assert_eq!(selected.len(), expected);
    }

    #[test]
    fn filter_all_is_identity(products in arb_products()) {
        let catalog = Catalog::new(products).unwrap();
        let selected = filter_products(catalog.products(), &CategoryFilter::All);
        let ids: Vec<&ProductId> = selected.iter().map(|p| &p.id).collect();
        let expected: Vec<&ProductId> = catalog.products().iter().map(|p| &p.id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn sort_is_a_permutation(products in arb_products(), sort in arb_sort()) {
        let input: Vec<&Product> = products.iter().collect();
        let output = sort_products(input.clone(), sort);
        prop_assert_eq!(output.len(), input.len());
        prop_assert_eq!(sorted_ids(&output), sorted_ids(&input));
    }

    #[test]
    fn sort_orders_are_monotonic(products in arb_products()) {
        let input: Vec<&Product> = products.iter().collect();

        let asc = sort_products(input.clone(), SortOption::PriceLowHigh);
        prop_assert!(asc.windows(2).all(|w| w[0].price.amount_cents <= w[1].price.amount_cents));

        let desc = sort_products(input.clone(), SortOption::PriceHighLow);
        prop_assert!(desc.windows(2).all(|w| w[0].price.amount_cents >= w[1].price.amount_cents));

        let rated = sort_products(input, SortOption::Rating);
        prop_assert!(rated.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn sort_keeps_ties_in_input_order(products in arb_products(), sort in arb_sort()) {
        let position = |id: &ProductId| products.iter().position(|p| &p.id == id);
        let output = sort_products(products.iter().collect(), sort);
        for w in output.windows(2) {
            let tied = match sort {
                SortOption::Featured => true,
                SortOption::PriceLowHigh | SortOption::PriceHighLow => w[0].price == w[1].price,
                SortOption::Rating => w[0].rating == w[1].rating,
            };
            if tied {
                prop_assert!(position(&w[0].id) < position(&w[1].id));
            }
        }
    }

    #[test]
    fn unknown_codes_never_discount(code in "[A-Za-z0-9]{0,12}") {
        prop_assume!(code != "DISCOUNT10");
        let totals = demo_cart().totals(&code, &DiscountBook::default());
        prop_assert!(!totals.has_discount());
        prop_assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn wishlist_double_toggle_is_identity(ids in prop::collection::vec("[a-z]{1,3}", 1..10), target in "[a-z]{1,3}") {
        let mut wishlist = Wishlist::new();
        for id in &ids {
            wishlist.toggle(&ProductId::new(id.as_str()));
        }
        let before = wishlist.clone();
        let target = ProductId::new(target);
        wishlist.toggle(&target);
        wishlist.toggle(&target);
        prop_assert_eq!(wishlist, before);
    }
}

#[test]
fn every_catalog_category_has_products() {
    let catalog = StaticCatalog.load().unwrap();
    for category in catalog.categories().into_iter().skip(1) {
        let selected = filter_products(catalog.products(), &CategoryFilter::parse(category));
        assert!(!selected.is_empty(), "{category} is empty");
        assert!(selected.iter().all(|p| p.category == category));
    }
}

#[test]
fn checkout_example_figures() {
    let cart = demo_cart();
    let book = DiscountBook::default();

    let plain = cart.totals("", &book).rounded();
    assert_eq!(plain.subtotal.display(), "$57.47");
    assert!(plain.discount.is_zero());
    assert_eq!(plain.total.display(), "$57.47");

    let totals = cart.totals("DISCOUNT10", &book);
    assert_eq!(totals.discount, rust_decimal::Decimal::new(5747, 3));
    let shown = totals.rounded();
    assert_eq!(shown.discount.display(), "$5.75");
    assert_eq!(shown.total.display(), "$51.72");

    let wrong_case = cart.totals("discount10", &book);
    assert!(!wrong_case.has_discount());
}
