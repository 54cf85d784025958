//! Property-based tests for salestat using proptest

use chrono::NaiveDate;
use proptest::prelude::*;
use salestat::{
    aggregation::{self, Metric, Totals},
    export::{Column, write_csv},
    filters::SaleFilter,
    format::format_value,
    types::{Category, Location, PurchaseDate, SaleRecord, Seller},
};

// Strategies for generating test data

prop_compose! {
    fn arb_sale_record()(
        product in prop::sample::select(vec![
            "mouse", "keyboard", "monitor", "paperback", "comic", "puzzle",
        ]),
        category in prop::sample::select(vec!["electronics", "books", "toys"]),
        price in 0.0f64..5000.0,
        freight in 0.0f64..250.0,
        year in 2020i32..=2023,
        month in 1u32..=12,
        day in 1u32..=28,
        seller in prop::sample::select(vec!["Ana", "Beto", "Carla", "Davi"]),
        location in prop::sample::select(vec!["SP", "RJ", "MG", "RS"]),
        latitude in -33.0f64..5.0,
        longitude in -73.0f64..-34.0,
        rating in 1u8..=5,
        payment_type in prop::sample::select(vec!["credit card", "boleto", "pix"]),
        installments in 1u32..=24,
    ) -> SaleRecord {
        SaleRecord {
            product: product.to_string(),
            category: Category::new(category),
            price,
            freight,
            purchase_date: PurchaseDate::new(
                NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            ),
            seller: Seller::new(seller),
            location: Location::new(location),
            latitude,
            longitude,
            rating,
            payment_type: payment_type.to_string(),
            installments,
        }
    }
}

proptest! {
    #[test]
    fn test_default_filter_is_identity(
        records in prop::collection::vec(arb_sale_record(), 0..50)
    ) {
        let filtered = SaleFilter::default().apply(&records);
        prop_assert_eq!(filtered, records);
    }

    #[test]
    fn test_price_range_filter_is_sound(
        records in prop::collection::vec(arb_sale_record(), 0..50),
        min in 0.0f64..2500.0,
        width in 0.0f64..2500.0,
    ) {
        let max = min + width;
        let filter = SaleFilter::new().with_price_range(min, max);

        for record in filter.apply(&records) {
            prop_assert!(record.price >= min && record.price <= max);
        }
    }

    #[test]
    fn test_filter_preserves_relative_order(
        records in prop::collection::vec(arb_sale_record(), 0..50),
        min in 0.0f64..2500.0,
    ) {
        let filter = SaleFilter::new().with_price_range(min, 5000.0);
        let filtered = filter.apply(&records);

        // Survivors appear in the same order as in the input
        let mut input_iter = records.iter();
        for survivor in &filtered {
            prop_assert!(input_iter.any(|r| r == survivor));
        }
    }

    #[test]
    fn test_aggregation_conserves_totals(
        records in prop::collection::vec(arb_sale_record(), 0..50)
    ) {
        let totals = Totals::from_records(&records);

        let seller_revenue: f64 = aggregation::sales_by_seller(&records, Metric::Revenue)
            .iter()
            .map(|r| r.revenue)
            .sum();
        let location_sales: u64 = aggregation::sales_by_location(&records, Metric::Sales)
            .iter()
            .map(|r| r.sales)
            .sum();
        let monthly_sales: u64 = aggregation::sales_by_month(&records)
            .iter()
            .map(|r| r.sales)
            .sum();

        prop_assert!((seller_revenue - totals.revenue).abs() < 1e-6);
        prop_assert_eq!(location_sales, totals.sales);
        prop_assert_eq!(monthly_sales, totals.sales);
    }

    #[test]
    fn test_aggregation_is_deterministic(
        records in prop::collection::vec(arb_sale_record(), 0..50)
    ) {
        prop_assert_eq!(
            aggregation::sales_by_location(&records, Metric::Revenue),
            aggregation::sales_by_location(&records, Metric::Revenue)
        );
        prop_assert_eq!(
            aggregation::sales_by_category(&records, Metric::Sales),
            aggregation::sales_by_category(&records, Metric::Sales)
        );
        prop_assert_eq!(
            aggregation::sales_by_month(&records),
            aggregation::sales_by_month(&records)
        );
    }

    #[test]
    fn test_location_rows_are_unique_with_coordinates(
        records in prop::collection::vec(arb_sale_record(), 0..50)
    ) {
        let rows = aggregation::sales_by_location(&records, Metric::Revenue);

        let mut seen = std::collections::HashSet::new();
        for row in &rows {
            prop_assert!(seen.insert(row.location.clone()));
            prop_assert!(row.latitude.is_finite());
            prop_assert!(row.longitude.is_finite());
        }
    }

    #[test]
    fn test_format_value_accepts_non_negative(
        value in 0.0f64..10_000_000_000.0,
    ) {
        let formatted = format_value(value, "R$").unwrap();
        prop_assert!(formatted.starts_with("R$ "));

        if value >= 1_000_000.0 {
            prop_assert!(formatted.ends_with(" million"));
        } else if value >= 1_000.0 {
            prop_assert!(formatted.ends_with(" thousand"));
        } else {
            prop_assert!(formatted.ends_with(' '));
        }
    }

    #[test]
    fn test_format_value_rejects_negative(
        value in -10_000.0f64..-0.001,
    ) {
        prop_assert!(format_value(value, "").is_err());
    }

    #[test]
    fn test_csv_row_count_matches_records(
        records in prop::collection::vec(arb_sale_record(), 0..30)
    ) {
        let mut bytes = Vec::new();
        write_csv(&records, &Column::all(), &mut bytes).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(text.lines().count(), records.len() + 1);
    }
}
