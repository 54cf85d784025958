use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use salestat::{
    aggregation::{self, Metric},
    filters::SaleFilter,
    types::{Category, Location, PurchaseDate, SaleRecord, Seller},
};
use std::hint::black_box;

fn create_test_records(count: usize) -> Vec<SaleRecord> {
    const SELLERS: [&str; 6] = ["Ana", "Beto", "Carla", "Davi", "Edu", "Fabi"];
    const LOCATIONS: [(&str, f64, f64); 5] = [
        ("SP", -23.55, -46.63),
        ("RJ", -22.91, -43.17),
        ("MG", -19.92, -43.94),
        ("RS", -30.03, -51.23),
        ("BA", -12.97, -38.50),
    ];
    const CATEGORIES: [&str; 4] = ["electronics", "books", "toys", "furniture"];

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let (location, latitude, longitude) = LOCATIONS[i % LOCATIONS.len()];
        let month = (i % 12) as u32 + 1;
        let year = 2021 + (i % 3) as i32;

        records.push(SaleRecord {
            product: format!("product-{}", i % 40),
            category: Category::new(CATEGORIES[i % CATEGORIES.len()]),
            price: (i % 500) as f64 + 9.9,
            freight: (i % 50) as f64,
            purchase_date: PurchaseDate::new(
                NaiveDate::from_ymd_opt(year, month, (i % 28) as u32 + 1).unwrap(),
            ),
            seller: Seller::new(SELLERS[i % SELLERS.len()]),
            location: Location::new(location),
            latitude,
            longitude,
            rating: (i % 5) as u8 + 1,
            payment_type: "credit card".to_string(),
            installments: (i % 12) as u32 + 1,
        });
    }

    records
}

fn benchmark_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");

    for count in [1_000, 10_000] {
        let records = create_test_records(count);
        let filter = SaleFilter::new()
            .with_price_range(50.0, 400.0)
            .with_categories(["electronics".to_string(), "books".to_string()]);

        group.bench_function(format!("filter_{count}_records"), |b| {
            b.iter(|| {
                let _result = filter.apply(black_box(&records));
            });
        });
    }

    group.finish();
}

fn benchmark_location_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("location_aggregation");

    for count in [1_000, 10_000] {
        let records = create_test_records(count);

        group.bench_function(format!("aggregate_{count}_records"), |b| {
            b.iter(|| {
                let _result =
                    aggregation::sales_by_location(black_box(&records), Metric::Revenue);
            });
        });
    }

    group.finish();
}

fn benchmark_seller_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("seller_ranking");

    let records = create_test_records(10_000);

    group.bench_function("rank_and_select_top_5", |b| {
        b.iter(|| {
            let sellers = aggregation::sales_by_seller(black_box(&records), Metric::Revenue);
            let _top = aggregation::top_sellers(&sellers, Metric::Sales, 5).unwrap();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filtering,
    benchmark_location_aggregation,
    benchmark_seller_ranking
);
criterion_main!(benches);
