//! Common test utilities and helpers for salestat tests
//!
//! This module provides a builder for sale records plus the shared fixture
//! used by the integration tests.

use chrono::NaiveDate;
use salestat::types::{Category, Location, PurchaseDate, SaleRecord, Seller};

/// Common test categories
#[allow(dead_code)]
pub const TEST_CATEGORIES: &[&str] = &["electronics", "books", "toys"];

/// Common test payment types
#[allow(dead_code)]
pub const TEST_PAYMENT_TYPES: &[&str] = &["credit card", "boleto", "pix"];

/// Builder for creating test SaleRecord instances
pub struct SaleRecordBuilder {
    product: String,
    category: String,
    price: f64,
    freight: f64,
    date: NaiveDate,
    seller: String,
    location: String,
    latitude: f64,
    longitude: f64,
    rating: u8,
    payment_type: String,
    installments: u32,
}

impl SaleRecordBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            product: "widget".to_string(),
            category: "electronics".to_string(),
            price: 100.0,
            freight: 10.0,
            date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
            seller: "Ana".to_string(),
            location: "SP".to_string(),
            latitude: -23.55,
            longitude: -46.63,
            rating: 4,
            payment_type: "credit card".to_string(),
            installments: 1,
        }
    }

    pub fn with_product(mut self, product: &str) -> Self {
        self.product = product.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    #[allow(dead_code)]
    pub fn with_freight(mut self, freight: f64) -> Self {
        self.freight = freight;
        self
    }

    pub fn with_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn with_seller(mut self, seller: &str) -> Self {
        self.seller = seller.to_string();
        self
    }

    pub fn with_location(mut self, location: &str, latitude: f64, longitude: f64) -> Self {
        self.location = location.to_string();
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    #[allow(dead_code)]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    #[allow(dead_code)]
    pub fn with_payment_type(mut self, payment_type: &str) -> Self {
        self.payment_type = payment_type.to_string();
        self
    }

    #[allow(dead_code)]
    pub fn with_installments(mut self, installments: u32) -> Self {
        self.installments = installments;
        self
    }

    /// Build the SaleRecord
    pub fn build(self) -> SaleRecord {
        SaleRecord {
            product: self.product,
            category: Category::new(self.category),
            price: self.price,
            freight: self.freight,
            purchase_date: PurchaseDate::new(self.date),
            seller: Seller::new(self.seller),
            location: Location::new(self.location),
            latitude: self.latitude,
            longitude: self.longitude,
            rating: self.rating,
            payment_type: self.payment_type,
            installments: self.installments,
        }
    }
}

impl Default for SaleRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Ten-record fixture: two sellers, dates spanning two months across two
/// years, hand-computable totals.
///
/// Ana: 100 + 150 + 50 + 250 + 80 + 90 = 720 over 6 sales
/// Beto: 200 + 300 + 120 + 400 = 1020 over 4 sales
/// 2021-12: 450 over 3 sales; 2022-01: 1290 over 7 sales
pub fn fixture_records() -> Vec<SaleRecord> {
    vec![
        SaleRecordBuilder::new()
            .with_product("mouse")
            .with_price(100.0)
            .with_seller("Ana")
            .with_date(2021, 12, 5)
            .build(),
        SaleRecordBuilder::new()
            .with_product("keyboard")
            .with_price(150.0)
            .with_seller("Ana")
            .with_date(2021, 12, 12)
            .build(),
        SaleRecordBuilder::new()
            .with_product("paperback")
            .with_category("books")
            .with_price(200.0)
            .with_seller("Beto")
            .with_location("RJ", -22.91, -43.17)
            .with_date(2021, 12, 20)
            .build(),
        SaleRecordBuilder::new()
            .with_product("comic")
            .with_category("books")
            .with_price(50.0)
            .with_seller("Ana")
            .with_date(2022, 1, 3)
            .build(),
        SaleRecordBuilder::new()
            .with_product("monitor")
            .with_price(300.0)
            .with_seller("Beto")
            .with_location("MG", -19.92, -43.94)
            .with_date(2022, 1, 8)
            .build(),
        SaleRecordBuilder::new()
            .with_product("headset")
            .with_price(250.0)
            .with_seller("Ana")
            .with_date(2022, 1, 15)
            .build(),
        SaleRecordBuilder::new()
            .with_product("puzzle")
            .with_category("toys")
            .with_price(120.0)
            .with_seller("Beto")
            .with_location("RJ", -22.91, -43.17)
            .with_date(2022, 1, 18)
            .build(),
        SaleRecordBuilder::new()
            .with_product("board game")
            .with_category("toys")
            .with_price(80.0)
            .with_seller("Ana")
            .with_location("MG", -19.92, -43.94)
            .with_date(2022, 1, 22)
            .build(),
        SaleRecordBuilder::new()
            .with_product("tablet")
            .with_price(400.0)
            .with_seller("Beto")
            .with_location("RJ", -22.91, -43.17)
            .with_date(2022, 1, 25)
            .build(),
        SaleRecordBuilder::new()
            .with_product("charger")
            .with_price(90.0)
            .with_seller("Ana")
            .with_date(2022, 1, 30)
            .build(),
    ]
}

/// Assert that two float values are approximately equal
pub fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() <= tolerance,
        "Values are not approximately equal: {a} != {b} (tolerance: {tolerance})"
    );
}
