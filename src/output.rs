//! Output formatting module for salestat
//!
//! This module provides formatters for displaying derived sales tables in
//! different formats:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and integration with other tools
//!
//! # Examples
//!
//! ```
//! use salestat::aggregation::{Metric, Totals};
//! use salestat::output::get_formatter;
//!
//! let totals = Totals { revenue: 1_500_000.0, sales: 4200 };
//!
//! let formatter = get_formatter(false);
//! let report = formatter
//!     .format_overview(&totals, &[], &[], &[], Metric::Revenue, "R$")
//!     .unwrap();
//! assert!(report.contains("R$ 1.50 million"));
//! ```

use crate::aggregation::{CategorySales, LocationSales, Metric, MonthlySales, SellerSales, Totals};
use crate::error::Result;
use crate::format::format_value;
use prettytable::{Table, format, row};
use serde_json::json;

/// Trait for output formatters
///
/// One call renders one report, so a single document reaches stdout per
/// invocation in both table and JSON mode.
pub trait OutputFormatter {
    /// Format the overview report: summary metrics plus the by-location,
    /// monthly and by-category tables, ordered by `metric`
    fn format_overview(
        &self,
        totals: &Totals,
        locations: &[LocationSales],
        monthly: &[MonthlySales],
        categories: &[CategorySales],
        metric: Metric,
        currency: &str,
    ) -> Result<String>;

    /// Format the seller report: summary metrics plus the independent
    /// revenue-ranked and count-ranked top-N tables
    fn format_sellers(
        &self,
        totals: &Totals,
        by_revenue: &[SellerSales],
        by_sales: &[SellerSales],
        currency: &str,
    ) -> Result<String>;
}

/// Table formatter for human-readable output
///
/// Produces ASCII tables suitable for terminal display, with counts
/// separated by thousands and money shown with two decimals.
pub struct TableFormatter;

impl TableFormatter {
    /// Format a count with thousands separators
    fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, ch) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(ch);
        }

        result.chars().rev().collect()
    }

    /// Format a money amount with two decimals
    fn format_amount(amount: f64) -> String {
        format!("{amount:.2}")
    }

    /// Summary block with the two dashboard metrics
    fn summary(totals: &Totals, currency: &str) -> Result<String> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![b -> "Metric", b -> "Value"]);
        table.add_row(row!["Revenue", format_value(totals.revenue, currency)?]);
        table.add_row(row!["Sales", format_value(totals.sales as f64, "")?]);

        Ok(table.to_string())
    }

    fn metric_label(metric: Metric) -> &'static str {
        match metric {
            Metric::Revenue => "Revenue",
            Metric::Sales => "Sales",
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_overview(
        &self,
        totals: &Totals,
        locations: &[LocationSales],
        monthly: &[MonthlySales],
        categories: &[CategorySales],
        metric: Metric,
        currency: &str,
    ) -> Result<String> {
        let label = Self::metric_label(metric);
        let mut output = Self::summary(totals, currency)?;

        output.push_str(&format!("\n=== {label} by location ===\n"));
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![
            b -> "Location",
            b -> "Latitude",
            b -> "Longitude",
            b -> "Revenue",
            b -> "Sales"
        ]);
        for entry in locations {
            table.add_row(row![
                entry.location.as_str(),
                r -> Self::format_amount(entry.latitude),
                r -> Self::format_amount(entry.longitude),
                r -> Self::format_amount(entry.revenue),
                r -> Self::format_number(entry.sales)
            ]);
        }
        output.push_str(&table.to_string());

        output.push_str(&format!("\n=== Monthly {} ===\n", label.to_lowercase()));
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Year", b -> "Month", b -> "Revenue", b -> "Sales"]);
        for entry in monthly {
            table.add_row(row![
                entry.month.year,
                entry.month.month_name(),
                r -> Self::format_amount(entry.revenue),
                r -> Self::format_number(entry.sales)
            ]);
        }
        output.push_str(&table.to_string());

        output.push_str(&format!("\n=== {label} by category ===\n"));
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Category", b -> "Revenue", b -> "Sales"]);
        for entry in categories {
            table.add_row(row![
                entry.category.as_str(),
                r -> Self::format_amount(entry.revenue),
                r -> Self::format_number(entry.sales)
            ]);
        }
        output.push_str(&table.to_string());

        Ok(output)
    }

    fn format_sellers(
        &self,
        totals: &Totals,
        by_revenue: &[SellerSales],
        by_sales: &[SellerSales],
        currency: &str,
    ) -> Result<String> {
        let mut output = Self::summary(totals, currency)?;

        output.push_str(&format!("\n=== Top {} sellers (revenue) ===\n", by_revenue.len()));
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Seller", b -> "Revenue", b -> "Sales"]);
        for entry in by_revenue {
            table.add_row(row![
                entry.seller.as_str(),
                r -> Self::format_amount(entry.revenue),
                r -> Self::format_number(entry.sales)
            ]);
        }
        output.push_str(&table.to_string());

        output.push_str(&format!("\n=== Top {} sellers (sales) ===\n", by_sales.len()));
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Seller", b -> "Revenue", b -> "Sales"]);
        for entry in by_sales {
            table.add_row(row![
                entry.seller.as_str(),
                r -> Self::format_amount(entry.revenue),
                r -> Self::format_number(entry.sales)
            ]);
        }
        output.push_str(&table.to_string());

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
///
/// Produces structured JSON that can be parsed by other tools or used in
/// automation pipelines.
pub struct JsonFormatter;

impl JsonFormatter {
    fn totals_json(totals: &Totals, currency: &str) -> Result<serde_json::Value> {
        Ok(json!({
            "revenue": totals.revenue,
            "sales": totals.sales,
            "revenue_formatted": format_value(totals.revenue, currency)?,
            "sales_formatted": format_value(totals.sales as f64, "")?,
        }))
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_overview(
        &self,
        totals: &Totals,
        locations: &[LocationSales],
        monthly: &[MonthlySales],
        categories: &[CategorySales],
        metric: Metric,
        currency: &str,
    ) -> Result<String> {
        let output = json!({
            "metric": metric.to_string(),
            "totals": Self::totals_json(totals, currency)?,
            "locations": locations.iter().map(|l| json!({
                "location": l.location.as_str(),
                "latitude": l.latitude,
                "longitude": l.longitude,
                "revenue": l.revenue,
                "sales": l.sales,
            })).collect::<Vec<_>>(),
            "monthly": monthly.iter().map(|m| json!({
                "year": m.month.year,
                "month": m.month.month,
                "month_name": m.month.month_name(),
                "revenue": m.revenue,
                "sales": m.sales,
            })).collect::<Vec<_>>(),
            "categories": categories.iter().map(|c| json!({
                "category": c.category.as_str(),
                "revenue": c.revenue,
                "sales": c.sales,
            })).collect::<Vec<_>>(),
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_sellers(
        &self,
        totals: &Totals,
        by_revenue: &[SellerSales],
        by_sales: &[SellerSales],
        currency: &str,
    ) -> Result<String> {
        let seller_json = |s: &SellerSales| {
            json!({
                "seller": s.seller.as_str(),
                "revenue": s.revenue,
                "sales": s.sales,
            })
        };

        let output = json!({
            "totals": Self::totals_json(totals, currency)?,
            "top_by_revenue": by_revenue.iter().map(seller_json).collect::<Vec<_>>(),
            "top_by_sales": by_sales.iter().map(seller_json).collect::<Vec<_>>(),
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

/// Get the appropriate formatter based on output format
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
