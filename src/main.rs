//! salestat - Fetch, filter and aggregate product-sale records from a remote sales API

use clap::Parser;
use salestat::{
    aggregation::{self, Metric, Totals},
    cli::{Cli, Command, parse_region},
    error::Result,
    export::{CsvCache, csv_file_name},
    fetcher::SalesApi,
    output::get_formatter,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The --quiet flag should override RUST_LOG.
    let filter_directive = if cli.quiet {
        tracing_subscriber::EnvFilter::new("warn")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("salestat=info"))
    };

    tracing_subscriber::registry()
        .with(filter_directive)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let show_progress = !cli.json && is_terminal::is_terminal(std::io::stdout());

    // Fetch: one GET per invocation, narrowed server-side by region/year
    let region = cli.region.as_deref().map(parse_region).transpose()?;
    let api = SalesApi::new(&cli.endpoint).with_progress(show_progress);
    let records = api.fetch(region, cli.year).await?;
    info!("Fetched {} sale records", records.len());

    // Filter: client-side predicates from the CLI options
    let filter = cli.filter.to_filter()?;
    let records = filter.apply(&records);
    info!("{} records after filtering", records.len());

    // Aggregate and render per subcommand
    let totals = Totals::from_records(&records);
    let formatter = get_formatter(cli.json);

    match cli.command.unwrap_or(Command::Revenue) {
        Command::Revenue => {
            let locations = aggregation::sales_by_location(&records, Metric::Revenue);
            let monthly = aggregation::sales_by_month(&records);
            let categories = aggregation::sales_by_category(&records, Metric::Revenue);
            println!(
                "{}",
                formatter.format_overview(
                    &totals,
                    &locations,
                    &monthly,
                    &categories,
                    Metric::Revenue,
                    &cli.currency
                )?
            );
        }

        Command::Sales => {
            let locations = aggregation::sales_by_location(&records, Metric::Sales);
            let monthly = aggregation::sales_by_month(&records);
            let categories = aggregation::sales_by_category(&records, Metric::Sales);
            println!(
                "{}",
                formatter.format_overview(
                    &totals,
                    &locations,
                    &monthly,
                    &categories,
                    Metric::Sales,
                    &cli.currency
                )?
            );
        }

        Command::Sellers { top } => {
            let sellers = aggregation::sales_by_seller(&records, Metric::Revenue);
            let by_revenue = aggregation::top_sellers(&sellers, Metric::Revenue, top)?;
            let by_sales = aggregation::top_sellers(&sellers, Metric::Sales, top)?;
            println!(
                "{}",
                formatter.format_sellers(&totals, &by_revenue, &by_sales, &cli.currency)?
            );
        }

        Command::Export(args) => {
            let columns = args.resolve_columns()?;
            let file_name = csv_file_name(&args.output);

            // Cache scoped to this export action only
            let mut cache = CsvCache::new();
            let bytes = cache.encode(&records, &columns)?;
            std::fs::write(&file_name, bytes)?;

            info!("Wrote {} bytes to {}", bytes.len(), file_name);
            println!("Wrote {} records to {}", records.len(), file_name);
        }
    }

    Ok(())
}
