//! Print the ticker list for one category and a chart summary for its first row.
//!
//! ```bash
//! RUST_LOG=hitbtc_ticker=debug cargo run --example tickers --features native -- ETH
//! ```
//!
//! Reads `HITBTC_API_URL` from the environment (or a local `.env`).

use hitbtc_ticker::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let base_url = std::env::var("HITBTC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    let category = std::env::args()
        .nth(1)
        .map(CategoryToken::from)
        .unwrap_or_default();

    let client = HitbtcClient::builder().base_url(&base_url).build()?;

    let mut board = TickerBoard::new(category.clone());
    let ticket = board.begin_refresh();
    board.apply(ticket, client.tickers().all().await);

    if board.status() == LoadStatus::Failed {
        println!("{}", hitbtc_ticker::error::NO_CONNECTION_MESSAGE);
        return Ok(());
    }

    println!("── {} ({} pairs) ──", category, board.count());
    for row in board.rows().iter().take(15) {
        println!(
            "{:<12} {:>16}   {}",
            row.display_symbol, row.display_price, row.display_volume
        );
    }

    let Some(ticker) = board.ticker_at(0) else {
        return Ok(());
    };
    let Some(detail) = board.selected(0) else {
        return Ok(());
    };

    let mut chart = CandleChart::new(ticker.symbol().clone(), client.period(), detail.title.clone());
    let ticket = chart.begin_refresh();
    chart.apply(
        ticket,
        client.candles().get(ticker.symbol().as_str(), chart.period()).await,
    );

    println!();
    println!("{}", chart.description());
    println!(
        "low {}  high {}  last {}  volume {}",
        detail.low.as_deref().unwrap_or("-"),
        detail.high.as_deref().unwrap_or("-"),
        detail.last.as_deref().unwrap_or("-"),
        detail.volume
    );
    match (chart.status(), chart.series().y_range()) {
        (LoadStatus::Failed, _) => println!("{}", hitbtc_ticker::error::NO_CONNECTION_MESSAGE),
        (_, None) => println!("No chart data"),
        (_, Some((lo, hi))) => println!(
            "{}: {} points, range {lo} .. {hi}, latest {}",
            SERIES_LABEL,
            chart.series().len(),
            chart.series().last().unwrap_or_default()
        ),
    }

    Ok(())
}
