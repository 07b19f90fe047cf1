//! End-to-end tests of the fetch → filter → format → chart pipeline, driven
//! from decoded JSON without a network.

use hitbtc_ticker::domain::ticker::wire::TickersResponse;
use hitbtc_ticker::prelude::*;

fn decode_tickers(json: &str) -> Vec<Ticker> {
    let wire: TickersResponse = serde_json::from_str(json).unwrap();
    wire.into_iter().map(Ticker::from).collect()
}

const LIST: &str = r#"[
    {"symbol": "BTCUSD", "last": "9712.45", "volume": "4187.14", "low": "9600", "high": "9800"},
    {"symbol": "ETHUSD", "last": "265.31", "volume": "90210.5"},
    {"symbol": "LTCBTC", "last": null, "volume": "5120.0"},
    {"symbol": "ETHBTC", "last": "0.020574", "volume": "138444.3666"},
    {"symbol": "XRPUSDT", "last": "0.2811", "volume": "1000"}
]"#;

#[test]
fn decode_keeps_count_and_order() {
    let tickers = decode_tickers(LIST);
    let symbols: Vec<&str> = tickers.iter().map(|t| t.symbol().as_str()).collect();
    assert_eq!(symbols, vec!["BTCUSD", "ETHUSD", "LTCBTC", "ETHBTC", "XRPUSDT"]);
}

#[test]
fn btc_scenario() {
    let tickers = decode_tickers(LIST);
    let btc = CategoryToken::from("BTC");

    let filtered = filter_by_category(&tickers[..3], &btc);
    let symbols: Vec<&str> = filtered.iter().map(|t| t.symbol().as_str()).collect();
    assert_eq!(symbols, vec!["BTCUSD", "LTCBTC"]);

    assert_eq!(format_symbol("BTCUSD", &btc), "BTC/USD");
    assert_eq!(format_symbol("ETHBTC", &btc), "ETH/BTC");
}

#[test]
fn board_list_and_detail_flow() {
    let mut board = TickerBoard::new(CategoryToken::default());
    let ticket = board.begin_refresh();
    assert!(board.apply(ticket, Ok(decode_tickers(LIST))));
    assert_eq!(board.status(), LoadStatus::Ready);

    // BTC is the first segment.
    assert_eq!(board.count(), 3);
    let rows = board.rows();
    assert_eq!(rows[0].display_symbol, "BTC/USD");
    assert_eq!(rows[1].display_symbol, "LTC/BTC");
    assert_eq!(rows[1].display_price, "Unknown");
    assert_eq!(rows[1].display_volume, "Vol 24 5120.0 USD");

    board.set_query("eth");
    assert_eq!(board.count(), 1);
    let detail = board.selected(0).unwrap();
    assert_eq!(detail.title, "ETH/BTC");
    assert_eq!(detail.last.as_deref(), Some("0.020574"));

    let symbol = board.ticker_at(0).unwrap().symbol().clone();
    let mut chart = CandleChart::new(symbol, Period::default(), detail.title);
    let ticket = chart.begin_refresh();
    chart.apply(
        ticket,
        Ok(vec![CandlePoint::new("0.0205"), CandlePoint::new("0.0206")]),
    );
    assert_eq!(chart.status(), LoadStatus::Ready);
    assert_eq!(chart.series().len(), 2);
    assert_eq!(chart.description(), "Last ETH/BTC price chart");
}

#[test]
fn usd_segment_excludes_usdt_suffix() {
    let tickers = decode_tickers(LIST);
    let usd = filter_by_category(&tickers, &CategoryToken::from("USD"));
    let symbols: Vec<&str> = usd.iter().map(|t| t.symbol().as_str()).collect();
    assert_eq!(symbols, vec!["BTCUSD", "ETHUSD"]);
}

#[test]
fn search_without_category_match_is_empty() {
    let tickers = decode_tickers(LIST);
    let eth = filter_by_category(&tickers, &CategoryToken::from("ETH"));
    assert!(search_within(&eth, "xrp").is_empty());
}
