use std::sync::LazyLock;

pub struct UiText {
    // --- HOME ---
    pub home_heading: String,
    pub home_currency_label: String,
    pub home_no_coins: String,
    pub home_select_coin: String,

    // --- COIN CARDS ---
    pub card_market_cap: String,

    // --- DETAIL CARD ---
    pub detail_price_change_1h: String,
    pub detail_price_change_1d: String,
    pub detail_price_change_1w: String,
    pub detail_volume: String,
    pub detail_market_cap: String,
    pub detail_available_supply: String,
    pub detail_total_supply: String,
    pub detail_rank_prefix: String,
    pub link_website: String,
    pub link_twitter: String,

    // --- CHART ---
    pub chart_heading: String,
    pub chart_loading: String,
    pub chart_failed: String,
    pub chart_empty: String,
    pub chart_skipped_suffix: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    home_heading: "Top 5 Coins".to_string(),
    home_currency_label: "Currency".to_string(),
    home_no_coins: "No coins available".to_string(),
    home_select_coin: "Select a coin above to see its price history".to_string(),

    card_market_cap: "Market Cap.".to_string(),

    detail_price_change_1h: "1h".to_string(),
    detail_price_change_1d: "1d".to_string(),
    detail_price_change_1w: "1w".to_string(),
    detail_volume: "Volume".to_string(),
    detail_market_cap: "Market Capitalization".to_string(),
    detail_available_supply: "Available Supply".to_string(),
    detail_total_supply: "Total Supply".to_string(),
    detail_rank_prefix: "Rank".to_string(),
    link_website: "Website".to_string(),
    link_twitter: "Twitter".to_string(),

    chart_heading: "Price History".to_string(),
    chart_loading: "Loading price history...".to_string(),
    chart_failed: "Could not load price history".to_string(),
    chart_empty: "No price data for this period".to_string(),
    chart_skipped_suffix: "malformed point(s) hidden".to_string(),
});
