use serde::{Deserialize, Serialize};

/// Landing-view coin summary, as delivered by the data source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub icon: String,
    pub rank: u32,
    pub price: f64,
    pub market_cap: f64,
    pub volume: f64,
    pub available_supply: f64,
    pub total_supply: f64,
    pub price_change_1h: f64,
    pub price_change_1d: f64,
    pub price_change_1w: f64,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    /// Exchange URLs listing this coin
    #[serde(default, rename = "exp")]
    pub exchanges: Vec<String>,
}

/// Host part of an exchange URL (`https://www.binance.com/en` -> `www.binance.com`).
/// Falls back to the raw text when it does not look like a URL.
pub fn exchange_name(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    // userinfo and port are not part of the name
    let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
    let host = host.split(':').next().unwrap_or(host);
    if host.is_empty() { url } else { host }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_name_strips_scheme_path_and_port() {
        assert_eq!(exchange_name("https://www.binance.com/en/trade"), "www.binance.com");
        assert_eq!(exchange_name("http://kraken.com:8080?ref=1"), "kraken.com");
        assert_eq!(exchange_name("https://user@exchange.io/"), "exchange.io");
        assert_eq!(exchange_name("coinbase.com/price"), "coinbase.com");
    }

    #[test]
    fn exchange_name_keeps_garbage_visible() {
        assert_eq!(exchange_name("https://"), "https://");
    }

    #[test]
    fn coin_deserializes_from_camel_case() {
        let json = r#"{
            "id": "bitcoin", "name": "Bitcoin", "symbol": "BTC", "icon": "https://x/btc.png",
            "rank": 1, "price": 60000.5, "marketCap": 1.2e12, "volume": 3.4e10,
            "availableSupply": 19000000, "totalSupply": 21000000,
            "priceChange1h": 0.1, "priceChange1d": -1.2, "priceChange1w": 4.0,
            "websiteUrl": "https://bitcoin.org",
            "exp": ["https://www.binance.com/en"]
        }"#;
        let coin: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.market_cap, 1.2e12);
        assert_eq!(coin.price_change_1d, -1.2);
        assert_eq!(coin.twitter_url, None);
        assert_eq!(coin.exchanges.len(), 1);
    }
}
