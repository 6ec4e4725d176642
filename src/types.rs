//! Metrics payload types
//!
//! Mirrors the JSON served by the metrics endpoint. Every field is optional:
//! a missing key and an explicit `null` both deserialize to `None`, and the
//! accessors fold `None` into the field's default.

use serde::{Deserialize, Serialize};

/// Treat absent, zero and non-finite values alike, returning `fallback`.
pub fn or_fallback(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => fallback,
    }
}

/// `or_fallback` with a zero fallback
pub fn or_zero(value: Option<f64>) -> f64 {
    or_fallback(value, 0.0)
}

/// Parallel label/value series for one chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<f64>,
}

/// Per-chain figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainMetrics {
    #[serde(default)]
    pub supply: Option<f64>,
    #[serde(default)]
    pub staked: Option<f64>,
    #[serde(default)]
    pub holders: Option<f64>,
    #[serde(default)]
    pub tvl: Option<f64>,
}

impl ChainMetrics {
    pub fn supply(&self) -> f64 {
        or_zero(self.supply)
    }

    pub fn staked(&self) -> f64 {
        or_zero(self.staked)
    }

    pub fn holders(&self) -> f64 {
        or_zero(self.holders)
    }

    pub fn tvl(&self) -> f64 {
        or_zero(self.tvl)
    }
}

/// The chains the dashboard knows about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chains {
    #[serde(default)]
    pub sonic: Option<ChainMetrics>,
    #[serde(default)]
    pub plasma: Option<ChainMetrics>,
    #[serde(default)]
    pub ethereum: Option<ChainMetrics>,
}

impl Chains {
    /// Look up a chain record by key
    pub fn get(&self, chain: Chain) -> Option<&ChainMetrics> {
        match chain {
            Chain::Sonic => self.sonic.as_ref(),
            Chain::Plasma => self.plasma.as_ref(),
            Chain::Ethereum => self.ethereum.as_ref(),
        }
    }

    /// Supply per chain in `Chain::ALL` order, absent chains as 0
    pub fn supply_shares(&self) -> [f64; 3] {
        Chain::ALL.map(|chain| self.get(chain).map_or(0.0, ChainMetrics::supply))
    }

    /// TVL per chain in `Chain::ALL` order, absent chains as 0
    pub fn tvl_by_chain(&self) -> [f64; 3] {
        Chain::ALL.map(|chain| self.get(chain).map_or(0.0, ChainMetrics::tvl))
    }
}

/// Chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Sonic,
    Plasma,
    Ethereum,
}

impl Chain {
    /// Fixed order shared by the chain-share chart and the TVL breakdown
    pub const ALL: [Chain; 3] = [Chain::Sonic, Chain::Plasma, Chain::Ethereum];

    /// Payload key
    pub fn key(self) -> &'static str {
        match self {
            Chain::Sonic => "sonic",
            Chain::Plasma => "plasma",
            Chain::Ethereum => "ethereum",
        }
    }

    /// Chart legend label
    pub fn label(self) -> &'static str {
        match self {
            Chain::Sonic => "Sonic",
            Chain::Plasma => "Plasma",
            Chain::Ethereum => "Ethereum",
        }
    }

    /// Short label used in the TVL breakdown line
    pub fn short_label(self) -> &'static str {
        match self {
            Chain::Ethereum => "ETH",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Protocol revenue figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueMetrics {
    #[serde(default)]
    pub total_30d: Option<f64>,
    #[serde(default)]
    pub change_30d: Option<f64>,
    #[serde(default)]
    pub today: Option<f64>,
    #[serde(default)]
    pub yesterday: Option<f64>,
    #[serde(default)]
    pub history: Option<History>,
}

/// Token buyback figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuybackMetrics {
    #[serde(default)]
    pub total_30d: Option<f64>,
    #[serde(default)]
    pub change_30d: Option<f64>,
    #[serde(default)]
    pub tokens_bought: Option<f64>,
    #[serde(default)]
    pub avg_price: Option<f64>,
    #[serde(default)]
    pub history: Option<History>,
}

/// One poll's worth of metrics. Replaces the previous snapshot wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub token_price: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub mcap_rank: Option<f64>,
    #[serde(default)]
    pub total_tvl: Option<f64>,
    #[serde(default)]
    pub total_holders: Option<f64>,
    #[serde(default)]
    pub holders_change_24h: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_staked: Option<f64>,
    #[serde(default)]
    pub stk_supply: Option<f64>,
    #[serde(default)]
    pub stakers_count: Option<f64>,

    #[serde(default)]
    pub chains: Option<Chains>,
    #[serde(default)]
    pub revenue: Option<RevenueMetrics>,
    #[serde(default)]
    pub buyback: Option<BuybackMetrics>,
    #[serde(default)]
    pub price_history: Option<History>,
    #[serde(default)]
    pub tvl_history: Option<History>,
}

impl MetricsSnapshot {
    /// Parse a response body
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Market rank, if the payload carries a non-zero one. Passed through as given.
    pub fn rank(&self) -> Option<f64> {
        self.mcap_rank.filter(|rank| rank.is_finite() && *rank != 0.0)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_parses() {
        let snapshot = MetricsSnapshot::from_json("{}").expect("empty payload should parse");
        assert_eq!(snapshot, MetricsSnapshot::default());
        assert!(snapshot.chains.is_none());
        assert!(snapshot.rank().is_none());
    }

    #[test]
    fn test_nulls_are_absent() {
        let snapshot = MetricsSnapshot::from_json(
            r#"{"token_price": null, "chains": {"sonic": null, "plasma": {"supply": null}},
                "price_history": {"labels": null, "values": [1.0]}}"#,
        )
        .expect("nulls should parse");

        assert!(snapshot.token_price.is_none());
        let chains = snapshot.chains.expect("chains present");
        assert!(chains.sonic.is_none());
        assert_eq!(chains.plasma.as_ref().map(ChainMetrics::supply), Some(0.0));

        let history = snapshot.price_history.expect("history present");
        assert!(history.labels.is_empty());
        assert_eq!(history.values, vec![1.0]);
    }

    #[test]
    fn test_full_payload() {
        let body = serde_json::json!({
            "token_price": 0.0123,
            "price_change_24h": -3.5,
            "mcap_rank": 812,
            "total_supply": 50_000_000,
            "chains": {
                "sonic": {"supply": 30_000_000.0, "staked": 1_000_000, "holders": 1200, "tvl": 250_000},
                "ethereum": {"supply": 5_000_000, "holders": 40}
            },
            "revenue": {"total_30d": 12_500, "history": {"labels": ["d1", "d2"], "values": [10, 20]}},
            "unknown_field": true
        })
        .to_string();

        let snapshot = MetricsSnapshot::from_json(&body).expect("payload should parse");
        assert_eq!(snapshot.rank(), Some(812.0));
        let chains = snapshot.chains.as_ref().expect("chains present");
        assert_eq!(chains.supply_shares(), [30_000_000.0, 0.0, 5_000_000.0]);
        assert_eq!(chains.tvl_by_chain(), [250_000.0, 0.0, 0.0]);

        let revenue = snapshot.revenue.expect("revenue present");
        assert_eq!(revenue.history.map(|h| h.values), Some(vec![10.0, 20.0]));
    }

    #[test]
    fn test_or_fallback() {
        assert_eq!(or_fallback(None, 19.0), 19.0);
        assert_eq!(or_fallback(Some(0.0), 19.0), 19.0);
        assert_eq!(or_fallback(Some(f64::NAN), 19.0), 19.0);
        assert_eq!(or_fallback(Some(-2.0), 19.0), -2.0);
        assert_eq!(or_zero(Some(7.5)), 7.5);
    }

    #[test]
    fn test_chain_labels() {
        assert_eq!(Chain::ALL.map(Chain::label), ["Sonic", "Plasma", "Ethereum"]);
        assert_eq!(Chain::Ethereum.short_label(), "ETH");
        assert_eq!(Chain::Plasma.to_string(), "plasma");
    }
}
