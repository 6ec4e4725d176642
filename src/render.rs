//! Dashboard renderer
//!
//! Writes one [`MetricsSnapshot`] into the page. Rendering is synchronous and
//! total: missing fields render as their defaults, chart failures are logged
//! and skipped. The same snapshot and clock always produce the same page.

use chrono::NaiveTime;

use crate::chart::{ChartHandle, ChartKind, Charts};
use crate::config::Config;
use crate::format::{
    format_change, format_clock, format_currency, format_number, format_percent, format_price,
    format_signed_count, format_token_amount, sign_class, staking_ratio,
};
use crate::surface::Surface;
use crate::types::{
    BuybackMetrics, Chain, History, MetricsSnapshot, RevenueMetrics, or_fallback, or_zero,
};

/// Element ids the page must provide
pub mod ids {
    pub const TOKEN_PRICE: &str = "token-price";
    pub const PRICE_CHANGE: &str = "price-change";
    pub const MARKET_CAP: &str = "market-cap";
    pub const MCAP_RANK: &str = "mcap-rank";
    pub const TOTAL_TVL: &str = "total-tvl";
    pub const TVL_BREAKDOWN: &str = "tvl-breakdown";
    pub const TOTAL_HOLDERS: &str = "total-holders";
    pub const HOLDERS_CHANGE: &str = "holders-change";
    pub const TOTAL_SUPPLY: &str = "total-supply";
    pub const CIRCULATING_SUPPLY: &str = "circulating-supply";
    pub const STAKED_AMOUNT: &str = "staked-amount";

    pub const SONIC_SUPPLY: &str = "sonic-supply";
    pub const SONIC_STAKED: &str = "sonic-staked";
    pub const SONIC_HOLDERS: &str = "sonic-holders";
    pub const PLASMA_SUPPLY: &str = "plasma-supply";
    pub const PLASMA_HOLDERS: &str = "plasma-holders";
    pub const ETH_SUPPLY: &str = "eth-supply";
    pub const ETH_HOLDERS: &str = "eth-holders";

    pub const STAKING_TOTAL: &str = "staking-total";
    pub const STAKING_RATIO: &str = "staking-ratio";
    pub const STK_SUPPLY: &str = "stk-supply";
    pub const STAKERS_COUNT: &str = "stakers-count";

    pub const REVENUE_30D: &str = "revenue-30d";
    pub const REVENUE_CHANGE: &str = "revenue-change";
    pub const REVENUE_TODAY: &str = "revenue-today";
    pub const REVENUE_YESTERDAY: &str = "revenue-yesterday";
    pub const BUYBACK_30D: &str = "buyback-30d";
    pub const BUYBACK_CHANGE: &str = "buyback-change";
    pub const BUYBACK_AMOUNT: &str = "buyback-amount";
    pub const BUYBACK_AVG_PRICE: &str = "buyback-avg-price";

    pub const LAST_UPDATE: &str = "last-update";

    /// Optional element for the fetch-error notice
    pub const FETCH_ERROR: &str = "fetch-error";

    /// Fields written on every render, whatever the snapshot holds
    pub const ALWAYS_WRITTEN: [&str; 24] = [
        TOKEN_PRICE,
        PRICE_CHANGE,
        MARKET_CAP,
        MCAP_RANK,
        TOTAL_TVL,
        TVL_BREAKDOWN,
        TOTAL_HOLDERS,
        HOLDERS_CHANGE,
        TOTAL_SUPPLY,
        CIRCULATING_SUPPLY,
        STAKED_AMOUNT,
        STAKING_TOTAL,
        STAKING_RATIO,
        STK_SUPPLY,
        STAKERS_COUNT,
        REVENUE_30D,
        REVENUE_CHANGE,
        REVENUE_TODAY,
        REVENUE_YESTERDAY,
        BUYBACK_30D,
        BUYBACK_CHANGE,
        BUYBACK_AMOUNT,
        BUYBACK_AVG_PRICE,
        LAST_UPDATE,
    ];

    /// Per-chain fields, written only when that chain is in the snapshot
    pub const CHAIN_PANEL: [&str; 7] = [
        SONIC_SUPPLY,
        SONIC_STAKED,
        SONIC_HOLDERS,
        PLASMA_SUPPLY,
        PLASMA_HOLDERS,
        ETH_SUPPLY,
        ETH_HOLDERS,
    ];
}

/// Renders snapshots with the configured token and fallbacks
#[derive(Debug, Clone)]
pub struct Renderer {
    token_symbol: String,
    default_total_supply: f64,
    fallback_plasma_holders: f64,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            token_symbol: config.token_symbol.clone(),
            default_total_supply: config.default_total_supply,
            fallback_plasma_holders: config.fallback_plasma_holders,
        }
    }

    /// Write every panel and chart for `snapshot`, stamped with `now`.
    pub fn render<S, H>(
        &self,
        snapshot: &MetricsSnapshot,
        surface: &mut S,
        charts: &mut Charts<H>,
        now: NaiveTime,
    ) where
        S: Surface,
        H: ChartHandle,
    {
        self.render_hero(snapshot, surface);
        self.render_chains(snapshot, surface);
        self.render_staking(snapshot, surface);
        self.render_revenue(snapshot, surface);
        Self::render_charts(snapshot, charts);

        surface.set_text(ids::LAST_UPDATE, &format_clock(now));
    }

    fn total_supply(&self, snapshot: &MetricsSnapshot) -> f64 {
        or_fallback(snapshot.total_supply, self.default_total_supply)
    }

    fn render_hero<S: Surface>(&self, snapshot: &MetricsSnapshot, surface: &mut S) {
        surface.set_text(ids::TOKEN_PRICE, &format_price(or_zero(snapshot.token_price)));

        let change = or_zero(snapshot.price_change_24h);
        surface.set_text(ids::PRICE_CHANGE, &format_change(change, 2));
        surface.set_class(ids::PRICE_CHANGE, &format!("metric-change {}", sign_class(change)));

        surface.set_text(ids::MARKET_CAP, &format_currency(or_zero(snapshot.market_cap)));
        let rank = snapshot
            .rank()
            .map_or_else(|| "-".to_string(), |rank| format!("Rank #{rank}"));
        surface.set_text(ids::MCAP_RANK, &rank);

        surface.set_text(ids::TOTAL_TVL, &format_currency(or_zero(snapshot.total_tvl)));
        let tvl = snapshot
            .chains
            .as_ref()
            .map_or([0.0; 3], |chains| chains.tvl_by_chain());
        let breakdown = Chain::ALL
            .iter()
            .zip(tvl)
            .map(|(chain, value)| format!("{}: {}", chain.short_label(), format_currency(value)))
            .collect::<Vec<_>>()
            .join(" | ");
        surface.set_text(ids::TVL_BREAKDOWN, &breakdown);

        surface.set_text(ids::TOTAL_HOLDERS, &format_number(or_zero(snapshot.total_holders)));
        surface.set_text(
            ids::HOLDERS_CHANGE,
            &format!("{} today", format_signed_count(or_zero(snapshot.holders_change_24h))),
        );

        let symbol = &self.token_symbol;
        surface.set_text(
            ids::TOTAL_SUPPLY,
            &format_token_amount(self.total_supply(snapshot), symbol),
        );
        surface.set_text(
            ids::CIRCULATING_SUPPLY,
            &format_token_amount(or_zero(snapshot.circulating_supply), symbol),
        );
        surface.set_text(
            ids::STAKED_AMOUNT,
            &format_token_amount(or_zero(snapshot.total_staked), symbol),
        );
    }

    /// Chains missing from the snapshot keep whatever the page already shows.
    fn render_chains<S: Surface>(&self, snapshot: &MetricsSnapshot, surface: &mut S) {
        let Some(chains) = snapshot.chains.as_ref() else {
            return;
        };

        if let Some(sonic) = chains.get(Chain::Sonic) {
            surface.set_text(ids::SONIC_SUPPLY, &format_number(sonic.supply()));
            surface.set_text(ids::SONIC_STAKED, &format_number(sonic.staked()));
            surface.set_text(ids::SONIC_HOLDERS, &format_number(sonic.holders()));
        }

        if let Some(plasma) = chains.get(Chain::Plasma) {
            surface.set_text(ids::PLASMA_SUPPLY, &format_number(plasma.supply()));
            let holders = or_fallback(plasma.holders, self.fallback_plasma_holders);
            surface.set_text(ids::PLASMA_HOLDERS, &holders.to_string());
        }

        if let Some(ethereum) = chains.get(Chain::Ethereum) {
            surface.set_text(ids::ETH_SUPPLY, &format_number(ethereum.supply()));
            surface.set_text(ids::ETH_HOLDERS, &format_number(ethereum.holders()));
        }
    }

    fn render_staking<S: Surface>(&self, snapshot: &MetricsSnapshot, surface: &mut S) {
        let staked = or_zero(snapshot.total_staked);
        let ratio = staking_ratio(staked, self.total_supply(snapshot));

        surface.set_text(ids::STAKING_TOTAL, &format_token_amount(staked, &self.token_symbol));
        surface.set_text(ids::STAKING_RATIO, &format_percent(ratio));
        surface.set_text(ids::STK_SUPPLY, &format_number(or_zero(snapshot.stk_supply)));
        surface.set_text(ids::STAKERS_COUNT, &format_number(or_zero(snapshot.stakers_count)));
    }

    fn render_revenue<S: Surface>(&self, snapshot: &MetricsSnapshot, surface: &mut S) {
        let no_revenue = RevenueMetrics::default();
        let no_buyback = BuybackMetrics::default();
        let revenue = snapshot.revenue.as_ref().unwrap_or(&no_revenue);
        let buyback = snapshot.buyback.as_ref().unwrap_or(&no_buyback);

        surface.set_text(ids::REVENUE_30D, &format_currency(or_zero(revenue.total_30d)));
        let change = or_zero(revenue.change_30d);
        surface.set_text(ids::REVENUE_CHANGE, &format_change(change, 1));
        surface.set_class(ids::REVENUE_CHANGE, &format!("change {}", sign_class(change)));
        surface.set_text(ids::REVENUE_TODAY, &format_currency(or_zero(revenue.today)));
        surface.set_text(ids::REVENUE_YESTERDAY, &format_currency(or_zero(revenue.yesterday)));

        surface.set_text(ids::BUYBACK_30D, &format_currency(or_zero(buyback.total_30d)));
        let change = or_zero(buyback.change_30d);
        surface.set_text(ids::BUYBACK_CHANGE, &format_change(change, 1));
        surface.set_class(ids::BUYBACK_CHANGE, &format!("change {}", sign_class(change)));
        surface.set_text(
            ids::BUYBACK_AMOUNT,
            &format_token_amount(or_zero(buyback.tokens_bought), &self.token_symbol),
        );
        surface.set_text(ids::BUYBACK_AVG_PRICE, &format_currency(or_zero(buyback.avg_price)));
    }

    /// Charts whose history is absent keep their previous series.
    fn render_charts<H: ChartHandle>(snapshot: &MetricsSnapshot, charts: &mut Charts<H>) {
        let series: [(ChartKind, Option<&History>); 4] = [
            (ChartKind::Price, snapshot.price_history.as_ref()),
            (ChartKind::Tvl, snapshot.tvl_history.as_ref()),
            (
                ChartKind::Revenue,
                snapshot.revenue.as_ref().and_then(|r| r.history.as_ref()),
            ),
            (
                ChartKind::Buyback,
                snapshot.buyback.as_ref().and_then(|b| b.history.as_ref()),
            ),
        ];

        for (kind, history) in series {
            let Some(history) = history else { continue };
            if let Err(e) = charts.update_series(kind, &history.labels, &history.values) {
                log::warn!("Failed to update {kind} chart: {e}");
            }
        }

        if let Some(chains) = snapshot.chains.as_ref() {
            if let Err(e) = charts.update_shares(chains.supply_shares()) {
                log::warn!("Failed to update {} chart: {e}", ChartKind::ChainShare);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::MemoryChart;
    use crate::surface::MemorySurface;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).expect("valid time")
    }

    fn render(snapshot: &MetricsSnapshot) -> (MemorySurface, Charts<MemoryChart>) {
        let mut surface = MemorySurface::new();
        let mut charts = Charts::in_memory();
        Renderer::new(&Config::default()).render(snapshot, &mut surface, &mut charts, noon());
        (surface, charts)
    }

    fn sample() -> MetricsSnapshot {
        MetricsSnapshot::from_json(
            &serde_json::json!({
                "token_price": 0.0421,
                "price_change_24h": -2.345,
                "market_cap": 2_105_000,
                "mcap_rank": 1532,
                "total_tvl": 1_250_000,
                "total_holders": 1843,
                "holders_change_24h": 12,
                "total_supply": 50_000_000,
                "circulating_supply": 21_000_000,
                "total_staked": 12_500_000,
                "stk_supply": 12_400_000,
                "stakers_count": 311,
                "chains": {
                    "sonic": {"supply": 40_000_000, "staked": 12_500_000, "holders": 1700, "tvl": 1_000_000},
                    "plasma": {"supply": 2_000_000, "tvl": 50_000},
                    "ethereum": {"supply": 8_000_000, "holders": 124, "tvl": 200_000}
                },
                "revenue": {"total_30d": 48_200, "change_30d": 12.34, "today": 1_800, "yesterday": 950,
                            "history": {"labels": ["d1", "d2", "d3"], "values": [900, 950, 1800]}},
                "buyback": {"total_30d": 24_100, "change_30d": -4.0, "tokens_bought": 580_000, "avg_price": 0.0415},
                "price_history": {"labels": ["t1", "t2"], "values": [1.1, 1.2]}
            })
            .to_string(),
        )
        .expect("sample payload should parse")
    }

    #[test]
    fn test_empty_snapshot_renders_defaults() {
        let (surface, charts) = render(&MetricsSnapshot::default());

        for id in ids::ALWAYS_WRITTEN {
            assert!(surface.text(id).is_some(), "{id} should be written");
        }
        assert_eq!(surface.text(ids::TOKEN_PRICE), Some("$0.0000"));
        assert_eq!(surface.text(ids::PRICE_CHANGE), Some("+0.00%"));
        assert_eq!(surface.class(ids::PRICE_CHANGE), Some("metric-change positive"));
        assert_eq!(surface.text(ids::MARKET_CAP), Some("$0.00"));
        assert_eq!(surface.text(ids::MCAP_RANK), Some("-"));
        assert_eq!(
            surface.text(ids::TVL_BREAKDOWN),
            Some("Sonic: $0.00 | Plasma: $0.00 | ETH: $0.00")
        );
        assert_eq!(surface.text(ids::HOLDERS_CHANGE), Some("+0 today"));
        assert_eq!(surface.text(ids::TOTAL_SUPPLY), Some("50.00M TREVEE"));
        assert_eq!(surface.text(ids::STAKING_RATIO), Some("0.00%"));
        assert_eq!(surface.text(ids::BUYBACK_AMOUNT), Some("0 TREVEE"));
        assert_eq!(surface.text(ids::LAST_UPDATE), Some("12:00:00"));

        for id in ids::CHAIN_PANEL {
            assert!(surface.text(id).is_none(), "{id} should be untouched");
        }
        assert_eq!(charts.price, MemoryChart::default());
        assert_eq!(charts.chain_share.redraws, 0);
    }

    #[test]
    fn test_full_snapshot() {
        let (surface, charts) = render(&sample());

        assert_eq!(surface.text(ids::TOKEN_PRICE), Some("$0.0421"));
        assert_eq!(surface.text(ids::PRICE_CHANGE), Some("-2.35%"));
        assert_eq!(surface.class(ids::PRICE_CHANGE), Some("metric-change negative"));
        assert_eq!(surface.text(ids::MARKET_CAP), Some("$2.10M"));
        assert_eq!(surface.text(ids::MCAP_RANK), Some("Rank #1532"));
        assert_eq!(
            surface.text(ids::TVL_BREAKDOWN),
            Some("Sonic: $1.00M | Plasma: $50.00K | ETH: $200.00K")
        );
        assert_eq!(surface.text(ids::TOTAL_HOLDERS), Some("1.84K"));
        assert_eq!(surface.text(ids::HOLDERS_CHANGE), Some("+12 today"));
        assert_eq!(surface.text(ids::STAKING_RATIO), Some("25.00%"));
        assert_eq!(surface.text(ids::STAKERS_COUNT), Some("311"));

        assert_eq!(surface.text(ids::SONIC_SUPPLY), Some("40.00M"));
        assert_eq!(surface.text(ids::SONIC_HOLDERS), Some("1.70K"));
        assert_eq!(surface.text(ids::PLASMA_HOLDERS), Some("19"));
        assert_eq!(surface.text(ids::ETH_HOLDERS), Some("124"));

        assert_eq!(surface.text(ids::REVENUE_CHANGE), Some("+12.3%"));
        assert_eq!(surface.class(ids::REVENUE_CHANGE), Some("change positive"));
        assert_eq!(surface.text(ids::BUYBACK_CHANGE), Some("-4.0%"));
        assert_eq!(surface.class(ids::BUYBACK_CHANGE), Some("change negative"));
        assert_eq!(surface.text(ids::BUYBACK_AMOUNT), Some("580.00K TREVEE"));

        assert_eq!(charts.price.labels, vec!["t1", "t2"]);
        assert_eq!(charts.price.values, vec![1.1, 1.2]);
        assert_eq!(charts.revenue.values, vec![900.0, 950.0, 1800.0]);
        assert_eq!(charts.chain_share.values, vec![40_000_000.0, 2_000_000.0, 8_000_000.0]);
        assert_eq!(charts.tvl.redraws, 0);
        assert_eq!(charts.buyback.redraws, 0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let snapshot = sample();
        let renderer = Renderer::new(&Config::default());

        let mut once = MemorySurface::new();
        let mut once_charts = Charts::in_memory();
        renderer.render(&snapshot, &mut once, &mut once_charts, noon());

        let mut twice = MemorySurface::new();
        let mut twice_charts = Charts::in_memory();
        renderer.render(&snapshot, &mut twice, &mut twice_charts, noon());
        renderer.render(&snapshot, &mut twice, &mut twice_charts, noon());

        assert_eq!(once, twice);
        for kind in ChartKind::ALL {
            assert_eq!(once_charts.get(kind).labels, twice_charts.get(kind).labels);
            assert_eq!(once_charts.get(kind).values, twice_charts.get(kind).values);
        }
    }

    #[test]
    fn test_missing_chain_keeps_previous_panel() {
        let renderer = Renderer::new(&Config::default());
        let mut surface = MemorySurface::new();
        let mut charts = Charts::in_memory();
        renderer.render(&sample(), &mut surface, &mut charts, noon());
        assert_eq!(surface.text(ids::PLASMA_SUPPLY), Some("2.00M"));

        let without_plasma = MetricsSnapshot::from_json(
            r#"{"chains": {"sonic": {"supply": 41000000}}}"#,
        )
        .expect("payload should parse");
        renderer.render(&without_plasma, &mut surface, &mut charts, noon());

        assert_eq!(surface.text(ids::SONIC_SUPPLY), Some("41.00M"));
        assert_eq!(surface.text(ids::PLASMA_SUPPLY), Some("2.00M"));
        assert_eq!(surface.text(ids::PLASMA_HOLDERS), Some("19"));
        assert_eq!(surface.text(ids::ETH_SUPPLY), Some("8.00M"));
        assert_eq!(charts.chain_share.values, vec![41_000_000.0, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_history_keeps_previous_chart() {
        let renderer = Renderer::new(&Config::default());
        let mut surface = MemorySurface::new();
        let mut charts = Charts::in_memory();
        renderer.render(&sample(), &mut surface, &mut charts, noon());
        renderer.render(&MetricsSnapshot::default(), &mut surface, &mut charts, noon());

        assert_eq!(charts.price.labels, vec!["t1", "t2"]);
        assert_eq!(charts.price.redraws, 1);
        assert_eq!(charts.revenue.values.len(), 3);
    }

    #[test]
    fn test_mismatched_history_passes_through() {
        let snapshot = MetricsSnapshot::from_json(
            r#"{"tvl_history": {"labels": ["a", "b", "c"], "values": [1]}}"#,
        )
        .expect("payload should parse");
        let (_, charts) = render(&snapshot);
        assert_eq!(charts.tvl.labels.len(), 3);
        assert_eq!(charts.tvl.values, vec![1.0]);
    }

    #[test]
    fn test_plasma_holders_and_rank_written_as_given() {
        let snapshot = MetricsSnapshot::from_json(
            r#"{"mcap_rank": 0.5, "chains": {"plasma": {"supply": 1000, "holders": 1500}}}"#,
        )
        .expect("payload should parse");
        let (surface, _) = render(&snapshot);

        assert_eq!(surface.text(ids::PLASMA_HOLDERS), Some("1500"));
        assert_eq!(surface.text(ids::MCAP_RANK), Some("Rank #0.5"));

        let snapshot = MetricsSnapshot::from_json(r#"{"mcap_rank": 0, "chains": {"plasma": {"holders": 0}}}"#)
            .expect("payload should parse");
        let (surface, _) = render(&snapshot);

        assert_eq!(surface.text(ids::PLASMA_HOLDERS), Some("19"));
        assert_eq!(surface.text(ids::MCAP_RANK), Some("-"));
    }

    #[test]
    fn test_custom_token_symbol() {
        let config = Config {
            token_symbol: "stkTREVEE".into(),
            ..Config::default()
        };
        let mut surface = MemorySurface::new();
        let mut charts = Charts::in_memory();
        Renderer::new(&config).render(&MetricsSnapshot::default(), &mut surface, &mut charts, noon());
        assert_eq!(surface.text(ids::STAKED_AMOUNT), Some("0 stkTREVEE"));
    }
}
