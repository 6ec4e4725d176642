//! Dashboard HTML template
//!
//! Contains the main page structure including:
//! - Header with last-update time and fetch-error notice
//! - Hero metric cards (price, market cap, TVL, holders)
//! - Supply, per-chain and staking panels
//! - Price / TVL / chain-share charts with period buttons
//! - Revenue and buyback panels with bar charts

pub const TEMPLATE: &str = r#"
    <div class="container">
        <header>
            <div>
                <h1>TREVEE Metrics</h1>
                <span class="refresh-time">Updated: <span id="last-update">--:--:--</span></span>
            </div>
            <div class="fetch-error" id="fetch-error"></div>
        </header>

        <section class="grid hero">
            <div class="card">
                <div class="card-title">Token Price</div>
                <div class="card-value" id="token-price">$--</div>
                <div class="metric-change" id="price-change">--%</div>
            </div>
            <div class="card">
                <div class="card-title">Market Cap</div>
                <div class="card-value" id="market-cap">$--</div>
                <div class="card-sub" id="mcap-rank">-</div>
            </div>
            <div class="card">
                <div class="card-title">Total Value Locked</div>
                <div class="card-value" id="total-tvl">$--</div>
                <div class="card-sub" id="tvl-breakdown">--</div>
            </div>
            <div class="card">
                <div class="card-title">Holders</div>
                <div class="card-value" id="total-holders">--</div>
                <div class="card-sub" id="holders-change">--</div>
            </div>
        </section>

        <section class="grid">
            <div class="card">
                <div class="card-title">Supply</div>
                <div class="metrics">
                    <div class="metric">
                        <div class="metric-label">Total</div>
                        <div class="metric-value" id="total-supply">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Circulating</div>
                        <div class="metric-value" id="circulating-supply">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Staked</div>
                        <div class="metric-value" id="staked-amount">--</div>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card-title">Staking</div>
                <div class="metrics">
                    <div class="metric">
                        <div class="metric-label">Total Staked</div>
                        <div class="metric-value" id="staking-total">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Staking Ratio</div>
                        <div class="metric-value" id="staking-ratio">--%</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">stkTREVEE Supply</div>
                        <div class="metric-value" id="stk-supply">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Stakers</div>
                        <div class="metric-value" id="stakers-count">--</div>
                    </div>
                </div>
            </div>
        </section>

        <section class="grid chains">
            <div class="card chain sonic">
                <div class="card-title">Sonic</div>
                <div class="metric"><span class="metric-label">Supply</span><span class="metric-value" id="sonic-supply">--</span></div>
                <div class="metric"><span class="metric-label">Staked</span><span class="metric-value" id="sonic-staked">--</span></div>
                <div class="metric"><span class="metric-label">Holders</span><span class="metric-value" id="sonic-holders">--</span></div>
            </div>
            <div class="card chain plasma">
                <div class="card-title">Plasma</div>
                <div class="metric"><span class="metric-label">Supply</span><span class="metric-value" id="plasma-supply">--</span></div>
                <div class="metric"><span class="metric-label">Holders</span><span class="metric-value" id="plasma-holders">--</span></div>
            </div>
            <div class="card chain ethereum">
                <div class="card-title">Ethereum</div>
                <div class="metric"><span class="metric-label">Supply</span><span class="metric-value" id="eth-supply">--</span></div>
                <div class="metric"><span class="metric-label">Holders</span><span class="metric-value" id="eth-holders">--</span></div>
            </div>
        </section>

        <section class="grid charts">
            <div class="card chart-card">
                <div class="card-header">
                    <span class="card-title">Price</span>
                    <div class="chart-controls">
                        <button class="chart-btn active" data-period="24h">24H</button>
                        <button class="chart-btn" data-period="7d">7D</button>
                        <button class="chart-btn" data-period="30d">30D</button>
                    </div>
                </div>
                <div class="chart-box"><canvas id="priceChart"></canvas></div>
            </div>
            <div class="card chart-card">
                <div class="card-header">
                    <span class="card-title">TVL</span>
                    <div class="chart-controls">
                        <button class="chart-btn active" data-period="7d">7D</button>
                        <button class="chart-btn" data-period="30d">30D</button>
                        <button class="chart-btn" data-period="90d">90D</button>
                    </div>
                </div>
                <div class="chart-box"><canvas id="tvlChart"></canvas></div>
            </div>
            <div class="card chart-card">
                <div class="card-header">
                    <span class="card-title">Supply by Chain</span>
                </div>
                <div class="chart-box"><canvas id="chainChart"></canvas></div>
            </div>
        </section>

        <section class="grid charts">
            <div class="card chart-card">
                <div class="card-title">Revenue (30d)</div>
                <div class="card-value" id="revenue-30d">$--</div>
                <div class="change" id="revenue-change">--%</div>
                <div class="metrics">
                    <div class="metric">
                        <div class="metric-label">Today</div>
                        <div class="metric-value" id="revenue-today">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Yesterday</div>
                        <div class="metric-value" id="revenue-yesterday">--</div>
                    </div>
                </div>
                <div class="chart-box"><canvas id="revenueChart"></canvas></div>
            </div>
            <div class="card chart-card">
                <div class="card-title">Buybacks (30d)</div>
                <div class="card-value" id="buyback-30d">$--</div>
                <div class="change" id="buyback-change">--%</div>
                <div class="metrics">
                    <div class="metric">
                        <div class="metric-label">Tokens Bought</div>
                        <div class="metric-value" id="buyback-amount">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Avg Price</div>
                        <div class="metric-value" id="buyback-avg-price">--</div>
                    </div>
                </div>
                <div class="chart-box"><canvas id="buybackChart"></canvas></div>
            </div>
        </section>
    </div>
"#;
