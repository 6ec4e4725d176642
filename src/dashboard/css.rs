//! Dashboard CSS styles
//!
//! Uses CSS custom properties (variables) for theming. Chart colors are set
//! separately in the chart configs.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0f1117;
    --card: #1a1d26;
    --border: #2a2d3a;
    --text: #ffffff;
    --text-dim: #a0a0a0;
    --green: #00ff88;
    --red: #ff4d6a;
    --cyan: #00d4ff;
    --purple: #7b61ff;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1280px; margin: 0 auto; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.refresh-time { font-size: 12px; color: var(--text-dim); }

/* Fetch error notice */
.fetch-error { display: none; }
.fetch-error.visible {
    display: block;
    padding: 8px 14px;
    border-radius: 8px;
    font-size: 13px;
    color: var(--red);
    background: rgba(255, 77, 106, 0.1);
    border: 1px solid rgba(255, 77, 106, 0.4);
}

/* Grid */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 16px;
    margin-bottom: 16px;
}

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 12px;
}

.card-title {
    font-size: 13px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.card-value { font-size: 28px; font-weight: 700; margin: 8px 0; }
.card-sub { font-size: 12px; color: var(--text-dim); }

/* Metrics */
.metrics {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(110px, 1fr));
    gap: 12px;
    margin-top: 12px;
}

.metric { display: flex; flex-direction: column; gap: 4px; }
.chain .metric { flex-direction: row; justify-content: space-between; margin-top: 8px; }
.metric-label { font-size: 12px; color: var(--text-dim); }
.metric-value { font-size: 16px; font-weight: 600; }

/* Signed changes */
.metric-change, .change { font-size: 14px; font-weight: 600; }
.positive { color: var(--green); }
.negative { color: var(--red); }

/* Chains */
.chain.sonic { border-top: 3px solid #1d4ed8; }
.chain.plasma { border-top: 3px solid var(--purple); }
.chain.ethereum { border-top: 3px solid #627eea; }

/* Charts */
.chart-box { position: relative; height: 240px; margin-top: 12px; }

.chart-controls { display: flex; gap: 6px; }

.chart-btn {
    background: transparent;
    color: var(--text-dim);
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 4px 10px;
    font-size: 12px;
    cursor: pointer;
}

.chart-btn.active {
    color: var(--cyan);
    border-color: var(--cyan);
}

@media (max-width: 640px) {
    body { padding: 12px; }
    .card-value { font-size: 22px; }
}
";
