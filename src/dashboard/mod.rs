//! Dashboard page template
//!
//! The markup the wasm bundle renders into. Separated into HTML and CSS
//! submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: page structure, every element id the renderer writes
//! - `css.rs`: styling with CSS custom properties
//!
//! Chart.js is pulled from a CDN as a classic script so `window.Chart`
//! exists before the module script initialises the bundle.

mod css;
mod html;

/// Chart.js build the bundle is written against
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Generate the complete dashboard page.
///
/// `bundle` is the path of the wasm-bindgen JS glue, e.g. `./pkg/trevee_dashboard.js`.
pub fn page_html(bundle: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>TREVEE Metrics Dashboard</title>
    <style>
{css}
    </style>
</head>
<body>
{html}
    <script src="{chart_js}"></script>
    <script type="module">
        import init from '{bundle}';
        init();
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::TEMPLATE,
        chart_js = CHART_JS_URL,
    )
}
