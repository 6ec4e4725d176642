//! Write the dashboard page next to the wasm-bindgen output.
//!
//! Usage: `write_page [OUT_DIR] [BUNDLE]`
//! Defaults: `OUT_DIR` = `dist`, `BUNDLE` = `./pkg/trevee_dashboard.js`.

use std::path::PathBuf;

use trevee_dashboard::dashboard::page_html;

const DEFAULT_OUT_DIR: &str = "dist";
const DEFAULT_BUNDLE: &str = "./pkg/trevee_dashboard.js";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUT_DIR.into()));
    let bundle = args.next().unwrap_or_else(|| DEFAULT_BUNDLE.into());

    std::fs::create_dir_all(&out_dir)?;
    let path = out_dir.join("index.html");
    std::fs::write(&path, page_html(&bundle))?;

    println!("Wrote {} (bundle: {bundle})", path.display());
    Ok(())
}
