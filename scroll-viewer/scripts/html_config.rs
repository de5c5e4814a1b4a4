//! Trunk post-build hook: make the staged page load its bundle relative to
//! wherever it is served from.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

// Must match `html_output` in Trunk.toml.
const STAGED_HTML: &str = "scroll-viewer.html";

const BUNDLE_FILES: [&str; 2] = ["scroll-viewer.js", "scroll-viewer_bg.wasm"];

fn main() -> Result<(), Box<dyn Error>> {
    let staging_dir = env::var("TRUNK_STAGING_DIR")?;
    let staged_html_path = PathBuf::from(staging_dir).join(STAGED_HTML);

    let mut html = fs::read_to_string(&staged_html_path)?;
    for file in BUNDLE_FILES {
        html = html.replace(&format!("/{file}"), &format!("./{file}"));
    }

    fs::write(&staged_html_path, html)?;
    Ok(())
}
