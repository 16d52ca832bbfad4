use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    if let Err(e) = bundle_css() {
        panic!("CSS bundling failed: {e}");
    }
}

/// Resolve `@import`s from the entry sheet, minify, and write the bundle
/// that `asset!("/assets/dist/bundle.css")` picks up.
fn bundle_css() -> Result<(), String> {
    fs::create_dir_all(OUT_DIR).map_err(|e| format!("create {OUT_DIR}: {e}"))?;

    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut sheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("bundle {ENTRY}: {e}"))?;

    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {e}"))?;

    let css = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("print: {e}"))?;

    fs::write(OUT_FILE, css.code).map_err(|e| format!("write {OUT_FILE}: {e}"))?;
    Ok(())
}
