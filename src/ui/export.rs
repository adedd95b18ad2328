//! PDF export is delegated to the webview's native print dialog.

use dioxus::prelude::*;
use tracing::info;

pub const PRINT_SCRIPT: &str = "window.print();";

pub fn print_page() {
    info!("opening print dialog");
    let _ = document::eval(PRINT_SCRIPT);
}
