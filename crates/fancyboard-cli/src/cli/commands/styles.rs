//! Styles command handler.

use comfy_table::{ContentArrangement, Table};
use fancyboard_core::{StyleName, stylize};

const PREVIEW: &str = "Hello World";

fn styles_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Style", "Preview", "Caps"]);
    for style in StyleName::ALL {
        table.add_row(vec![
            style.as_str().to_string(),
            stylize(style, PREVIEW, false),
            stylize(style, PREVIEW, true),
        ]);
    }
    table
}

pub fn run() {
    println!("{}", styles_table());
}
