use std::path::Path;

use dslscope_resolve::ScriptTypeSystem;
use tabled::Table;
use tabled::settings::Style;

use crate::resolve::open_universe;
use crate::view::candidate_rows;

pub fn run(universe: &Path, class: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, ts) = open_universe(universe, class)?;
    let members = ts.find_all_members(class);

    if json {
        println!("{}", serde_json::to_string_pretty(&members)?);
    } else if members.is_empty() {
        println!("{} has no members.", class);
    } else {
        println!("{}", Table::new(candidate_rows(&members)).with(Style::psql()));
    }
    Ok(())
}
