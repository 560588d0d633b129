//! Table formatting for CLI output

use coffee_env::EnvironmentConfig;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render the configuration as a key/value table, keys in declaration order
pub fn config_table(config: &EnvironmentConfig) -> String {
    let rows: Vec<ConfigRow> = coffee_env::KEYS
        .iter()
        .filter_map(|key| {
            config.get(key).ok().map(|value| ConfigRow {
                key: key.to_string(),
                value,
            })
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Display the configuration in table format
pub fn display_config(config: &EnvironmentConfig) {
    println!("{}", config_table(config));
}
