use std::fs;

use toml::{Table, Value};

const CONFIG_PATH: &str = "src/default_config.toml";

fn main() {
    println!("cargo:rerun-if-changed={}", CONFIG_PATH);

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");

    let table = match content.parse::<Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // Keys and values, not just syntax.
    if let Err(msg) = check_schema(&table) {
        panic!("Invalid default_config.toml: {}", msg);
    }
}

fn check_schema(table: &Table) -> Result<(), String> {
    for (section, value) in table {
        let Value::Table(keys) = value else {
            return Err(format!("`{section}` must be a table"));
        };

        for (key, value) in keys {
            let valid = match (section.as_str(), key.as_str()) {
                ("blocks", "blank_lines") => one_of(value, &["paragraph", "skip"]),
                ("blocks", "indent_width") => value.as_integer().is_some_and(|n| n >= 0),
                ("inline", "dialect") => one_of(value, &["strong", "extended"]),
                ("output", "pretty") => value.is_bool(),
                _ => return Err(format!("unknown key `{section}.{key}`")),
            };
            if !valid {
                return Err(format!("unsupported value for `{section}.{key}`: {value}"));
            }
        }
    }
    Ok(())
}

fn one_of(value: &Value, allowed: &[&str]) -> bool {
    value.as_str().is_some_and(|s| allowed.contains(&s))
}
