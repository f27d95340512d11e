// src/main.rs

use color_eyre::eyre::{bail, Result};
use serde_json::to_string_pretty;

use cybershield::logging::initialize_logging;
use cybershield::{
    analyze_password, analyze_phishing_url, detect_sql_injection, estimate_crack_time,
};

const USAGE: &str = "usage: cybershield <password|crack|url|sql> <input>";

/// Thin presentation shim over the engine: picks one analyzer, feeds it the
/// raw argument string, and prints the structured result as JSON. All real
/// work happens in the library.
fn main() -> Result<()> {
    color_eyre::install()?;
    initialize_logging()?;

    let mut args = std::env::args().skip(1);
    let (Some(command), Some(input)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };

    let output = match command.as_str() {
        "password" => to_string_pretty(&analyze_password(&input))?,
        "crack" => to_string_pretty(&estimate_crack_time(&input))?,
        "url" => to_string_pretty(&analyze_phishing_url(&input))?,
        "sql" => to_string_pretty(&detect_sql_injection(&input))?,
        other => bail!("unknown command '{other}'\n{USAGE}"),
    };

    println!("{output}");
    Ok(())
}
