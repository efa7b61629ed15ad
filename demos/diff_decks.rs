use std::fs;

use anyhow::Context;
use slides_layout::{convert_presentation, ComparerBuilder, Presentation};

fn load(path: &str) -> anyhow::Result<Presentation> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    Ok(Presentation::from_json(&json)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let base_path = args.next().unwrap_or_else(|| "base_presentation.json".to_string());
    let changed_path = args.next().unwrap_or_else(|| "changed_presentation.json".to_string());

    let base = convert_presentation(&load(&base_path)?)?;
    let changed = convert_presentation(&load(&changed_path)?)?;

    let result = ComparerBuilder::new().set_base(base).build()?.compare(&changed)?;
    println!("{}", result.get_readable_diff()?);
    if !result.is_identical() {
        println!("{}", result.get_text_diff()?);
    }
    Ok(())
}
