use std::fs;

use anyhow::Context;
use slides_layout::{markdown::document_to_markdown, DeckAssembler, DeckConfig, Presentation};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "presentation.json".to_string());
    let output = args.next().unwrap_or_else(|| "deck.json".to_string());

    log::info!("Loading presentation from {}", input);
    let json = fs::read_to_string(&input).with_context(|| format!("reading {}", input))?;
    let presentation = Presentation::from_json(&json)?;

    let config = DeckConfig::from_env().context("loading deck configuration")?;
    let assembler = DeckAssembler::builder().config(config).build()?;
    let document = assembler.convert_presentation(&presentation)?;

    for page in &document.slides {
        log::info!("Slide {}: {} primitives", page.index + 1, page.primitives.len());
    }
    fs::write(&output, document.to_json()?).with_context(|| format!("writing {}", output))?;
    log::info!("Document written to {}", output);

    println!("{}", document_to_markdown(&document)?);
    Ok(())
}
