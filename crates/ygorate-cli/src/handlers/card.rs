use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;
use ygorate_client::{CardApi, CardDetail, CardKey};
use ygorate_engine::{resolve_review, Catalog, FsReviewStore, ViewState};
use ygorate_types::CardListItem;

pub fn handle(
    data_dir: &Path,
    api: &CardApi,
    id: u64,
    pack: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;

    let mut view = ViewState::new();
    if let Some(pack) = pack {
        view.set_pack_filter(pack);
    }

    // Unknown id: fall back to the first card of the pool rather than
    // failing, keeping whatever pack filter was asked for.
    let redirected = !view.open_card(&catalog, id);
    let Some(item) = view.current(&catalog).cloned() else {
        println!("No cards in {}", view.selected_pack());
        return Ok(());
    };
    if redirected && format == OutputFormat::Plain {
        eprintln!(
            "Card #{} not found in {}; showing {} instead",
            id,
            view.selected_pack(),
            item.name
        );
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let key = CardKey::new(item.id, &item.name);
    let detail = runtime.block_on(api.fetch(&key));

    let store = FsReviewStore::new(data_dir);
    let review = resolve_review(&item, &store);

    match format {
        OutputFormat::Json => {
            let (detail, error) = match detail {
                Ok(card) => (Some(card), None),
                Err(e) => (None, Some(e.to_string())),
            };
            let out = json!({
                "card": item,
                "detail": detail,
                "review": review,
                "error": error,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Plain => {
            print_card(&item, &review);
            match detail {
                Ok(card) => print_detail(&card),
                Err(e) => eprintln!("{} could not load details for {}: {}", "Warning:".yellow(), key, e),
            }
        }
    }

    Ok(())
}

fn print_card(item: &CardListItem, review: &str) {
    let id = item
        .id
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "#?".to_string());
    println!("{}  {}", item.name.bold(), id.yellow());
    println!("Pack:   {}", item.pack);
    println!("Rating: {}", format!("{:.1}", item.rating).cyan());
    if !review.is_empty() {
        println!();
        println!("{}", review);
    }
}

fn print_detail(card: &CardDetail) {
    println!();
    println!("{} / {}", card.card_type, card.race);
    if let Some(attribute) = &card.attribute {
        println!("Attribute: {}", attribute);
    }
    if let Some(level) = card.level {
        println!("Level: {}", level);
    }
    if let Some(linkval) = card.linkval {
        println!("Link: {}", linkval);
    }
    match (card.atk, card.def) {
        (Some(atk), Some(def)) => println!("ATK/DEF: {}/{}", atk, def),
        (Some(atk), None) => println!("ATK: {}", atk),
        _ => {}
    }
    if let Some(archetype) = &card.archetype {
        println!("Archetype: {}", archetype);
    }
    println!();
    println!("{}", card.desc);
}
