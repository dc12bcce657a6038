//! Header search box.

use anyhow::{bail, Result};
use serde::Serialize;
use storefront_commerce::search::{SuggestionBox, SuggestionKey};

use super::SuggestArgs;
use crate::context::Context;

#[derive(Debug, Serialize, PartialEq)]
struct SuggestOutcome {
    term: String,
    suggestions: Vec<String>,
    selected: Option<usize>,
    chosen: Option<String>,
}

fn parse_keys(keys: &[String]) -> Result<Vec<SuggestionKey>> {
    keys.iter()
        .map(|k| match SuggestionKey::parse(k.trim()) {
            Some(key) => Ok(key),
            None => bail!("Unknown key '{}' (expected down, up or enter)", k),
        })
        .collect()
}

fn drive(candidates: &[String], term: &str, keys: &[SuggestionKey]) -> SuggestOutcome {
    let mut search = SuggestionBox::new(candidates.iter().cloned());
    search.set_term(term);

    let mut chosen = None;
    for key in keys {
        if let Some(value) = search.handle_key(*key) {
            chosen = Some(value);
        }
    }

    SuggestOutcome {
        term: search.term().to_string(),
        suggestions: search.suggestions().to_vec(),
        selected: search.selected(),
        chosen,
    }
}

/// Run the suggest command.
pub fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let keys = parse_keys(&args.keys)?;
    let outcome = drive(&ctx.config.search.suggestions, &args.term, &keys);

    if ctx.output.is_json() {
        ctx.output.json(&outcome);
        return Ok(());
    }

    if let Some(chosen) = &outcome.chosen {
        ctx.output.success(&format!("Search box now reads \"{}\"", chosen));
        return Ok(());
    }

    if outcome.suggestions.is_empty() {
        ctx.output.info(&format!("No suggestions for \"{}\"", outcome.term));
        return Ok(());
    }

    ctx.output.header("Suggestions");
    for (i, suggestion) in outcome.suggestions.iter().enumerate() {
        if outcome.selected == Some(i) {
            ctx.output.list_item(&format!("{} ◀", suggestion));
        } else {
            ctx.output.list_item(suggestion);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        ["Home", "Shop", "Wallets", "Offers", "About Us"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_enter_picks_highlighted_suggestion() {
        let keys = parse_keys(&["down".to_string(), "Enter".to_string()]).unwrap();
        let outcome = drive(&candidates(), "o", &keys);
        assert_eq!(outcome.chosen.as_deref(), Some("Home"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_keys(&["left".to_string()]).is_err());
    }
}
