// Searchable coin selector. The catalog runs to thousands of entries, so
// a plain select is useless; this filters with the same fuzzy matching the
// command-palette pattern uses and caps the rendered list.
#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use shared::models::CoinEntry;

use crate::config::theme::ThemePalette;

const MAX_RESULTS: usize = 50;

#[component]
pub fn CoinPicker(
    label: String,
    entries: Vec<CoinEntry>,
    selected: Option<CoinEntry>,
    on_select: EventHandler<CoinEntry>,
) -> Element {
    let palette = use_context::<ThemePalette>();

    let mut filter_text = use_signal(String::new);
    let mut open = use_signal(|| false);
    let mut highlighted = use_signal(|| 0usize);
    let matcher = use_hook(|| Rc::new(SkimMatcherV2::default()));

    // Score against the display name, best match first. An empty filter
    // lists the head of the catalog in directory order.
    let filter = filter_text();
    let matches: Vec<CoinEntry> = if filter.is_empty() {
        entries.iter().take(MAX_RESULTS).cloned().collect()
    } else {
        let mut scored: Vec<(i64, &CoinEntry)> = entries
            .iter()
            .filter_map(|entry| {
                matcher
                    .fuzzy_match(&entry.name, &filter)
                    .map(|score| (score, entry))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(MAX_RESULTS)
            .map(|(_, entry)| entry.clone())
            .collect()
    };

    let mut pick = move |entry: CoinEntry| {
        filter_text.set(String::new());
        open.set(false);
        highlighted.set(0);
        on_select.call(entry);
    };

    let matches_for_keys = matches.clone();
    let handle_keydown = move |evt: KeyboardEvent| {
        if matches_for_keys.is_empty() {
            return;
        }
        match evt.key() {
            Key::ArrowDown => highlighted.set((highlighted() + 1) % matches_for_keys.len()),
            Key::ArrowUp => highlighted.set(
                (highlighted() + matches_for_keys.len() - 1) % matches_for_keys.len(),
            ),
            Key::Enter => {
                if let Some(entry) = matches_for_keys.get(highlighted()) {
                    pick(entry.clone());
                }
            }
            Key::Escape => open.set(false),
            _ => {}
        }
    };

    let placeholder = selected
        .as_ref()
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| "Search by name...".to_string());

    let items = matches
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let background = if idx == highlighted() {
                palette.primary.clone()
            } else {
                "transparent".to_string()
            };
            let entry_for_click = entry.clone();
            rsx! {
                li {
                    key: "{entry.id}",
                    style: "padding: 6px 10px; cursor: pointer; background-color: {background};",
                    onclick: move |_| pick(entry_for_click.clone()),
                    onmouseenter: move |_| highlighted.set(idx),
                    span { "{entry.name}" }
                    span { style: "color: {palette.muted}; margin-left: 8px; font-size: 0.85em;", "{entry.id}" }
                }
            }
        })
        .collect::<Vec<_>>();

    let empty_hint = if matches.is_empty() {
        Some(rsx! {
            li { style: "padding: 6px 10px; color: {palette.muted};", "No coins match your search." }
        })
    } else {
        None
    };

    rsx! {
        div {
            style: "position: relative; min-width: 320px;",
            div {
                style: "font-size: 0.85em; color: {palette.muted}; margin-bottom: 4px;",
                "{label}"
            }
            input {
                r#type: "text",
                style: "width: 100%; box-sizing: border-box; padding: 8px; background-color: {palette.surface};
                        color: {palette.foreground}; border: 1px solid {palette.border}; border-radius: 4px;",
                value: "{filter_text}",
                placeholder: "{placeholder}",
                onfocusin: move |_| open.set(true),
                oninput: move |evt| {
                    filter_text.set(evt.value());
                    open.set(true);
                    highlighted.set(0);
                },
                onkeydown: handle_keydown,
            }
            if open() {
                ul {
                    style: "list-style: none; margin: 4px 0 0 0; padding: 0; position: absolute; z-index: 10;
                            width: 100%; max-height: 260px; overflow-y: auto; background-color: {palette.surface};
                            border: 1px solid {palette.border}; border-radius: 4px;",
                    {empty_hint}
                    {items.into_iter()}
                }
            }
        }
    }
}
