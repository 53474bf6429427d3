//! Identifiers and reference links derived from style names.

use crate::error::{ModelError, Result};

/// Base URL of the BJCP 2015 style pages.
pub const BJCP_BASE_URL: &str = "http://www.bjcp.org/style/2015/";

/// Tag categories whose tag values end in a redundant category word
/// (`pale-color`, `standard-strength`).
const SUFFIXED_CATEGORIES: [&str; 4] = ["Strength", "Color", "Style Family", "Era"];

/// Convert a style name to its URL slug.
///
/// `"Specialty IPA: Rye IPA"` becomes `"specialty-ipa-rye-ipa"`.
#[must_use]
pub fn style_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == ' ')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Split a source identifier into `(category, subcategory)` URL segments.
///
/// `"21B-Rye"` yields `("21", "21B")`. A category entry without a letter
/// (`"27"`) is published upstream as `27A`, so the letter is appended.
pub fn reference_segments(source_id: &str) -> Result<(String, String)> {
    let mut sub_id = source_id.split('-').next().unwrap_or_default().to_string();
    let cat_id: String = sub_id
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    if cat_id.is_empty() {
        return Err(ModelError::MissingCategoryNumber(source_id.to_string()));
    }
    if sub_id == cat_id {
        sub_id.push('A');
    }
    Ok((cat_id, sub_id))
}

/// Reference page URL for a style.
///
/// `style_url("21B", "Specialty IPA: Rye IPA")` is
/// `http://www.bjcp.org/style/2015/21/21B/specialty-ipa-rye-ipa/`.
pub fn style_url(source_id: &str, name: &str) -> Result<String> {
    let (cat_id, sub_id) = reference_segments(source_id)?;
    Ok(format!(
        "{BJCP_BASE_URL}{cat_id}/{sub_id}/{}/",
        style_id(name)
    ))
}

/// Human-readable label for a tag value.
///
/// `("Color", "pale-color")` becomes `"Pale"`; `("Style Family",
/// "ipa-family")` becomes `"IPA"`.
#[must_use]
pub fn tag_text(category: &str, tag: &str) -> String {
    let mut words: Vec<&str> = tag.split('-').collect();
    if SUFFIXED_CATEGORIES.contains(&category) {
        words.pop();
    }
    words
        .into_iter()
        .map(|word| {
            if word == "ipa" {
                word.to_uppercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
