//! Placeholder substitution in CAD templates.
//!
//! A template carries up to fifteen tokens, `{{BAND_<n>_RED}}`,
//! `{{BAND_<n>_GREEN}}` and `{{BAND_<n>_BLUE}}` for bands 1 to 5. Every
//! occurrence is replaced; tokens the template lacks are skipped.

use crate::color::{ColorBand, RgbTriple};

pub const BAND_COUNT: usize = 5;

const CHANNELS: [&str; 3] = ["RED", "GREEN", "BLUE"];

const TOKEN_PREFIX: &str = "{{BAND_";
const TOKEN_SUFFIX: &str = "}}";

/// Token for `channel` ("RED", "GREEN" or "BLUE") of band `band_number`.
pub fn placeholder(band_number: usize, channel: &str) -> String {
    format!("{TOKEN_PREFIX}{band_number}_{channel}{TOKEN_SUFFIX}")
}

/// All fifteen tokens, band by band.
pub fn placeholders() -> Vec<String> {
    (1..=BAND_COUNT)
        .flat_map(|band| CHANNELS.iter().map(move |c| placeholder(band, c)))
        .collect()
}

/// Replace the three channel tokens of one band.
pub fn set_band_value(template: &str, band_number: usize, rgb: RgbTriple) -> String {
    let mut out = template.to_string();
    for (channel, value) in CHANNELS.iter().zip(rgb.channels()) {
        out = out.replace(&placeholder(band_number, channel), &channel_text(value));
    }
    out
}

/// Substitute the RGB values of `bands` (in band order) into `template`.
pub fn substitute(template: &str, bands: &[ColorBand; BAND_COUNT]) -> String {
    bands
        .iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, band)| {
            set_band_value(&text, i + 1, band.rgb())
        })
}

/// `{{BAND_..}}` tokens still present in `text`, in order of appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(TOKEN_PREFIX) {
        let candidate = &rest[start..];
        match candidate.find(TOKEN_SUFFIX) {
            Some(end) => {
                let token = &candidate[..end + TOKEN_SUFFIX.len()];
                if is_band_token(token) {
                    found.push(token.to_string());
                }
                rest = &candidate[TOKEN_PREFIX.len()..];
            }
            None => break,
        }
    }
    found
}

// Any `{{BAND_<word>}}` counts, so tokens for bands or channels this module
// does not know about are reported too.
fn is_band_token(token: &str) -> bool {
    let inner = &token[TOKEN_PREFIX.len()..token.len() - TOKEN_SUFFIX.len()];
    !inner.is_empty() && inner.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// STEP REAL literals need a decimal point, so whole numbers keep ".0".
fn channel_text(value: f64) -> String {
    format!("{value:?}")
}
