use crate::error::FacetResult;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Message id for the "show more" affordance.
pub const MSG_SHOW_MORE: &str = "collection.statistics.show_more";

/// Supplies user-facing strings by message id.
pub trait MessageCatalog {
    /// Returns the text for `id`, or `default` when the catalog has none.
    fn message(&self, id: &str, default: &str) -> String;

    /// Localized name of a country or territory code, if known.
    fn country_name(&self, code: &str) -> Option<String> {
        let code = code.trim().to_lowercase();
        let fallback = builtin_country_name(&code)?;
        Some(self.message(&format!("country.{}", code), fallback))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a flat JSON object of `message id -> text`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FacetResult<Self> {
        let content = fs::read_to_string(&path)?;
        let messages: HashMap<String, String> = serde_json::from_str(&content)?;
        debug!(
            messages = messages.len(),
            "loaded message catalog from {}",
            path.as_ref().display()
        );
        Ok(Self { messages })
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(id.into(), text.into());
    }
}

impl MessageCatalog for Catalog {
    fn message(&self, id: &str, default: &str) -> String {
        self.messages
            .get(id)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Picks `one` or `other` by count, then substitutes `{count}`.
pub fn plural(count: u64, one: &str, other: &str) -> String {
    let template = if count == 1 { one } else { other };
    template.replace("{count}", &format_count(count))
}

fn builtin_country_name(code: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|idx| COUNTRY_NAMES[idx].1)
}

// Sorted by code.
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("ae", "United Arab Emirates"),
    ("af", "Afghanistan"),
    ("al", "Albania"),
    ("am", "Armenia"),
    ("ao", "Angola"),
    ("ar", "Argentina"),
    ("at", "Austria"),
    ("au", "Australia"),
    ("az", "Azerbaijan"),
    ("ba", "Bosnia and Herzegovina"),
    ("bd", "Bangladesh"),
    ("be", "Belgium"),
    ("bg", "Bulgaria"),
    ("bh", "Bahrain"),
    ("br", "Brazil"),
    ("bs", "Bahamas"),
    ("by", "Belarus"),
    ("bz", "Belize"),
    ("ca", "Canada"),
    ("ch", "Switzerland"),
    ("cl", "Chile"),
    ("cn", "China"),
    ("co", "Colombia"),
    ("cy", "Cyprus"),
    ("cz", "Czech Republic"),
    ("de", "Germany"),
    ("dk", "Denmark"),
    ("dz", "Algeria"),
    ("ec", "Ecuador"),
    ("ee", "Estonia"),
    ("eg", "Egypt"),
    ("es", "Spain"),
    ("et", "Ethiopia"),
    ("eu", "European Union"),
    ("fi", "Finland"),
    ("fr", "France"),
    ("gb", "United Kingdom"),
    ("ge", "Georgia"),
    ("gg", "Guernsey"),
    ("gh", "Ghana"),
    ("gi", "Gibraltar"),
    ("gr", "Greece"),
    ("hk", "Hong Kong"),
    ("hr", "Croatia"),
    ("hu", "Hungary"),
    ("id", "Indonesia"),
    ("ie", "Ireland"),
    ("il", "Israel"),
    ("im", "Isle of Man"),
    ("in", "India"),
    ("iq", "Iraq"),
    ("ir", "Iran"),
    ("is", "Iceland"),
    ("it", "Italy"),
    ("je", "Jersey"),
    ("jo", "Jordan"),
    ("jp", "Japan"),
    ("ke", "Kenya"),
    ("kg", "Kyrgyzstan"),
    ("kp", "North Korea"),
    ("kr", "South Korea"),
    ("ky", "Cayman Islands"),
    ("kz", "Kazakhstan"),
    ("lb", "Lebanon"),
    ("li", "Liechtenstein"),
    ("lt", "Lithuania"),
    ("lu", "Luxembourg"),
    ("lv", "Latvia"),
    ("ly", "Libya"),
    ("ma", "Morocco"),
    ("mc", "Monaco"),
    ("md", "Moldova"),
    ("me", "Montenegro"),
    ("mk", "North Macedonia"),
    ("mt", "Malta"),
    ("mx", "Mexico"),
    ("my", "Malaysia"),
    ("ng", "Nigeria"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("nz", "New Zealand"),
    ("pa", "Panama"),
    ("pe", "Peru"),
    ("ph", "Philippines"),
    ("pk", "Pakistan"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("qa", "Qatar"),
    ("ro", "Romania"),
    ("rs", "Serbia"),
    ("ru", "Russia"),
    ("sa", "Saudi Arabia"),
    ("sc", "Seychelles"),
    ("se", "Sweden"),
    ("sg", "Singapore"),
    ("si", "Slovenia"),
    ("sk", "Slovakia"),
    ("sy", "Syria"),
    ("th", "Thailand"),
    ("tj", "Tajikistan"),
    ("tm", "Turkmenistan"),
    ("tr", "Turkey"),
    ("tw", "Taiwan"),
    ("ua", "Ukraine"),
    ("ug", "Uganda"),
    ("us", "United States"),
    ("uz", "Uzbekistan"),
    ("vc", "Saint Vincent and the Grenadines"),
    ("ve", "Venezuela"),
    ("vg", "British Virgin Islands"),
    ("vn", "Vietnam"),
    ("ws", "Samoa"),
    ("xk", "Kosovo"),
    ("za", "South Africa"),
    ("zw", "Zimbabwe"),
];
