use std::rc::Rc;

use log::Level;
use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

/// Height of the sticky header, subtracted from every anchor scroll target.
pub const HEADER_OFFSET: f64 = 72.0;

/// Scroll distance after which the header switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 24.0;

pub const PARALLAX_FACTOR: f64 = 0.3;

pub const PARTICLE_COUNT: usize = 28;

/// Share of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Delay before honouring a `#fragment` in the initial URL, so the sections exist.
pub const INITIAL_SCROLL_DELAY_MS: u32 = 120;

const BRAND_JSON: &str = include_str!("../assets/brand.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Brand record is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Brand field `{0}` is empty")]
    EmptyField(String),

    #[error("Brand list `{0}` has no entries")]
    EmptyList(&'static str),

    #[error("Contact email `{0}` is not an email address")]
    InvalidEmail(String),

    #[error("Accent `{0}` is not a #rrggbb color")]
    InvalidAccent(String),
}

/// Glyphs used across the page. Rendered as plain unicode, no icon font.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    Shield,
    Gauge,
    Zap,
    Home,
    Building2,
    Landmark,
    BadgeCheck,
    Check,
    ArrowRight,
    Mail,
    Phone,
    MapPin,
    Star,
    Menu,
    Close,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Sparkles => "✦",
            Icon::Shield => "⛨",
            Icon::Gauge => "◔",
            Icon::Zap => "⚡",
            Icon::Home => "⌂",
            Icon::Building2 => "▥",
            Icon::Landmark => "⛫",
            Icon::BadgeCheck => "✔",
            Icon::Check => "✓",
            Icon::ArrowRight => "→",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "⌖",
            Icon::Star => "★",
            Icon::Menu => "☰",
            Icon::Close => "✕",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub step: String,
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Property {
    pub icon: Icon,
    pub title: String,
    pub tags: Vec<String>,
    pub yield_note: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// Everything the page prints: copy, contact details and the accent color.
/// Loaded once at startup and shared read-only through context.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Brand {
    pub company: String,
    pub tagline: String,
    pub subline: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,
    pub accent: String,
    pub value_bullets: Vec<String>,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub how_it_works: Vec<Step>,
    pub faqs: Vec<FaqEntry>,
    pub properties: Vec<Property>,
    pub press: Vec<String>,
    pub testimonial: Testimonial,
}

impl Brand {
    /// Parses the record embedded at build time.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(BRAND_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let brand: Brand = serde_json::from_str(raw)?;
        brand.validate()?;
        Ok(brand)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut fields: Vec<(String, &str)> = vec![
            ("company".into(), self.company.as_str()),
            ("tagline".into(), self.tagline.as_str()),
            ("subline".into(), self.subline.as_str()),
            ("cta_primary".into(), self.cta_primary.as_str()),
            ("cta_secondary".into(), self.cta_secondary.as_str()),
            ("contact_email".into(), self.contact_email.as_str()),
            ("contact_phone".into(), self.contact_phone.as_str()),
            ("contact_address".into(), self.contact_address.as_str()),
            ("testimonial.quote".into(), self.testimonial.quote.as_str()),
            ("testimonial.author".into(), self.testimonial.author.as_str()),
            ("testimonial.role".into(), self.testimonial.role.as_str()),
        ];
        for (i, bullet) in self.value_bullets.iter().enumerate() {
            fields.push((format!("value_bullets[{}]", i), bullet.as_str()));
        }
        for (i, name) in self.press.iter().enumerate() {
            fields.push((format!("press[{}]", i), name.as_str()));
        }
        for (i, feature) in self.features.iter().enumerate() {
            fields.push((format!("features[{}].title", i), feature.title.as_str()));
            fields.push((format!("features[{}].desc", i), feature.desc.as_str()));
        }
        for (i, stat) in self.stats.iter().enumerate() {
            fields.push((format!("stats[{}].label", i), stat.label.as_str()));
            fields.push((format!("stats[{}].value", i), stat.value.as_str()));
        }
        for (i, step) in self.how_it_works.iter().enumerate() {
            fields.push((format!("how_it_works[{}].step", i), step.step.as_str()));
            fields.push((format!("how_it_works[{}].title", i), step.title.as_str()));
            fields.push((format!("how_it_works[{}].desc", i), step.desc.as_str()));
        }
        for (i, faq) in self.faqs.iter().enumerate() {
            fields.push((format!("faqs[{}].q", i), faq.q.as_str()));
            fields.push((format!("faqs[{}].a", i), faq.a.as_str()));
        }
        for (i, property) in self.properties.iter().enumerate() {
            fields.push((format!("properties[{}].title", i), property.title.as_str()));
            fields.push((format!("properties[{}].yield_note", i), property.yield_note.as_str()));
            for (j, tag) in property.tags.iter().enumerate() {
                fields.push((format!("properties[{}].tags[{}]", i, j), tag.as_str()));
            }
        }
        if let Some((path, _)) = fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::EmptyField(path));
        }

        let lists = [
            ("value_bullets", self.value_bullets.len()),
            ("features", self.features.len()),
            ("stats", self.stats.len()),
            ("how_it_works", self.how_it_works.len()),
            ("faqs", self.faqs.len()),
            ("properties", self.properties.len()),
            ("press", self.press.len()),
        ];
        if let Some((name, _)) = lists.iter().find(|(_, len)| *len == 0) {
            return Err(ConfigError::EmptyList(*name));
        }

        let email = self.contact_email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => {}
            _ => return Err(ConfigError::InvalidEmail(self.contact_email.clone())),
        }

        if !is_hex_color(&self.accent) {
            return Err(ConfigError::InvalidAccent(self.accent.clone()));
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .map(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// The brand record provided by the app shell.
#[hook]
pub fn use_brand() -> Rc<Brand> {
    use_context::<Rc<Brand>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_brand_loads() {
        let brand = Brand::load().expect("embedded brand should be valid");
        assert_eq!(brand.company, "FML Real Estate Company");
        assert_eq!(brand.contact_email, "frenkld222@gmail.com");
        assert_eq!(brand.accent, "#C49A3A");
        assert_eq!(brand.features.len(), 4);
        assert_eq!(brand.stats.len(), 4);
        assert_eq!(brand.how_it_works.len(), 3);
        assert_eq!(brand.faqs.len(), 4);
        assert_eq!(brand.properties.len(), 3);
        assert_eq!(brand.press.len(), 6);
    }

    #[test]
    fn icons_deserialize_by_name() {
        let brand = Brand::load().unwrap();
        let icons: Vec<Icon> = brand.features.iter().map(|f| f.icon).collect();
        assert_eq!(icons, vec![Icon::Sparkles, Icon::Shield, Icon::Gauge, Icon::Zap]);
        assert_eq!(brand.properties[1].icon, Icon::Building2);
    }

    #[test]
    fn empty_company_is_rejected() {
        let mut brand = Brand::load().unwrap();
        brand.company = "  ".to_string();
        match brand.validate() {
            Err(ConfigError::EmptyField(path)) => assert_eq!(path, "company"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_nested_text_is_rejected_with_its_path() {
        let mut brand = Brand::load().unwrap();
        brand.faqs[0].a = String::new();
        match brand.validate() {
            Err(ConfigError::EmptyField(path)) => assert_eq!(path, "faqs[0].a"),
            other => panic!("unexpected result: {:?}", other),
        }

        let mut brand = Brand::load().unwrap();
        brand.testimonial.role = String::new();
        assert!(matches!(brand.validate(), Err(ConfigError::EmptyField(p)) if p == "testimonial.role"));

        let mut brand = Brand::load().unwrap();
        brand.features[0].title = " ".to_string();
        assert!(matches!(brand.validate(), Err(ConfigError::EmptyField(p)) if p == "features[0].title"));

        let mut brand = Brand::load().unwrap();
        brand.properties[2].tags[1] = String::new();
        assert!(matches!(brand.validate(), Err(ConfigError::EmptyField(p)) if p == "properties[2].tags[1]"));

        let mut brand = Brand::load().unwrap();
        brand.press[5] = String::new();
        assert!(matches!(brand.validate(), Err(ConfigError::EmptyField(p)) if p == "press[5]"));
    }

    #[test]
    fn empty_faq_list_is_rejected() {
        let mut brand = Brand::load().unwrap();
        brand.faqs.clear();
        assert!(matches!(brand.validate(), Err(ConfigError::EmptyList("faqs"))));
    }

    #[test]
    fn bad_email_and_accent_are_rejected() {
        let mut brand = Brand::load().unwrap();
        brand.contact_email = "frenkld222".to_string();
        assert!(matches!(brand.validate(), Err(ConfigError::InvalidEmail(_))));

        let mut brand = Brand::load().unwrap();
        brand.accent = "gold".to_string();
        assert!(matches!(brand.validate(), Err(ConfigError::InvalidAccent(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = Brand::from_json("{ \"company\": ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#c49a3a"));
        assert!(!is_hex_color("#c49a3"));
        assert!(!is_hex_color("c49a3a"));
        assert!(!is_hex_color("#c49a3g"));
    }
}
