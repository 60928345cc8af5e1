//! Static site content.
//!
//! Everything the profile page displays besides its animation state is
//! described by [`SiteConfig`], deserialized from `assets/site.toml`.

use serde::Deserialize;

use crate::config::SITE_TOML;
use crate::core::error::ConfigError;
use crate::core::{PhraseCycle, TypingDelays};

/// Parsed contents of `site.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Splash screen logo path.
    pub splash_logo: String,
    /// Phrases cycled by the typewriter on the home section.
    pub phrases: Vec<String>,
    pub about: AboutLink,
    pub contact: Contact,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub footer: Vec<FooterLink>,
    /// Optional overrides of the default step delays.
    #[serde(default)]
    pub typing: TypingDelays,
}

/// External link shown under the "about" text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AboutLink {
    pub link: String,
    #[serde(default = "default_about_label")]
    pub label: String,
}

fn default_about_label() -> String {
    "?".to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub email: String,
}

/// A tile of the skills grid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// Icon image URL.
    pub logo: String,
    /// Project opened when the icon is clicked.
    #[serde(default)]
    pub link: Option<String>,
}

/// Social link in the page footer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration embedded in the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(SITE_TOML)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if let Some(index) = self.skills.iter().position(|s| s.name.trim().is_empty()) {
            return Err(ConfigError::UnnamedSkill(index));
        }
        Ok(())
    }

    /// Build the typewriter phrase cycle.
    pub fn phrase_cycle(&self) -> Result<PhraseCycle, ConfigError> {
        PhraseCycle::new(self.phrases.clone()).ok_or(ConfigError::NoPhrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::typing_delays;

    const MINIMAL: &str = r#"
        splash_logo = "logo.avif"
        phrases = ["ab"]

        [about]
        link = "https://github.com/t2ne"

        [contact]
        email = "hi@example.com"
    "#;

    #[test]
    fn test_embedded_config() {
        let config = SiteConfig::embedded().expect("embedded site.toml must parse");
        assert_eq!(config.phrases.len(), 4);
        assert_eq!(config.phrases[0], "hi, i'm t2ne");
        assert_eq!(config.contact.email, "hi@t2ne.eu");
        assert!(!config.skills.is_empty());
        assert!(config.skills.iter().any(|s| s.link.is_some()));
        assert!(config.skills.iter().any(|s| s.link.is_none()));
        assert_eq!(config.footer.len(), 7);
        assert_eq!(config.typing, TypingDelays::default());
    }

    #[test]
    fn test_minimal_defaults() {
        let config = SiteConfig::parse(MINIMAL).expect("minimal config");
        assert_eq!(config.about.label, "?");
        assert!(config.skills.is_empty());
        assert!(config.footer.is_empty());
        assert_eq!(config.typing.grow_ms, typing_delays::GROW);
    }

    #[test]
    fn test_partial_typing_override() {
        let source = format!("{}\n[typing]\nidle_ms = 10\n", MINIMAL);
        let config = SiteConfig::parse(&source).expect("config with overrides");
        assert_eq!(config.typing.idle_ms, 10);
        assert_eq!(config.typing.shrink_ms, typing_delays::SHRINK);
    }

    #[test]
    fn test_rejects_empty_phrases() {
        let source = MINIMAL.replace(r#"phrases = ["ab"]"#, "phrases = []");
        assert!(matches!(
            SiteConfig::parse(&source),
            Err(ConfigError::NoPhrases)
        ));
    }

    #[test]
    fn test_rejects_unnamed_skill() {
        let source = format!(
            "{}\n[[skills]]\nname = \"Rust\"\nlogo = \"r.svg\"\n\n[[skills]]\nname = \" \"\nlogo = \"x.svg\"\n",
            MINIMAL
        );
        assert!(matches!(
            SiteConfig::parse(&source),
            Err(ConfigError::UnnamedSkill(1))
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            SiteConfig::parse("phrases = ["),
            Err(ConfigError::Parse(_))
        ));
    }
}
