//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site content is loaded at compile time using `include_str!` and parsed
//! into [`crate::models::SiteConfig`] at startup.

// =============================================================================
// Embedded Assets (loaded at compile time)
// =============================================================================

/// Site content: phrases, skills, links.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Body of the "about" section, in Markdown.
pub const ABOUT_MARKDOWN: &str = include_str!("../assets/text/about.md");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used for the document title.
pub const APP_NAME: &str = "t2ne";

// =============================================================================
// Animation Timing (milliseconds)
// =============================================================================

/// Typewriter step delays. Overridable through the `[typing]` table.
pub mod typing_delays {
    /// Delay after appending a character.
    pub const GROW: u32 = 100;
    /// Pause on the full phrase before erasing.
    pub const IDLE: u32 = 2000;
    /// Delay after removing a character.
    pub const SHRINK: u32 = 50;
    /// Pause on the empty line before the next phrase.
    pub const NEXT_PHRASE: u32 = 500;
}

/// Splash fade-out duration before it is removed.
pub const SPLASH_FADE_MS: u32 = 1000;

/// Time the content area stays hidden while switching sections.
pub const SECTION_TRANSITION_MS: u32 = 500;

/// How long the copy indicator stays visible.
pub const COPY_INDICATOR_MS: u32 = 2000;

// =============================================================================
// Routing
// =============================================================================

/// Paths that render the profile page. Anything else is a 404.
pub const PROFILE_PATHS: &[&str] = &["", "/", "/index.html"];

// =============================================================================
// Network Configuration
// =============================================================================

/// Allowed domains for links opened from script (security).
/// Links to other domains will be blocked.
pub const ALLOWED_REDIRECT_DOMAINS: &[&str] = &[
    "github.com",
    "github.io",
    "linkedin.com",
    "linktr.ee",
    "spotify.com",
    "chess.com",
    "youtube.com",
    "steamcommunity.com",
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
