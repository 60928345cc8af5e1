//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Section`] - Profile page panels
//! - [`SiteConfig`], [`SkillEntry`], [`FooterLink`] - Static site content
//! - [`CopyStatus`] - Contact block copy indicator
//! - [`AppRoute`] - Path-based page selection

mod contact;
mod route;
mod section;
mod site;

pub use contact::CopyStatus;
pub use route::AppRoute;
pub use section::Section;
pub use site::{FooterLink, SiteConfig, SkillEntry};
