//! Profile page sections.

/// One of the mutually exclusive content panels of the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 4] = [Self::Home, Self::About, Self::Skills, Self::Contact];

    /// Lowercase name, as shown in the navigation bar.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }
}
