//! Contact block state.

/// Transient indicator shown over the contact block after a copy attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyStatus {
    #[default]
    Hidden,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hidden | Self::Copied => "Copied",
            Self::Failed => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility() {
        assert!(!CopyStatus::Hidden.is_visible());
        assert!(CopyStatus::Copied.is_visible());
        assert!(CopyStatus::Failed.is_visible());
        assert_eq!(CopyStatus::Failed.label(), "Failed");
    }
}
