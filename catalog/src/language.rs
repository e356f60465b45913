//! Display-language label toggle.
//!
//! Only the navigation label swaps; page copy is not translated.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::English => Self::Hindi,
            Self::Hindi => Self::English,
        }
    }

    /// BCP 47 code for the `lang` attribute.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Name of this language written in itself.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिन्दी",
        }
    }

    /// Switcher button text: names the language a click switches to.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.toggle().native_name()
    }
}
