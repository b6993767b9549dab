//! Section selector
//!
//! The shell renders exactly one of four sections. Navigation between them is
//! unconditional; the side arrows walk the sections as a cycle.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    About,
    Portfolio,
    Contact,
}

impl Section {
    /// Navigation order (nav bar left to right, arrow cycle).
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Nav bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Inicio",
            Section::About => "Sobre Mí",
            Section::Portfolio => "Portafolio",
            Section::Contact => "Contacto",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    /// URL path for this section. The landing section lives at the root.
    pub fn path(&self) -> &'static str {
        match self {
            Section::Hero => "/",
            Section::About => "/about",
            Section::Portfolio => "/portfolio",
            Section::Contact => "/contact",
        }
    }

    fn index(&self) -> usize {
        match self {
            Section::Hero => 0,
            Section::About => 1,
            Section::Portfolio => 2,
            Section::Contact => 3,
        }
    }

    /// Section to the right, wrapping from contact back to hero.
    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Section to the left, wrapping from hero to contact.
    pub fn previous(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == slug)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}
