//! Amazon regional sites, keyed by locale suffix.

use std::fmt;

/// Amazon regional sites with known request headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Us,
    Uk,
    De,
    Fr,
    Es,
    It,
    Ca,
    Au,
    Jp,
    In,
    Br,
    Mx,
    Nl,
    Se,
    Pl,
}

impl Region {
    /// Looks up the region for a locale suffix such as `.co.uk`.
    pub fn from_locale(locale: &str) -> Option<Region> {
        Region::all().iter().copied().find(|r| r.locale().eq_ignore_ascii_case(locale))
    }

    /// Returns the locale suffix appended to `amazon`.
    pub fn locale(&self) -> &'static str {
        match self {
            Region::Us => ".com",
            Region::Uk => ".co.uk",
            Region::De => ".de",
            Region::Fr => ".fr",
            Region::Es => ".es",
            Region::It => ".it",
            Region::Ca => ".ca",
            Region::Au => ".com.au",
            Region::Jp => ".co.jp",
            Region::In => ".in",
            Region::Br => ".com.br",
            Region::Mx => ".com.mx",
            Region::Nl => ".nl",
            Region::Se => ".se",
            Region::Pl => ".pl",
        }
    }

    /// Returns the Amazon domain for this region.
    pub fn domain(&self) -> String {
        format!("amazon{}", self.locale())
    }

    /// Returns the Accept-Language header value for this region.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Region::Us | Region::Ca | Region::Au => "en-US,en;q=0.9",
            Region::Uk => "en-GB,en;q=0.9",
            Region::De => "de-DE,de;q=0.9,en;q=0.8",
            Region::Fr => "fr-FR,fr;q=0.9,en;q=0.8",
            Region::Es | Region::Mx => "es-ES,es;q=0.9,en;q=0.8",
            Region::It => "it-IT,it;q=0.9,en;q=0.8",
            Region::Jp => "ja-JP,ja;q=0.9,en;q=0.8",
            Region::In => "en-IN,en;q=0.9,hi;q=0.8",
            Region::Br => "pt-BR,pt;q=0.9,en;q=0.8",
            Region::Nl => "nl-NL,nl;q=0.9,en;q=0.8",
            Region::Se => "sv-SE,sv;q=0.9,en;q=0.8",
            Region::Pl => "pl-PL,pl;q=0.9,en;q=0.8",
        }
    }

    /// Returns all known regions.
    pub fn all() -> &'static [Region] {
        &[
            Region::Us,
            Region::Uk,
            Region::De,
            Region::Fr,
            Region::Es,
            Region::It,
            Region::Ca,
            Region::Au,
            Region::Jp,
            Region::In,
            Region::Br,
            Region::Mx,
            Region::Nl,
            Region::Se,
            Region::Pl,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.domain())
    }
}
