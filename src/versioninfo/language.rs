//! Windows resource languages.

use crate::error::LaunchwrapError;
use std::fmt;
use std::str::FromStr;

/// Language of the version-info resource.
///
/// Identifiers mirror the Windows primary-language names; each maps to the
/// LANGID stamped into the resource table. The default is US English.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LanguageId {
    Arabic,
    Bulgarian,
    Catalan,
    Czech,
    Danish,
    German,
    Greek,
    #[default]
    EnglishUs,
    EnglishUk,
    Spanish,
    Finnish,
    French,
    Hebrew,
    Hungarian,
    Icelandic,
    Italian,
    Japanese,
    Korean,
    Dutch,
    Norwegian,
    Polish,
    PortugueseBr,
    Portuguese,
    Romanian,
    Russian,
    Croatian,
    Slovak,
    Slovenian,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
}

impl LanguageId {
    /// Windows LANGID for this language.
    pub fn langid(&self) -> u16 {
        match self {
            Self::Arabic => 0x0401,
            Self::Bulgarian => 0x0402,
            Self::Catalan => 0x0403,
            Self::Czech => 0x0405,
            Self::Danish => 0x0406,
            Self::German => 0x0407,
            Self::Greek => 0x0408,
            Self::EnglishUs => 0x0409,
            Self::EnglishUk => 0x0809,
            Self::Spanish => 0x040a,
            Self::Finnish => 0x040b,
            Self::French => 0x040c,
            Self::Hebrew => 0x040d,
            Self::Hungarian => 0x040e,
            Self::Icelandic => 0x040f,
            Self::Italian => 0x0410,
            Self::Japanese => 0x0411,
            Self::Korean => 0x0412,
            Self::Dutch => 0x0413,
            Self::Norwegian => 0x0414,
            Self::Polish => 0x0415,
            Self::PortugueseBr => 0x0416,
            Self::Portuguese => 0x0816,
            Self::Romanian => 0x0418,
            Self::Russian => 0x0419,
            Self::Croatian => 0x041a,
            Self::Slovak => 0x041b,
            Self::Slovenian => 0x0424,
            Self::Swedish => 0x041d,
            Self::Thai => 0x041e,
            Self::Turkish => 0x041f,
            Self::Ukrainian => 0x0422,
        }
    }

    /// Stable identifier name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arabic => "ARABIC",
            Self::Bulgarian => "BULGARIAN",
            Self::Catalan => "CATALAN",
            Self::Czech => "CZECH",
            Self::Danish => "DANISH",
            Self::German => "GERMAN",
            Self::Greek => "GREEK",
            Self::EnglishUs => "ENGLISH_US",
            Self::EnglishUk => "ENGLISH_UK",
            Self::Spanish => "SPANISH",
            Self::Finnish => "FINNISH",
            Self::French => "FRENCH",
            Self::Hebrew => "HEBREW",
            Self::Hungarian => "HUNGARIAN",
            Self::Icelandic => "ICELANDIC",
            Self::Italian => "ITALIAN",
            Self::Japanese => "JAPANESE",
            Self::Korean => "KOREAN",
            Self::Dutch => "DUTCH",
            Self::Norwegian => "NORWEGIAN",
            Self::Polish => "POLISH",
            Self::PortugueseBr => "PORTUGUESE_BR",
            Self::Portuguese => "PORTUGUESE",
            Self::Romanian => "ROMANIAN",
            Self::Russian => "RUSSIAN",
            Self::Croatian => "CROATIAN",
            Self::Slovak => "SLOVAK",
            Self::Slovenian => "SLOVENIAN",
            Self::Swedish => "SWEDISH",
            Self::Thai => "THAI",
            Self::Turkish => "TURKISH",
            Self::Ukrainian => "UKRAINIAN",
        }
    }

    const ALL: [LanguageId; 32] = [
        Self::Arabic,
        Self::Bulgarian,
        Self::Catalan,
        Self::Czech,
        Self::Danish,
        Self::German,
        Self::Greek,
        Self::EnglishUs,
        Self::EnglishUk,
        Self::Spanish,
        Self::Finnish,
        Self::French,
        Self::Hebrew,
        Self::Hungarian,
        Self::Icelandic,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Dutch,
        Self::Norwegian,
        Self::Polish,
        Self::PortugueseBr,
        Self::Portuguese,
        Self::Romanian,
        Self::Russian,
        Self::Croatian,
        Self::Slovak,
        Self::Slovenian,
        Self::Swedish,
        Self::Thai,
        Self::Turkish,
        Self::Ukrainian,
    ];
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageId {
    type Err = LaunchwrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == s)
            .ok_or_else(|| LaunchwrapError::InvalidLanguage {
                value: s.to_string(),
            })
    }
}
