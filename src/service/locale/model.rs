use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "kk")]
    Kazakh,
}

impl Language {
    pub const ALL: [Language; 14] = [
        Language::English,
        Language::Ukrainian,
        Language::Russian,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Polish,
        Language::Portuguese,
        Language::Turkish,
        Language::Chinese,
        Language::Japanese,
        Language::Korean,
        Language::Kazakh,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Ukrainian => "uk",
            Language::Russian => "ru",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::Turkish => "tr",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Kazakh => "kk",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.tag() == tag)
            .ok_or_else(|| format!("Unknown language code: {}", s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Ukraine,
    Russia,
    Germany,
    France,
    Spain,
    Italy,
    Poland,
    Portugal,
    Turkey,
    China,
    Japan,
    SouthKorea,
    Kazakhstan,
    UnitedKingdom,
}

impl Country {
    /// Countries offered on the selection menu, in display order.
    pub const MENU: [Country; 13] = [
        Country::Ukraine,
        Country::Russia,
        Country::Germany,
        Country::France,
        Country::Spain,
        Country::Italy,
        Country::Poland,
        Country::Portugal,
        Country::Turkey,
        Country::China,
        Country::Japan,
        Country::SouthKorea,
        Country::Kazakhstan,
    ];

    /// Every recognized country, including ones not offered on the menu.
    pub const ALL: [Country; 14] = [
        Country::Ukraine,
        Country::Russia,
        Country::Germany,
        Country::France,
        Country::Spain,
        Country::Italy,
        Country::Poland,
        Country::Portugal,
        Country::Turkey,
        Country::China,
        Country::Japan,
        Country::SouthKorea,
        Country::Kazakhstan,
        Country::UnitedKingdom,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Country::Ukraine => "UA",
            Country::Russia => "RU",
            Country::Germany => "DE",
            Country::France => "FR",
            Country::Spain => "ES",
            Country::Italy => "IT",
            Country::Poland => "PL",
            Country::Portugal => "PT",
            Country::Turkey => "TR",
            Country::China => "CN",
            Country::Japan => "JP",
            Country::SouthKorea => "KR",
            Country::Kazakhstan => "KZ",
            Country::UnitedKingdom => "GB",
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Country::Ukraine => Language::Ukrainian,
            Country::Russia => Language::Russian,
            Country::Germany => Language::German,
            Country::France => Language::French,
            Country::Spain => Language::Spanish,
            Country::Italy => Language::Italian,
            Country::Poland => Language::Polish,
            Country::Portugal => Language::Portuguese,
            Country::Turkey => Language::Turkish,
            Country::China => Language::Chinese,
            Country::Japan => Language::Japanese,
            Country::SouthKorea => Language::Korean,
            Country::Kazakhstan => Language::Kazakh,
            Country::UnitedKingdom => Language::English,
        }
    }

    /// Translation key holding the country's display name.
    pub fn name_key(&self) -> String {
        format!("countries.{}", self.code())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Country::ALL
            .into_iter()
            .find(|country| country.code() == code)
            .ok_or_else(|| format!("Unknown country code: {}", s))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
