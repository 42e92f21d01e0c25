//! Screen text per language

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    #[default]
    English,
    Polish,
}

impl Language {
    /// String table for this language
    pub fn locale(self) -> &'static Locale {
        match self {
            Language::English => &ENGLISH,
            Language::Polish => &POLISH,
        }
    }
}

/// Noun forms for a counted quantity
///
/// `one` is used for exactly 1, `few` for 2 to 4, `many` for 5 and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl PluralForms {
    pub const fn select(&self, count: usize) -> &'static str {
        match count {
            1 => self.one,
            2..=4 => self.few,
            _ => self.many,
        }
    }
}

/// All user-visible strings of the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub occupied: &'static str,
    pub available_all_day: &'static str,
    /// Followed by the next meeting's start time
    pub available_until: &'static str,
    /// Followed by the host's name
    pub hosted_by: &'static str,
    /// Followed by the error message
    pub unhandled_error: &'static str,
    pub connection_code_title: &'static str,
    pub connection_code_hint: [&'static str; 2],
    /// Placed before the overflow count
    pub overflow_prefix: &'static str,
    /// Placed after the overflow count
    pub overflow_noun: PluralForms,
}

pub static ENGLISH: Locale = Locale {
    occupied: "Occupied",
    available_all_day: "Available all day",
    available_until: "Available until ",
    hosted_by: "Hosted by ",
    unhandled_error: "Unhandled error: ",
    connection_code_title: "Connection Code",
    connection_code_hint: [
        "Log in to app.roombelt.com",
        "and use the connection code there.",
    ],
    overflow_prefix: "+",
    overflow_noun: PluralForms {
        one: "more meeting",
        few: "more meetings",
        many: "more meetings",
    },
};

pub static POLISH: Locale = Locale {
    occupied: "Zajęte",
    available_all_day: "Wolne cały dzień",
    available_until: "Wolne do ",
    hosted_by: "Organizator: ",
    unhandled_error: "Nieobsłużony błąd: ",
    connection_code_title: "Kod połączenia",
    connection_code_hint: [
        "Zaloguj się na app.roombelt.com",
        "i wpisz tam kod połączenia.",
    ],
    overflow_prefix: "+",
    overflow_noun: PluralForms {
        one: "spotkanie",
        few: "spotkania",
        many: "spotkań",
    },
};
