use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::service::{Country, Language, Translator};

pub const ABOUT_ME_CALLBACK: &str = "about_me";

const COUNTRY_MENU_COLUMNS: usize = 3;

/// One button per menu country; the callback payload is the country code.
pub fn get_country_menu_keyboard(translator: &dyn Translator, language: Language) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = Country::MENU
        .chunks(COUNTRY_MENU_COLUMNS)
        .map(|row| {
            row.iter()
                .map(|country| {
                    InlineKeyboardButton::callback(translator.render(language, &country.name_key(), &[]), country.code())
                })
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

pub fn get_about_me_keyboard(translator: &dyn Translator, language: Language) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::callback(
        translator.render(language, "buttons.about_me", &[]),
        ABOUT_ME_CALLBACK,
    )]])
}
