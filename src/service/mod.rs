pub mod dialogue;
pub mod locale;
mod messenger;
mod translation;

pub use locale::{Country, CountryLocaleResolver, Language, LocaleResolver};
pub use messenger::{Messenger, TelegramMessenger};
pub use translation::{I18nTranslator, Translator};
