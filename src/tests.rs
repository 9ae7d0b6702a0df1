use chrono::NaiveDateTime;
use teloxide::dispatching::dialogue::{InMemStorage, Storage};
use teloxide::dptree;
use teloxide_tests::{MockBot, MockCallbackQuery, MockMessageText, MockUser};

use crate::handler::get_handler;
use crate::service::dialogue::model::SessionState;
use crate::service::{I18nTranslator, Language, Translator};
use crate::storage::{ProfileStore, CREATED_AT_FORMAT};
use crate::utils::test::setup_conversation;

fn english(key: &str) -> String {
    I18nTranslator.render(Language::English, key, &[])
}

#[tokio::test]
async fn test_start_command() {
    let (conversation, store) = setup_conversation();
    let mut bot = MockBot::new(MockMessageText::new().text("/start"), get_handler());
    bot.dependencies(dptree::deps![InMemStorage::<SessionState>::new().erase(), conversation]);

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 2);

    let menu = responses.sent_messages.last().expect("No sent messages were detected!");
    assert_eq!(menu.text(), Some(english("choose_country").as_str()));
    let keyboard = menu.reply_markup().expect("country menu has no keyboard");
    assert_eq!(keyboard.inline_keyboard.iter().flatten().count(), 13);

    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_about_me_command_before_start() {
    let (conversation, _store) = setup_conversation();
    let mut bot = MockBot::new(MockMessageText::new().text("/about-me"), get_handler());
    bot.dependencies(dptree::deps![InMemStorage::<SessionState>::new().erase(), conversation]);

    bot.dispatch().await;

    let responses = bot.get_responses();
    let message = responses.sent_messages.last().expect("No sent messages were detected!");
    assert_eq!(message.text(), Some(english("profile.not_found").as_str()));
}

#[tokio::test]
async fn test_about_me_command_after_start() {
    let (conversation, store) = setup_conversation();
    let mut bot = MockBot::new(MockMessageText::new().text("/start"), get_handler());
    bot.dependencies(dptree::deps![InMemStorage::<SessionState>::new().erase(), conversation]);

    bot.dispatch().await;

    bot.update(MockMessageText::new().text("/about_me"));
    bot.dispatch().await;

    let responses = bot.get_responses();
    let text = responses
        .sent_messages
        .last()
        .and_then(|message| message.text())
        .expect("No sent messages were detected!");

    assert_ne!(text, english("profile.not_found"));
    assert!(text.contains("First"));
    assert!(text.contains(&MockUser::ID.to_string()));

    let created_at = store
        .get_user(MockUser::ID as i64)
        .await
        .unwrap()
        .expect("user was not registered")
        .created_at_display();
    assert!(NaiveDateTime::parse_from_str(&created_at, CREATED_AT_FORMAT).is_ok());
    assert!(text.contains(&created_at));
}

#[tokio::test]
async fn test_country_callback_switches_language() {
    let (conversation, store) = setup_conversation();
    let mut bot = MockBot::new(MockMessageText::new().text("/start"), get_handler());
    bot.dependencies(dptree::deps![InMemStorage::<SessionState>::new().erase(), conversation]);

    bot.dispatch().await;

    bot.update(MockCallbackQuery::new().data("UA"));
    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 2);
    assert_eq!(responses.answered_callback_queries.len(), 1);

    let ukraine = I18nTranslator.render(Language::Ukrainian, "countries.UA", &[]);
    let confirmation = responses.sent_messages[0].text().expect("confirmation has no text");
    assert!(confirmation.contains(&format!("{} (UA)", ukraine)));

    let stored = store.get_user(MockUser::ID as i64).await.unwrap().unwrap();
    assert_eq!(stored.country.as_deref(), Some("UA"));

    bot.update(MockMessageText::new().text("/about-me"));
    bot.dispatch().await;

    let responses = bot.get_responses();
    let text = responses
        .sent_messages
        .last()
        .and_then(|message| message.text())
        .expect("No sent messages were detected!");

    assert!(text.contains(&format!("{} (UA)", ukraine)));
    assert!(!text.contains("First name:"));
}

#[tokio::test]
async fn test_unknown_country_callback_is_answered() {
    let (conversation, store) = setup_conversation();
    let mut bot = MockBot::new(MockCallbackQuery::new().data("XX"), get_handler());
    bot.dependencies(dptree::deps![InMemStorage::<SessionState>::new().erase(), conversation]);

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.answered_callback_queries.len(), 1);

    let expected = I18nTranslator.render(Language::English, "unknown_country", &[]).replace("%{code}", "XX");
    let message = responses.sent_messages.last().expect("No sent messages were detected!");
    assert_eq!(message.text(), Some(expected.as_str()));
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_plain_text_gets_usage_hint() {
    let (conversation, _store) = setup_conversation();
    let mut bot = MockBot::new(MockMessageText::new().text("hello there"), get_handler());
    bot.dependencies(dptree::deps![InMemStorage::<SessionState>::new().erase(), conversation]);

    bot.dispatch().await;

    let responses = bot.get_responses();
    let message = responses.sent_messages.last().expect("No sent messages were detected!");
    assert_eq!(message.text(), Some(english("unknown_command").as_str()));
}
