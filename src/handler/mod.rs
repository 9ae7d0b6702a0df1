mod callback;
mod command;
mod conversation;
mod keyboard;
mod message;

use callback::get_callback_handler;

pub use conversation::Conversation;

use command::get_command_handler;
use message::handle_message_unknown;
use teloxide::{
    dispatching::{dialogue, UpdateFilterExt, UpdateHandler},
    types::Update,
};

use crate::service::dialogue::{model::SessionState, SessionStorage};

pub fn get_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dialogue::enter::<Update, SessionStorage, SessionState, _>()
        .branch(get_command_handler())
        .branch(get_callback_handler())
        .branch(Update::filter_message().endpoint(handle_message_unknown))
}
