//! Telegram update handlers.
//!
//! Only slash-commands are answered; any other text is ignored, as are
//! commands outside the registered table.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use dhb_core::domain::ChatId;

use crate::router::AppState;

mod commands;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if text.starts_with('/') {
        commands::handle_command(&state, ChatId(msg.chat.id.0), text).await;
    }

    Ok(())
}
