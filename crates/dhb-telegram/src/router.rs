use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*, types::BotCommand};

use dhb_core::{commands::CommandDispatcher, config::Config, messaging::port::MessagingPort};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<CommandDispatcher>,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Run the inbound polling loop until the process is stopped.
///
/// teloxide handles different chats concurrently; commands are independent
/// and need no ordering between them.
pub async fn run_polling(
    cfg: Arc<Config>,
    dispatcher: Arc<CommandDispatcher>,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!(username = %me.username(), "telegram bot started"),
        Err(e) => tracing::warn!(error = %e, "getMe failed; continuing with polling"),
    }

    // Best-effort: the menu is cosmetic.
    if let Err(e) = bot.set_my_commands(menu_commands(&dispatcher)).await {
        tracing::warn!(error = %e, "failed to register command menu");
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState {
        dispatcher,
        messenger,
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            tracing::debug!(update_id = ?upd.id, "ignoring non-message update");
        })
        .build()
        .dispatch()
        .await;

    Ok(())
}

fn menu_commands(dispatcher: &CommandDispatcher) -> Vec<BotCommand> {
    dispatcher
        .commands()
        .iter()
        .map(|c| BotCommand::new(c.name, c.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use dhb_core::commands::COMMANDS;

    use super::*;
    use crate::handlers::tests::test_dispatcher;

    #[test]
    fn menu_mirrors_command_table() {
        let menu = menu_commands(&test_dispatcher());
        assert_eq!(menu.len(), COMMANDS.len());
        assert_eq!(menu[0].command, "start");
        assert_eq!(menu[1].description, "Weather for Addis Ababa");
    }
}
