use dhb_core::domain::ChatId;

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

/// Run a registered command and deliver its reply. Returns `false` when the
/// command is not registered (nothing is sent).
pub(crate) async fn handle_command(state: &AppState, chat_id: ChatId, text: &str) -> bool {
    let (cmd, args) = parse_command(text);

    let Some(spec) = state.dispatcher.lookup(&cmd) else {
        tracing::debug!(chat_id = chat_id.0, command = %cmd, "ignoring unknown command");
        return false;
    };
    if !args.is_empty() {
        tracing::debug!(command = spec.name, "command arguments ignored");
    }

    tracing::info!(chat_id = chat_id.0, command = spec.name, "command received");
    let reply = state.dispatcher.run(spec.action).await;

    if let Err(e) = state.messenger.send_text(chat_id, &reply).await {
        tracing::warn!(chat_id = chat_id.0, command = spec.name, error = %e, "reply not delivered");
    }
    true
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dhb_core::commands::{help_text, REMINDER_PLACEHOLDER};

    use super::*;
    use crate::handlers::tests::{test_state, FakeMessenger};

    #[test]
    fn parses_bot_suffix_and_args() {
        assert_eq!(
            parse_command("/Quote@DailyHelperSBot now please"),
            ("quote".to_string(), "now please".to_string())
        );
        assert_eq!(
            parse_command("  /weather_addis  "),
            ("weather_addis".to_string(), String::new())
        );
    }

    #[tokio::test]
    async fn replies_to_registered_commands() {
        let messenger = Arc::new(FakeMessenger::default());
        let state = test_state(messenger.clone());

        assert!(handle_command(&state, ChatId(42), "/reminder").await);
        assert!(handle_command(&state, ChatId(42), "/start@DailyHelperSBot").await);

        let sends = messenger.sends.lock().unwrap();
        assert_eq!(
            sends.as_slice(),
            &[
                (ChatId(42), REMINDER_PLACEHOLDER.to_string()),
                (ChatId(42), help_text()),
            ]
        );
    }

    #[tokio::test]
    async fn failures_still_produce_a_reply() {
        let messenger = Arc::new(FakeMessenger::default());
        let state = test_state(messenger.clone());

        assert!(handle_command(&state, ChatId(7), "/weather_haramaya").await);
        assert!(handle_command(&state, ChatId(7), "/prayer_balerobe").await);

        let sends = messenger.sends.lock().unwrap();
        assert_eq!(sends.len(), 2);
        assert!(sends[0].1.starts_with("❌ Error fetching weather:"));
        assert!(sends[0].1.contains("service unavailable"));
        assert_eq!(sends[1].1, "⚠️ Could not fetch prayer times.");
    }

    #[tokio::test]
    async fn ignores_unknown_commands() {
        let messenger = Arc::new(FakeMessenger::default());
        let state = test_state(messenger.clone());

        assert!(!handle_command(&state, ChatId(1), "/weather_nairobi").await);
        assert!(!handle_command(&state, ChatId(1), "/").await);
        assert!(messenger.sends.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        let messenger = Arc::new(FakeMessenger {
            fail: true,
            ..Default::default()
        });
        let state = test_state(messenger.clone());

        assert!(handle_command(&state, ChatId(3), "/quote").await);
    }
}
