/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type. Lookups turn every
/// variant into a user-facing line; only `Config` is allowed to stop the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid time {input:?}: {reason}")]
    TimeFormat { input: String, reason: String },

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
