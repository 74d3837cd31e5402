//! Command dispatcher: the static table from command name to response producer.
//!
//! Every command is a stateless request/response exchange. Routing of unknown
//! names is the host's job; the dispatcher only knows the registered set.

use std::sync::Arc;

use crate::{
    location::PlaceName,
    ports::{PrayerTimesService, WeatherService},
    prayer, quotes, weather,
};

pub const WELCOME_HEADER: &str = "🌙 Welcome to DailyHelperS Bot!";
pub const REMINDER_PLACEHOLDER: &str = "⏰ Reminder feature coming soon! (Demo)";

/// What a command produces. Place-bound variants carry their place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Help,
    Weather(PlaceName),
    PrayerTimes(PlaceName),
    Quote,
    /// Intentionally unimplemented.
    Reminder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub action: Action,
}

const fn cmd(name: &'static str, description: &'static str, action: Action) -> CommandSpec {
    CommandSpec {
        name,
        description,
        action,
    }
}

/// Registered commands, in help/menu order.
pub const COMMANDS: &[CommandSpec] = &[
    cmd("start", "Show available commands", Action::Help),
    cmd(
        "weather_addis",
        "Weather for Addis Ababa",
        Action::Weather(PlaceName::AddisAbaba),
    ),
    cmd(
        "weather_haramaya",
        "Weather for Haramaya",
        Action::Weather(PlaceName::Haramaya),
    ),
    cmd(
        "weather_balerobe",
        "Weather for Bale Robe",
        Action::Weather(PlaceName::BaleRobe),
    ),
    cmd(
        "prayer_addis",
        "Prayer times for Addis Ababa",
        Action::PrayerTimes(PlaceName::AddisAbaba),
    ),
    cmd(
        "prayer_haramaya",
        "Prayer times for Haramaya",
        Action::PrayerTimes(PlaceName::Haramaya),
    ),
    cmd(
        "prayer_balerobe",
        "Prayer times for Bale Robe",
        Action::PrayerTimes(PlaceName::BaleRobe),
    ),
    cmd("quote", "Daily Islamic quote", Action::Quote),
    cmd(
        "reminder",
        "Set a study/prayer reminder (demo)",
        Action::Reminder,
    ),
];

/// Welcome text listing every command except `start` itself.
pub fn help_text() -> String {
    let mut out = format!("{WELCOME_HEADER}\n\nAvailable commands:");
    for c in COMMANDS.iter().filter(|c| c.action != Action::Help) {
        out.push_str(&format!("\n/{} - {}", c.name, c.description));
    }
    out
}

pub struct CommandDispatcher {
    weather: Arc<dyn WeatherService>,
    prayer: Arc<dyn PrayerTimesService>,
}

impl CommandDispatcher {
    pub fn new(weather: Arc<dyn WeatherService>, prayer: Arc<dyn PrayerTimesService>) -> Self {
        Self { weather, prayer }
    }

    pub fn commands(&self) -> &'static [CommandSpec] {
        COMMANDS
    }

    /// Exact-match lookup; callers normalise case and strip `/` and `@bot`.
    pub fn lookup(&self, name: &str) -> Option<&'static CommandSpec> {
        COMMANDS.iter().find(|c| c.name == name)
    }

    pub async fn run(&self, action: Action) -> String {
        match action {
            Action::Help => help_text(),
            Action::Weather(place) => weather::lookup(self.weather.as_ref(), place).await,
            Action::PrayerTimes(place) => prayer::lookup(self.prayer.as_ref(), place).await,
            Action::Quote => quotes::random_quote(),
            Action::Reminder => REMINDER_PLACEHOLDER.to_string(),
        }
    }

    /// Run a registered command by name. `None` for names outside the table.
    pub async fn dispatch(&self, name: &str) -> Option<String> {
        let spec = self.lookup(name)?;
        Some(self.run(spec.action).await)
    }
}
