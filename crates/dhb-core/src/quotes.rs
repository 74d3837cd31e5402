use rand::{seq::IndexedRandom, Rng};

pub const QUOTE_MARKER: &str = "📿";

pub const QUOTES: &[&str] = &[
    "The best among you are those who learn the Qur'an and teach it.",
    "Pray as if it's your last day on earth.",
    "Good deeds erase bad deeds.",
    "Patience is light.",
    "Charity does not decrease wealth.",
];

/// A uniformly random quote from [`QUOTES`], prefixed with the marker.
pub fn random_quote() -> String {
    pick_quote(&mut rand::rng())
}

pub fn pick_quote<R: Rng + ?Sized>(rng: &mut R) -> String {
    // QUOTES is a non-empty const, so `choose` always yields.
    let quote = QUOTES.choose(rng).copied().unwrap_or(QUOTES[0]);
    format!("{QUOTE_MARKER} {quote}")
}
