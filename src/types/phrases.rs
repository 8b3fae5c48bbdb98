use rand::seq::IndexedRandom;
use rand::Rng;

pub const PHRASES: [&str; 6] = [
    "You selected a new place to workout!",
    "New workout location selected 💪",
    "This looks like a good stop to break a sweat 🚴",
    "Sweat is just fat crying.",
    "Push yourself because no one else is going to do it for you.",
    "The only bad workout is the one that didn't happen.",
];

const FALLBACK: &str = "Workout";

/// Uniform pick from `phrases`; falls back to a plain label when the list is empty.
pub fn pick_phrase<'a, R: Rng + ?Sized>(rng: &mut R, phrases: &[&'a str]) -> &'a str {
    phrases.choose(rng).copied().unwrap_or(FALLBACK)
}
