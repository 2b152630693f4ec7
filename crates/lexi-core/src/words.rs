use rand::Rng;
use rand::seq::SliceRandom;

/// Pool for the "random word" action
pub const RANDOM_WORDS: &[&str] = &[
    "serendipity",
    "ephemeral",
    "eloquent",
    "sonder",
    "luminous",
    "catalyst",
    "zenith",
    "mellifluous",
    "aesthetic",
    "resilience",
    "quintessential",
    "labyrinth",
    "epiphany",
    "solace",
    "ineffable",
];

pub fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    RANDOM_WORDS.choose(rng).copied().unwrap_or("serendipity")
}
