//! Random guests for the simulation

use crate::queue::DisplayAttributes;
use rand::seq::SliceRandom;
use rand::Rng;

pub const NAMES: &[&str] = &[
    "Kai", "Luna", "Milo", "Nova", "Leo", "Mia", "Zane", "Cleo", "Jax", "Ivy", "Finn", "Ruby",
    "Aria", "Ezra", "Axel", "Iris",
];

pub const AVATARS: &[&str] = &[
    "🐼", "🦊", "🦄", "🦁", "🐯", "🐸", "🐙", "🐵", "🐨", "🐷", "🐻", "🐲", "🐹", "🐰", "👽", "🤖",
];

pub const SNACKS: &[&str] = &[
    "Popcorn 🍿",
    "Soda 🥤",
    "Hotdog 🌭",
    "Pretzel 🥨",
    "Candy 🍫",
    "Nachos 🌮",
];

/// Pick a name, avatar and snack uniformly at random
pub fn random_guest<R: Rng + ?Sized>(rng: &mut R) -> DisplayAttributes {
    DisplayAttributes::new(pick(NAMES, rng), pick(AVATARS, rng), pick(SNACKS, rng))
}

fn pick<R: Rng + ?Sized>(table: &[&'static str], rng: &mut R) -> &'static str {
    // Tables are non-empty constants
    table.choose(rng).copied().unwrap_or_default()
}
