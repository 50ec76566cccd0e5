//! Guest username generation.
//!
//! Temporary annotators get an adjective_animal handle (snobby_muskrat,
//! orderly_spider) so the play screen has something friendly to show
//! before sign-up. Collisions are handled by the caller retrying; after
//! [`MAX_PLAIN_ATTEMPTS`] retries callers should switch to
//! [`generate_suffixed`] which appends a random number.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Retries with plain adjective_animal names before falling back to a
/// numeric suffix.
pub const MAX_PLAIN_ATTEMPTS: usize = 5;

const ADJECTIVES: &[&str] = &[
    "adored", "bashful", "candid", "dapper", "earnest", "feisty", "gleeful", "hasty", "irate",
    "jolly", "keen", "limber", "mellow", "nimble", "orderly", "plucky", "quirky", "rowdy",
    "snobby", "tranquil", "upbeat", "valiant", "wistful", "zealous",
];

const ANIMALS: &[&str] = &[
    "antelope", "badger", "civet", "donkey", "egret", "ferret", "gibbon", "heron", "ibis",
    "jackal", "kestrel", "lemur", "muskrat", "newt", "ocelot", "pangolin", "quail", "raccoon",
    "spider", "toucan", "urchin", "vole", "walrus", "yak",
];

/// Generate a plain `adjective_animal` username.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).unwrap();
    let animal = ANIMALS.choose(rng).unwrap();
    format!("{adjective}_{animal}")
}

/// Generate an `adjective_animal_NNNN` username for the collision
/// fallback path.
pub fn generate_suffixed<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base = generate(rng);
    let suffix: u16 = rng.random_range(1000..10000);
    format!("{base}_{suffix}")
}
