/// Parse a `seed` query value. Surrounding whitespace is ignored; anything
/// that is not a plain `u64` falls back to a random seed.
pub fn parse_seed(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}
