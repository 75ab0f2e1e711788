//! Per-game statistics arithmetic.
//!
//! Every derived per-game value in a profile goes through [`per_game`]:
//! totals are divided by games played and rounded to two decimal places.
//! A player with zero games has no per-game values at all.

/// Number of decimal places kept on derived values.
pub const DECIMAL_PLACES: i32 = 2;

/// Round a value to `places` decimal places, halves to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Calculate a per-game average, rounded to [`DECIMAL_PLACES`].
///
/// Returns `None` when `games` is zero.
pub fn per_game(total: u32, games: u32) -> Option<f64> {
    if games == 0 {
        return None;
    }
    Some(round_to(total as f64 / games as f64, DECIMAL_PLACES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_game_exact() {
        assert_eq!(per_game(200, 10), Some(20.0));
        assert_eq!(per_game(50, 10), Some(5.0));
    }

    #[test]
    fn test_per_game_rounds_to_two_places() {
        // 1835 / 55 = 33.3636...
        assert_eq!(per_game(1835, 55), Some(33.36));
        // 2 / 3 = 0.6666...
        assert_eq!(per_game(2, 3), Some(0.67));
    }

    #[test]
    fn test_per_game_ties_round_to_even() {
        // 1 / 8 = 0.125, 5 / 8 = 0.625, 5 / 40 = 0.125
        assert_eq!(per_game(1, 8), Some(0.12));
        assert_eq!(per_game(5, 8), Some(0.62));
        assert_eq!(per_game(5, 40), Some(0.12));
        // 3 / 8 = 0.375
        assert_eq!(per_game(3, 8), Some(0.38));
    }

    #[test]
    fn test_per_game_zero_games() {
        assert_eq!(per_game(0, 0), None);
        assert_eq!(per_game(15, 0), None);
    }

    #[test]
    fn test_per_game_zero_total() {
        assert_eq!(per_game(0, 82), Some(0.0));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234, 2), 1.23);
        assert_eq!(round_to(1.239, 2), 1.24);
        assert_eq!(round_to(-1.239, 2), -1.24);
        assert_eq!(round_to(7.0, 0), 7.0);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }
}
