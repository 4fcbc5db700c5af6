//! Daily check-in streak

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day check-in counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginStreak {
    pub count: u32,
    pub last_check_in: Option<NaiveDate>,
}

impl LoginStreak {
    /// Record a check-in on `today` and return the streak length.
    ///
    /// Same day or a date before the last check-in: unchanged, and
    /// `last_check_in` never moves backwards. Next day: +1. Any longer gap:
    /// restarts at 1.
    pub fn check_in(&mut self, today: NaiveDate) -> u32 {
        let Some(last) = self.last_check_in else {
            self.count = 1;
            self.last_check_in = Some(today);
            return self.count;
        };

        match (today - last).num_days() {
            n if n <= 0 => return self.count,
            1 => self.count += 1,
            _ => self.count = 1,
        }
        self.last_check_in = Some(today);
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn test_first_check_in() {
        let mut streak = LoginStreak::default();
        assert_eq!(streak.check_in(day(1)), 1);
        assert_eq!(streak.last_check_in, Some(day(1)));
    }

    #[test]
    fn test_consecutive_days_increment() {
        let mut streak = LoginStreak::default();
        streak.check_in(day(1));
        streak.check_in(day(2));
        assert_eq!(streak.check_in(day(3)), 3);
    }

    #[test]
    fn test_same_day_is_unchanged() {
        let mut streak = LoginStreak::default();
        streak.check_in(day(1));
        streak.check_in(day(2));
        assert_eq!(streak.check_in(day(2)), 2);
    }

    #[test]
    fn test_gap_resets() {
        let mut streak = LoginStreak::default();
        streak.check_in(day(1));
        streak.check_in(day(2));
        assert_eq!(streak.check_in(day(5)), 1);
    }

    #[test]
    fn test_backdated_check_in_is_ignored() {
        let mut streak = LoginStreak::default();
        streak.check_in(day(1));
        streak.check_in(day(2));
        streak.check_in(day(3));
        assert_eq!(streak.check_in(day(2)), 3);
        assert_eq!(streak.last_check_in, Some(day(3)));
        assert_eq!(streak.check_in(day(4)), 4);
    }

    #[test]
    fn test_month_boundary() {
        let mut streak = LoginStreak::default();
        streak.check_in(NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
        assert_eq!(streak.check_in(day(1)), 2);
    }
}
