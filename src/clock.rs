use chrono::{Local, NaiveDate};

/// Source of "today" for dating new posts.
pub(crate) trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the machine.
pub(crate) struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
pub(crate) struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn local_clock_matches_chrono() {
        // may straddle midnight
        let before = Local::now().date_naive();
        let today = LocalClock.today();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
