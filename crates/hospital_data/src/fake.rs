//! Fake data generation helpers.
//!
//! Names, e-mails, addresses and company names come from the `fake` crate;
//! phone numbers, dates and amounts are shaped here to match the hospital
//! schema. Every value is drawn from the wrapped RNG, so a seeded RNG gives
//! a reproducible stream.

use chrono::{Datelike, Months, NaiveDate, NaiveTime};
use fake::faker::address::en::{BuildingNumber, CityName, PostCode, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::Fake;
use rand::Rng;

const SECONDS_PER_DAY: u32 = 86_400;

/// Fake data generator over a caller-supplied RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    /// Full "First Last" name
    pub fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    /// Address on a free mail provider
    pub fn email(&mut self) -> String {
        FreeEmail().fake_with_rng(&mut self.rng)
    }

    /// Single-line postal address
    pub fn address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let city: String = CityName().fake_with_rng(&mut self.rng);
        let postcode: String = PostCode().fake_with_rng(&mut self.rng);
        format!("{} {}, {} {}", number, street, city, postcode)
    }

    pub fn company_name(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    /// Pakistani mobile number: `03`, one operator digit, seven subscriber digits
    pub fn contact_number(&mut self) -> String {
        let operator: u32 = self.rng.random_range(0..=9);
        let subscriber: u32 = self.rng.random_range(1_000_000..=9_999_999);
        format!("03{}{}", operator, subscriber)
    }

    /// Birth date for someone between `min_age` and `max_age` years old on `today`
    pub fn date_of_birth(&mut self, today: NaiveDate, min_age: u32, max_age: u32) -> NaiveDate {
        let latest = years_before(today, min_age);
        let earliest = years_before(today, max_age + 1)
            .succ_opt()
            .unwrap_or(latest);
        self.date_between(earliest, latest)
    }

    /// Uniform date in `[start, end]`; returns `start` when the range is empty
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days();
        if span <= 0 {
            return start;
        }
        let offset = self.rng.random_range(0..=span);
        start + chrono::Duration::days(offset)
    }

    /// Date between January 1st of `today`'s year and `today`
    pub fn date_this_year(&mut self, today: NaiveDate) -> NaiveDate {
        let jan_first = today.with_ordinal(1).unwrap_or(today);
        self.date_between(jan_first, today)
    }

    /// Date within the year leading up to `today`
    pub fn date_past_year(&mut self, today: NaiveDate) -> NaiveDate {
        self.date_between(years_before(today, 1), today)
    }

    /// Time of day with whole-second precision
    pub fn time_of_day(&mut self) -> NaiveTime {
        let secs = self.rng.random_range(0..SECONDS_PER_DAY);
        NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
    }

    /// Uniform amount in `[min, max]` rounded to cents
    pub fn amount(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..=max);
        (value * 100.0).round() / 100.0
    }

    /// Generate a random integer in range
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Generate a boolean with given probability of true
    pub fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    /// Pick a random id from a non-empty id list
    pub fn pick_id(&mut self, ids: &[i64]) -> i64 {
        ids[self.rng.random_range(0..ids.len())]
    }
}

/// Whole years between `born` and `today`
pub fn age_on(born: NaiveDate, today: NaiveDate) -> i64 {
    let had_birthday = (today.month(), today.day()) >= (born.month(), born.day());
    (today.year() - born.year()) as i64 - if had_birthday { 0 } else { 1 }
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_deterministic_generation() {
        let mut fake1 = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        let mut fake2 = FakeData::new(ChaCha8Rng::seed_from_u64(42));

        assert_eq!(fake1.first_name(), fake2.first_name());
        assert_eq!(fake1.company_name(), fake2.company_name());
        assert_eq!(fake1.contact_number(), fake2.contact_number());
        assert_eq!(fake1.amount(100.0, 1000.0), fake2.amount(100.0, 1000.0));
    }

    #[test]
    fn test_contact_number_format() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(7));
        for _ in 0..200 {
            let number = fake.contact_number();
            assert_eq!(number.len(), 11, "{}", number);
            assert!(number.starts_with("03"));
            assert!(number.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(&number[3..4], "0", "subscriber part starts at 1000000");
        }
    }

    #[test]
    fn test_email_generation() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        let email = fake.email();
        assert!(email.contains('@'));
    }

    #[test]
    fn test_date_of_birth_age_bounds() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(3));
        for _ in 0..1000 {
            let born = fake.date_of_birth(today(), 1, 90);
            let age = age_on(born, today());
            assert!((1..=90).contains(&age), "age {} for {}", age, born);
        }
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let born = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        assert_eq!(age_on(born, today()), 24);
        let born = NaiveDate::from_ymd_opt(2000, 6, 16).unwrap();
        assert_eq!(age_on(born, today()), 23);
    }

    #[test]
    fn test_date_between_is_inclusive_and_ordered() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(11));
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        for _ in 0..100 {
            let d = fake.date_between(start, end);
            assert!(d >= start && d <= end);
        }
        assert_eq!(fake.date_between(end, start), end);
    }

    #[test]
    fn test_date_this_year_stays_in_year() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(5));
        for _ in 0..100 {
            let d = fake.date_this_year(today());
            assert_eq!(d.year(), 2024);
            assert!(d <= today());
        }
    }

    #[test]
    fn test_amount_precision() {
        let mut fake = FakeData::new(ChaCha8Rng::seed_from_u64(42));
        for _ in 0..100 {
            let amount = fake.amount(100.0, 1000.0);
            assert!((100.0..=1000.0).contains(&amount));
            assert_eq!(amount, (amount * 100.0).round() / 100.0);
        }
    }
}
