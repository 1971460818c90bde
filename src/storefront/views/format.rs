//! Display formatting for prices, dates and countdowns (ru-RU conventions).

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// ru-RU digit group separator (no-break space)
const GROUP_SEPARATOR: char = '\u{a0}';

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Whole number with thousands grouping: `1 234 567`
pub fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped
}

/// Amount in roubles: `1 234 ₽`
pub fn format_currency(value: u64) -> String {
    format!("{}{GROUP_SEPARATOR}₽", format_amount(value))
}

/// Day, month name and time: `15 марта в 14:30`
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!(
        "{} {} в {}:{:02}",
        date.day(),
        month,
        date.hour(),
        date.minute()
    )
}

/// Time left until `target`, never negative: `1д 2ч 0 мин 0 сек`
pub fn format_countdown(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let total_seconds = (target - now).num_seconds().max(0);

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    format!("{days}д {hours}ч {minutes} мин {seconds} сек")
}

/// Keep ASCII digits only
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Current instant; views take `now` explicitly so tests can pin it
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn format_amount_should_group_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1\u{a0}000");
        assert_eq!(format_amount(1234567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn format_currency_should_append_rouble_sign() {
        assert_eq!(format_currency(5000), "5\u{a0}000\u{a0}₽");
    }

    #[test]
    fn format_date_should_use_genitive_month() {
        let date = Utc.with_ymd_and_hms(2026, 3, 15, 14, 5, 0).unwrap();
        assert_eq!(format_date(&date), "15 марта в 14:05");
    }

    #[test]
    fn countdown_should_decompose_remaining_time() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap();
        let target = now + Duration::days(1) + Duration::hours(2);
        assert_eq!(format_countdown(target, now), "1д 2ч 0 мин 0 сек");

        let target = now + Duration::seconds(3_723);
        assert_eq!(format_countdown(target, now), "0д 1ч 2 мин 3 сек");
    }

    #[test]
    fn countdown_should_never_go_negative() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap();
        let target = now - Duration::hours(5);
        assert_eq!(format_countdown(target, now), "0д 0ч 0 мин 0 сек");
    }

    #[test]
    fn digits_only_should_strip_everything_else() {
        assert_eq!(digits_only("1\u{a0}000 ₽"), "1000");
        assert_eq!(digits_only("abc"), "");
    }
}
