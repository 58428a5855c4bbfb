use error_stack::ResultExt;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

use crate::KernelError;

/// `dd/mm/yyyy`, e.g. `24/01/1980`.
pub static DATE_FORMAT: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

pub fn parse_date(text: &str) -> error_stack::Result<Date, KernelError> {
    Date::parse(text, DATE_FORMAT)
        .change_context(KernelError::TypeValidation)
        .attach_printable_lazy(|| format!("`{text}` is not a dd/mm/yyyy date"))
}

pub fn format_date(date: Date) -> error_stack::Result<String, KernelError> {
    date.format(DATE_FORMAT)
        .change_context(KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to format {date}"))
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use super::{format_date, parse_date};
    use crate::KernelError;

    #[test]
    fn parse_day_month_year() {
        assert_eq!(parse_date("24/01/1980").unwrap(), date!(1980 - 01 - 24));
        assert_eq!(parse_date("01/08/2020").unwrap(), date!(2020 - 08 - 01));
    }

    #[test]
    fn reject_malformed() {
        for text in ["", "1980-01-24", "32/01/1980", "24/13/1980", "24/01", "hi"] {
            let report = parse_date(text).unwrap_err();
            assert_eq!(report.current_context(), &KernelError::TypeValidation, "{text}");
        }
    }

    #[test]
    fn format_is_parsable() {
        let formatted = format_date(date!(2024 - 09 - 15)).unwrap();
        assert_eq!(formatted, "15/09/2024");
        assert_eq!(parse_date(&formatted).unwrap(), date!(2024 - 09 - 15));
    }
}
