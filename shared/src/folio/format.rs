//! Folio format descriptor and renderer
//!
//! A folio is rendered as `{prefix}{separator}{year?}{number}` where the
//! number is zero-padded to at least `padding` digits. Numbers wider than the
//! padding keep all their digits.

use serde::{Deserialize, Serialize};

/// Padding used when the editor receives a non-numeric width
pub const DEFAULT_PADDING: u8 = 6;
pub const MIN_PADDING: u8 = 1;
pub const MAX_PADDING: u8 = 10;
pub const MAX_PREFIX_LEN: usize = 10;
pub const MAX_SEPARATOR_LEN: usize = 2;

/// How the year is embedded in a folio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YearFormat {
    /// `26`
    #[serde(rename = "YY")]
    TwoDigit,
    /// `2026`
    #[default]
    #[serde(rename = "YYYY")]
    FourDigit,
}

impl YearFormat {
    pub fn render(&self, year: i32) -> String {
        match self {
            Self::TwoDigit => format!("{:02}", year.rem_euclid(100)),
            Self::FourDigit => format!("{:04}", year),
        }
    }
}

/// Format descriptor shared by folio sequences and invoice series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioFormat {
    /// Uppercase prefix, e.g. "COT"
    pub prefix: String,
    pub include_year: bool,
    /// Only meaningful when `include_year` is set
    #[serde(default)]
    pub year_format: YearFormat,
    /// 0-2 characters between the prefix and the rest
    #[serde(default)]
    pub separator: String,
    /// Minimum digit width of the numeric component
    pub padding: u8,
}

impl FolioFormat {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            include_year: false,
            year_format: YearFormat::default(),
            separator: "-".to_string(),
            padding: DEFAULT_PADDING,
        }
    }

    pub fn with_year(mut self, year_format: YearFormat) -> Self {
        self.include_year = true;
        self.year_format = year_format;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = padding;
        self
    }

    /// Render the folio for `number` issued in `year`
    pub fn render(&self, year: i32, number: u64) -> String {
        let year_part = if self.include_year {
            self.year_format.render(year)
        } else {
            String::new()
        };
        format!(
            "{}{}{}{:0>width$}",
            self.prefix,
            self.separator,
            year_part,
            number,
            width = usize::from(self.padding)
        )
    }

    /// Preview of the folio that follows `current_sequence`
    pub fn preview(&self, current_sequence: u64, year: i32) -> String {
        self.render(year, current_sequence.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_without_year() {
        let format = FolioFormat::new("FAC").with_padding(4);
        assert_eq!(format.render(2026, 42), "FAC-0042");
    }

    #[test]
    fn renders_two_digit_year() {
        let format = FolioFormat::new("COT")
            .with_year(YearFormat::TwoDigit)
            .with_padding(4);
        assert_eq!(format.render(2026, 41), "COT-260041");
    }

    #[test]
    fn renders_four_digit_year_without_separator() {
        let format = FolioFormat::new("OC")
            .with_year(YearFormat::FourDigit)
            .with_separator("")
            .with_padding(3);
        assert_eq!(format.render(2026, 7), "OC2026007");
    }

    #[test]
    fn year_format_ignored_when_year_excluded() {
        let mut format = FolioFormat::new("NC").with_padding(2);
        format.year_format = YearFormat::TwoDigit;
        assert_eq!(format.render(2031, 5), "NC-05");
    }

    #[test]
    fn preview_is_pure() {
        let format = FolioFormat::new("FAC")
            .with_year(YearFormat::TwoDigit)
            .with_separator("/")
            .with_padding(5);
        let first = format.preview(99, 2026);
        let second = format.preview(99, 2026);
        assert_eq!(first, second);
        assert_eq!(first, "FAC/2600100");
    }

    #[test]
    fn numeric_part_matches_padding() {
        for padding in MIN_PADDING..=MAX_PADDING {
            let format = FolioFormat::new("P").with_separator("").with_padding(padding);
            for current in [0u64, 1, 8, 41, 998] {
                let folio = format.preview(current, 2026);
                let digits = &folio[1..];
                let expected = usize::from(padding).max((current + 1).to_string().len());
                assert_eq!(digits.len(), expected, "padding {padding}, current {current}");
                assert_eq!(digits.parse::<u64>().unwrap(), current + 1);
            }
        }
    }

    #[test]
    fn overflowing_number_grows() {
        let format = FolioFormat::new("T").with_padding(2);
        assert_eq!(format.preview(99, 2026), "T-100");
        assert_eq!(format.preview(u64::MAX, 2026), format!("T-{}", u64::MAX));
    }

    #[test]
    fn year_format_serde() {
        assert_eq!(serde_json::to_string(&YearFormat::TwoDigit).unwrap(), "\"YY\"");
        let parsed: YearFormat = serde_json::from_str("\"YYYY\"").unwrap();
        assert_eq!(parsed, YearFormat::FourDigit);
    }
}
