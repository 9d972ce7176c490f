//! Partial format update sent by the format editor

use serde::{Deserialize, Serialize};

use super::counter::FolioCounter;
use super::format::{FolioFormat, YearFormat};

/// Partial-attribute update of the format fields.
///
/// Never carries the counter: jumping the counter is a separate request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioFormatPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_year: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_format: Option<YearFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_yearly: Option<bool>,
}

impl FolioFormatPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply onto a stored record. `current_sequence` is left untouched.
    pub fn apply(&self, format: &mut FolioFormat, counter: &mut FolioCounter) {
        if let Some(prefix) = &self.prefix {
            format.prefix = prefix.clone();
        }
        if let Some(include_year) = self.include_year {
            format.include_year = include_year;
        }
        if let Some(year_format) = self.year_format {
            format.year_format = year_format;
        }
        if let Some(separator) = &self.separator {
            format.separator = separator.clone();
        }
        if let Some(padding) = self.padding {
            format.padding = padding;
        }
        if let Some(reset_yearly) = self.reset_yearly {
            counter.reset_yearly = reset_yearly;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_counter_value() {
        let mut format = FolioFormat::new("FAC");
        let mut counter = FolioCounter::new(false);
        counter.current_sequence = 41;

        let patch = FolioFormatPatch {
            padding: Some(4),
            reset_yearly: Some(true),
            ..Default::default()
        };
        patch.apply(&mut format, &mut counter);

        assert_eq!(format.padding, 4);
        assert_eq!(format.prefix, "FAC");
        assert!(counter.reset_yearly);
        assert_eq!(counter.current_sequence, 41);
    }

    #[test]
    fn serializes_only_present_fields() {
        let patch = FolioFormatPatch {
            prefix: Some("COT".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"prefix":"COT"}"#);
        assert!(FolioFormatPatch::default().is_empty());
    }
}
