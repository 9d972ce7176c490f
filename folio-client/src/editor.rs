//! Row edit form: format fields, live preview and the counter override input.

use shared::AppResult;
use shared::folio::validation::{
    coerce_padding, normalize_prefix, parse_next_folio, validate_format,
};
use shared::folio::{FolioCounter, FolioFormat, FolioFormatPatch, SequenceRecord, YearFormat};
use shared::models::SetInitialFolio;

/// Raw form inputs, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDraft {
    pub prefix: String,
    pub include_year: bool,
    pub year_format: YearFormat,
    pub separator: String,
    pub padding: String,
    pub reset_yearly: bool,
    /// "Next folio to issue"; blank leaves the counter alone
    pub next_folio: String,
}

impl FormatDraft {
    pub fn from_record<R: SequenceRecord>(record: &R) -> Self {
        let format = record.format();
        Self {
            prefix: format.prefix.clone(),
            include_year: format.include_year,
            year_format: format.year_format,
            separator: format.separator.clone(),
            padding: format.padding.to_string(),
            reset_yearly: record.counter().reset_yearly,
            next_folio: String::new(),
        }
    }

    /// Normalized format the draft describes
    pub fn format(&self) -> AppResult<FolioFormat> {
        let format = FolioFormat {
            prefix: normalize_prefix(&self.prefix)?,
            include_year: self.include_year,
            year_format: self.year_format,
            separator: self.separator.clone(),
            padding: coerce_padding(&self.padding),
        };
        validate_format(&format)?;
        Ok(format)
    }
}

/// Counter override parsed from the "next folio" input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterOverride {
    /// Blank, zero, negative or non-numeric input
    None,
    NextFolio(u64),
}

impl CounterOverride {
    pub fn parse(raw: &str) -> Self {
        parse_next_folio(raw).map_or(Self::None, Self::NextFolio)
    }

    pub fn is_requested(&self) -> bool {
        matches!(self, Self::NextFolio(_))
    }

    /// Request body, or `None` when no request must be sent
    pub fn payload(&self) -> Option<SetInitialFolio> {
        match self {
            Self::None => None,
            Self::NextFolio(next) => SetInitialFolio::for_next_folio(*next),
        }
    }
}

/// Edit form of one row, remembering what the record looked like on open
#[derive(Debug, Clone)]
pub struct FormatEditor {
    baseline: FolioFormat,
    counter: FolioCounter,
    pub draft: FormatDraft,
}

impl FormatEditor {
    pub fn open<R: SequenceRecord>(record: &R) -> Self {
        Self {
            baseline: record.format().clone(),
            counter: record.counter().clone(),
            draft: FormatDraft::from_record(record),
        }
    }

    /// Re-base on a fresh server record, keeping the pending override input
    pub fn rebase<R: SequenceRecord>(&mut self, record: &R) {
        let next_folio = std::mem::take(&mut self.draft.next_folio);
        *self = Self::open(record);
        self.draft.next_folio = next_folio;
    }

    /// Partial update holding only the fields that differ from the record.
    ///
    /// `year_format` is only sent while the year is included.
    pub fn patch(&self) -> AppResult<FolioFormatPatch> {
        let format = self.draft.format()?;
        let base = &self.baseline;
        let mut patch = FolioFormatPatch::default();

        if format.prefix != base.prefix {
            patch.prefix = Some(format.prefix);
        }
        if format.include_year != base.include_year {
            patch.include_year = Some(format.include_year);
        }
        if format.include_year && format.year_format != base.year_format {
            patch.year_format = Some(format.year_format);
        }
        if format.separator != base.separator {
            patch.separator = Some(format.separator);
        }
        if format.padding != base.padding {
            patch.padding = Some(format.padding);
        }
        if self.draft.reset_yearly != self.counter.reset_yearly {
            patch.reset_yearly = Some(self.draft.reset_yearly);
        }
        Ok(patch)
    }

    /// Live preview of the next folio under the draft format.
    ///
    /// A pending override shows the number it would produce; otherwise the
    /// counter answers as the server would, under the draft's reset flag.
    pub fn preview(&self, year: i32) -> AppResult<String> {
        let format = self.draft.format()?;
        let number = match self.counter_override() {
            CounterOverride::NextFolio(next) => next,
            CounterOverride::None => FolioCounter {
                reset_yearly: self.draft.reset_yearly,
                ..self.counter.clone()
            }
            .upcoming(year),
        };
        Ok(format.render(year, number))
    }

    pub fn counter_override(&self) -> CounterOverride {
        CounterOverride::parse(&self.draft.next_folio)
    }

    pub fn is_dirty(&self) -> bool {
        self.counter_override().is_requested() || !self.patch().is_ok_and(|p| p.is_empty())
    }
}
