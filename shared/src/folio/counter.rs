//! Server-held folio counter
//!
//! Only the server mutates a counter. Clients read it to render previews.

use serde::{Deserialize, Serialize};

use super::format::FolioFormat;

/// Counter state of a sequence or series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioCounter {
    /// Last number issued (0 = nothing issued yet)
    pub current_sequence: u64,
    /// Restart numbering at the first issuance of a new year
    #[serde(default)]
    pub reset_yearly: bool,
    /// Year of the last issuance, maintained by the server
    #[serde(default)]
    pub last_reset_year: Option<i32>,
}

/// A folio handed out by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedFolio {
    pub folio: String,
    pub number: u64,
    pub year: i32,
}

impl FolioCounter {
    pub fn new(reset_yearly: bool) -> Self {
        Self {
            current_sequence: 0,
            reset_yearly,
            last_reset_year: None,
        }
    }

    /// Number the next issuance would receive, ignoring a pending yearly reset
    pub fn next_number(&self) -> u64 {
        self.current_sequence.saturating_add(1)
    }

    /// Whether issuing in `year` restarts the numbering
    pub fn resets_in(&self, year: i32) -> bool {
        self.reset_yearly && self.last_reset_year.is_some_and(|last| last != year)
    }

    /// Number the next issuance in `year` will receive, pending reset included
    pub fn upcoming(&self, year: i32) -> u64 {
        if self.resets_in(year) {
            1
        } else {
            self.next_number()
        }
    }

    /// Consume the next number and render it
    pub fn issue(&mut self, format: &FolioFormat, year: i32) -> IssuedFolio {
        if self.resets_in(year) {
            self.current_sequence = 0;
        }
        self.current_sequence = self.next_number();
        self.last_reset_year = Some(year);
        IssuedFolio {
            folio: format.render(year, self.current_sequence),
            number: self.current_sequence,
            year,
        }
    }

    /// Administrative override; may move the counter backwards.
    ///
    /// Stamps `year` so a pending yearly reset does not discard the override.
    pub fn set_current(&mut self, current_sequence: u64, year: i32) {
        self.current_sequence = current_sequence;
        self.last_reset_year = Some(year);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_increments() {
        let format = FolioFormat::new("FAC").with_padding(4);
        let mut counter = FolioCounter::new(false);
        assert_eq!(counter.issue(&format, 2026).folio, "FAC-0001");
        assert_eq!(counter.issue(&format, 2026).folio, "FAC-0002");
        assert_eq!(counter.current_sequence, 2);
    }

    #[test]
    fn yearly_reset_on_first_issue_of_new_year() {
        let format = FolioFormat::new("FAC").with_padding(3);
        let mut counter = FolioCounter::new(true);
        counter.issue(&format, 2025);
        counter.issue(&format, 2025);
        assert_eq!(counter.current_sequence, 2);

        let issued = counter.issue(&format, 2026);
        assert_eq!(issued.number, 1);
        assert_eq!(issued.folio, "FAC-001");
        assert_eq!(counter.issue(&format, 2026).number, 2);
    }

    #[test]
    fn no_reset_when_disabled() {
        let format = FolioFormat::new("FAC");
        let mut counter = FolioCounter::new(false);
        counter.set_current(41, 2025);
        assert_eq!(counter.issue(&format, 2026).number, 42);
    }

    #[test]
    fn upcoming_sees_pending_reset() {
        let format = FolioFormat::new("FAC");
        let mut counter = FolioCounter::new(true);
        counter.issue(&format, 2025);
        counter.issue(&format, 2025);
        assert_eq!(counter.upcoming(2025), 3);
        assert_eq!(counter.upcoming(2026), 1);
    }

    #[test]
    fn first_issue_never_resets() {
        let format = FolioFormat::new("FAC");
        let mut counter = FolioCounter::new(true);
        assert!(!counter.resets_in(2026));
        assert_eq!(counter.issue(&format, 2026).number, 1);
    }

    #[test]
    fn override_survives_year_change() {
        let format = FolioFormat::new("FAC");
        let mut counter = FolioCounter::new(true);
        counter.issue(&format, 2025);
        counter.set_current(99, 2026);
        assert_eq!(counter.issue(&format, 2026).number, 100);
    }
}
