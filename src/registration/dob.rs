use chrono::{Months, NaiveDate};

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 100;
pub const DEFAULT_AGE: u32 = 18;

/// Same calendar day `years` before `date`. February 29 falls back to the
/// 28th when the target year is not a leap year.
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// Default date of birth for a freshly mounted form.
pub fn default_date_of_birth(today: NaiveDate) -> NaiveDate {
    years_before(today, DEFAULT_AGE)
}

/// Inclusive range of selectable dates of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DobBounds {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DobBounds {
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            earliest: years_before(today, MAX_AGE),
            latest: years_before(today, MIN_AGE),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.earliest..=self.latest).contains(&date)
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.earliest, self.latest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Visible,
}

/// Modal date picker: `show` opens it, `confirm` and `cancel` close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DobPicker {
    state: PickerState,
    bounds: DobBounds,
}

impl DobPicker {
    pub fn new(bounds: DobBounds) -> Self {
        Self {
            state: PickerState::Hidden,
            bounds,
        }
    }

    pub fn bounds(&self) -> DobBounds {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.state == PickerState::Visible
    }

    pub fn show(&mut self) {
        self.state = PickerState::Visible;
    }

    pub fn cancel(&mut self) {
        self.state = PickerState::Hidden;
    }

    /// Closes the picker and returns the date to commit, or `None` when the
    /// picker was not open. Out-of-range picks snap to the nearest bound.
    pub fn confirm(&mut self, picked: NaiveDate) -> Option<NaiveDate> {
        if !self.is_visible() {
            return None;
        }
        self.state = PickerState::Hidden;
        Some(self.bounds.clamp(picked))
    }
}
