use std::{fmt, sync::Arc};

use chrono::{NaiveDateTime, Weekday};

use crate::{
    NameOfDays, PickerState, TimePickerType,
    format::{self, DateFormatter, DateTimeFormatter, TimeFormatter},
};

/// Turns the picker state and the (possibly cleared) selection into a message for the application.
pub type OnChange<Msg> = Arc<dyn Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync>;

/// Settings shared by every kind of picker.
///
/// There is no default for [`Self::on_change`], so a `Config` only comes out of one of the
/// builders: [`crate::default_date_config`], [`crate::default_time_config`] or
/// [`crate::default_date_time_config`].
pub struct Config<Msg> {
    /// Called whenever the state or the selection changes.
    pub on_change: OnChange<Msg>,

    /// Text of the selected date. (Default: [`format::date`])
    pub date_formatter: DateFormatter,

    /// Text of the selected date and time. (Default: [`format::date_time`])
    pub date_time_formatter: DateTimeFormatter,

    /// Close the popup as soon as a value is picked.
    pub auto_close: bool,

    /// Show buttons to jump a whole year. (Default: true)
    pub allow_year_navigation: bool,
}

impl<Msg> Clone for Config<Msg> {
    fn clone(&self) -> Self {
        Self {
            on_change: Arc::clone(&self.on_change),
            date_formatter: self.date_formatter,
            date_time_formatter: self.date_time_formatter,
            auto_close: self.auto_close,
            allow_year_navigation: self.allow_year_navigation,
        }
    }
}

impl<Msg> fmt::Debug for Config<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("date_formatter", &self.date_formatter)
            .field("date_time_formatter", &self.date_time_formatter)
            .field("auto_close", &self.auto_close)
            .field("allow_year_navigation", &self.allow_year_navigation)
            .finish_non_exhaustive()
    }
}

impl<Msg> Config<Msg> {
    pub(crate) fn with_defaults(on_change: OnChange<Msg>, auto_close: bool) -> Self {
        Self {
            on_change,
            date_formatter: format::date,
            date_time_formatter: format::date_time,
            auto_close,
            allow_year_navigation: true,
        }
    }

    /// Produce the message for a change of state or selection.
    pub fn change(&self, state: PickerState, selection: Option<NaiveDateTime>) -> Msg {
        log::trace!("Picker changed: open={}, selection={selection:?}", state.is_open());
        (self.on_change)(state, selection)
    }

    /// Replace the change callback.
    #[inline]
    pub fn on_change(
        mut self,
        on_change: impl Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Arc::new(on_change);
        self
    }

    /// Change how the selected date is shown. (Default: `%m/%d/%Y`)
    #[inline]
    pub fn date_formatter(mut self, date_formatter: DateFormatter) -> Self {
        self.date_formatter = date_formatter;
        self
    }

    /// Change how the selected date and time are shown. (Default: `%m/%d/%Y %I:%M %p`)
    #[inline]
    pub fn date_time_formatter(mut self, date_time_formatter: DateTimeFormatter) -> Self {
        self.date_time_formatter = date_time_formatter;
        self
    }

    /// Close the popup as soon as a value is picked.
    #[inline]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    /// Show buttons to jump a whole year. (Default: true)
    #[inline]
    pub fn allow_year_navigation(mut self, allow_year_navigation: bool) -> Self {
        self.allow_year_navigation = allow_year_navigation;
        self
    }
}

/// Settings for the calendar part of a picker.
#[derive(Clone, Debug)]
pub struct DatePickerConfig {
    /// Labels of the calendar header row.
    pub name_of_days: NameOfDays,

    /// The leftmost column of the calendar. (Default: Sunday)
    pub first_day_of_week: Weekday,

    /// Title above the calendar. (Default: [`format::title`])
    pub title_formatter: DateFormatter,

    /// Long form of a date. (Default: [`format::full_date`])
    pub full_date_formatter: DateFormatter,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            name_of_days: NameOfDays::default(),
            first_day_of_week: Weekday::Sun,
            title_formatter: format::title,
            full_date_formatter: format::full_date,
        }
    }
}

impl DatePickerConfig {
    /// The header row of the calendar, starting at [`Self::first_day_of_week`].
    pub fn header_labels(&self) -> [&str; 7] {
        self.name_of_days.ordered_from(self.first_day_of_week)
    }
}

/// Settings for the time-of-day part of a picker.
#[derive(Clone, Debug)]
pub struct TimePickerConfig {
    /// Text of the selected time. (Default: [`format::time`])
    pub time_formatter: TimeFormatter,

    /// (Default: [`TimePickerType::Analog`])
    pub time_picker_type: TimePickerType,
}

impl Default for TimePickerConfig {
    fn default() -> Self {
        Self {
            time_formatter: format::time,
            time_picker_type: TimePickerType::default(),
        }
    }
}
