use std::{fmt, sync::Arc};

use chrono::{NaiveDateTime, Weekday};

use crate::{
    Config, DatePickerConfig, NameOfDays, OnChange, PickerState, TimePickerConfig, TimePickerType,
    format::{DateFormatter, DateTimeFormatter, TimeFormatter},
};

/// Uniform access to the parts of any picker config.
pub trait PickerConfig<Msg> {
    /// Settings shared by all pickers.
    fn common(&self) -> &Config<Msg>;

    /// Calendar settings, if this picker has a calendar.
    fn date(&self) -> Option<&DatePickerConfig> {
        None
    }

    /// Time-of-day settings, if this picker picks a time.
    fn time(&self) -> Option<&TimePickerConfig> {
        None
    }

    fn kind(&self) -> PickerKind;
}

/// Which parts a picker shows, without the settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum PickerKind {
    Date,
    DateTime,
    Time,
}

// ----------------------------------------------------------------------------

macro_rules! common_setters {
    () => {
        /// Replace the change callback.
        #[inline]
        pub fn on_change(
            mut self,
            on_change: impl Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync + 'static,
        ) -> Self {
            self.common = self.common.on_change(on_change);
            self
        }

        /// Change how the selected date is shown.
        #[inline]
        pub fn date_formatter(mut self, date_formatter: DateFormatter) -> Self {
            self.common = self.common.date_formatter(date_formatter);
            self
        }

        /// Change how the selected date and time are shown.
        #[inline]
        pub fn date_time_formatter(mut self, date_time_formatter: DateTimeFormatter) -> Self {
            self.common = self.common.date_time_formatter(date_time_formatter);
            self
        }

        /// Close the popup as soon as a value is picked.
        #[inline]
        pub fn auto_close(mut self, auto_close: bool) -> Self {
            self.common = self.common.auto_close(auto_close);
            self
        }

        /// Show buttons to jump a whole year.
        #[inline]
        pub fn allow_year_navigation(mut self, allow_year_navigation: bool) -> Self {
            self.common = self.common.allow_year_navigation(allow_year_navigation);
            self
        }

        /// Produce the message for a change of state or selection.
        pub fn change(&self, state: PickerState, selection: Option<NaiveDateTime>) -> Msg {
            self.common.change(state, selection)
        }
    };
}

macro_rules! date_setters {
    () => {
        /// Labels of the calendar header row. (Default: `Su` to `Sa`)
        #[inline]
        pub fn name_of_days(mut self, name_of_days: NameOfDays) -> Self {
            self.date.name_of_days = name_of_days;
            self
        }

        /// The leftmost column of the calendar. (Default: Sunday)
        #[inline]
        pub fn first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
            self.date.first_day_of_week = first_day_of_week;
            self
        }

        /// Title above the calendar. (Default: `%B %Y`)
        #[inline]
        pub fn title_formatter(mut self, title_formatter: DateFormatter) -> Self {
            self.date.title_formatter = title_formatter;
            self
        }

        /// Long form of a date. (Default: `%A, %B %d, %Y`)
        #[inline]
        pub fn full_date_formatter(mut self, full_date_formatter: DateFormatter) -> Self {
            self.date.full_date_formatter = full_date_formatter;
            self
        }
    };
}

macro_rules! time_setters {
    () => {
        /// Text of the selected time. (Default: `%I:%M %p`)
        #[inline]
        pub fn time_formatter(mut self, time_formatter: TimeFormatter) -> Self {
            self.time.time_formatter = time_formatter;
            self
        }

        /// Clock face or digital fields. (Default: [`TimePickerType::Analog`])
        #[inline]
        pub fn time_picker_type(mut self, time_picker_type: TimePickerType) -> Self {
            self.time.time_picker_type = time_picker_type;
            self
        }
    };
}

// ----------------------------------------------------------------------------

/// A picker for a date only.
pub struct DateConfig<Msg> {
    pub common: Config<Msg>,
    pub date: DatePickerConfig,
}

impl<Msg> DateConfig<Msg> {
    /// Calendar formatters, Sunday first, closes as soon as a day is picked.
    pub fn new(
        on_change: impl Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync + 'static,
    ) -> Self {
        Self::from_shared(Arc::new(on_change))
    }

    /// Like [`Self::new`], keeping an already shared callback.
    pub fn from_shared(on_change: OnChange<Msg>) -> Self {
        log::trace!("Building default date picker config");
        Self {
            common: Config::with_defaults(on_change, true),
            date: DatePickerConfig::default(),
        }
    }

    common_setters!();
    date_setters!();
}

impl<Msg> Clone for DateConfig<Msg> {
    fn clone(&self) -> Self {
        Self {
            common: self.common.clone(),
            date: self.date.clone(),
        }
    }
}

impl<Msg> fmt::Debug for DateConfig<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateConfig")
            .field("common", &self.common)
            .field("date", &self.date)
            .finish()
    }
}

impl<Msg> PickerConfig<Msg> for DateConfig<Msg> {
    fn common(&self) -> &Config<Msg> {
        &self.common
    }

    fn date(&self) -> Option<&DatePickerConfig> {
        Some(&self.date)
    }

    fn kind(&self) -> PickerKind {
        PickerKind::Date
    }
}

// ----------------------------------------------------------------------------

/// A picker for a time of day only.
pub struct TimeConfig<Msg> {
    pub common: Config<Msg>,
    pub time: TimePickerConfig,
}

impl<Msg> TimeConfig<Msg> {
    /// Analog clock, stays open until dismissed.
    pub fn new(
        on_change: impl Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync + 'static,
    ) -> Self {
        Self::from_shared(Arc::new(on_change))
    }

    /// Like [`Self::new`], keeping an already shared callback.
    pub fn from_shared(on_change: OnChange<Msg>) -> Self {
        log::trace!("Building default time picker config");
        Self {
            common: Config::with_defaults(on_change, false),
            time: TimePickerConfig::default(),
        }
    }

    common_setters!();
    time_setters!();
}

impl<Msg> Clone for TimeConfig<Msg> {
    fn clone(&self) -> Self {
        Self {
            common: self.common.clone(),
            time: self.time.clone(),
        }
    }
}

impl<Msg> fmt::Debug for TimeConfig<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeConfig")
            .field("common", &self.common)
            .field("time", &self.time)
            .finish()
    }
}

impl<Msg> PickerConfig<Msg> for TimeConfig<Msg> {
    fn common(&self) -> &Config<Msg> {
        &self.common
    }

    fn time(&self) -> Option<&TimePickerConfig> {
        Some(&self.time)
    }

    fn kind(&self) -> PickerKind {
        PickerKind::Time
    }
}

// ----------------------------------------------------------------------------

/// A picker for a date together with a time of day.
pub struct DateTimeConfig<Msg> {
    pub common: Config<Msg>,
    pub date: DatePickerConfig,
    pub time: TimePickerConfig,
}

impl<Msg> DateTimeConfig<Msg> {
    /// Calendar and analog clock. Stays open, since picking a day is only half the job.
    pub fn new(
        on_change: impl Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync + 'static,
    ) -> Self {
        Self::from_shared(Arc::new(on_change))
    }

    /// Like [`Self::new`], keeping an already shared callback.
    pub fn from_shared(on_change: OnChange<Msg>) -> Self {
        log::trace!("Building default date-time picker config");
        Self {
            common: Config::with_defaults(on_change, false),
            date: DatePickerConfig::default(),
            time: TimePickerConfig::default(),
        }
    }

    common_setters!();
    date_setters!();
    time_setters!();
}

impl<Msg> Clone for DateTimeConfig<Msg> {
    fn clone(&self) -> Self {
        Self {
            common: self.common.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }
}

impl<Msg> fmt::Debug for DateTimeConfig<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTimeConfig")
            .field("common", &self.common)
            .field("date", &self.date)
            .field("time", &self.time)
            .finish()
    }
}

impl<Msg> PickerConfig<Msg> for DateTimeConfig<Msg> {
    fn common(&self) -> &Config<Msg> {
        &self.common
    }

    fn date(&self) -> Option<&DatePickerConfig> {
        Some(&self.date)
    }

    fn time(&self) -> Option<&TimePickerConfig> {
        Some(&self.time)
    }

    fn kind(&self) -> PickerKind {
        PickerKind::DateTime
    }
}

// ----------------------------------------------------------------------------

/// Default config of a date picker, see [`DateConfig::new`].
pub fn default_date_config<Msg>(
    on_change: impl Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync + 'static,
) -> DateConfig<Msg> {
    DateConfig::new(on_change)
}

/// Default config of a time picker, see [`TimeConfig::new`].
pub fn default_time_config<Msg>(
    on_change: impl Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync + 'static,
) -> TimeConfig<Msg> {
    TimeConfig::new(on_change)
}

/// Default config of a date-time picker, see [`DateTimeConfig::new`].
pub fn default_date_time_config<Msg>(
    on_change: impl Fn(PickerState, Option<NaiveDateTime>) -> Msg + Send + Sync + 'static,
) -> DateTimeConfig<Msg> {
    DateTimeConfig::new(on_change)
}

// ----------------------------------------------------------------------------

/// The active picker variant, with its settings.
pub enum PickerType<Msg> {
    Date(DateConfig<Msg>),
    DateTime(DateTimeConfig<Msg>),
    Time(TimeConfig<Msg>),
}

impl<Msg> PickerType<Msg> {
    /// Produce the message for a change of state or selection.
    pub fn change(&self, state: PickerState, selection: Option<NaiveDateTime>) -> Msg {
        self.common().change(state, selection)
    }
}

impl<Msg> PickerConfig<Msg> for PickerType<Msg> {
    fn common(&self) -> &Config<Msg> {
        match self {
            Self::Date(config) => &config.common,
            Self::DateTime(config) => &config.common,
            Self::Time(config) => &config.common,
        }
    }

    fn date(&self) -> Option<&DatePickerConfig> {
        match self {
            Self::Date(config) => Some(&config.date),
            Self::DateTime(config) => Some(&config.date),
            Self::Time(_) => None,
        }
    }

    fn time(&self) -> Option<&TimePickerConfig> {
        match self {
            Self::Date(_) => None,
            Self::DateTime(config) => Some(&config.time),
            Self::Time(config) => Some(&config.time),
        }
    }

    fn kind(&self) -> PickerKind {
        match self {
            Self::Date(_) => PickerKind::Date,
            Self::DateTime(_) => PickerKind::DateTime,
            Self::Time(_) => PickerKind::Time,
        }
    }
}

impl<Msg> Clone for PickerType<Msg> {
    fn clone(&self) -> Self {
        match self {
            Self::Date(config) => Self::Date(config.clone()),
            Self::DateTime(config) => Self::DateTime(config.clone()),
            Self::Time(config) => Self::Time(config.clone()),
        }
    }
}

impl<Msg> fmt::Debug for PickerType<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(config) => f.debug_tuple("Date").field(config).finish(),
            Self::DateTime(config) => f.debug_tuple("DateTime").field(config).finish(),
            Self::Time(config) => f.debug_tuple("Time").field(config).finish(),
        }
    }
}

impl<Msg> From<DateConfig<Msg>> for PickerType<Msg> {
    fn from(config: DateConfig<Msg>) -> Self {
        Self::Date(config)
    }
}

impl<Msg> From<DateTimeConfig<Msg>> for PickerType<Msg> {
    fn from(config: DateTimeConfig<Msg>) -> Self {
        Self::DateTime(config)
    }
}

impl<Msg> From<TimeConfig<Msg>> for PickerType<Msg> {
    fn from(config: TimeConfig<Msg>) -> Self {
        Self::Time(config)
    }
}
