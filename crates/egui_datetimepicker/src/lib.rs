//! Configuration and defaults for date and time pickers built on [`egui`](https://github.com/emilk/egui).
//!
//! There are three kinds of pickers, each with its own default builder:
//!
//! * [`default_date_config`]: a calendar.
//! * [`default_time_config`]: a clock.
//! * [`default_date_time_config`]: both.
//!
//! Every builder needs the callback that turns a change of the picker into a message for your
//! application. Everything else has a default, which you can change with the builder methods:
//!
//! ```
//! use chrono::{NaiveDateTime, Weekday};
//! use egui_datetimepicker::{PickerConfig as _, PickerKind, PickerState, PickerType, default_date_config};
//!
//! enum Message {
//!     DatePicked(PickerState, Option<NaiveDateTime>),
//! }
//!
//! let config = default_date_config(Message::DatePicked)
//!     .first_day_of_week(Weekday::Mon)
//!     .allow_year_navigation(false);
//!
//! assert_eq!(config.date.header_labels()[0], "Mo");
//! assert!(config.common.auto_close);
//!
//! let picker: PickerType<Message> = config.into();
//! assert_eq!(picker.kind(), PickerKind::Date);
//! ```

#![forbid(unsafe_code)]

mod config;
pub mod format;
mod name_of_days;
mod picker;
mod state;
mod time_picker_type;

pub use crate::config::{Config, DatePickerConfig, OnChange, TimePickerConfig};
pub use crate::name_of_days::NameOfDays;
pub use crate::picker::{
    DateConfig, DateTimeConfig, PickerConfig, PickerKind, PickerType, TimeConfig,
    default_date_config, default_date_time_config, default_time_config,
};
pub use crate::state::PickerState;
pub use crate::time_picker_type::{ParseTimePickerTypeError, TimePickerType};
