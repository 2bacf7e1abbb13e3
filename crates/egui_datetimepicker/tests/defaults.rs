use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use egui::{Context, Id};
use egui_datetimepicker::{
    DateConfig, DateTimeConfig, NameOfDays, OnChange, PickerConfig as _, PickerKind, PickerState,
    PickerType, TimeConfig, TimePickerType, default_date_config, default_date_time_config,
    default_time_config,
};

#[derive(Debug, PartialEq, Eq)]
enum Message {
    Changed {
        open: bool,
        selection: Option<NaiveDateTime>,
    },
}

fn on_change(state: PickerState, selection: Option<NaiveDateTime>) -> Message {
    Message::Changed {
        open: state.is_open(),
        selection,
    }
}

fn friday_afternoon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 5)
        .unwrap()
        .and_hms_opt(14, 7, 0)
        .unwrap()
}

#[test]
fn test_date_defaults() {
    let config = default_date_config(on_change);
    let when = friday_afternoon();

    assert!(config.common.auto_close);
    assert!(config.common.allow_year_navigation);
    assert_eq!((config.common.date_formatter)(when.date()), "01/05/2024");
    assert_eq!(
        (config.common.date_time_formatter)(when),
        "01/05/2024 02:07 PM"
    );

    assert_eq!(config.date.first_day_of_week, Weekday::Sun);
    assert_eq!(config.date.name_of_days, NameOfDays::default());
    assert_eq!((config.date.title_formatter)(when.date()), "January 2024");
    assert_eq!(
        (config.date.full_date_formatter)(when.date()),
        "Friday, January 05, 2024"
    );
}

#[test]
fn test_time_defaults() {
    let config = default_time_config(on_change);

    assert!(!config.common.auto_close);
    assert!(config.common.allow_year_navigation);
    assert_eq!(config.time.time_picker_type, TimePickerType::Analog);
    assert_eq!(
        (config.time.time_formatter)(NaiveTime::from_hms_opt(9, 5, 0).unwrap()),
        "09:05 AM"
    );
}

#[test]
fn test_date_time_defaults() {
    let config = default_date_time_config(on_change);

    assert!(!config.common.auto_close);
    assert!(config.common.allow_year_navigation);
    assert_eq!(config.date.first_day_of_week, Weekday::Sun);
    assert_eq!(config.date.name_of_days, NameOfDays::default());
    assert_eq!(config.time.time_picker_type, TimePickerType::Analog);
}

#[test]
fn test_default_day_names() {
    let days = NameOfDays::default();
    let labels = [
        &days.sunday,
        &days.monday,
        &days.tuesday,
        &days.wednesday,
        &days.thursday,
        &days.friday,
        &days.saturday,
    ];
    assert_eq!(labels, ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);
}

#[test]
fn test_override_leaves_the_rest_alone() {
    let config = default_date_config(on_change).auto_close(false);
    assert!(!config.common.auto_close);
    assert!(config.common.allow_year_navigation);
    assert_eq!(config.date.first_day_of_week, Weekday::Sun);

    let config = default_date_config(on_change).first_day_of_week(Weekday::Mon);
    assert!(config.common.auto_close);
    assert_eq!(config.date.first_day_of_week, Weekday::Mon);
    assert_eq!(config.date.name_of_days, NameOfDays::default());

    let config = default_time_config(on_change).allow_year_navigation(false);
    assert!(!config.common.allow_year_navigation);
    assert!(!config.common.auto_close);
    assert_eq!(config.time.time_picker_type, TimePickerType::Analog);

    let config = DateTimeConfig {
        time: egui_datetimepicker::TimePickerConfig {
            time_picker_type: TimePickerType::Digital,
            ..Default::default()
        },
        ..default_date_time_config(on_change)
    };
    assert_eq!(config.time.time_picker_type, TimePickerType::Digital);
    assert!(!config.common.auto_close);
    assert_eq!(config.date.first_day_of_week, Weekday::Sun);
}

#[test]
fn test_on_change_is_kept() {
    let shared: OnChange<Message> = Arc::new(on_change);

    let date = DateConfig::from_shared(Arc::clone(&shared));
    let time = TimeConfig::from_shared(Arc::clone(&shared));
    let date_time = DateTimeConfig::from_shared(Arc::clone(&shared));

    assert!(Arc::ptr_eq(&date.common.on_change, &shared));
    assert!(Arc::ptr_eq(&time.common.on_change, &shared));
    assert!(Arc::ptr_eq(&date_time.common.on_change, &shared));

    let overridden = date.auto_close(false).first_day_of_week(Weekday::Wed);
    assert!(Arc::ptr_eq(&overridden.common.on_change, &shared));

    let when = Some(friday_afternoon());
    assert_eq!(
        overridden.change(PickerState::opened(when), when),
        Message::Changed {
            open: true,
            selection: when,
        }
    );
}

#[test]
fn test_picker_type_selects_variant() {
    let pickers: [PickerType<Message>; 3] = [
        default_date_config(on_change).into(),
        default_date_time_config(on_change).into(),
        default_time_config(on_change).into(),
    ];
    let kinds = pickers.each_ref().map(|picker| picker.kind());
    assert_eq!(
        kinds,
        [PickerKind::Date, PickerKind::DateTime, PickerKind::Time]
    );

    for picker in &pickers {
        assert_eq!(
            picker.change(PickerState::closed(), None),
            Message::Changed {
                open: false,
                selection: None,
            }
        );
    }
}

#[test]
fn test_state_survives_between_frames() {
    let ctx = Context::default();
    let id = Id::new("appointment").with("picker");
    let config = default_date_time_config(on_change);

    let state = PickerState::load(&ctx, id);
    assert!(!state.is_open());

    PickerState::opened(Some(friday_afternoon())).store(&ctx, id);

    let state = PickerState::load(&ctx, id);
    let message = config.change(state.clone(), state.pending());
    assert_eq!(
        message,
        Message::Changed {
            open: true,
            selection: Some(friday_afternoon()),
        }
    );
}
