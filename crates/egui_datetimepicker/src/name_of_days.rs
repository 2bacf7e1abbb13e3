use chrono::Weekday;

/// Labels for the weekdays, shown in the header row of the calendar.
///
/// Deserializing a partial set of labels keeps the defaults for the missing days.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct NameOfDays {
    pub sunday: String,
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
}

impl Default for NameOfDays {
    fn default() -> Self {
        Self::from_labels(["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"])
    }
}

impl NameOfDays {
    /// Build from seven labels, starting at Sunday.
    pub fn from_labels(labels: [impl Into<String>; 7]) -> Self {
        let [sunday, monday, tuesday, wednesday, thursday, friday, saturday] = labels.map(Into::into);
        Self {
            sunday,
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
        }
    }

    /// The label of a single day.
    pub fn get(&self, day: Weekday) -> &str {
        match day {
            Weekday::Sun => &self.sunday,
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
        }
    }

    /// All seven labels in calendar order, starting at `first_day_of_week`.
    pub fn ordered_from(&self, first_day_of_week: Weekday) -> [&str; 7] {
        let mut day = first_day_of_week;
        std::array::from_fn(|_| {
            let label = self.get(day);
            day = day.succ();
            label
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_start_on_sunday() {
        let days = NameOfDays::default();
        assert_eq!(
            days.ordered_from(Weekday::Sun),
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        );
    }

    #[test]
    fn test_ordered_from_wraps_around() {
        let days = NameOfDays::default();
        assert_eq!(
            days.ordered_from(Weekday::Mon),
            ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        );
        assert_eq!(days.ordered_from(Weekday::Sat)[0], "Sa");
        assert_eq!(days.ordered_from(Weekday::Sat)[6], "Fr");
    }

    #[test]
    fn test_get() {
        let german = NameOfDays::from_labels(["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]);
        assert_eq!(german.get(Weekday::Sun), "So");
        assert_eq!(german.get(Weekday::Wed), "Mi");
        assert_eq!(german.get(Weekday::Sat), "Sa");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let days: NameOfDays = ron::from_str(r#"(monday: "Mon")"#).unwrap();
        assert_eq!(days.monday, "Mon");
        assert_eq!(
            days,
            NameOfDays {
                monday: "Mon".to_owned(),
                ..Default::default()
            }
        );
    }
}
