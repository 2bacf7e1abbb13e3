use std::{fmt, str::FromStr};

/// How the time of day is picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum TimePickerType {
    /// Hour and minute fields.
    Digital,

    /// A clock face.
    #[default]
    Analog,
}

impl TimePickerType {
    pub const ALL: [Self; 2] = [Self::Digital, Self::Analog];

    pub fn name(self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Analog => "analog",
        }
    }
}

impl fmt::Display for TimePickerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown [`TimePickerType`] name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown time picker type {0:?}, expected \"digital\" or \"analog\"")]
pub struct ParseTimePickerTypeError(pub String);

impl FromStr for TimePickerType {
    type Err = ParseTimePickerTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                log::debug!("Rejected time picker type {s:?}");
                ParseTimePickerTypeError(s.to_owned())
            })
    }
}
