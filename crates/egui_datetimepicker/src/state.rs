use chrono::NaiveDateTime;
use egui::{Context, Id};

/// Interaction state of a picker, handed to [`Config::on_change`](crate::Config::on_change).
///
/// The widget logic owns the transitions; this crate only carries the value around.
/// Between frames it lives in egui's temporary memory, keyed by the picker's [`Id`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PickerState {
    open: bool,
    pending: Option<NaiveDateTime>,
}

impl PickerState {
    /// A closed picker with nothing selected.
    pub fn closed() -> Self {
        Self::default()
    }

    /// An open picker, with an optional selection in progress.
    pub fn opened(pending: Option<NaiveDateTime>) -> Self {
        Self {
            open: true,
            pending,
        }
    }

    /// Is the popup of the picker showing?
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Date the user is currently picking, not yet committed.
    pub fn pending(&self) -> Option<NaiveDateTime> {
        self.pending
    }

    /// Load the state of the picker with the given id, or [`Self::closed`] if there is none.
    pub fn load(ctx: &Context, id: Id) -> Self {
        ctx.data(|data| data.get_temp::<Self>(id)).unwrap_or_else(|| {
            log::trace!("No picker state for {id:?}, starting closed");
            Self::closed()
        })
    }

    /// Keep the state until the next frame.
    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|data| data.insert_temp(id, self));
    }

    /// Forget the state of the picker with the given id.
    pub fn clear(ctx: &Context, id: Id) {
        ctx.data_mut(|data| data.remove::<Self>(id));
    }
}
