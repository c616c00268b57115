use thiserror::Error;

/// A command refused by the appliance. Every refusal path has its own
/// variant; only the hardware-level ones carry a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("No water detected. Please add water and try again.")]
    NoWater,
    #[error("Rice cooker is not plugged in.")]
    NotPluggedIn,
    #[error("Rice cooker is busy. Please wait until it finishes before unplugging.")]
    Busy,
    #[error("Rice cooker is already busy.")]
    AlreadyBusy,
    #[error("Rice cooker is not ready for warming.")]
    NotReadyForWarming,
    #[error("Nothing to cancel.")]
    NothingToCancel,
}

impl Rejection {
    pub fn code(self) -> Option<u16> {
        match self {
            Rejection::NoWater => Some(101),
            Rejection::NotPluggedIn => Some(102),
            Rejection::Busy => Some(103),
            Rejection::AlreadyBusy | Rejection::NotReadyForWarming | Rejection::NothingToCancel => {
                None
            }
        }
    }
}
