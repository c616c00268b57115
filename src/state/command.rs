use std::{fmt, time::Duration};

use super::{appliance::Cycle, rejection::Rejection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Report(Notice),
    ScheduleCompletion {
        cycle: Cycle,
        generation: u64,
        after: Duration,
    },
    AbandonCompletion {
        generation: u64,
    },
}

/// Operator-facing outcome of an event, rendered verbatim on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    CookingStarted,
    RiceCooked,
    WarmingStarted,
    RiceWarm,
    Canceling,
    Canceled,
    WaterAdded,
    PluggedIn,
    Unplugged,
    Rejected(Rejection),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CookingStarted => f.write_str("Cooking rice..."),
            Notice::RiceCooked => f.write_str("Rice is cooked!"),
            Notice::WarmingStarted => f.write_str("Warming rice..."),
            Notice::RiceWarm => f.write_str("Rice is warm and ready to serve!"),
            Notice::Canceling => f.write_str("Canceling operation..."),
            Notice::Canceled => f.write_str("Operation canceled."),
            Notice::WaterAdded => f.write_str("Water added successfully."),
            Notice::PluggedIn => f.write_str("Rice cooker plugged in."),
            Notice::Unplugged => f.write_str("Rice cooker unplugged."),
            Notice::Rejected(rejection) => match rejection.code() {
                Some(code) => write!(f, "Error: {code} - {rejection}"),
                None => write!(f, "{rejection}"),
            },
        }
    }
}
