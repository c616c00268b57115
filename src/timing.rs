use std::time::Duration;

pub const COOK_DURATION: Duration = Duration::from_secs(3);
pub const WARM_DURATION: Duration = Duration::from_secs(1);
