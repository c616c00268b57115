use proptest::prelude::*;

use crate::state::{Cycle, Event};

// ─── Event generators ───────────────────────────────────────────────────────

pub fn arb_cycle() -> impl Strategy<Value = Cycle> {
    prop_oneof![Just(Cycle::Cook), Just(Cycle::Warm)]
}

pub fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::CookRequested),
        Just(Event::WarmRequested),
        Just(Event::CancelRequested),
        Just(Event::WaterAdded),
        Just(Event::PlugInRequested),
        Just(Event::UnplugRequested),
        // Small generations so completions regularly hit the active cycle
        (arb_cycle(), 0u64..8).prop_map(|(cycle, generation)| Event::CompletionDue {
            cycle,
            generation,
        }),
    ]
}

pub fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    proptest::collection::vec(arb_event(), 0..64)
}
