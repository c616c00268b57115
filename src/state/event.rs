use super::appliance::Cycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Event {
    // ─── Operator (menu) ────────────────────────────────────────────────────
    CookRequested,
    WarmRequested,
    CancelRequested,
    WaterAdded,
    PlugInRequested,
    UnplugRequested,

    // ─── Timer (synthesized by the console) ─────────────────────────────────
    CompletionDue { cycle: Cycle, generation: u64 },
}
