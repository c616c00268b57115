/// A Mealy machine: `(State, Event) → (State, Vec<Command>)`.
///
/// The appliance implements this so the console can drive it from any
/// event source (operator input, timer expiry) and tests can drive it
/// without a runtime.
pub trait MealyMachine: Sized {
    type Event;
    type Command;
    fn transition(self, event: Self::Event) -> (Self, Vec<Self::Command>);
}
