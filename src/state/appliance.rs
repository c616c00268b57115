use std::time::Duration;

use super::{
    command::{Command, Notice},
    event::Event,
    rejection::Rejection,
};
use crate::{
    timing::{COOK_DURATION, WARM_DURATION},
    traits::MealyMachine,
};

// ─── State types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CookerState {
    Idle,
    Cooking,
    Warm,
}

/// A timed operation that resolves back to idle when its completion fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Cycle {
    Cook,
    Warm,
}

impl Cycle {
    pub fn duration(self) -> Duration {
        match self {
            Cycle::Cook => COOK_DURATION,
            Cycle::Warm => WARM_DURATION,
        }
    }

    fn state(self) -> CookerState {
        match self {
            Cycle::Cook => CookerState::Cooking,
            Cycle::Warm => CookerState::Warm,
        }
    }

    fn started(self) -> Notice {
        match self {
            Cycle::Cook => Notice::CookingStarted,
            Cycle::Warm => Notice::WarmingStarted,
        }
    }

    fn finished(self) -> Notice {
        match self {
            Cycle::Cook => Notice::RiceCooked,
            Cycle::Warm => Notice::RiceWarm,
        }
    }

    fn admits(self, state: CookerState) -> bool {
        match (self, state) {
            (Cycle::Cook, CookerState::Idle) => true,
            (Cycle::Cook, CookerState::Cooking | CookerState::Warm) => false,
            (Cycle::Warm, CookerState::Idle | CookerState::Warm) => true,
            (Cycle::Warm, CookerState::Cooking) => false,
        }
    }

    fn busy_rejection(self) -> Rejection {
        match self {
            Cycle::Cook => Rejection::AlreadyBusy,
            Cycle::Warm => Rejection::NotReadyForWarming,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveCycle {
    cycle: Cycle,
    generation: u64,
}

/// The simulated rice cooker.
///
/// The visible state is a projection of the active cycle: the appliance is
/// idle exactly when no completion is outstanding. Each started cycle is
/// stamped with a fresh generation; a completion only lands if it carries
/// the generation of the cycle that is still active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appliance {
    has_water: bool,
    plugged_in: bool,
    active: Option<ActiveCycle>,
    next_generation: u64,
}

impl Default for Appliance {
    fn default() -> Self {
        Self::new()
    }
}

impl Appliance {
    pub fn new() -> Self {
        Self {
            has_water: true,
            plugged_in: true,
            active: None,
            next_generation: 0,
        }
    }

    pub fn state(&self) -> CookerState {
        self.active
            .map_or(CookerState::Idle, |active| active.cycle.state())
    }

    pub fn has_water(&self) -> bool {
        self.has_water
    }

    pub fn is_plugged_in(&self) -> bool {
        self.plugged_in
    }

    pub fn active_generation(&self) -> Option<u64> {
        self.active.map(|active| active.generation)
    }

    fn admit(&self, cycle: Cycle) -> Result<(), Rejection> {
        if !self.plugged_in {
            return Err(Rejection::NotPluggedIn);
        }
        if !self.has_water {
            return Err(Rejection::NoWater);
        }
        match cycle.admits(self.state()) {
            true => Ok(()),
            false => Err(cycle.busy_rejection()),
        }
    }

    fn start_cycle(&mut self, cycle: Cycle, commands: &mut Vec<Command>) {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.saturating_add(1);

        if let Some(superseded) = self.active.replace(ActiveCycle { cycle, generation }) {
            commands.push(Command::AbandonCompletion {
                generation: superseded.generation,
            });
        }
        commands.push(Command::Report(cycle.started()));
        commands.push(Command::ScheduleCompletion {
            cycle,
            generation,
            after: cycle.duration(),
        });
    }

    fn complete_cycle(&mut self, cycle: Cycle, generation: u64, commands: &mut Vec<Command>) {
        match self.active {
            Some(active) if active.generation == generation => {
                self.active = None;
                commands.push(Command::Report(active.cycle.finished()));
            }
            Some(active) => {
                tracing::debug!(
                    %cycle,
                    expected_generation = active.generation,
                    received_generation = generation,
                    "ignoring stale completion"
                );
            }
            None => {
                tracing::debug!(%cycle, generation, "ignoring completion while idle");
            }
        }
    }
}

fn reject(rejection: Rejection, commands: &mut Vec<Command>) {
    tracing::debug!(%rejection, code = ?rejection.code(), "command rejected");
    commands.push(Command::Report(Notice::Rejected(rejection)));
}

impl MealyMachine for Appliance {
    type Event = Event;
    type Command = Command;

    fn transition(mut self, event: Event) -> (Self, Vec<Command>) {
        let mut commands = Vec::new();

        match event {
            Event::CookRequested => match self.admit(Cycle::Cook) {
                Ok(()) => self.start_cycle(Cycle::Cook, &mut commands),
                Err(rejection) => reject(rejection, &mut commands),
            },

            Event::WarmRequested => match self.admit(Cycle::Warm) {
                Ok(()) => self.start_cycle(Cycle::Warm, &mut commands),
                Err(rejection) => reject(rejection, &mut commands),
            },

            Event::CancelRequested => match self.active.take() {
                Some(active) => {
                    commands.push(Command::Report(Notice::Canceling));
                    commands.push(Command::AbandonCompletion {
                        generation: active.generation,
                    });
                    commands.push(Command::Report(Notice::Canceled));
                }
                None => reject(Rejection::NothingToCancel, &mut commands),
            },

            Event::WaterAdded => {
                self.has_water = true;
                commands.push(Command::Report(Notice::WaterAdded));
            }

            Event::PlugInRequested => {
                self.plugged_in = true;
                commands.push(Command::Report(Notice::PluggedIn));
            }

            Event::UnplugRequested => match self.state() {
                CookerState::Idle => {
                    self.plugged_in = false;
                    commands.push(Command::Report(Notice::Unplugged));
                }
                CookerState::Cooking | CookerState::Warm => reject(Rejection::Busy, &mut commands),
            },

            Event::CompletionDue { cycle, generation } => {
                self.complete_cycle(cycle, generation, &mut commands);
            }
        }

        (self, commands)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
