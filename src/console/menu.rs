use std::{fmt::Write as _, str::FromStr};

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::state::Event;

pub const PROMPT: &str = "Enter your choice: ";
pub const FAREWELL: &str = "Exiting Rice Cooker CLI. Goodbye!";

/// One numbered entry of the operator menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum MenuChoice {
    Cook,
    Warm,
    Cancel,
    AddWater,
    PlugIn,
    Unplug,
    Exit,
}

impl MenuChoice {
    pub fn code(self) -> i64 {
        match self {
            MenuChoice::Cook => 1,
            MenuChoice::Warm => 2,
            MenuChoice::Cancel => 3,
            MenuChoice::AddWater => 4,
            MenuChoice::PlugIn => 5,
            MenuChoice::Unplug => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Cook => "Cook Rice",
            MenuChoice::Warm => "Warm Rice",
            MenuChoice::Cancel => "Cancel",
            MenuChoice::AddWater => "Add Water",
            MenuChoice::PlugIn => "Plug In",
            MenuChoice::Unplug => "Unplug",
            MenuChoice::Exit => "Exit",
        }
    }

    /// The appliance event this choice stands for; `None` ends the session.
    pub fn event(self) -> Option<Event> {
        match self {
            MenuChoice::Cook => Some(Event::CookRequested),
            MenuChoice::Warm => Some(Event::WarmRequested),
            MenuChoice::Cancel => Some(Event::CancelRequested),
            MenuChoice::AddWater => Some(Event::WaterAdded),
            MenuChoice::PlugIn => Some(Event::PlugInRequested),
            MenuChoice::Unplug => Some(Event::UnplugRequested),
            MenuChoice::Exit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceParseError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber(#[from] std::num::ParseIntError),
    #[error("Invalid command. Please enter a valid option.")]
    Unknown(i64),
}

impl TryFrom<i64> for MenuChoice {
    type Error = ChoiceParseError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        MenuChoice::iter()
            .find(|choice| choice.code() == code)
            .ok_or(ChoiceParseError::Unknown(code))
    }
}

impl FromStr for MenuChoice {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: i64 = s.trim().parse()?;
        MenuChoice::try_from(code)
    }
}

pub fn render_menu() -> String {
    let mut menu = String::from("\nMenu:\n");
    for choice in MenuChoice::iter() {
        // Infallible: writing into a String cannot fail
        let _ = writeln!(menu, "{}. {}", choice.code(), choice.label());
    }
    menu
}
