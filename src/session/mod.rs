pub mod input;
pub mod menu;

use crate::error::Result;
use crate::report::{self, text, OutputFormat};
use crate::scenario::ScenarioStore;
use crate::types::rating::{Rating, RatingList, ScenarioName};
use input::{Number, TokenReader};
use menu::MenuChoice;
use std::io::{BufRead, Write};

pub const FAREWELL: &str = "Exiting program. Thank you for using the VA Calculator.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please choose 1-5.";
pub const COERCION_WARNING: &str = "Rating should be between 0 and 100. Setting this one to 0.";

const CHOICE_PROMPT: &str = "Enter your choice: ";
const CHOICE_RETRY: &str = "Please enter a number from the menu: ";
const COUNT_RETRY: &str = "Please enter a positive number of conditions: ";
const NUMBER_RETRY: &str = "Please enter a whole number: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over one input source and one output sink.
pub struct Session<R, W> {
    input: TokenReader<R>,
    out: W,
    store: ScenarioStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            store: ScenarioStore::new(),
        }
    }

    /// Runs until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            menu::display(&mut self.out)?;
            self.prompt(CHOICE_PROMPT)?;
            let Some(number) = self.input.next_int(&mut self.out, CHOICE_RETRY)? else {
                tracing::info!("input closed at menu prompt");
                return self.farewell();
            };

            let flow = match MenuChoice::from_number(number.saturating()) {
                Some(choice) => {
                    tracing::debug!(?choice, "menu dispatch");
                    self.dispatch(choice)?
                }
                None => {
                    tracing::debug!(?number, "invalid menu choice");
                    writeln!(self.out, "{INVALID_CHOICE}")?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Exit => return Ok(()),
                Flow::Continue => writeln!(self.out)?,
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::EnterCurrent => self.enter(ScenarioName::Current),
            MenuChoice::EnterProposed => self.enter(ScenarioName::Proposed),
            MenuChoice::ShowCurrent => {
                writeln!(self.out, "\n=== View Current Scenario ===")?;
                let ratings = self
                    .store
                    .get(ScenarioName::Current)
                    .cloned()
                    .unwrap_or_default();
                let rendered =
                    report::render_scenario(ScenarioName::Current, &ratings, OutputFormat::Text)?;
                write!(self.out, "{rendered}")?;
                Ok(Flow::Continue)
            }
            MenuChoice::Compare => {
                writeln!(self.out, "\n=== Compare Current vs Proposed ===")?;
                let outcome = report::compare(
                    self.store.get(ScenarioName::Current),
                    self.store.get(ScenarioName::Proposed),
                );
                write!(self.out, "{}", text::comparison(&outcome))?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                self.farewell()?;
                Ok(Flow::Exit)
            }
        }
    }

    /// Prompts for a count and that many ratings, then replaces the stored scenario.
    fn enter(&mut self, name: ScenarioName) -> Result<Flow> {
        let Some(count) = self.read_count(name)? else {
            return self.closed_during_entry(name);
        };

        writeln!(
            self.out,
            "Enter each {} rating as a whole number (10, 20, 30, etc.):",
            name.label()
        )?;
        let mut ratings = Vec::new();
        for position in 1..=count {
            self.prompt(&format!("Rating {position}: "))?;
            let Some(raw) = self.input.next_int(&mut self.out, NUMBER_RETRY)? else {
                return self.closed_during_entry(name);
            };
            let (rating, replaced) = Rating::coerce(raw.saturating());
            if replaced {
                tracing::warn!(position, ?raw, "rating out of range, stored as 0");
                writeln!(self.out, "{COERCION_WARNING}")?;
            }
            ratings.push(rating);
        }

        self.store.record(name, RatingList::new(ratings));
        Ok(Flow::Continue)
    }

    fn read_count(&mut self, name: ScenarioName) -> Result<Option<u64>> {
        self.prompt(&format!(
            "How many {} conditions do you want to enter? ",
            name.label()
        ))?;
        loop {
            let Some(count) = self.input.next_int(&mut self.out, NUMBER_RETRY)? else {
                return Ok(None);
            };
            match count {
                Number::Int(count) if count > 0 => return Ok(Some(count.unsigned_abs())),
                _ => self.prompt(COUNT_RETRY)?,
            }
        }
    }

    fn closed_during_entry(&mut self, name: ScenarioName) -> Result<Flow> {
        tracing::info!(scenario = name.label(), "input closed during entry, scenario unchanged");
        writeln!(self.out)?;
        self.farewell()?;
        Ok(Flow::Exit)
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.out, "{FAREWELL}")?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}
