pub mod rocket;

pub use rocket::{Rocket, Snapshot, StepOutcome, StepReport, ORBIT_ALTITUDE};

use thiserror::Error;

/// Current phase of the mission, gating which operator commands are legal.
///
/// Transitions only ever move forward: `PreLaunch` → `Ascending` → `Completed`.
/// `Completed` is terminal; every command is rejected there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlightState {
    #[default]
    PreLaunch,
    /// Ascent in progress. `stage` counts physics steps since ignition.
    Ascending { stage: u32 },
    Completed,
}

/// Rejection of an operator command that is illegal in the current state.
/// Never fatal; the vehicle is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("You must start the pre-launch checks first.")]
    ChecksNotRun,
    #[error("Pre-launch checks already completed.")]
    ChecksAlreadyComplete,
    #[error("Cannot fast forward during pre-launch checks.")]
    NotAscending,
    #[error("Mission is already completed.")]
    MissionOver,
}

/// The flight simulation engine. Owns the vehicle and its flight state and is
/// the only place either is mutated. Performs no I/O; each entry point returns
/// the per-step reports for the caller to present.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    pub rocket: Rocket,
    pub state: FlightState,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the pre-launch checks. Legal exactly once, before ignition.
    pub fn begin_checks(&mut self) -> Result<(), CommandError> {
        match self.state {
            FlightState::PreLaunch => {
                self.state = FlightState::Ascending { stage: 0 };
                Ok(())
            }
            FlightState::Ascending { .. } => Err(CommandError::ChecksAlreadyComplete),
            FlightState::Completed => Err(CommandError::MissionOver),
        }
    }

    /// Flies the ascent to completion: one physics step per simulated second
    /// until the fuel runs out or orbit is reached. Blocks for the whole burn.
    /// Reports are in step order; the last one carries the terminal outcome.
    pub fn launch(&mut self) -> Result<Vec<StepReport>, CommandError> {
        match self.state {
            FlightState::PreLaunch => Err(CommandError::ChecksNotRun),
            FlightState::Ascending { .. } => {
                let mut reports = Vec::new();
                while self.rocket.fuel_percent > 0 {
                    let report = self.step();
                    reports.push(report);
                    if report.outcome.is_terminal() {
                        break;
                    }
                }
                Ok(reports)
            }
            FlightState::Completed => Err(CommandError::MissionOver),
        }
    }

    /// Applies up to `seconds` physics steps, stopping early the moment a step
    /// terminates the mission. Remaining requested seconds are not consumed.
    pub fn advance(&mut self, seconds: u32) -> Result<Vec<StepReport>, CommandError> {
        match self.state {
            FlightState::PreLaunch => Err(CommandError::NotAscending),
            FlightState::Ascending { .. } => {
                let mut reports = Vec::with_capacity(seconds as usize);
                for _ in 0..seconds {
                    let report = self.step();
                    reports.push(report);
                    if report.outcome.is_terminal() {
                        break;
                    }
                }
                Ok(reports)
            }
            FlightState::Completed => Err(CommandError::MissionOver),
        }
    }

    // One physics step. Callers guarantee the state is Ascending.
    fn step(&mut self) -> StepReport {
        if let FlightState::Ascending { stage } = &mut self.state {
            *stage += 1;
        }
        let outcome = self.rocket.step();
        if outcome.is_terminal() {
            self.state = FlightState::Completed;
        }
        StepReport {
            snapshot: self.rocket.snapshot(),
            outcome,
        }
    }
}
