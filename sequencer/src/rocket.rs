use std::fmt;

use serde::Serialize;

/// Altitude at which the ascent counts as mission-successful [km]
pub const ORBIT_ALTITUDE: u32 = 100;

/// Fuel burned per simulated second [%]
pub const FUEL_BURN_RATE: u8 = 10;
/// Altitude gained per simulated second [km]
pub const CLIMB_RATE: u32 = 10;
/// Speed gained per simulated second [km/h]
pub const ACCELERATION: u32 = 1000;

/// Verdict of a single physics step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    /// Ascent continues.
    Continue,
    /// Fuel ran out before reaching orbit. Mission failure.
    FuelExhausted,
    /// Orbit altitude reached with fuel to spare. Mission success.
    OrbitAchieved,
}

impl StepOutcome {
    pub fn is_terminal(self) -> bool {
        self != StepOutcome::Continue
    }
}

/// Post-step status of the vehicle, one per simulated second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Time since ignition [s]
    pub elapsed_seconds: u32,
    /// Fuel remaining [%]
    pub fuel_percent: u8,
    /// Altitude above the launch site [km]
    pub altitude_km: u32,
    /// Speed [km/h]
    pub speed_kph: u32,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T+{}s  fuel: {}%  altitude: {} km  speed: {} km/h",
            self.elapsed_seconds, self.fuel_percent, self.altitude_km, self.speed_kph
        )
    }
}

/// One physics step actually taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub snapshot: Snapshot,
    pub outcome: StepOutcome,
}

/// The simulated vehicle. Quantities only; which commands are legal at any
/// moment is the engine's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rocket {
    /// Fuel remaining [%], always within 0..=100
    pub fuel_percent: u8,
    /// Altitude above the launch site [km]
    pub altitude_km: u32,
    /// Speed [km/h]
    pub speed_kph: u32,
    /// Time since ignition [s]
    pub elapsed_seconds: u32,
}

impl Default for Rocket {
    fn default() -> Self {
        Self {
            fuel_percent: 100,
            altitude_km: 0,
            speed_kph: 0,
            elapsed_seconds: 0,
        }
    }
}

impl Rocket {
    /// Advances the vehicle by one simulated second and reports whether the
    /// mission ended during that second. Fuel exhaustion is checked before the
    /// orbit threshold, so a step that hits both counts as a failure.
    pub fn step(&mut self) -> StepOutcome {
        self.elapsed_seconds += 1;
        self.fuel_percent = self.fuel_percent.saturating_sub(FUEL_BURN_RATE);
        self.altitude_km += CLIMB_RATE;
        self.speed_kph += ACCELERATION;

        if self.fuel_percent == 0 {
            StepOutcome::FuelExhausted
        } else if self.altitude_km >= ORBIT_ALTITUDE {
            StepOutcome::OrbitAchieved
        } else {
            StepOutcome::Continue
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            elapsed_seconds: self.elapsed_seconds,
            fuel_percent: self.fuel_percent,
            altitude_km: self.altitude_km,
            speed_kph: self.speed_kph,
        }
    }
}
