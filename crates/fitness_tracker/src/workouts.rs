//! Running, walking and swimming calorie formulas.

use crate::{M_IN_KM, MIN_IN_HOUR, SessionData, Training};

/// Distance covered by one swimming stroke, in meters.
pub const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Running {
    pub session: SessionData,
}

impl Running {
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            session: SessionData::new(action, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    fn type_name(&self) -> &'static str {
        "Running"
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * s.weight_kg / M_IN_KM
            * s.duration_hours
            * MIN_IN_HOUR
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SportsWalking {
    pub session: SessionData,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            session: SessionData::new(action, duration_hours, weight_kg),
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn type_name(&self) -> &'static str {
        "SportsWalking"
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    // speed^2 / height is floor-divided, not truncated.
    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        let speed_ratio = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();
        (WALK_WEIGHT_MULTIPLIER * s.weight_kg
            + speed_ratio * WALK_SPEED_HEIGHT_MULTIPLIER * s.weight_kg)
            * s.duration_hours
            * MIN_IN_HOUR
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swimming {
    pub session: SessionData,
    pub pool_length_m: f64,
    pub pool_laps: f64,
}

impl Swimming {
    pub fn new(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Self {
        Self {
            session: SessionData::new(action, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    fn type_name(&self) -> &'static str {
        "Swimming"
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE
    }

    /// Distance swum, from pool geometry rather than stroke count.
    fn distance_km(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM / self.session.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.session.weight_kg
    }
}

/// Any supported workout, as produced by [`crate::read_package`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn type_name(&self) -> &'static str {
        self.as_training().type_name()
    }

    fn session(&self) -> &SessionData {
        self.as_training().session()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}
