//! Maps sensor package codes to workout constructors.

use serde::Deserialize;
use std::str::FromStr;

use crate::{Running, SportsWalking, Swimming, TrackerError, TrackerResult, Workout};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
        }
    }

    /// Number of values the workout's constructor takes.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Swm => 5,
            WorkoutCode::Run => 3,
            WorkoutCode::Wlk => 4,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutCode::Swm),
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            other => Err(TrackerError::UnknownWorkoutType(other.to_string())),
        }
    }
}

/// One raw tuple as received from the tracker.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    pub fn read(&self) -> TrackerResult<Workout> {
        read_package(&self.code, &self.data)
    }
}

/// Build the workout for `code`, unpacking `data` positionally.
pub fn read_package(code: &str, data: &[f64]) -> TrackerResult<Workout> {
    let kind: WorkoutCode = code.parse()?;
    let workout = match (kind, data) {
        (WorkoutCode::Run, &[action, duration, weight]) => {
            Workout::Running(Running::new(action, duration, weight))
        }
        (WorkoutCode::Wlk, &[action, duration, weight, height]) => {
            Workout::SportsWalking(SportsWalking::new(action, duration, weight, height))
        }
        (WorkoutCode::Swm, &[action, duration, weight, pool_length, pool_laps]) => {
            Workout::Swimming(Swimming::new(
                action,
                duration,
                weight,
                pool_length,
                pool_laps,
            ))
        }
        _ => {
            return Err(TrackerError::ArityMismatch {
                code: kind.as_str(),
                expected: kind.arity(),
                actual: data.len(),
            });
        }
    };
    tracing::debug!(code = kind.as_str(), ?workout, "read sensor package");
    Ok(workout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!("SWM".parse::<WorkoutCode>(), Ok(WorkoutCode::Swm));
        assert_eq!("RUN".parse::<WorkoutCode>(), Ok(WorkoutCode::Run));
        assert_eq!("WLK".parse::<WorkoutCode>(), Ok(WorkoutCode::Wlk));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(
            "run".parse::<WorkoutCode>(),
            Err(TrackerError::UnknownWorkoutType("run".into()))
        );
    }

    #[test]
    fn builds_each_variant() {
        assert_eq!(
            read_package("RUN", &[15000.0, 1.0, 75.0]),
            Ok(Workout::Running(Running::new(15000.0, 1.0, 75.0)))
        );
        assert_eq!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Ok(Workout::SportsWalking(SportsWalking::new(9000.0, 1.0, 75.0, 180.0)))
        );
        assert_eq!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            Ok(Workout::Swimming(Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0)))
        );
    }

    #[test]
    fn unknown_code_fails_for_any_data() {
        for data in [vec![], vec![1.0, 2.0, 3.0], vec![1.0; 10]] {
            assert_eq!(
                read_package("XXX", &data),
                Err(TrackerError::UnknownWorkoutType("XXX".into()))
            );
        }
    }

    #[test]
    fn run_rejects_wrong_arity() {
        for data in [vec![15000.0, 1.0], vec![15000.0, 1.0, 75.0, 180.0]] {
            let err = read_package("RUN", &data).unwrap_err();
            assert_eq!(
                err,
                TrackerError::ArityMismatch {
                    code: "RUN",
                    expected: 3,
                    actual: data.len(),
                }
            );
        }
    }

    #[test]
    fn counts_pass_through_unchanged() {
        assert_eq!(
            read_package("RUN", &[5.0e9, 1.0, 75.0]),
            Ok(Workout::Running(Running::new(5.0e9, 1.0, 75.0)))
        );
        let Ok(Workout::Swimming(swim)) = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.9])
        else {
            panic!("expected swimming workout");
        };
        assert_eq!(swim.pool_laps, 40.9);
    }

    #[test]
    fn sensor_package_from_json() {
        let pkg: SensorPackage =
            serde_json::from_str(r#"{"code":"WLK","data":[9000,1,75,180]}"#).expect("json");
        assert_eq!(pkg, SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]));
        assert!(matches!(pkg.read(), Ok(Workout::SportsWalking(_))));
    }
}
