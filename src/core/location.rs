//! Location port: best-effort geolocation for clock events.

use crate::errors::{AppError, AppResult};
use crate::models::LocationReading;
use std::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

pub trait LocationProvider {
    fn request_permission(&mut self) -> Permission;

    /// One attempt, no retry. Fails with `LocationUnavailable`.
    fn current_reading(&mut self) -> AppResult<LocationReading>;
}

impl<T: LocationProvider + ?Sized> LocationProvider for Box<T> {
    fn request_permission(&mut self) -> Permission {
        (**self).request_permission()
    }

    fn current_reading(&mut self) -> AppResult<LocationReading> {
        (**self).current_reading()
    }
}

/// Ask for a reading; denial and failure both yield `None`.
pub fn best_effort<L: LocationProvider + ?Sized>(provider: &mut L) -> Option<LocationReading> {
    if provider.request_permission() == Permission::Denied {
        info!("location permission not granted");
        return None;
    }

    match provider.current_reading() {
        Ok(reading) => {
            debug!(
                latitude = reading.latitude,
                longitude = reading.longitude,
                "location obtained"
            );
            Some(reading)
        }
        Err(e) => {
            info!(error = %e, "location unavailable");
            None
        }
    }
}

/// Provider for when location is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn current_reading(&mut self) -> AppResult<LocationReading> {
        Err(AppError::LocationUnavailable("location disabled".into()))
    }
}

/// Coordinates supplied up front, e.g. from `--lat/--lon`.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub LocationReading);

impl LocationProvider for FixedLocation {
    fn request_permission(&mut self) -> Permission {
        Permission::Granted
    }

    fn current_reading(&mut self) -> AppResult<LocationReading> {
        Ok(self.0)
    }
}

/// Runs an external command that prints `lat,lon[,accuracy]` on stdout.
#[derive(Debug, Clone)]
pub struct CommandLocation {
    command: String,
}

impl CommandLocation {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn shell(&self) -> Command {
        if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", &self.command]);
            c
        } else {
            let mut c = Command::new("sh");
            c.args(["-c", &self.command]);
            c
        }
    }
}

impl LocationProvider for CommandLocation {
    fn request_permission(&mut self) -> Permission {
        if self.command.trim().is_empty() {
            Permission::Denied
        } else {
            Permission::Granted
        }
    }

    fn current_reading(&mut self) -> AppResult<LocationReading> {
        let output = self
            .shell()
            .output()
            .map_err(|e| AppError::LocationUnavailable(format!("{}: {}", self.command, e)))?;

        if !output.status.success() {
            return Err(AppError::LocationUnavailable(format!(
                "'{}' exited with {}",
                self.command, output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.lines().next().unwrap_or("").trim();

        LocationReading::parse(line).ok_or_else(|| {
            AppError::LocationUnavailable(format!("unrecognised location output '{}'", line))
        })
    }
}
