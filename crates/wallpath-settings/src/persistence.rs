//! Job input files and trajectory record output files.
//!
//! A job describes one wall to plan. A record stores a finished trajectory
//! together with the inputs that produced it, an id, and a creation time.

use crate::error::{PersistenceError, PersistenceResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;
use wallpath_core::{CoverageStats, ObstacleSpec, PlannerSettings, Trajectory, WallSpec};

/// A planning job read from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanJob {
    /// Optional label carried into the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub wall: WallSpec,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
    /// Per-job settings; configured defaults apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<PlannerSettings>,
}

impl PlanJob {
    pub fn new(wall: WallSpec, obstacles: Vec<ObstacleSpec>) -> Self {
        Self {
            name: None,
            wall,
            obstacles,
            settings: None,
        }
    }

    /// Load a job from a JSON file
    pub fn load_from_file(path: &Path) -> PersistenceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let job: Self = serde_json::from_str(&content).map_err(|e| PersistenceError::InvalidJob {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(
            "Loaded job {} ({} obstacles)",
            path.display(),
            job.obstacles.len()
        );
        Ok(job)
    }

    /// Save a job as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> PersistenceResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The job's own settings, or `defaults` when it has none
    pub fn resolve_settings(&self, defaults: &PlannerSettings) -> PlannerSettings {
        self.settings.unwrap_or(*defaults)
    }
}

/// A finished trajectory with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub wall: WallSpec,
    pub obstacles: Vec<ObstacleSpec>,
    pub settings: PlannerSettings,
    pub coverage: CoverageStats,
    pub trajectory: Trajectory,
}

impl TrajectoryRecord {
    /// Create a record with a fresh id and the current time
    pub fn new(job: &PlanJob, settings: PlannerSettings, trajectory: Trajectory) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: job.name.clone(),
            wall: job.wall,
            obstacles: job.obstacles.clone(),
            settings,
            coverage: CoverageStats::compute(&job.wall, &job.obstacles),
            trajectory,
        }
    }

    /// File name used when writing records into a directory
    pub fn file_name(&self) -> String {
        format!("trajectory-{}.json", self.id)
    }

    pub fn to_json(&self, pretty: bool) -> PersistenceResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn save_to_file(&self, path: &Path, pretty: bool) -> PersistenceResult<()> {
        std::fs::write(path, self.to_json(pretty)?)?;
        debug!("Saved trajectory record {} to {}", self.id, path.display());
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> PersistenceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
