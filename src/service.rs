//! Planning service shared by the command-line front end.
//!
//! Wraps a [`CoverageEngine`] configured from the application config and
//! keeps run statistics that can be read from any thread.

use parking_lot::Mutex;
use std::time::Instant;
use tracing::{error, info, warn};
use wallpath_core::{
    CoveragePattern, ObstacleSpec, PlanResult, PlannerSettings, Trajectory, WallSpec,
};
use wallpath_planner::{CoverageEngine, CoveragePlanner, PlanningContext};
use wallpath_settings::{Config, PlanJob, TrajectoryRecord};

/// Accumulated planner run statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerStats {
    /// Planning calls made
    pub runs: u64,
    /// Calls that returned an error
    pub failures: u64,
    /// Calls that failed a validator check
    pub internal_failures: u64,
    /// Waypoints across all produced trajectories
    pub points_produced: u64,
    /// Wall-clock time spent planning, in milliseconds
    pub total_planning_ms: f64,
}

impl PlannerStats {
    /// Trajectories successfully produced
    pub fn trajectories(&self) -> u64 {
        self.runs - self.failures
    }

    /// Mean planning time per call in milliseconds
    pub fn average_planning_ms(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_planning_ms / self.runs as f64
        }
    }
}

/// Plans jobs with configured defaults and records statistics
pub struct PlanningService {
    engine: CoverageEngine,
    defaults: PlannerSettings,
    stats: Mutex<PlannerStats>,
}

impl PlanningService {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: CoverageEngine::new(config.engine_config()),
            defaults: config.planner.settings,
            stats: Mutex::new(PlannerStats::default()),
        }
    }

    pub fn engine(&self) -> &CoverageEngine {
        &self.engine
    }

    /// Default settings applied to jobs without their own
    pub fn defaults(&self) -> &PlannerSettings {
        &self.defaults
    }

    /// Plan one trajectory and record the outcome
    pub fn plan(
        &self,
        wall: &WallSpec,
        obstacles: &[ObstacleSpec],
        settings: &PlannerSettings,
    ) -> PlanResult<Trajectory> {
        let start = Instant::now();
        let result = self.engine.plan(wall, obstacles, settings);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let mut stats = self.stats.lock();
        stats.runs += 1;
        stats.total_planning_ms += elapsed_ms;

        match &result {
            Ok(trajectory) => {
                stats.points_produced += trajectory.point_count() as u64;
            }
            Err(err) if err.is_internal() => {
                stats.failures += 1;
                stats.internal_failures += 1;
                error!("Planner defect (status {}): {}", err.status_code(), err);
            }
            Err(err) => {
                stats.failures += 1;
                warn!("Planning rejected (status {}): {}", err.status_code(), err);
            }
        }

        result
    }

    /// Plan a job, optionally forcing the coverage pattern
    pub fn plan_job(
        &self,
        job: &PlanJob,
        pattern: Option<CoveragePattern>,
    ) -> PlanResult<TrajectoryRecord> {
        let mut settings = job.resolve_settings(&self.defaults);
        if let Some(pattern) = pattern {
            settings.pattern = pattern;
        }

        let trajectory = self.plan(&job.wall, &job.obstacles, &settings)?;
        Ok(TrajectoryRecord::new(job, settings, trajectory))
    }

    /// Validate a job and expand its obstacles without planning
    pub fn check_job(&self, job: &PlanJob) -> PlanResult<PlanningContext> {
        let settings = job.resolve_settings(&self.defaults);
        self.engine.prepare(&job.wall, &job.obstacles, &settings)
    }

    /// Snapshot of the statistics so far
    pub fn stats(&self) -> PlannerStats {
        self.stats.lock().clone()
    }

    /// Log a one-line summary of the statistics
    pub fn log_summary(&self) {
        let stats = self.stats();
        info!(
            "Planner runs: {}, trajectories: {}, failures: {}, average {:.1} ms, {} waypoints",
            stats.runs,
            stats.trajectories(),
            stats.failures,
            stats.average_planning_ms(),
            stats.points_produced
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut config = Config::new();
        config.planner.settings.spacing = 0.25;
        config.planner.settings.resolution = 0.05;
        config
    }

    #[test]
    fn test_stats_start_empty() {
        let service = PlanningService::new(&Config::new());
        let stats = service.stats();
        assert_eq!(stats, PlannerStats::default());
        assert_eq!(stats.average_planning_ms(), 0.0);
    }

    #[test]
    fn test_plan_job_uses_defaults_and_override() {
        let service = PlanningService::new(&config());
        let job = PlanJob::new(WallSpec::new(1.0, 1.0), vec![]);

        let record = service.plan_job(&job, None).unwrap();
        assert_eq!(record.settings.pattern, CoveragePattern::Zigzag);
        assert_eq!(record.settings.spacing, 0.25);

        let record = service
            .plan_job(&job, Some(CoveragePattern::Spiral))
            .unwrap();
        assert_eq!(record.settings.pattern, CoveragePattern::Spiral);
        assert_eq!(service.stats().trajectories(), 2);
    }

    #[test]
    fn test_failures_are_counted() {
        let service = PlanningService::new(&config());
        let job = PlanJob::new(
            WallSpec::new(1.0, 1.0),
            vec![ObstacleSpec::new(0.0, 0.0, 1.0, 1.0)],
        );

        let err = service.plan_job(&job, None).unwrap_err();
        assert_eq!(err.status_code(), 400);

        let stats = service.stats();
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.internal_failures, 0);
        assert_eq!(stats.trajectories(), 0);
    }

    #[test]
    fn test_check_job_reports_expanded_obstacles() {
        let service = PlanningService::new(&config());
        let job = PlanJob::new(
            WallSpec::new(3.0, 3.0),
            vec![
                ObstacleSpec::new(1.0, 1.0, 0.5, 0.5),
                ObstacleSpec::new(1.4, 1.4, 0.5, 0.5),
            ],
        );

        let ctx = service.check_job(&job).unwrap();
        assert_eq!(ctx.obstacles().len(), 1);
        assert_eq!(service.stats().runs, 0);
    }
}
