use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use wallpath::{
    init_logging, Config, CoveragePattern, PlanJob, PlanningService, BUILD_DATE, VERSION,
};

#[derive(Parser)]
#[command(name = "wallpath")]
#[command(about = "Coverage path planning for walls with rectangular obstacles")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("WALLPATH_BUILD_DATE"), ")")
)]
struct Cli {
    /// Configuration file (.toml or .json); defaults to the platform config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan trajectories for one or more job files
    Plan {
        /// Job files (JSON)
        #[arg(required = true)]
        jobs: Vec<PathBuf>,
        /// Override the coverage pattern for every job
        #[arg(long)]
        pattern: Option<CoveragePattern>,
        /// Write one record file per job here instead of printing to stdout
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Validate job files and show their expanded obstacles
    Check {
        #[arg(required = true)]
        jobs: Vec<PathBuf>,
    },
    /// Write the default configuration to a file
    InitConfig {
        path: PathBuf,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path, force } = &cli.command {
        return init_config(path, *force);
    }

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    debug!("wallpath {} (built {})", VERSION, BUILD_DATE);

    let service = PlanningService::new(&config);
    match cli.command {
        Command::Plan {
            jobs,
            pattern,
            output_dir,
        } => plan(&service, &config, &jobs, pattern, output_dir.as_deref()),
        Command::Check { jobs } => check(&service, &jobs),
        Command::InitConfig { .. } => Ok(()),
    }
}

fn plan(
    service: &PlanningService,
    config: &Config,
    jobs: &[PathBuf],
    pattern: Option<CoveragePattern>,
    output_dir: Option<&Path>,
) -> Result<()> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let mut failed = 0usize;
    for path in jobs {
        if let Err(err) = plan_one(service, config, path, pattern, output_dir) {
            error!("{}: {:#}", path.display(), err);
            failed += 1;
        }
    }

    service.log_summary();

    if failed > 0 {
        bail!("{} of {} jobs failed", failed, jobs.len());
    }
    Ok(())
}

fn plan_one(
    service: &PlanningService,
    config: &Config,
    path: &Path,
    pattern: Option<CoveragePattern>,
    output_dir: Option<&Path>,
) -> Result<()> {
    let job = PlanJob::load_from_file(path)
        .with_context(|| format!("Failed to read job {}", path.display()))?;
    let record = service.plan_job(&job, pattern)?;
    let pretty = config.output.pretty_json;

    match output_dir {
        Some(dir) => {
            let out = dir.join(record.file_name());
            record
                .save_to_file(&out, pretty)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            info!(
                "{} -> {} ({} waypoints, {:.2} m, {:.0} s)",
                path.display(),
                out.display(),
                record.trajectory.point_count(),
                record.trajectory.length_m(),
                record.trajectory.duration_s()
            );
        }
        None => println!("{}", record.to_json(pretty)?),
    }

    Ok(())
}

fn check(service: &PlanningService, jobs: &[PathBuf]) -> Result<()> {
    let mut failed = 0usize;

    for path in jobs {
        let result = PlanJob::load_from_file(path)
            .with_context(|| format!("Failed to read job {}", path.display()))
            .and_then(|job| {
                let ctx = service.check_job(&job)?;
                Ok((job, ctx))
            });

        match result {
            Ok((job, ctx)) => {
                let settings = ctx.settings();
                println!(
                    "{}: ok, {}x{} m wall, {} obstacles -> {} expanded regions, {} pattern",
                    path.display(),
                    job.wall.width,
                    job.wall.height,
                    job.obstacles.len(),
                    ctx.obstacles().len(),
                    settings.pattern
                );
                for rect in ctx.obstacles() {
                    println!(
                        "  [{:.3}, {:.3}] x [{:.3}, {:.3}]",
                        rect.x,
                        rect.x2(),
                        rect.y,
                        rect.y2()
                    );
                }
            }
            Err(err) => {
                println!("{}: {:#}", path.display(), err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} jobs are invalid", failed, jobs.len());
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to replace it)", path.display());
    }

    Config::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
