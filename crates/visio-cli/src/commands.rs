//! Command handlers

use std::path::{Path, PathBuf};

use log::debug;
use visio_app::app::{estimate_meeting, EstimationOptions, EstimationServiceError};
use visio_app::config::Config;
use visio_app::export::export_csv;
use visio_app::repository::{open_reference_repo, ReferenceSource};
use visio_infra::load_request_from_json;
use visio_types::{Bound, Error, OutputFormat, ReferenceKind};

use crate::cli::{Cli, Commands};
use crate::output::{
    output_hardware_detail, output_hardware_list, output_report, output_software, output_transport,
};

type Result<T> = std::result::Result<T, EstimationServiceError>;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Estimate {
            request,
            duration,
            instances,
            hardware_bound,
            bandwidth_bound,
            network_bound,
            export,
        } => {
            let mut options = EstimationOptions::new();
            options.meeting_duration = *duration;
            options.instances_number = *instances;
            options.hardware_bound = *hardware_bound;
            options.bandwidth_bound = *bandwidth_bound;
            options.network_bound = *network_bound;
            cmd_estimate(&cli, &config, request, &options, export.as_deref(), output_format)
        }

        Commands::Hardware { name } => cmd_hardware(&cli, &config, name.as_deref(), output_format),

        Commands::Software => {
            let source = open_source(&cli, &config)?;
            output_software(output_format, &source.repository().all_software())?;
            Ok(())
        }

        Commands::Transport => {
            let source = open_source(&cli, &config)?;
            output_transport(output_format, &source.repository().all_transportation_means())?;
            Ok(())
        }

        Commands::Config {
            show,
            set_database_dir,
            clear_database_dir,
            set_output,
            set_hardware_bound,
            set_bandwidth_bound,
            set_network_bound,
        } => cmd_config(
            config,
            *show,
            set_database_dir.clone(),
            *clear_database_dir,
            *set_output,
            *set_hardware_bound,
            *set_bandwidth_bound,
            *set_network_bound,
        ),
    }
}

fn open_source(cli: &Cli, config: &Config) -> Result<ReferenceSource> {
    let source = open_reference_repo(config, cli.database.as_deref())?;
    debug!("Reference database: {}", source.describe());
    Ok(source)
}

fn cmd_estimate(
    cli: &Cli,
    config: &Config,
    request_path: &Path,
    options: &EstimationOptions,
    export: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    if !request_path.exists() {
        return Err(EstimationServiceError::InvalidRequest(format!(
            "Request file not found: {}",
            request_path.display()
        )));
    }

    let request = load_request_from_json(request_path)?;
    let source = open_source(cli, config)?;

    if cli.verbose {
        eprintln!("Estimating {}...", request_path.display());
    }
    let estimation = estimate_meeting(&request, options, config, source.repository())?;
    debug!(
        "Resolved options: hardware bound {}, bandwidth bound {}, network bound {}, {} instances",
        estimation.payload.hardware.bound,
        estimation.payload.software.bandwidth_bound,
        estimation.payload.software.network_bound,
        estimation.payload.software.instances_number
    );

    output_report(output_format, &estimation.report)?;

    if let Some(path) = export {
        export_csv(&estimation.report, path)?;
        eprintln!("Exported breakdown to {}", path.display());
    }

    Ok(())
}

fn cmd_hardware(cli: &Cli, config: &Config, name: Option<&str>, output_format: OutputFormat) -> Result<()> {
    let source = open_source(cli, config)?;
    let repo = source.repository();

    match name {
        Some(name) => {
            let record = repo
                .find_hardware(name)
                .ok_or_else(|| Error::not_found(ReferenceKind::Hardware, name))?;
            output_hardware_detail(output_format, record)?;
        }
        None => output_hardware_list(output_format, &repo.all_hardware())?,
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    show: bool,
    set_database_dir: Option<PathBuf>,
    clear_database_dir: bool,
    set_output: Option<OutputFormat>,
    set_hardware_bound: Option<Bound>,
    set_bandwidth_bound: Option<Bound>,
    set_network_bound: Option<Bound>,
) -> Result<()> {
    let mut modified = false;

    if clear_database_dir {
        config.database_dir = None;
        modified = true;
    }

    if let Some(dir) = set_database_dir {
        config.database_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(bound) = set_hardware_bound {
        config.hardware_bound = Some(bound);
        modified = true;
    }

    if let Some(bound) = set_bandwidth_bound {
        config.bandwidth_bound = Some(bound);
        modified = true;
    }

    if let Some(bound) = set_network_bound {
        config.network_bound = Some(bound);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
