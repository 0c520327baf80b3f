//! Deploy command runner

use anyhow::Result;
use tracing::{debug, warn};

use modbuild::config::{Config, ConfigWarning};
use modbuild::domain::ports::DeployEventSink;
use modbuild::infrastructure::JsonEventSink;
use modbuild::presentation::create_deploy_use_case;
use modbuild::{BuildArgs, DeployOptions, DeployReport};

use crate::cli::Cli;
use crate::ui::{ConsoleEventSink, UiContext};

/// Run one deployment. Returns the report; the caller maps it to an exit code.
pub fn cmd_deploy(cli: &Cli, config: &Config, warnings: &[ConfigWarning]) -> Result<DeployReport> {
    for warning in warnings {
        report_config_warning(warning);
    }

    let args = BuildArgs::parse(cli.options.as_deref().unwrap_or_default());
    for key in args.unknown_keys() {
        debug!(key, "ignoring unknown option");
    }

    let module_paths = args.module_paths();
    if module_paths.is_empty() {
        debug!("no module paths given, nothing to do");
        return Ok(DeployReport::new());
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, config);
    let options = DeployOptions::new()
        .with_dry_run(cli.dry_run)
        .with_prune(!cli.no_prune);

    let sink: Box<dyn DeployEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui.verbosity, ui.color))
    };

    let use_case = create_deploy_use_case(config);
    Ok(use_case.execute(&module_paths, &options, sink.as_ref()))
}

fn report_config_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{line}", warning.file.display()),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => warn!(
            "unknown config key '{}' at {location} (did you mean '{suggestion}'?)",
            warning.key
        ),
        None => warn!("unknown config key '{}' at {location}", warning.key),
    }
}
