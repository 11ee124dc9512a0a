//! `acs`: select compliance rules and run them on a host PE cluster.
//!
//! Exit codes: 0 after a completed run (whatever the verdicts), 1 when the
//! selection is empty, 2 for configuration errors.

mod args;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use acs_core::config::ReportFormat;
use acs_core::errors::{error_code, AcsErrorCode, SelectionError};
use acs_core::events::{EventDispatcher, TokenRejectedEvent};
use acs_core::{AcsConfig, SelectionConfig};
use acs_engine::gate::{apply_el3_params, El3Handoff, MemoryImage};
use acs_engine::pe::{PeRendezvous, PeSlots, ThreadCluster};
use acs_engine::report::{create_reporter, format_selection_summary, ConsoleEventHandler};
use acs_engine::{filter_rule_list, ModuleGate, Orchestrator, RuleCatalog, SelectionContext};

use args::Args;

enum Failure {
    NothingToExecute(String),
    Config(String),
}

fn main() -> ExitCode {
    acs_core::tracing::init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::NothingToExecute(message)) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
        Err(Failure::Config(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
    }
}

fn config_failure<E: AcsErrorCode + std::fmt::Display>(e: E) -> Failure {
    Failure::Config(e.tagged_string())
}

fn run(args: &Args) -> Result<(), Failure> {
    let config = AcsConfig::load(&args.root, Some(&args.to_overrides())).map_err(config_failure)?;
    let format = config.run.effective_report_format();
    let console = format == ReportFormat::Console;
    let use_color = config.run.effective_color();

    let mut events = EventDispatcher::new();
    if console {
        events.register(Arc::new(ConsoleEventHandler::stdout(use_color)));
    }

    let (mut selection, rejected) = SelectionConfig::from_config(&config).map_err(config_failure)?;
    for token in rejected {
        events.emit_token_rejected(&TokenRejectedEvent {
            kind: token.kind,
            token: token.token,
        });
    }

    if let Some(magic) = args.el3_magic {
        let base = args.el3_base.unwrap_or(0);
        let image = match &args.el3_image {
            Some(path) => MemoryImage::from_file(path, base).map_err(|e| {
                Failure::Config(format!(
                    "[{}] {}: {e}",
                    error_code::EL3_PARAM_ERROR,
                    path.display()
                ))
            })?,
            None => MemoryImage::new(base, Vec::new()),
        };
        let handoff = El3Handoff {
            magic,
            addr: args.el3_addr.unwrap_or(0),
        };
        apply_el3_params(&mut selection, handoff, &image);
    }

    for notice in selection.apply_defaults() {
        if console {
            println!("{notice}");
        }
    }
    selection.validate_level().map_err(config_failure)?;

    let catalog = RuleCatalog::standard();
    let gate = ModuleGate::new(&selection);
    let ctx = SelectionContext::new(&catalog, &selection, &gate);
    let rules = match filter_rule_list(&ctx, selection.rule_list.clone()) {
        Ok(rules) => rules,
        Err(e @ SelectionError::NothingToExecute) => {
            return Err(Failure::NothingToExecute(e.tagged_string()));
        }
        Err(e) => return Err(config_failure(e)),
    };

    if console {
        print!("{}", format_selection_summary(&selection, &rules));
    }
    if args.dry_run {
        return Ok(());
    }

    let slots = Arc::new(PeSlots::new(config.pe.effective_count()));
    let cluster = ThreadCluster::spawn(Arc::clone(&slots)).map_err(config_failure)?;
    let rendezvous = PeRendezvous::new(slots, Box::new(cluster))
        .with_timeout(config.pe.effective_timeout_iterations());

    let mut orchestrator = Orchestrator::new(catalog, selection)
        .with_gate(gate)
        .with_rendezvous(rendezvous)
        .with_platform(config.run.effective_platform())
        .with_events(events);

    let report = orchestrator.run(&rules);

    let reporter = create_reporter(format, use_color);
    match reporter.generate(&report) {
        Ok(output) => print!("{output}"),
        Err(e) => tracing::error!(target: "acs::cli", reporter = reporter.name(), "{e}"),
    }
    Ok(())
}
