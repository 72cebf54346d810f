//! CLI entrypoint for Legal Drafter
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use drafter_application::ports::page::{FieldEvent, FieldKind, PagePort};
use drafter_application::{
    AutofillController, ClipboardExport, NoSubmissionLogger, SubmissionLogger,
    SubmissionOrchestrator,
};
use drafter_domain::{CaseInputRecord, SubmissionOutcome};
use drafter_infrastructure::{
    ConfigLoader, FileConfig, HttpGenerationGateway, JsonlSubmissionLogger, Severity,
    SystemClipboard,
};
use drafter_presentation::{
    Cli, ConsoleFormatter, HtmlResultRenderer, OutputFormat, ResultSnapshot, TerminalPage,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const TRIGGER_LABEL: &str = "Preencher Exemplo";
const COPY_LABEL: &str = "Copiar Documento";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.base_url = endpoint.clone();
    }
    if let Some(schema) = cli.schema {
        config.autofill.schema = schema;
    }

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting Legal Drafter");

    for issue in config.check()? {
        if issue.severity == Severity::Warning {
            warn!("{}", issue.message);
        }
    }

    // === Dependency Injection ===
    let layout = config.page.to_page_layout();
    let autofill_settings = config.autofill.to_autofill_settings();
    let clipboard_settings = config.clipboard.to_clipboard_settings();

    let page = Arc::new(
        TerminalPage::new(layout.clone(), config.autofill.schema)
            .with_control(&autofill_settings.trigger_id, TRIGGER_LABEL)
            .with_control(&clipboard_settings.control_id, COPY_LABEL)
            .with_progress(!cli.quiet),
    );
    let logger = submission_logger(&config);

    if cli.fill_example {
        let autofill = AutofillController::setup(page.clone(), autofill_settings)?
            .with_logger(logger.clone());
        let report = autofill.fill();
        if !cli.quiet {
            eprintln!("{}", ConsoleFormatter::format_autofill(&report));
        }
    }

    for (key, value) in &cli.fields {
        apply_field(page.as_ref(), key, value)?;
    }

    let record = CaseInputRecord::from_pairs(page.form_fields(&layout.form_id));
    let issues = record.validate(page.schema());
    if !issues.is_empty() {
        warn!(count = issues.len(), "Submitting with invalid fields");
        if !cli.quiet {
            eprintln!("{}", ConsoleFormatter::format_issues(&issues));
        }
    }

    let gateway = Arc::new(HttpGenerationGateway::new(config.endpoint.url()));
    let orchestrator = SubmissionOrchestrator::setup(
        page.clone(),
        page.clone(),
        gateway,
        Arc::new(HtmlResultRenderer::new()),
        layout.clone(),
    )?
    .with_logger(logger);

    let outcome = orchestrator.submit().await;

    // === Output ===
    let snapshot = ResultSnapshot::capture(page.as_ref(), &layout, &cli.tabs());
    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_text(&snapshot),
        OutputFormat::Html => ConsoleFormatter::format_html(&snapshot),
        OutputFormat::Json => ConsoleFormatter::format_json(&snapshot),
    };
    println!("{}", output);

    if !matches!(outcome, SubmissionOutcome::Rendered { .. }) {
        return Ok(ExitCode::FAILURE);
    }

    if cli.copy {
        match SystemClipboard::detect() {
            Some(clipboard) => {
                // the process exits right after, so the label is not held
                let settings = clipboard_settings.with_confirm_duration(Duration::ZERO);
                let confirm_label = settings.confirm_label.clone();
                let export = ClipboardExport::bind(
                    page.clone(),
                    Arc::new(clipboard),
                    settings,
                    layout.document_container_id.clone(),
                )?;
                if export.copy().await.is_err() {
                    return Ok(ExitCode::FAILURE);
                }
                if !cli.quiet {
                    eprintln!("{}", confirm_label);
                }
            }
            None => {
                warn!("No clipboard helper found (pbcopy, wl-copy, xclip, xsel, clip.exe)");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Install the stderr subscriber, plus a file writer when configured
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn submission_logger(config: &FileConfig) -> Arc<dyn SubmissionLogger> {
    match &config.logging.submission_log {
        Some(path) => match JsonlSubmissionLogger::new(path) {
            Some(logger) => {
                info!(path = %logger.path().display(), "Submission log enabled");
                Arc::new(logger)
            }
            None => Arc::new(NoSubmissionLogger),
        },
        None => Arc::new(NoSubmissionLogger),
    }
}

/// Write a `-f key=value` field as a user edit would
fn apply_field(page: &TerminalPage, key: &str, value: &str) -> Result<()> {
    let Some(kind) = page.field_kind(key) else {
        let known = page.schema().field_keys().join(", ");
        bail!("Unknown field '{key}' for the {} form (fields: {known})", page.schema());
    };
    if !page.set_field_value(key, value) {
        let options: Vec<String> = page
            .select_options(key)
            .into_iter()
            .map(|option| option.value)
            .collect();
        bail!("'{value}' is not an option of '{key}' (options: {})", options.join(", "));
    }
    if kind == FieldKind::Select {
        page.dispatch_field_event(key, FieldEvent::Change);
    }
    page.dispatch_field_event(key, FieldEvent::Input);
    Ok(())
}
