use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use selector_resolver::output::{OutputFormatter, ResolutionReport, SelectorReport};
use selector_resolver::{cli, load_symbol_space, logging, SelectorFactory};
use std::fs;
use std::process::ExitCode;
use tracing::{debug, info, warn};

fn main() -> Result<ExitCode> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let table = load_symbol_space(&args.symbols, args.language).with_context(|| {
        format!("Failed to load symbol space from {}", args.symbols.display())
    })?;
    let containers = table.len();
    info!(containers, path = %args.symbols.display(), "symbol space loaded");

    let factory = SelectorFactory::for_space(table);
    let mut report = ResolutionReport::new(args.symbols.display().to_string(), containers);

    for text in &args.selectors {
        let selector = factory
            .build(text)
            .with_context(|| format!("Invalid selector '{text}'"))?;
        report.push(SelectorReport::from_selector(text, &selector));
    }

    if !args.names.is_empty() {
        #[allow(deprecated)]
        let selectors = factory
            .build_from_ambiguous_names(&args.names)
            .context("Invalid names")?;
        for (name, selector) in args.names.iter().zip(&selectors) {
            report.push(SelectorReport::from_selector(name, selector));
        }
    }

    let rendered = OutputFormatter::format(&report, args.format)?;
    debug!(
        format = args.format.as_str(),
        selectors = report.total_selectors,
        "report rendered"
    );
    match &args.output_file {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }

    if report.has_failures() {
        warn!(failed = report.failed, "some selectors could not be resolved");
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}
