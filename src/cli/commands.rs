use crate::cli::args::{Cli, Commands};
use crate::config::{Config, OutputFormat};
use crate::requirements::{
    self, Arity, AuditFinding, RequirementKey, Section, Status, registry,
};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use regex::Regex;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.format.as_deref(), cli.verbose)?;
    init_logging(&config)?;

    if config.verbose {
        println!("csdlreq v{}", env!("CARGO_PKG_VERSION"));
    }

    let output = match cli.command {
        Commands::List { section, status, filter } => {
            list_command(section, status.as_deref(), filter.as_deref(), &config)?
        }
        Commands::Show { key } => show_command(&key, &config)?,
        Commands::Render { key, value, citation } => {
            render_command(&key, value.as_deref(), citation, &config)?
        }
        Commands::Export { output } => export_command(output.as_deref())?,
        Commands::Check => check_command(&config)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

pub fn list_command(
    section: Option<u8>,
    status: Option<&str>,
    filter: Option<&str>,
    config: &Config,
) -> Result<String> {
    let section = match section {
        Some(n) => Some(
            Section::from_number(n).ok_or_else(|| anyhow!("No requirements in section {}", n))?,
        ),
        None => None,
    };
    if let Some(name) = status.filter(|name| !Status::is_known_name(name)) {
        return Err(anyhow!(
            "Unknown status '{}' (expected one of: {})",
            name,
            Status::NAMES.join(", ")
        ));
    }
    let pattern = match filter {
        Some(p) => Some(Regex::new(p).with_context(|| format!("Invalid filter pattern '{}'", p))?),
        None => None,
    };

    let selected: Vec<RequirementKey> = RequirementKey::ALL
        .iter()
        .copied()
        .filter(|key| section.is_none_or(|s| key.section() == s))
        .filter(|key| status.is_none_or(|name| key.status().matches_name(name)))
        .filter(|key| {
            pattern
                .as_ref()
                .is_none_or(|re| re.is_match(key.as_str()) || re.is_match(key.message()))
        })
        .collect();
    debug!("Selected {} of {} requirements", selected.len(), RequirementKey::ALL.len());

    if config.format == OutputFormat::Json {
        return Ok(requirements::export_json(&selected)?);
    }

    let mut lines = Vec::new();
    let mut current = None;
    for key in &selected {
        if current != Some(key.section()) {
            current = Some(key.section());
            lines.push(format!("§{}", key.section()));
        }
        lines.push(format!("  {:<28} {:<14} {}", key.as_str(), key.status().name(), key.citation()));
    }
    lines.push(format!("{} requirement(s)", selected.len()));
    Ok(lines.join("\n"))
}

pub fn show_command(key: &str, config: &Config) -> Result<String> {
    let key: RequirementKey = key.parse()?;
    info!("Showing requirement {}", key);

    if config.format == OutputFormat::Json {
        return Ok(requirements::export_json(&[key])?);
    }

    let status = match key.status() {
        Status::Superseded(by) => format!("superseded by {}", by),
        other => other.name().to_string(),
    };
    let arity = match key.arity() {
        Arity::Fixed => "fixed",
        Arity::Contextual => "contextual",
    };

    Ok([
        format!("key:      {}", key),
        format!("section:  {}", key.section()),
        format!("status:   {}", status),
        format!("arity:    {}", arity),
        format!("message:  {}", key.message()),
        format!("citation: {}", key.citation()),
    ]
    .join("\n"))
}

pub fn render_command(
    key: &str,
    value: Option<&str>,
    with_citation: bool,
    config: &Config,
) -> Result<String> {
    let message = registry::render(key, value)?;
    let citation = if with_citation {
        Some(registry::render_citation(key, value)?)
    } else {
        None
    };

    if value.is_some() && key.parse::<RequirementKey>()?.arity() == Arity::Fixed {
        debug!("Requirement '{}' takes no context value, ignoring it", key);
    }

    if config.format == OutputFormat::Json {
        let mut doc = json!({ "key": key, "message": message });
        if let Some(citation) = citation {
            doc["citation"] = json!(citation);
        }
        return Ok(serde_json::to_string_pretty(&doc)?);
    }

    Ok(match citation {
        Some(citation) => format!("{}\n[{}]", message, citation),
        None => message,
    })
}

pub fn export_command(output: Option<&Path>) -> Result<String> {
    let json = requirements::export_json(RequirementKey::ALL)?;
    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write catalog to {}", path.display()))?;
            info!("Exported {} requirements to {}", RequirementKey::ALL.len(), path.display());
            Ok(format!(
                "✅ Exported {} requirements to {}",
                RequirementKey::ALL.len(),
                path.display()
            ))
        }
        None => Ok(json),
    }
}

pub fn check_command(config: &Config) -> Result<String> {
    report_audit(&requirements::audit(), config)
}

/// Formats audit findings; any finding makes the check fail.
pub fn report_audit(findings: &[AuditFinding], config: &Config) -> Result<String> {
    if config.format == OutputFormat::Json {
        let report = json!({
            "requirements": RequirementKey::ALL.len(),
            "findings": findings,
        });
        let text = serde_json::to_string_pretty(&report)?;
        if findings.is_empty() {
            return Ok(text);
        }
        println!("{}", text);
        return Err(anyhow!("Catalog check failed with {} finding(s)", findings.len()));
    }

    if !findings.is_empty() {
        for finding in findings {
            println!("❌ {}: {}", finding.key, finding.problem);
        }
        return Err(anyhow!("Catalog check failed with {} finding(s)", findings.len()));
    }

    let count = |name: &str| requirements::by_status(name).count();
    Ok(format!(
        "✅ Catalog consistent: {} requirements ({} enforced, {} untested, {} pending, {} superseded, {} not validated)",
        RequirementKey::ALL.len(),
        count("enforced"),
        count("untested"),
        count("pending"),
        count("superseded"),
        count("not_validated"),
    ))
}
