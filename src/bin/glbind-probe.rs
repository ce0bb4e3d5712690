//! Open the system GL library, import the catalog and report what resolved

use glbind::catalog;
use glbind::logging::{self, LogConfig};
use glbind::{Gl, GlError, LoaderConfig, SystemResolver};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
struct ProbeArgs {
    config: Option<PathBuf>,
    library: Option<String>,
    unbound: bool,
    catalog: bool,
    json: bool,
}

const USAGE: &str = "Usage: glbind-probe [OPTIONS]\n\nOptions:\n  \
     --config FILE    Load loader settings from FILE (default: discover glbind.toml)\n  \
     --library PATH   Open PATH instead of the platform GL library\n  \
     --unbound        List every entry point that did not resolve\n  \
     --catalog        List the whole catalog with its prototypes\n  \
     --json           Print the report as JSON";

fn parse_args() -> Result<ProbeArgs, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut probe = ProbeArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--unbound" => probe.unbound = true,
            "--catalog" => probe.catalog = true,
            "--json" => probe.json = true,
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires an argument")?;
                probe.config = Some(PathBuf::from(path));
            }
            "--library" => {
                i += 1;
                let path = args.get(i).ok_or("--library requires an argument")?;
                probe.library = Some(path.clone());
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            arg => return Err(format!("Unknown option: {}\n\n{}", arg, USAGE)),
        }
        i += 1;
    }

    Ok(probe)
}

fn load_config(probe: &ProbeArgs) -> Result<LoaderConfig, GlError> {
    let mut config = match &probe.config {
        Some(path) => LoaderConfig::from_file(path)?,
        None => LoaderConfig::discover(),
    };
    if let Some(library) = &probe.library {
        config.library.paths = vec![library.clone()];
    }
    Ok(config)
}

fn run(probe: &ProbeArgs) -> Result<(), GlError> {
    let config = load_config(probe)?;
    let _guard = logging::init(LogConfig::from_settings(&config.logging));

    let resolver = SystemResolver::open_with(&config.library)?;
    let gl = Gl::import_with(&resolver, &config);
    let report = gl.load_report().ok_or(GlError::NotInitialized)?;

    if probe.json {
        let mut out = json!({
            "library": resolver.path(),
            "get_proc_address": resolver.has_get_proc_address(),
            "required_version": report.required.to_string(),
            "bound": report.bound,
            "total": report.total(),
            "missing_core": report.missing_core,
            "elapsed_us": report.elapsed.as_micros() as u64,
        });
        if probe.unbound {
            out["unbound"] = json!(report.unbound);
        }
        if probe.catalog {
            out["catalog"] = gl
                .entry_status()
                .map(|(entry, bound)| {
                    json!({
                        "name": entry.name,
                        "requirement": entry.requirement.to_string(),
                        "prototype": entry.describe(),
                        "bound": bound,
                    })
                })
                .collect();
        }
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| GlError::Config(format!("failed to encode report: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    println!("library: {}", resolver.path());
    println!(
        "bound {}/{} entry points in {:?}",
        report.bound,
        report.total(),
        report.elapsed
    );
    if report.missing_core.is_empty() {
        println!("all GL {} core entry points resolved", report.required);
    } else {
        println!(
            "missing {} GL {} core entry points:",
            report.missing_core.len(),
            report.required
        );
        for name in &report.missing_core {
            println!("  {}", name);
        }
    }

    if probe.unbound {
        println!("unbound:");
        for name in &report.unbound {
            let requirement = catalog::find(name)
                .map(|entry| entry.requirement.to_string())
                .unwrap_or_default();
            println!("  {:<40} {}", name, requirement);
        }
    }

    if probe.catalog {
        for (entry, bound) in gl.entry_status() {
            let mark = if bound { '+' } else { '-' };
            println!("{} {:<12} {}", mark, entry.requirement.to_string(), entry.describe());
        }
    }

    Ok(())
}

fn main() {
    let probe = match parse_args() {
        Ok(probe) => probe,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&probe) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
