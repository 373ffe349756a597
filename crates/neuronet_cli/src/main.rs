pub mod config;

use crate::config::Settings;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use neuronet_core::{Neuron, NeuronConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "neuronet")]
#[command(about = "Build a formal neuron and probe its output")]
struct Cli {
    /// TOML settings file ([log] and optional [neuron] sections)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(flatten)]
    neuron: NeuronConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a signal vector and print the weighted sum and output
    Eval {
        /// Comma-separated input signals, one per weight
        #[arg(value_delimiter = ',', allow_hyphen_values = true, required = true)]
        signals: Vec<f64>,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Print the initialized weights, one per line
    Weights,
    /// Write the default settings file
    InitConfig {
        /// Output path (stdout when omitted)
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct EvalReport<'a> {
    activation: &'a str,
    #[serde(serialize_with = "real::serialize")]
    parameter: f64,
    #[serde(serialize_with = "real::serialize_slice")]
    weights: &'a [f64],
    #[serde(serialize_with = "real::serialize_slice")]
    signals: &'a [f64],
    #[serde(serialize_with = "real::serialize")]
    weighted_sum: f64,
    #[serde(serialize_with = "real::serialize")]
    output: f64,
}

/// JSON has no NaN or infinity; serde_json would write `null`. Non-finite
/// values are written as the strings `"NaN"`, `"inf"` and `"-inf"` instead.
mod real {
    use serde::ser::SerializeSeq;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.collect_str(value)
        }
    }

    pub fn serialize_slice<S: Serializer>(
        values: &&[f64],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values.iter() {
            seq.serialize_element(&Real(*value))?;
        }
        seq.end()
    }

    struct Real(f64);

    impl serde::Serialize for Real {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize(&self.0, serializer)
        }
    }
}

impl EvalReport<'_> {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn init_logging(settings: &Settings, override_level: Option<&str>) -> Result<()> {
    let level_name = override_level.unwrap_or(&settings.log.level);
    let level = tracing::Level::from_str(level_name)
        .map_err(|_| anyhow::anyhow!("unknown log level {level_name:?}"))?;

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr);
    let installed = if settings.log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}

fn resolve_neuron_config(cli_config: NeuronConfig, settings: &Settings) -> NeuronConfig {
    match &settings.neuron {
        Some(from_file) => {
            info!("Using [neuron] section from settings file; neuron flags ignored");
            from_file.clone()
        }
        None => cli_config,
    }
}

fn eval(config: &NeuronConfig, signals: &[f64], json: bool) -> Result<()> {
    let mut neuron = Neuron::from_config(config).context("building neuron")?;
    neuron.set_signals(signals).context("setting input signals")?;

    let weighted_sum = neuron.weighted_sum();
    let output = neuron.compute_output(config.parameter);

    info!(
        activation = %neuron.activation(),
        parameter = config.parameter,
        weighted_sum,
        output,
        "Neuron evaluated"
    );

    if json {
        let report = EvalReport {
            activation: neuron.activation().name(),
            parameter: config.parameter,
            weights: neuron.weights(),
            signals: neuron.signals_in(),
            weighted_sum,
            output,
        };
        println!("{}", report.to_json()?);
    } else {
        println!("sum    = {weighted_sum}");
        println!("output = {output}");
    }
    Ok(())
}

fn print_weights(config: &NeuronConfig) -> Result<()> {
    let neuron = Neuron::from_config(config).context("building neuron")?;
    info!(
        signals_count = neuron.signals_count(),
        seeded = config.seed.is_some(),
        "Weights initialized"
    );
    for w in neuron.weights() {
        println!("{w}");
    }
    Ok(())
}

fn init_config(output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            Settings::save_template(&path)?;
            info!(path = %path.display(), "Settings written");
        }
        None => print!("{}", Settings::template()?),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    init_logging(&settings, cli.log_level.as_deref())?;

    let neuron_config = resolve_neuron_config(cli.neuron, &settings);
    info!(config = ?neuron_config, "Starting neuronet");

    match cli.command {
        Commands::Eval { signals, json } => eval(&neuron_config, &signals, json),
        Commands::Weights => print_weights(&neuron_config),
        Commands::InitConfig { output } => init_config(output),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let message = format!("{e:#}");
        // No subscriber yet if the settings file failed to load.
        error!(error = %message, "Fatal Error");
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}
