use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use passgen::{GeneratorConfig, GeneratorError};

mod output;

/// Generate random passwords from a secure random source.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// YAML profile to start from; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of characters per password (1-128).
    #[arg(short, long)]
    length: Option<usize>,
    /// Leave out digits.
    #[arg(long)]
    no_numeric: bool,
    /// Leave out lowercase letters.
    #[arg(long)]
    no_lower: bool,
    /// Leave out uppercase letters.
    #[arg(long)]
    no_upper: bool,
    /// Leave out symbols.
    #[arg(long)]
    no_symbols: bool,
    /// Use these characters as the symbol class. ASCII letters and digits are ignored.
    #[arg(long)]
    symbols: Option<String>,
    /// Leave out characters that are easily confused, like `0`/`O` or `l`/`1`.
    #[arg(long)]
    trim_similar: bool,
    /// How many passwords to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Print the passwords as a JSON array.
    #[arg(long)]
    json: bool,
    /// Print the characters passwords are drawn from to stderr.
    #[arg(long)]
    show_key_space: bool,
    /// Save the resulting settings as a YAML profile.
    #[arg(long)]
    save_config: Option<PathBuf>,
}

impl Args {
    fn profile(&self) -> Result<GeneratorConfig, ProgError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_yaml_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(symbols) = &self.symbols {
            config.custom_symbols = symbols.clone();
        }
        config.use_numeric &= !self.no_numeric;
        config.use_lower_alphabet &= !self.no_lower;
        config.use_upper_alphabet &= !self.no_upper;
        config.use_symbols &= !self.no_symbols;
        config.trim_similar_looking |= self.trim_similar;
        Ok(config)
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    let config = args.profile()?;
    let mut generator = config.build()?;
    if let Some(path) = &args.save_config {
        config.save_yaml_file(path)?;
        eprintln!("Saved profile to {}", path.display());
    }
    tracing::info!(
        length = generator.length(),
        key_space = generator.key_space().len(),
        count = args.count,
        "generating passwords"
    );

    if args.show_key_space {
        eprintln!("{}", generator.key_space().iter().collect::<String>());
    }

    let passwords = (0..args.count).map(|_| generator.generate());
    let stdout = io::stdout().lock();
    if args.json {
        output::write_json(stdout, passwords)
    } else {
        output::write_lines(stdout, passwords)
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "passgen=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            tracing::debug!(error = ?err, "exiting with failure");
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("{0}")]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "passgen",
            "--length",
            "30",
            "--no-upper",
            "--symbols",
            "#%",
            "--trim-similar",
        ]);
        let config = args.profile().unwrap();
        assert_eq!(config.length, 30);
        assert!(!config.use_upper_alphabet);
        assert!(config.use_lower_alphabet);
        assert_eq!(config.custom_symbols, "#%");
        assert!(config.trim_similar_looking);
    }

    #[test]
    fn flags_override_profile() {
        let mut profile = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut profile, b"length: 16\nuse_numeric: false\n").unwrap();
        let path = profile.path().to_str().unwrap().to_owned();

        let args = Args::parse_from(["passgen", "--config", path.as_str(), "-l", "8"]);
        let config = args.profile().unwrap();
        assert_eq!(config.length, 8);
        assert!(!config.use_numeric);
    }

    #[test]
    fn saved_profile_matches_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.yaml");
        let path_arg = path.to_str().unwrap().to_owned();

        let args = Args::parse_from([
            "passgen",
            "--no-symbols",
            "-l",
            "20",
            "--save-config",
            path_arg.as_str(),
        ]);
        let config = args.profile().unwrap();
        config.save_yaml_file(args.save_config.as_deref().unwrap()).unwrap();

        let saved = GeneratorConfig::from_yaml_file(&path).unwrap();
        assert_eq!(saved.length, 20);
        assert!(!saved.use_symbols);
        assert_eq!(saved, config);
    }
}
