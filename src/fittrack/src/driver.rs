use std::{fs::File, io::BufReader, io::Write, path::Path};

use anyhow::Context as _;
use fittrack_algos::Package;
use fittrack_types::{InfoMessage, Locale};
use strum::{Display, EnumString};

/// Readings the binary runs when no package file is given.
const SAMPLES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

pub fn sample_packages() -> Vec<Package> {
    SAMPLES
        .iter()
        .map(|(code, params)| Package::new(*code, *params))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub locale: Locale,
    pub format: OutputFormat,
}

pub fn render(info: &InfoMessage, options: RunOptions) -> anyhow::Result<String> {
    match options.format {
        OutputFormat::Text => Ok(info.render(options.locale)),
        OutputFormat::Json => Ok(serde_json::to_string(info)?),
    }
}

/// Computes every package in order and writes one line per workout.
///
/// Stops at the first package that cannot be built; lines already written
/// stay written. Returns the number of lines written.
pub fn run<W: Write>(
    packages: &[Package],
    options: RunOptions,
    out: &mut W,
) -> anyhow::Result<usize> {
    for (i, package) in packages.iter().enumerate() {
        let training = package
            .read()
            .inspect_err(|e| error!("Package #{} ({}) rejected: {}", i + 1, package.code, e))
            .with_context(|| format!("Invalid package #{} ({})", i + 1, package.code))?;

        let info = training.show_training_info();
        debug!("{} {:?} -> {:?}", package.code, package.params, info);

        writeln!(out, "{}", render(&info, options)?)?;
    }

    Ok(packages.len())
}

/// Reads a JSON array of `{"code": .., "params": [..]}` objects.
pub fn load_packages(path: &Path) -> anyhow::Result<Vec<Package>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let packages: Vec<Package> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse packages from {}", path.display()))?;

    info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}
