#[macro_use]
extern crate log;

use std::{io::Write as _, path::PathBuf};

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use fittrack::{
    OutputFormat, RunOptions, algos::Package, load_packages, run, sample_packages, types::Locale,
};

#[derive(Parser)]
#[command(version, about = "Distance, speed and calories from workout sensor readings")]
pub struct FittrackCli {
    /// Language of the summary labels
    #[arg(env = "FITTRACK_LANG", long, global = true, default_value_t = Locale::Ru)]
    pub lang: Locale,
    /// `text` for the summary line, `json` for one object per workout
    #[arg(env = "FITTRACK_FORMAT", long, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: Option<FittrackCommand>,
}

#[derive(Subcommand)]
pub enum FittrackCommand {
    ///
    /// Run the built-in sample workouts (default)
    ///
    Demo,
    ///
    /// Compute a single package, e.g. `show RUN 15000 1 75`
    ///
    Show {
        /// RUN, WLK or SWM
        code: String,
        #[arg(required = true, allow_negative_numbers = true)]
        params: Vec<f64>,
    },
    ///
    /// Compute every package of a JSON file
    ///
    Batch { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(error) = dotenv_result {
        debug!("No .env loaded: {}", error);
    }

    let cli = FittrackCli::parse();
    let options = RunOptions {
        locale: cli.lang,
        format: cli.format,
    };

    let packages = match cli.subcommand.unwrap_or(FittrackCommand::Demo) {
        FittrackCommand::Demo => sample_packages(),
        FittrackCommand::Show { code, params } => vec![Package::new(code, params)],
        FittrackCommand::Batch { file } => load_packages(&file)?,
    };

    let mut stdout = std::io::stdout().lock();
    let count = run(&packages, options, &mut stdout)?;
    stdout.flush()?;

    debug!("Rendered {} workouts", count);
    Ok(())
}
