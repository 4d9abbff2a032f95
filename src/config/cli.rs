use crate::domain::model::{AxisInput, IntervalInput, Polarity, QtcInput, RateInput, Sex};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "ecg-calc")]
#[command(about = "Guided ECG calculator for manually measured tracings")]
pub struct CliConfig {
    /// TOML file overriding the cutoff tables and paper speed
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Heart rate from square counts
    Rate(RateArgs),
    /// Electrical axis from Lead I and aVF polarity
    Axis(AxisArgs),
    /// Convert small squares to milliseconds
    Interval(IntervalArgs),
    /// Corrected QT (Bazett)
    Qtc(QtcArgs),
    /// Full report from a worksheet TOML file
    Report(ReportArgs),
    /// QTc for every row of a CSV file (qt_ms,rr_ms[,sex])
    QtcBatch(QtcBatchArgs),
}

#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct RateArgs {
    /// Regular rhythm: large squares between R waves
    #[arg(long)]
    pub large_squares: Option<f64>,

    /// Regular rhythm: small squares between R waves
    #[arg(long)]
    pub small_squares: Option<f64>,

    /// Irregular rhythm: QRS complexes in 30 large squares (6 s)
    #[arg(long)]
    pub qrs_count: Option<u32>,
}

impl RateArgs {
    /// clap guarantees exactly one method is present, so the QRS count is the
    /// remaining case once both square counts are absent.
    pub fn to_input(&self, configured_speed: f64) -> RateInput {
        let input = match (self.large_squares, self.small_squares) {
            (Some(large), _) => RateInput::Regular {
                large_squares_between_beats: large,
            },
            (None, Some(small)) => RateInput::from_small_squares(small),
            (None, None) => RateInput::Irregular {
                qrs_count_in_6_sec: self.qrs_count.unwrap_or_default(),
            },
        };
        input.at_paper_speed(configured_speed)
    }
}

#[derive(Debug, Clone, Args)]
pub struct AxisArgs {
    #[arg(long, value_enum)]
    pub lead_i: Polarity,

    #[arg(long, value_enum)]
    pub lead_avf: Polarity,

    /// Only read when Lead I is positive and aVF negative
    #[arg(long, value_enum)]
    pub lead_ii: Option<Polarity>,
}

impl AxisArgs {
    pub fn to_input(&self) -> AxisInput {
        AxisInput {
            lead_i: self.lead_i,
            lead_avf: self.lead_avf,
            lead_ii: self.lead_ii,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct IntervalArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub small_squares: f64,

    /// Defaults to the configured paper speed (25 mm/s)
    #[arg(long)]
    pub paper_speed: Option<f64>,
}

impl IntervalArgs {
    pub fn to_input(&self, configured_speed: f64) -> IntervalInput {
        IntervalInput::new(self.small_squares)
            .with_paper_speed(self.paper_speed.unwrap_or(configured_speed))
    }
}

#[derive(Debug, Clone, Args)]
pub struct QtcArgs {
    #[arg(long)]
    pub qt_ms: f64,

    #[command(flatten)]
    pub rr: RrArgs,

    #[arg(long, value_enum)]
    pub sex: Option<Sex>,
}

#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct RrArgs {
    /// Preceding R-R interval in milliseconds
    #[arg(long)]
    pub rr_ms: Option<f64>,

    /// Heart rate in bpm, converted to R-R = 60000 / bpm
    #[arg(long)]
    pub heart_rate: Option<f64>,
}

impl QtcArgs {
    pub fn to_input(&self) -> Result<QtcInput> {
        let input = match self.rr.rr_ms {
            Some(rr_ms) => QtcInput::new(self.qt_ms, rr_ms),
            None => {
                QtcInput::from_heart_rate(self.qt_ms, self.rr.heart_rate.unwrap_or_default())?
            }
        };
        Ok(match self.sex {
            Some(sex) => input.with_sex(sex),
            None => input,
        })
    }
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Worksheet TOML file with the manual measurements
    #[arg(short, long)]
    pub worksheet: String,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct QtcBatchArgs {
    #[arg(short, long)]
    pub input: String,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        match &self.command {
            Command::Report(args) => validate_path("worksheet", &args.worksheet),
            Command::QtcBatch(args) => {
                validate_path("input", &args.input)?;
                if let Some(output) = &args.output {
                    validate_path("output", output)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
