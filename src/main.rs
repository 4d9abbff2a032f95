use clap::Parser;
use ecg_calc::config::Command;
use ecg_calc::core::batch::run_qtc_batch;
use ecg_calc::core::report::{render_json, render_text};
use ecg_calc::domain::ports::ThresholdProvider;
use ecg_calc::utils::{logger, validation::Validate};
use ecg_calc::{
    classify_axis, compute_qtc_with, compute_rate, convert_to_ms, CalculatorConfig, CliConfig,
    Result, Worksheet, WorksheetEngine,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<()> {
    cli.validate()?;

    // 載入配置 (未指定時使用標準臨床閾值)
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading thresholds from: {}", path);
            CalculatorConfig::from_file(path)?
        }
        None => CalculatorConfig::default(),
    };
    config.validate()?;

    match &cli.command {
        Command::Rate(args) => {
            let input = args.to_input(config.paper_speed_mm_per_sec());
            let bpm = compute_rate(&input)?;
            println!("Heart rate: {:.0} bpm", bpm);
        }
        Command::Axis(args) => {
            let result = classify_axis(&args.to_input());
            println!("Axis: {}", result.label);
            for differential in &result.associated_differentials {
                println!("  - {}", differential);
            }
        }
        Command::Interval(args) => {
            let input = args.to_input(config.paper_speed_mm_per_sec());
            let ms = convert_to_ms(&input)?;
            println!(
                "{} small squares at {} mm/s = {:.0} ms",
                input.small_squares, input.paper_speed_mm_per_sec, ms
            );
        }
        Command::Qtc(args) => {
            let input = args.to_input()?;
            let result = compute_qtc_with(&input, config.qtc_cutoffs())?;
            println!("QTc (Bazett): {:.0} ms", result.qtc_ms);
            println!("{}", result.classification.label);
            for differential in &result.classification.associated_differentials {
                println!("  - {}", differential);
            }
        }
        Command::Report(args) => {
            let worksheet = Worksheet::from_file(&args.worksheet)?;
            worksheet.validate()?;
            let report = WorksheetEngine::new(config).run(&worksheet)?;
            if args.json {
                println!("{}", render_json(&report)?);
            } else {
                println!("{}", render_text(&report));
            }
        }
        Command::QtcBatch(args) => {
            let reader = BufReader::new(File::open(&args.input)?);
            let rows = match &args.output {
                Some(path) => {
                    let writer = BufWriter::new(File::create(path)?);
                    let rows = run_qtc_batch(reader, writer, config.qtc_cutoffs())?;
                    tracing::info!("📁 Output saved to: {}", path);
                    rows
                }
                None => run_qtc_batch(reader, io::stdout().lock(), config.qtc_cutoffs())?,
            };
            tracing::info!("✅ Processed {} rows", rows);
        }
    }

    Ok(())
}
