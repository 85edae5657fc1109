use clap::{Args, Parser, Subcommand};
use lead_scorer::config::{load_icp_settings, AppConfig};
use lead_scorer::error::AppError;
use lead_scorer::telemetry;
use lead_scorer::workflows::leads::{
    BatchReport, GNewsProbe, IcpSettings, LeadBatch, LeadScorer, NeutralProbe, SentimentProbe,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "lead-scorer",
    about = "Score acquisition leads against an Ideal Customer Profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a JSON file of leads and print the ranked results
    Score(ScoreArgs),
    /// Print the normalized Ideal Customer Profile used for scoring
    Icp(IcpArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// JSON file holding one lead object or an array of leads
    #[arg(long)]
    leads: PathBuf,
    /// JSON file of ICP settings (overrides LEAD_ICP_PATH and the built-in defaults)
    #[arg(long)]
    icp: Option<PathBuf>,
    /// Write the summary table as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Print the full report as JSON instead of the text listing
    #[arg(long)]
    json: bool,
    /// Skip news sentiment lookups entirely
    #[arg(long)]
    offline: bool,
    /// List every scoring reason under each lead instead of only its summary line
    #[arg(long)]
    show_reasons: bool,
}

#[derive(Args, Debug)]
struct IcpArgs {
    /// JSON file of ICP settings (overrides LEAD_ICP_PATH and the built-in defaults)
    #[arg(long)]
    icp: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Score(args) => run_score(args, config).await,
        Command::Icp(args) => run_icp(args, config),
    }
}

fn resolve_icp(path: Option<PathBuf>, config: &AppConfig) -> Result<IcpSettings, AppError> {
    match path {
        Some(path) => Ok(load_icp_settings(path)?),
        None => Ok(config.icp.clone()),
    }
}

async fn run_score(args: ScoreArgs, config: AppConfig) -> Result<(), AppError> {
    let profile = resolve_icp(args.icp, &config)?.normalize();
    let probe: Box<dyn SentimentProbe> = if args.offline {
        Box::new(NeutralProbe)
    } else {
        let probe = GNewsProbe::new(&config.sentiment);
        if !probe.is_configured() {
            info!("news search not configured; news sentiment will be neutral");
        }
        Box::new(probe)
    };

    let leads = LeadBatch::from_path(&args.leads)?;
    info!(path = %args.leads.display(), leads = leads.len(), "scoring lead batch");

    let scorer = LeadScorer::new(profile, probe);
    let report = scorer.score_batch(leads).await;

    if let Some(path) = args.csv {
        let file = std::fs::File::create(&path)?;
        report.write_csv(file)?;
        info!(path = %path.display(), "summary table written");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).map_err(std::io::Error::from)?;
        writeln!(out)?;
    } else {
        render_report(&mut out, &report, args.show_reasons)?;
    }

    Ok(())
}

fn run_icp(args: IcpArgs, config: AppConfig) -> Result<(), AppError> {
    let profile = resolve_icp(args.icp, &config)?.normalize();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &profile).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn render_report<W: Write>(
    out: &mut W,
    report: &BatchReport,
    show_reasons: bool,
) -> std::io::Result<()> {
    for scored in &report.leads {
        let name = if scored.lead.company_name.is_empty() {
            "N/A"
        } else {
            scored.lead.company_name.as_str()
        };
        writeln!(out, "Lead: {name}")?;
        writeln!(out, "  Total Score: {}", scored.result.total_score)?;
        let shown = if show_reasons { scored.result.reasons.len() } else { 1 };
        for reason in scored.result.reasons.iter().take(shown) {
            writeln!(out, "  - {reason}")?;
        }
        writeln!(out)?;
    }

    let summary = &report.summary;
    writeln!(
        out,
        "Scored {} lead(s): {} high, {} medium, {} low",
        summary.total, summary.high_potential, summary.medium_potential, summary.low_potential
    )?;
    if let Some(average) = summary.average_score {
        writeln!(out, "Average score: {average:.1}")?;
    }
    if let Some(top) = &summary.top_company {
        writeln!(out, "Top lead: {top}")?;
    }
    Ok(())
}
