use crate::console::{render_bmi, render_food_score, render_plan};
use crate::infra::offline_service;
use crate::server;
use clap::{Args, Parser, Subcommand};
use nutriplan::config::AppConfig;
use nutriplan::error::AppError;
use nutriplan::recommendation::{compute_bmi, BmiReport, HealthMetrics};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "NutriPlan",
    about = "Serve or query personalised diet plans from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate a daily meal plan for a health profile
    Plan(PlanArgs),
    /// Score a single catalog food against a health profile
    Score(ScoreArgs),
    /// Compute and classify a body mass index
    Bmi(BmiArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured food catalog CSV
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Copy)]
pub(crate) struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    pub(crate) age: f64,
    /// Body weight in kilograms
    #[arg(long)]
    pub(crate) weight_kg: f64,
    /// Height in centimetres
    #[arg(long)]
    pub(crate) height_cm: f64,
    /// Systolic blood pressure (mmHg)
    #[arg(long)]
    pub(crate) blood_pressure: f64,
    /// Blood sugar level (mg/dL)
    #[arg(long)]
    pub(crate) blood_sugar_level: f64,
    /// Self-reported diet quality, usually 0-10
    #[arg(long)]
    pub(crate) nutrition_quality: f64,
}

impl From<ProfileArgs> for HealthMetrics {
    fn from(args: ProfileArgs) -> Self {
        HealthMetrics {
            age: args.age,
            weight_kg: args.weight_kg,
            height_cm: args.height_cm,
            blood_pressure: args.blood_pressure,
            blood_sugar_level: args.blood_sugar_level,
            nutrition_quality: args.nutrition_quality,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Food catalog CSV (defaults to APP_FOOD_CATALOG)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Foods per meal (defaults to APP_MEALS_PER_SLOT)
    #[arg(long)]
    pub(crate) per_meal: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Case-insensitive food name fragment
    #[arg(long)]
    pub(crate) food: String,
    /// Food catalog CSV (defaults to APP_FOOD_CATALOG)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BmiArgs {
    /// Body weight in kilograms
    #[arg(long)]
    pub(crate) weight_kg: f64,
    /// Height in centimetres
    #[arg(long)]
    pub(crate) height_cm: f64,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Plan(args) => run_plan(args),
        Command::Score(args) => run_score(args),
        Command::Bmi(args) => run_bmi(args),
    }
}

fn run_plan(args: PlanArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let profile = HealthMetrics::from(args.profile).validate()?;
    let service = offline_service(&config, args.catalog)?;

    let report = service.generate_plan(&profile, args.per_meal)?;
    render_plan(&report);
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let profile = HealthMetrics::from(args.profile).validate()?;
    let service = offline_service(&config, args.catalog)?;

    let report = service.score_food(&profile, &args.food)?;
    render_food_score(&report);
    Ok(())
}

fn run_bmi(args: BmiArgs) -> Result<(), AppError> {
    let bmi = compute_bmi(args.weight_kg, args.height_cm)?;
    render_bmi(&BmiReport::new(args.weight_kg, args.height_cm, bmi));
    Ok(())
}
