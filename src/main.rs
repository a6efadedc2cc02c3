use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use u_procsched::config::SimulationConfig;
use u_procsched::workload::WorkloadGenerator;
use u_procsched::{compare_policies, scheduler_for, Policy, PolicyReport};

#[derive(Parser, Debug)]
#[command(name = "u-procsched")]
#[command(version)]
#[command(about = "Simulate FCFS, SJF and Round-Robin CPU scheduling on a process batch")]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Simulate a batch read from a JSON file
    Run(RunArgs),

    /// Print a random batch as JSON
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Path to the simulation JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Policy to simulate
    #[arg(short, long, value_enum, default_value = "all")]
    policy: PolicyArg,

    /// Round-Robin time quantum (overrides the file)
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Print the CPU slices of each policy
    #[arg(long)]
    timeline: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    output: OutputFormat,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Number of processes
    #[arg(short, long, default_value = "10")]
    count: usize,

    /// RNG seed
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Largest gap between consecutive arrivals
    #[arg(long, default_value = "3")]
    max_gap: i64,

    /// Smallest burst time
    #[arg(long, default_value = "1")]
    min_burst: i64,

    /// Largest burst time
    #[arg(long, default_value = "10")]
    max_burst: i64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Fcfs,
    Sjf,
    Rr,
    All,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Run(run_args) => run(run_args)?,
        Commands::Generate(gen_args) => generate(gen_args)?,
    }

    Ok(())
}

fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SimulationConfig::from_path(&args.input)?;
    if let Some(q) = args.quantum {
        config = config.with_time_quantum(q);
    }

    let policies = match args.policy {
        PolicyArg::Fcfs => vec![Policy::Fcfs],
        PolicyArg::Sjf => vec![Policy::Sjf],
        PolicyArg::Rr => vec![Policy::RoundRobin {
            time_quantum: config.time_quantum,
        }],
        PolicyArg::All if args.quantum.is_some() => Policy::all(config.time_quantum),
        PolicyArg::All => config.effective_policies(),
    };

    tracing::info!(
        processes = config.processes.len(),
        policies = policies.len(),
        "running simulation"
    );
    let reports = compare_policies(&config.processes, &policies)?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Table => print_table(&reports),
    }

    if args.timeline {
        for report in &reports {
            let description = scheduler_for(&report.policy).description();
            println!();
            println!("{} ({description}) timeline:", report.policy);
            for slice in &report.schedule.slices {
                println!("  [{:>5}, {:>5})  P{}", slice.start, slice.end, slice.process);
            }
        }
    }

    Ok(())
}

fn print_table(reports: &[PolicyReport]) {
    println!(
        "{:<10} {:>12} {:>12} {:>12} {:>9} {:>8} {:>9}",
        "POLICY", "TURNAROUND", "WAITING", "RESPONSE", "MAKESPAN", "UTIL", "SWITCHES"
    );
    for r in reports {
        println!(
            "{:<10} {:>12.3} {:>12.3} {:>12.3} {:>9} {:>7.1}% {:>9}",
            r.policy.to_string(),
            r.metrics.avg_turnaround,
            r.metrics.avg_waiting,
            r.metrics.avg_response,
            r.kpi.makespan,
            r.kpi.cpu_utilization * 100.0,
            r.kpi.context_switches,
        );
    }
}

fn generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let processes = WorkloadGenerator::new(args.seed)
        .with_count(args.count)
        .with_max_gap(args.max_gap)
        .with_burst_range(args.min_burst, args.max_burst)
        .generate();
    let config = SimulationConfig::new(processes);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
