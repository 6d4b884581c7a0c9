use clap::Args;

use crate::reports;
use dropsize::config::Config;
use dropsize::error::DsResult;
use dropsize::psd::{loader, Analysis};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Particle area measurements, one value per row.
    pub input: String,

    /// Diameter bin table (lower, upper, representative per row).
    #[arg(default_value = "bins.dat")]
    pub bins: String,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: AnalyzeArgs) -> DsResult<()> {
    // Validate the cutoff flags before touching any file.
    let cutoffs = args.config.analysis.get_cutoffs()?;

    println!("📂 Loading measurements: {}", args.input);
    let areas = loader::load_measurements(&args.input)?;

    println!("📐 Loading bin table: {}", args.bins);
    let bins = loader::load_bins(&args.bins)?;

    let analysis = Analysis::new(&areas, bins)?;
    let summary = analysis.summarize(cutoffs, args.config.analysis.crossing)?;

    reports::print_summary_table(&summary);
    print!("\n{}", reports::format_report(&summary));

    let out = &args.config.output;
    if let Some(path) = &out.report {
        reports::write_report(path, &summary)?;
        println!("💾 Report written: {}", path);
    }
    if let Some(path) = &out.distribution {
        reports::write_distribution_data(path, &analysis)?;
        println!("💾 Distribution data written: {}", path);
    }
    if let Some(path) = &out.json {
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
        println!("💾 JSON summary written: {}", path);
    }
    if let Some(path) = &out.plot {
        reports::plot::write_psd_script(path, &analysis)?;
        println!("📈 Plot script written: {}", path);
    }

    Ok(())
}
