use std::path::Path;

use clap::Args;

use crate::reports;
use dropsize::error::DsResult;
use dropsize::knee::{self, loader};

#[derive(Args, Debug, Clone)]
pub struct KneeArgs {
    /// CSV case table with header name,head,tail.
    pub cases: String,

    /// Directory holding <name>.txt flux tables.
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Directory the gnuplot scripts are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: String,
}

pub fn run(args: KneeArgs) -> DsResult<()> {
    let cases = loader::load_cases(&args.cases)?;
    println!("🔎 Fitting {} flux curves", cases.len());

    let mut results = Vec::new();
    for case in &cases {
        let data_path = format!("{}/{}.txt", args.data_dir, case.name);
        let curve = loader::load_curve(&data_path)?;
        let fit = knee::fit_knee(&curve, case.head, case.tail)?;

        let script = Path::new(&args.out_dir).join(format!("gnuplot_{}.gp", case.name));
        reports::plot::write_knee_script(&script, &case.name, &data_path, &fit)?;
        println!("📈 {} -> {}", case.name, script.display());

        results.push((case.name.clone(), fit));
    }

    reports::print_knee_table(&results);
    Ok(())
}
