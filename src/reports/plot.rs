use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use dropsize::error::DsResult;
use dropsize::knee::KneeFit;
use dropsize::psd::{Analysis, MomentKind};

use super::write_distribution_data;

const DATA_COLOR: &str = "#268bd2";
const FIT_COLOR: &str = "#dc322f";
const SURFACE_COLOR: &str = "#6c71c4";
const VOLUME_COLOR: &str = "#859900";

fn stem_of(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "psd".to_string())
}

fn sibling(path: &str, suffix: &str) -> String {
    let p = Path::new(path);
    let name = format!("{}{}", stem_of(path), suffix);
    match p.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            dir.join(name).to_string_lossy().into_owned()
        }
        _ => name,
    }
}

/// Emits the PSD gnuplot script and the two data files it plots: the
/// per-bin distribution table and the running sample average.
pub fn write_psd_script(script_path: &str, analysis: &Analysis) -> DsResult<()> {
    let dist_path = sibling(script_path, "_dist.dat");
    let avg_path = sibling(script_path, "_avg.dat");

    write_distribution_data(&dist_path, analysis)?;

    let mut avg = String::new();
    for value in &analysis.running_average {
        let _ = writeln!(avg, "{:.6}", value);
    }
    fs::write(&avg_path, avg)?;

    let mut gp = String::new();
    let _ = writeln!(
        gp,
        "set terminal pdfcairo  transparent enhanced fontscale 0.5 size 5.00in, 3.00in"
    );
    let _ = writeln!(gp, "set output \"{}.pdf\"", stem_of(script_path));
    let _ = writeln!(gp, "GNUTERM = \"wxt\"");
    let _ = writeln!(gp, "set multiplot layout 2,1");
    let _ = writeln!(gp, "set grid");
    let _ = writeln!(gp, "set title \"Sample Average\"");
    let _ = writeln!(gp, "set xlabel \"Samples\"");
    let _ = writeln!(gp, "set ylabel \"Cumulative Average\"");
    let _ = writeln!(
        gp,
        "p \"{}\" u 0:1 t \"\" w l lw 2.0 lc rgb \"{}\"",
        avg_path, DATA_COLOR
    );
    let _ = writeln!(gp, "set title \"Droplet Size Distribution\"");
    let _ = writeln!(gp, "set xlabel \"Diameter (um)\"");
    let _ = writeln!(gp, "set ylabel \"Differential (%)\"");
    let _ = writeln!(gp, "set logscale x");
    let _ = writeln!(
        gp,
        "p \"{}\" u 1:2 t \"{}\" w l lw 2.5 lc rgb \"{}\",\\",
        dist_path,
        MomentKind::Number,
        FIT_COLOR
    );
    let _ = writeln!(
        gp,
        "\"\" u 1:3 t \"{}\" w l lw 2.5 lc rgb \"{}\",\\",
        MomentKind::Surface,
        SURFACE_COLOR
    );
    let _ = writeln!(
        gp,
        "\"\" u 1:4 t \"{}\" w l lw 2.5 lc rgb \"{}\"",
        MomentKind::Volume,
        VOLUME_COLOR
    );
    let _ = writeln!(gp, "unset multiplot");

    fs::write(script_path, gp)?;
    Ok(())
}

/// Emits one per-case knee plot script: measured points with error bars,
/// the two fitted lines clipped 10% past the knee, and the knee marker with
/// its drop arrow to the pressure axis.
pub fn write_knee_script(
    script_path: &Path,
    name: &str,
    data_path: &str,
    fit: &KneeFit,
) -> DsResult<()> {
    let kx = fit.knee_pressure;
    let ky = fit.knee_flux;

    let mut gp = String::new();
    let _ = writeln!(
        gp,
        "set terminal pdfcairo  transparent enhanced fontscale 0.5 size 5.00in, 3.00in"
    );
    let _ = writeln!(gp, "set output \"{}.pdf\"", name);
    let _ = writeln!(gp, "GNUTERM = \"wxt\"");
    let _ = writeln!(gp, "set grid");
    let _ = writeln!(gp, "set xrange [0:*]");
    let _ = writeln!(gp, "set yrange [0:*]");
    let _ = writeln!(gp, "set xlabel \"TMP (bar)\"");
    let _ = writeln!(gp, "set ylabel \"J (L/h/m^{{2}})\"");
    let _ = writeln!(
        gp,
        "f(x) = (x < ({0:.4} + {0:.4}*0.1) ) ? {1:.4}*x + {2:.4} : 1/0",
        kx, fit.rise.slope, fit.rise.intercept
    );
    let _ = writeln!(
        gp,
        "g(x) = (x > ({0:.4} - {0:.4}*0.1) ) ? {1:.4}*x + {2:.4} : 1/0",
        kx, fit.plateau.slope, fit.plateau.intercept
    );
    let _ = writeln!(
        gp,
        "set label at {:.4},{:.4} \"\" point lw 2 pt 6 ps 1 front",
        kx, ky
    );
    let _ = writeln!(gp, "set label at {0:.4},0 \"{0:.2}\" offset 1,2 front", kx);
    let _ = writeln!(
        gp,
        "set arrow from {0:.4},{1:.4} to {0:.4},0 nohead lw 2 dt 2 front",
        kx, ky
    );
    let _ = writeln!(
        gp,
        "p \"{}\" u 1:3:4 t \"\" w errorbars lw 1.5 pt 7 ps 0.5 lc rgb \"{}\",\\",
        data_path, DATA_COLOR
    );
    let _ = writeln!(gp, "f(x) t \"\" lw 1.5 lc rgb \"{}\" w l,\\", FIT_COLOR);
    let _ = writeln!(gp, "g(x) t \"\" lw 1.5 lc rgb \"{}\" w l", FIT_COLOR);

    fs::write(script_path, gp)?;
    Ok(())
}
