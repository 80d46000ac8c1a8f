use mohrcirc::prelude::*;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "mohrcirc_plot",
    about = "Reads Gauss-point stress files, averages the tensors, and plots Mohr's circles"
)]
struct Options {
    /// Filename prefix of the data files, e.g., Gr1_MatPt
    prefix: String,

    /// Number of Gauss points; files are named <prefix>1.<ext> up to <prefix>N.<ext>
    n_gauss_points: usize,

    /// Extension of the data files
    #[structopt(long, default_value = "dat")]
    ext: String,

    /// Scaling factor applied to every tensor (default converts MPa to GPa)
    #[structopt(long, default_value = "0.001")]
    scale: f64,

    /// Reads data from and writes figures to /tmp/mohrcirc instead of data/
    #[structopt(long)]
    tmp: bool,
}

fn print_stresses(title: &str, stresses: &PrincipalStresses) {
    println!("{}", title);
    println!("  s1 = {:>12.6}, s2 = {:>12.6}, s3 = {:>12.6}", stresses.s1, stresses.s2, stresses.s3);
    for (name, circle) in ["major", "s1-s2", "s2-s3"].iter().zip(stresses.circles()) {
        println!("  {} circle: center = {:>12.6}, radius = {:>12.6}", name, circle.center, circle.radius);
    }
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    if options.n_gauss_points < 1 {
        return Err("the number of Gauss points must be at least 1");
    }

    // read, scale, and plot every Gauss point
    let mut samples = Vec::with_capacity(options.n_gauss_points);
    for index in 1..=options.n_gauss_points {
        let path = FilePath::gauss_data(&options.prefix, index, &options.ext, options.tmp);
        let sample = GaussPointSample::from_text_file(&path).map_err(|e| {
            eprintln!("cannot process Gauss point # {} ({})", index, path.display());
            e
        })?;
        let scaled = sample.scaled(options.scale)?;
        let stresses = PrincipalStresses::new(scaled.stress())?;
        print_stresses(&format!("Gauss point # {}", index), &stresses);
        let mut plot = MohrPlot::new();
        plot.draw(&stresses);
        let key = format!("{}{}_mohr_circle", options.prefix, index);
        plot.save(&FilePath::png(&key, options.tmp))?;
        samples.push(scaled);
    }

    // volume-weighted and arithmetic averages
    for (method, label) in [
        (AvgMethod::VolumeWeighted, "avg_vol"),
        (AvgMethod::Arithmetic, "avg_ari"),
    ] {
        let avg = average_stress(&samples, method)?;
        let stresses = PrincipalStresses::new(&avg)?;
        print_stresses(&format!("{:?} average", method), &stresses);
        let mut plot = MohrPlot::new();
        plot.draw(&stresses);
        let key = format!("{}{}_mohr_circle", options.prefix, label);
        plot.save(&FilePath::png(&key, options.tmp))?;
        let json_key = format!("{}{}_principal", options.prefix, label);
        stresses.write_json(&FilePath::json(&json_key, options.tmp))?;
    }
    Ok(())
}
