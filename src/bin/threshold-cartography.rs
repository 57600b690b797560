use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;
use sha2::Digest as _;

/// Render the Threshold Cartography poster to a PNG.
///
/// Every poster parameter is compiled in; only resource locations can be changed.
#[derive(Parser, Debug)]
#[command(name = "threshold-cartography", version)]
struct Cli {
    /// Directory holding the typeface files.
    #[arg(long)]
    fonts: Option<PathBuf>,

    /// Output PNG path (overwritten if present; its directory must exist).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print diagnostics about loaded faces (family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,

    /// Also write the composed draw plan as JSON.
    #[arg(long, value_name = "PATH")]
    dump_plan: Option<PathBuf>,

    /// Log pipeline stages to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mut cfg = threshold_cartography::PosterConfig::default();
    if let Some(dir) = cli.fonts {
        cfg.fonts_dir = dir;
    }
    if let Some(out) = cli.out {
        cfg.output = out;
    }
    cfg.validate()?;

    let mut fonts = threshold_cartography::FontSet::load(&cfg.fonts_dir, &cfg.fonts)
        .with_context(|| format!("load fonts from '{}'", cfg.fonts_dir.display()))?;

    if cli.dump_fonts {
        dump_font_diagnostics(&fonts);
    }

    if let Some(path) = &cli.dump_plan {
        let plan = threshold_cartography::compose(&cfg)?;
        let f = File::create(path)
            .with_context(|| format!("create plan dump '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut w, &plan).with_context(|| "serialize draw plan")?;
        w.flush()
            .with_context(|| format!("flush plan dump '{}'", path.display()))?;
    }

    let report = threshold_cartography::render_with_fonts(&cfg, &mut fonts)
        .with_context(|| format!("render poster to '{}'", cfg.output.display()))?;

    println!(
        "Saved: {} ({}x{})",
        report.path.display(),
        report.width,
        report.height
    );
    Ok(())
}

fn dump_font_diagnostics(fonts: &threshold_cartography::FontSet) {
    eprintln!("fonts:");
    for face in fonts.faces() {
        eprintln!("  {}:", face.file);
        eprintln!("    path:   {}", face.path.display());
        eprintln!("    family: {}", face.family);
        eprintln!("    roles:  {:?}", face.roles);
        eprintln!("    sha256: {}", sha256_hex(face.bytes));
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
