//! numglyph - draw decimal numbers as keypad-trace glyphs
//!
//! Every number given on the command line becomes one glyph. Glyphs are
//! placed left to right on a shared canvas and written as a PNG, or dumped
//! as the list of drawing operations with `--dump`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::{debug, info};

use numglyph::config::{self, Config};
use numglyph::constants::MAX_CANVAS_SIDE;
use numglyph::surface::{Painter, RasterPainter, RecordingPainter};
use numglyph::{Glyph, Region};

/// Print help message
fn print_help() {
    println!(
        r#"numglyph {} - draw decimal numbers as keypad-trace glyphs

USAGE:
    numglyph [OPTIONS] <NUMBER>...

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    -o, --output <FILE>     PNG file to write (default: glyph.png)
    --dump                  Print drawing operations instead of writing a PNG
    --help-circles          Draw a faint dot on every grid cell
    --max-digits <N>        Characters of each number to use (default: 4)
    --size <WxH>            Size of one glyph in pixels (default: 300x400)
    --init-config           Generate config file
    -f, --force             Overwrite config file without confirmation

GRID:
    7 8 9
    4 5 6
    1 2 3
      0

EXAMPLES:
    numglyph 1234                     Write glyph.png
    numglyph 1234 1119 -o pair.png    Two glyphs side by side
    numglyph --dump 2582              Show the drawing operations

CONFIG FILE:
    ~/.config/numglyph/config.toml (override with NUMGLYPH_CONFIG)
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Parsed command line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    help: bool,
    version: bool,
    init_config: bool,
    force: bool,
    dump: bool,
    help_circles: bool,
    max_digits: Option<usize>,
    size: Option<(u32, u32)>,
    output: Option<PathBuf>,
    numbers: Vec<String>,
}

fn parse_size(raw: &str) -> Option<(u32, u32)> {
    let (w, h) = raw.split_once(['x', 'X'])?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-V" | "--version" => options.version = true,
            "--init-config" => options.init_config = true,
            "-f" | "--force" => options.force = true,
            "--dump" => options.dump = true,
            "--help-circles" => options.help_circles = true,
            "-o" | "--output" => {
                let path = args.next().ok_or("--output needs a file name")?;
                options.output = Some(PathBuf::from(path));
            }
            "--max-digits" => {
                let raw = args.next().ok_or("--max-digits needs a value")?;
                let n: usize = raw
                    .parse()
                    .map_err(|_| format!("invalid --max-digits value: {raw}"))?;
                if n == 0 {
                    return Err("--max-digits must be at least 1".to_string());
                }
                options.max_digits = Some(n);
            }
            "--size" => {
                let raw = args.next().ok_or("--size needs a value like 300x400")?;
                options.size =
                    Some(parse_size(&raw).ok_or_else(|| format!("invalid --size value: {raw}"))?);
            }
            _ if arg.starts_with('-') => return Err(format!("unknown option: {arg}")),
            _ => options.numbers.push(arg),
        }
    }

    Ok(options)
}

/// Reject anything that is not a plain run of decimal digits
fn validate_number(number: &str) -> Result<()> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        bail!("not a decimal number: {:?}", number);
    }
    Ok(())
}

/// Canvas size and one region per glyph, laid out left to right
fn layout_regions(
    count: usize,
    canvas: &config::CanvasConfig,
) -> Result<(u32, u32, Vec<Region>)> {
    let count = u32::try_from(count.max(1)).context("Too many glyphs")?;
    let (w, h) = (canvas.glyph_width, canvas.glyph_height);
    let border = canvas.padding.checked_mul(2);
    let width = w
        .checked_mul(count)
        .zip(canvas.gap.checked_mul(count - 1))
        .and_then(|(glyphs, gaps)| glyphs.checked_add(gaps))
        .zip(border)
        .and_then(|(row, border)| row.checked_add(border));
    let height = border.and_then(|border| h.checked_add(border));

    let (width, height) = match (width, height) {
        (Some(width), Some(height)) if width <= MAX_CANVAS_SIDE && height <= MAX_CANVAS_SIDE => {
            (width, height)
        }
        _ => bail!(
            "Canvas for {} glyph(s) of {}x{} exceeds {}x{} pixels",
            count,
            w,
            h,
            MAX_CANVAS_SIDE,
            MAX_CANVAS_SIDE
        ),
    };

    // Every offset below is bounded by the checked width
    let regions = (0..count)
        .map(|i| {
            Region::new(
                f64::from(canvas.padding) + f64::from(i) * (f64::from(w) + f64::from(canvas.gap)),
                f64::from(canvas.padding),
                f64::from(w),
                f64::from(h),
            )
        })
        .collect();
    Ok((width, height, regions))
}

/// Write the default config, asking before overwriting
fn init_config(force: bool) -> Result<()> {
    let config_path = config::default_config_path()
        .ok_or_else(|| anyhow::anyhow!("Config directory not found"))?;

    if config_path.exists() && !force {
        println!("Config file already exists: {}", config_path.display());
        print!("Overwrite? [y/N]: ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let input = input.trim().to_lowercase();

        if input != "y" && input != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let path = Config::write_default_config()?;
    println!("Config file generated:");
    println!("  Path: {}", path.display());
    Ok(())
}

fn run(options: CliOptions) -> Result<()> {
    let mut cfg = Config::load();
    if options.help_circles {
        cfg.glyph.display_help_circles = true;
    }
    if let Some(n) = options.max_digits {
        cfg.glyph.max_digits = n;
    }
    if let Some((w, h)) = options.size {
        cfg.canvas.glyph_width = w;
        cfg.canvas.glyph_height = h;
    }

    let glyph_options = cfg.glyph.to_options();
    let style = cfg.style.to_style();
    let (width, height, regions) = layout_regions(options.numbers.len(), &cfg.canvas)
        .context("Invalid [canvas] settings")?;

    let glyphs: Vec<Glyph> = options
        .numbers
        .iter()
        .zip(regions)
        .map(|(number, region)| {
            let mut glyph = Glyph::new(region, glyph_options).with_style(style);
            glyph.set_number(number);
            glyph
        })
        .collect();

    if options.dump {
        let mut recorder = RecordingPainter::new();
        for glyph in &glyphs {
            recorder.clear();
            draw_glyph(glyph, &mut recorder)?;
            println!("# {}", glyph.number().unwrap_or_default());
            for op in recorder.ops() {
                println!("{op}");
            }
        }
        return Ok(());
    }

    let mut canvas = RasterPainter::new(width, height, cfg.canvas.background_color());
    for glyph in &glyphs {
        draw_glyph(glyph, &mut canvas)?;
    }

    let output = options
        .output
        .unwrap_or_else(|| PathBuf::from(&cfg.output.path));
    canvas.save_png(&output)?;
    info!("Wrote {} glyph(s) to {}", glyphs.len(), output.display());
    println!("{}", output.display());
    Ok(())
}

fn draw_glyph<P: Painter>(glyph: &Glyph, painter: &mut P) -> Result<()> {
    let number = glyph.number().unwrap_or_default();
    debug!("Drawing {} into {:?}", number, glyph.region());
    glyph
        .draw(painter)
        .with_context(|| format!("Failed to draw glyph for {number}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("numglyph: {msg}");
            eprintln!("Try 'numglyph --help' for more information.");
            std::process::exit(2);
        }
    };

    if options.help {
        print_help();
        return Ok(());
    }

    if options.version {
        println!("numglyph {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if options.init_config {
        return init_config(options.force);
    }

    if options.numbers.is_empty() {
        eprintln!("numglyph: no number given");
        eprintln!("Try 'numglyph --help' for more information.");
        std::process::exit(2);
    }

    for number in &options.numbers {
        if let Err(e) = validate_number(number) {
            eprintln!("numglyph: {e}");
            std::process::exit(2);
        }
    }

    run(options)
}
