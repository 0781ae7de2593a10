//! scan-cube command line
//!
//! Operator front end for calibration profiles, single-sample
//! classification and face capture from already classified samples.
//!
//! # Usage
//!
//! ```bash
//! # List stored calibration profiles
//! scan-cube profiles list
//!
//! # Save a profile with a recalibrated red center
//! scan-cube profiles save lamp --center r=170,200,180
//!
//! # Classify one HSV sample with a stored profile
//! scan-cube classify 60 200 200 --profile lamp
//!
//! # Guided capture of six faces
//! scan-cube capture --guided ggggggggg ooooooooo bbbbbbbbb rrrrrrrrr yyyyyyyyy wwwwwwwww
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scan_cube::calibration::ProfileStore;
use scan_cube::capture::CaptureOrder;
use scan_cube::constants::storage::DEFAULT_CONFIG_PATH;
use scan_cube::{ColorRegistry, ColorTag, FaceId, FaceSample, Hsv, ScanConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to scan_cube.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Profile store, overriding the configuration
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage calibration profiles
    Profiles {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Classify one HSV sample (hue 0-180, saturation and value 0-255)
    Classify {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=180))]
        hue: u8,
        saturation: u8,
        value: u8,

        /// Profile to classify with instead of the startup profile
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Capture faces from nine-letter color samples (e.g. "gggrggggg")
    Capture {
        /// Only accept faces in the configured guided order
        #[arg(short, long)]
        guided: bool,

        /// Guided order as six face letters, e.g. "URFDLB"
        #[arg(long)]
        order: Option<String>,

        /// Face samples in submission order
        #[arg(required = true)]
        faces: Vec<String>,
    },

    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    /// List stored profile names
    List,

    /// Show the color ranges of a profile
    Show { name: String },

    /// Save the startup calibration under a name
    Save {
        name: String,

        /// Recalibrated center as TAG=H,S,V (e.g. r=170,200,180)
        #[arg(long = "center", value_parser = parse_center)]
        centers: Vec<(ColorTag, Hsv)>,
    },

    /// Save the built-in default ranges under a name
    Default { name: String },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write the default configuration to a file
    Init { path: PathBuf },
}

fn parse_center(arg: &str) -> Result<(ColorTag, Hsv), String> {
    let (tag, channels) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected TAG=H,S,V, got '{}'", arg))?;

    let mut chars = tag.chars();
    let tag = match (chars.next().and_then(ColorTag::from_code), chars.next()) {
        (Some(tag), None) => tag,
        _ => return Err(format!("unknown color tag '{}'", tag)),
    };

    let values = channels
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid channel in '{}': {}", channels, e))?;
    match values.as_slice() {
        [h, s, v] => Ok((tag, Hsv::clamped(*h, *s, *v))),
        _ => Err(format!("expected three channels, got '{}'", channels)),
    }
}

fn load_config(args: &Args, fallback: &Path) -> anyhow::Result<ScanConfig> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::from_json_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None if fallback.exists() => ScanConfig::from_json_file(fallback)
            .with_context(|| format!("loading configuration {}", fallback.display()))?,
        None => ScanConfig::default(),
    };
    if let Some(path) = &args.profiles {
        config.profile_path = path.clone();
    }
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn registry_for(config: &ScanConfig, profile: Option<&str>) -> anyhow::Result<ColorRegistry> {
    let store = config.profile_store();
    match profile {
        Some(name) => {
            let mut registry = ColorRegistry::with_defaults();
            registry
                .load_profile(&store, name)
                .with_context(|| format!("loading profile '{}'", name))?;
            Ok(registry)
        }
        None => Ok(config.startup_registry(&store)?),
    }
}

fn run_profiles(config: &ScanConfig, action: ProfileAction) -> anyhow::Result<()> {
    let mut store = config.profile_store();
    match action {
        ProfileAction::List => {
            let startup = config.startup_profile(&store)?;
            for name in store.names()? {
                let marker = if startup.as_deref() == Some(name.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{} {}", marker, name);
            }
        }
        ProfileAction::Show { name } => {
            let registry = registry_for(config, Some(&name))?;
            for range in registry.ranges() {
                println!(
                    "{} {:<7} center {} lower {} upper {}",
                    range.tag(),
                    range.tag().long_name(),
                    range.center(),
                    range.lower(),
                    range.upper()
                );
            }
        }
        ProfileAction::Save { name, centers } => {
            let mut registry = config.startup_registry(&store)?;
            for (tag, center) in centers {
                registry.set_center(tag, center)?;
            }
            registry.save_profile(&mut store, &name)?;
            println!("Saved profile '{}' to {}", name, store.path().display());
        }
        ProfileAction::Default { name } => {
            ColorRegistry::with_defaults().save_profile(&mut store, &name)?;
            println!("Saved default ranges as '{}'", name);
        }
    }
    Ok(())
}

fn run_capture(
    config: &ScanConfig,
    guided: bool,
    order: Option<String>,
    faces: Vec<String>,
) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(letters) = order {
        let faces = letters
            .chars()
            .map(|code| {
                FaceId::from_code(code).with_context(|| format!("unknown face letter '{}'", code))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        config.capture_order = CaptureOrder::new(faces)?;
    }
    config.start_guided |= guided;

    let mut session = config.capture_session();
    let mut captured = Vec::new();
    for colors in faces {
        if let Some(prompt) = session.prompt() {
            println!("{}", prompt);
        }
        let sample: FaceSample = colors.parse()?;
        match session.submit(sample) {
            Ok(face) => {
                println!("  captured {} face: {}", face.name(), sample);
                captured.push(face);
            }
            Err(e) if e.is_recoverable() => println!("  {}", e.user_message()),
            Err(e) => return Err(e.into()),
        }
    }

    let cube = session.into_cube();
    println!();
    println!("{}", cube.net());
    println!("{}", cube);

    let missing: String = FaceId::ALL
        .iter()
        .filter(|face| !captured.contains(face))
        .map(|face| face.code())
        .collect();
    if missing.is_empty() {
        info!("all six faces captured");
    } else {
        info!(missing = %missing, "faces left at their solved colors");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose {
        "scan_cube=debug"
    } else {
        "scan_cube=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&args, Path::new(DEFAULT_CONFIG_PATH))?;

    match args.command {
        Command::Profiles { action } => run_profiles(&config, action),
        Command::Classify {
            hue,
            saturation,
            value,
            profile,
        } => {
            let registry = registry_for(&config, profile.as_deref())?;
            let hsv = Hsv::new(hue, saturation, value);
            let tag = registry.classify(hsv);
            println!("{} {}", tag, tag.long_name());
            Ok(())
        }
        Command::Capture {
            guided,
            order,
            faces,
        } => run_capture(&config, guided, order, faces),
        Command::Config {
            action: ConfigAction::Init { path },
        } => {
            ScanConfig::default().to_json_file(&path)?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}
