use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "seawave", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive the scene headlessly and print one JSON snapshot per frame.
    Simulate(SimulateArgs),
    /// Print the default scene configuration as JSON.
    Config,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Scene configuration JSON (defaults to the stock scene).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Texture root directory.
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 180)]
    frames: u64,

    /// Substitute placeholder textures for missing or undecodable files.
    #[arg(long)]
    placeholder_textures: bool,

    /// Object index to hover for one second.
    #[arg(long, requires = "hover_at")]
    hover_object: Option<usize>,

    /// Time (seconds) at which the hover starts.
    #[arg(long, requires = "hover_object")]
    hover_at: Option<f64>,

    /// Time (seconds) at which the overlay button is pressed and briefly held.
    #[arg(long)]
    press_button_at: Option<f64>,

    /// Output file for JSON lines (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Viewport-space rectangle published for the overlay button.
const BUTTON_RECT: seawave::Rect = seawave::Rect::new(560.0, 420.0, 720.0, 470.0);
const PRESS_HOLD_SECS: f64 = 0.2;
const HOVER_HOLD_SECS: f64 = 1.0;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Config => cmd_config(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_config() -> anyhow::Result<()> {
    let text = seawave::SceneConfig::default()
        .to_json_pretty()
        .context("serialize default config")?;
    println!("{text}");
    Ok(())
}

/// Scheduled input, fired on the first frame whose elapsed time reaches `at`.
#[derive(Debug)]
struct Scheduled {
    at: f64,
    action: Action,
}

#[derive(Clone, Copy, Debug)]
enum Action {
    HoverObject(usize, bool),
    Press,
    Release,
}

fn schedule(args: &SimulateArgs) -> Vec<Scheduled> {
    let mut out = Vec::new();
    if let (Some(index), Some(at)) = (args.hover_object, args.hover_at) {
        out.push(Scheduled {
            at,
            action: Action::HoverObject(index, true),
        });
        out.push(Scheduled {
            at: at + HOVER_HOLD_SECS,
            action: Action::HoverObject(index, false),
        });
    }
    if let Some(at) = args.press_button_at {
        out.push(Scheduled {
            at,
            action: Action::Press,
        });
        out.push(Scheduled {
            at: at + PRESS_HOLD_SECS,
            action: Action::Release,
        });
    }
    out.sort_by(|a, b| a.at.total_cmp(&b.at));
    out
}

fn apply(scene: &mut seawave::SeaScene, action: Action) {
    use seawave::{PointerEvent, PointerTarget};
    match action {
        Action::HoverObject(i, true) => {
            scene.queue_pointer(PointerEvent::Enter(PointerTarget::Object(i)))
        }
        Action::HoverObject(i, false) => {
            scene.queue_pointer(PointerEvent::Leave(PointerTarget::Object(i)))
        }
        Action::Press => scene.pointer_down(BUTTON_RECT.center()),
        Action::Release => {
            scene.pointer_up(BUTTON_RECT.center());
            scene.pointer_left();
        }
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => seawave::SceneConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => seawave::SceneConfig::default(),
    };
    if args.placeholder_textures {
        config.asset_policy = seawave::AssetPolicy::Placeholder;
    }

    let fps = seawave::Fps::new(args.fps, 1).context("invalid --fps")?;
    let mut loader = seawave::FsTextureLoader::new(&args.assets);
    let mut graph = seawave::RecordingSceneGraph::new();
    let mut scene = seawave::SeaScene::mount(&config, &mut loader, &mut graph)
        .with_context(|| format!("mount scene (assets '{}')", args.assets.display()))?;

    let mut regions = seawave::HitRegions::new();
    regions.set(seawave::PointerTarget::Button, BUTTON_RECT);
    scene.set_hit_regions(regions);

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let mut pending = schedule(&args).into_iter().peekable();
    let clock = seawave::FrameClock::new(fps);
    for tick in clock.take(usize::try_from(args.frames).context("--frames too large")?) {
        while let Some(s) = pending.next_if(|s| s.at <= tick.elapsed) {
            tracing::debug!(at = s.at, action = ?s.action, "scheduled input");
            apply(&mut scene, s.action);
        }
        let snap = scene.frame(tick, &mut graph);
        serde_json::to_writer(&mut out, &snap).context("serialize frame snapshot")?;
        out.write_all(b"\n").context("write frame snapshot")?;
    }
    out.flush().context("flush output")?;

    let teardown = scene.unmount(&mut graph);
    eprintln!(
        "simulated {} frames; detached {} nodes ({} missing)",
        teardown.frames, teardown.detached, teardown.missing
    );
    Ok(())
}
