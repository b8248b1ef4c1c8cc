use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cubeview_client::{ClientConfig, CubeController};
use cubeview_common::{CubeState, Move};
use cubeview_input::Action;
use cubeview_render::{
    DebugTextRenderer, LayoutEngine, NetTextRenderer, RenderView, Renderer, Scene,
};
use cubeview_state::CubeStore;
use cubeview_tools::CubeInspector;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod backend;

use backend::{Backend, BackendKind};

#[derive(Parser)]
#[command(name = "cubeview", about = "Drive and display a Rubik's cube through the cube service")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML client config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Service base URL, overriding the config file
    #[arg(long)]
    url: Option<String>,

    /// Which cube service to talk to
    #[arg(long, value_enum, default_value_t = BackendKind::Http)]
    backend: BackendKind,

    /// Scramble seed for the local backend
    #[arg(long, default_value = "42")]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every laid-out square with color and position
    Layout {
        /// Comma-separated facelets (default: solved)
        #[arg(long)]
        state: Option<CubeState>,
    },
    /// Print the unfolded cube net
    Net {
        #[arg(long)]
        state: Option<CubeState>,
    },
    /// Summarize a cube state
    Inspect {
        #[arg(long)]
        state: Option<CubeState>,
    },
    /// Request a scrambled cube
    Scramble {
        /// Number of random turns (default: from config)
        #[arg(short, long)]
        moves: Option<u32>,
    },
    /// Apply one move, e.g. R or "R'"
    Rotate {
        #[arg(value_name = "MOVE")]
        mv: Move,
        #[arg(long)]
        state: Option<CubeState>,
    },
    /// Ask the service for a suggested move
    Predict {
        #[arg(long)]
        state: Option<CubeState>,
    },
    /// Check that the cube service is up
    Health,
    /// Interactive session: type moves and commands, the net redraws on every change
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(&cli)?;
    let engine = LayoutEngine::default();
    let view = RenderView::default();

    match cli.command {
        Commands::Layout { state } => {
            let scene = scene_of(&engine, &state.unwrap_or_default());
            print!("{}", DebugTextRenderer::new().render(&scene, &view));
        }
        Commands::Net { state } => {
            print!("{}", draw_net(&engine, &state.unwrap_or_default()));
        }
        Commands::Inspect { state } => {
            println!("{}", CubeInspector::summary(&state.unwrap_or_default()));
        }
        Commands::Scramble { moves } => {
            let controller = controller(&cli.backend, &config, cli.seed, None)?;
            let state = controller
                .scramble_with(moves.unwrap_or(config.scramble_moves))
                .await?;
            println!("{}", render_facelets(&state));
            print!("{}", draw_net(&engine, &state));
        }
        Commands::Rotate { mv, state } => {
            let controller = controller(&cli.backend, &config, cli.seed, state)?;
            let state = controller.rotate(mv).await?;
            println!("{}", render_facelets(&state));
            print!("{}", draw_net(&engine, &state));
        }
        Commands::Predict { state } => {
            let controller = controller(&cli.backend, &config, cli.seed, state)?;
            let prediction = controller.predict_move().await?;
            println!("suggested move: {prediction}");
        }
        Commands::Health => match Backend::build(cli.backend, &config, cli.seed)? {
            Backend::Http(service) => {
                let health = service
                    .health()
                    .await
                    .with_context(|| format!("cube service at {}", service.base_url()))?;
                println!(
                    "{}: status={} device={}",
                    service.base_url(),
                    health.status,
                    health.device.as_deref().unwrap_or("-")
                );
            }
            Backend::Local(_) => println!("local backend: status=ok"),
        },
        Commands::Session => {
            let controller = controller(&cli.backend, &config, cli.seed, None)?;
            run_session(controller, engine).await?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &cli.url {
        config.base_url = url.clone();
    }
    tracing::debug!(?config, "client config");
    Ok(config)
}

fn controller(
    kind: &BackendKind,
    config: &ClientConfig,
    seed: u64,
    state: Option<CubeState>,
) -> Result<CubeController<Backend>> {
    let backend = Backend::build(*kind, config, seed)?;
    let store = CubeStore::with_state(state.unwrap_or_default());
    Ok(CubeController::with_store(
        backend,
        store,
        config.scramble_moves,
    ))
}

fn scene_of(engine: &LayoutEngine, state: &CubeState) -> Scene {
    let mut scene = Scene::new();
    scene.rebuild(engine, state);
    scene
}

fn draw_net(engine: &LayoutEngine, state: &CubeState) -> String {
    let scene = scene_of(engine, state);
    NetTextRenderer::new(*engine.palette()).render(&scene, &RenderView::default())
}

/// Facelets in the form `--state` accepts, so output can be fed back in.
fn render_facelets(state: &CubeState) -> String {
    state
        .facelets()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

async fn run_session(controller: CubeController<Backend>, engine: LayoutEngine) -> Result<()> {
    let mut stream = controller.subscribe();
    let render_engine = engine.clone();
    let renderer = tokio::spawn(async move {
        let net = NetTextRenderer::new(*render_engine.palette());
        let view = RenderView::default();
        let mut scene = Scene::new();
        scene.rebuild(&render_engine, &stream.current());
        print!("{}", net.render(&scene, &view));
        while let Some(state) = stream.changed().await {
            scene.rebuild(&render_engine, &state);
            print!("\n{}", net.render(&scene, &view));
            if state.is_solved() {
                println!("solved!");
            }
        }
    });

    println!("{}", Action::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let action = match read_action(&line) {
            Some(Action::Quit) => break,
            Some(action) => action,
            None => continue,
        };
        if let Err(e) = dispatch(&controller, &engine, action).await {
            tracing::error!("{e}");
        }
    }

    // Dropping the controller drops the store, which ends the render task.
    drop(controller);
    renderer.await?;
    Ok(())
}

/// Parse one session line; bad input is logged and skipped.
fn read_action(line: &str) -> Option<Action> {
    match Action::parse(line) {
        Ok(action) => Some(action),
        Err(e) => {
            tracing::warn!(input = line, "{e}");
            None
        }
    }
}

async fn dispatch(
    controller: &CubeController<Backend>,
    engine: &LayoutEngine,
    action: Action,
) -> Result<()> {
    match action {
        Action::Rotate(mv) => {
            controller.rotate(mv).await?;
        }
        Action::Scramble(Some(moves)) => {
            controller.scramble_with(moves).await?;
        }
        Action::Scramble(None) => {
            controller.scramble().await?;
        }
        Action::Reset => {
            controller.reset();
        }
        Action::Predict => {
            let prediction = controller.predict_move().await?;
            println!("suggested move: {prediction}");
        }
        Action::Solve => {
            let (prediction, _) = controller.apply_prediction().await?;
            println!("applied {prediction}");
        }
        Action::Show => {
            let state = controller.state();
            println!("{}", CubeInspector::summary(&state));
            print!("{}", draw_net(engine, &state));
        }
        Action::Help => println!("{}", Action::HELP),
        Action::Quit | Action::Noop => {}
    }
    Ok(())
}
