//! Replays key scripts against a board diagram without a browser.
//!
//! The simulator runs the real controller on top of the in-memory fakes from
//! `minenav_core::testing` and prints where the cursor goes and which synthetic
//! input would be sent to the page.
//!
//! # Usage
//!
//! ```sh
//! minenav-sim --board board.txt --keys "l l L S-J d f"
//! ```
//!
//! Read the script from standard input and jump straight to edges:
//!
//! ```sh
//! echo "L J f @/ d" | minenav-sim --board board.txt --jump edge
//! ```

use std::{
    fs, io,
    io::Read as _,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use minenav_core::{
    FlagPolicy, InputController, JumpMode, NavConfig,
    testing::{FakeGrid, FakeOverlay, ParseBoardError, RecordingSynthesizer},
};

use crate::script::ScriptItem;

mod script;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum JumpKind {
    Edge,
    Transition,
}

impl From<JumpKind> for JumpMode {
    fn from(kind: JumpKind) -> Self {
        match kind {
            JumpKind::Edge => JumpMode::Edge,
            JumpKind::Transition => JumpMode::Transition,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FlagKind {
    PressThenContextMenu,
    PressOnly,
    ContextMenuOnly,
}

impl From<FlagKind> for FlagPolicy {
    fn from(kind: FlagKind) -> Self {
        match kind {
            FlagKind::PressThenContextMenu => FlagPolicy::PressThenContextMenu,
            FlagKind::PressOnly => FlagPolicy::PressOnly,
            FlagKind::ContextMenuOnly => FlagPolicy::ContextMenuOnly,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board diagram file (`#` closed, `.` revealed, `F` flagged, `_` no cell).
    #[arg(long, value_name = "FILE")]
    board: PathBuf,

    /// Key script. Read from standard input when omitted.
    #[arg(long, value_name = "SCRIPT")]
    keys: Option<String>,

    /// Behavior of the capital-letter jump keys.
    #[arg(long, value_name = "MODE", default_value = "transition")]
    jump: JumpKind,

    /// Input sequence used to flag a cell.
    #[arg(long, value_name = "POLICY", default_value = "press-then-context-menu")]
    flag_policy: FlagKind,

    /// Page path evaluated before the script runs.
    #[arg(long, value_name = "PATH", default_value = "/game/1")]
    path: String,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum SimError {
    #[display("cannot read {}: {source}", path.display())]
    #[from(ignore)]
    Read { path: PathBuf, source: io::Error },
    #[display("cannot read key script: {_0}")]
    #[from(ignore)]
    Script(io::Error),
    #[display("invalid board: {_0}")]
    Board(ParseBoardError),
}

fn load_board(path: &Path) -> Result<FakeGrid, SimError> {
    let diagram = fs::read_to_string(path).map_err(|source| SimError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(diagram.parse()?)
}

fn load_script(keys: Option<String>) -> Result<String, SimError> {
    if let Some(keys) = keys {
        return Ok(keys);
    }
    let mut script = String::new();
    io::stdin()
        .read_to_string(&mut script)
        .map_err(SimError::Script)?;
    Ok(script)
}

fn run(args: Args) -> Result<(), SimError> {
    let grid = load_board(&args.board)?;
    log::debug!("loaded {} cells from {}", grid.len(), args.board.display());
    let script = load_script(args.keys)?;
    let config = NavConfig {
        jump_mode: args.jump.into(),
        flag_policy: args.flag_policy.into(),
        ..NavConfig::default()
    };

    let mut controller = InputController::new(
        &config,
        grid,
        RecordingSynthesizer::default(),
        FakeOverlay::default(),
    );
    let state = controller.sync_activation(&args.path);
    println!("@{} -> {state:?}", args.path);

    for item in script::parse(&script) {
        match item {
            ScriptItem::Navigate(path) => {
                let state = controller.sync_activation(&path);
                println!("@{path} -> {state:?}");
            }
            ScriptItem::Key(key) => {
                let response = controller.handle_key_down(&key);
                let shift = if key.shift { "S-" } else { "" };
                println!(
                    "{shift}{} -> {} {response:?}",
                    key.key,
                    controller.cursor().position()
                );
            }
        }
        for event in controller.synthesizer_mut().take_events() {
            println!("    {event}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
