//! Table Pong entry point
//!
//! The browser build embeds the core through `table_pong::wasm`. Natively this
//! plays a headless match: a lagging pointer autopilot holds the human paddle
//! and the scoreboard is written to the log.
//!
//! Usage: `table-pong [SEED] [SETTINGS] [--save-settings PATH]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use table_pong::sim::GameEvent;
    use table_pong::{ScoreDisplay, Session, Settings};

    /// One minute of play at 60 Hz
    const FRAMES: u32 = 60 * 60;
    const DEFAULT_SEED: u64 = 12345;
    /// Fraction of the gap to the ball the autopilot closes per frame
    const AUTOPILOT_GAIN: f32 = 0.15;

    #[derive(Parser, Debug)]
    #[command(name = "table-pong")]
    #[command(about = "Play a headless Table Pong match", long_about = None)]
    pub struct Args {
        /// RNG seed for serves
        #[arg(default_value_t = DEFAULT_SEED)]
        pub seed: u64,

        /// Settings JSON file (defaults when missing or invalid)
        pub settings: Option<PathBuf>,

        /// Write the settings in effect to this file before playing
        #[arg(long)]
        pub save_settings: Option<PathBuf>,
    }

    struct LogBoard;

    impl ScoreDisplay for LogBoard {
        fn show_scores(&mut self, human: u32, computer: u32) {
            log::info!("Score: {} — {}", human, computer);
        }
    }

    pub fn run(args: Args) {
        let settings = match &args.settings {
            Some(path) => Settings::load_or_default(path),
            None => Settings::default(),
        };
        if let Some(path) = &args.save_settings {
            settings
                .save(path)
                .unwrap_or_else(|e| log::error!("Could not write {}: {}", path.display(), e));
        }

        let mut session = Session::new(&settings, args.seed);
        let mut board = LogBoard;
        let mut paddle_hits = 0u32;

        for _ in 0..FRAMES {
            let state = session.state();
            let paddle_center = state.human.center_y();
            let target = paddle_center + (state.ball.pos.y - paddle_center) * AUTOPILOT_GAIN;
            session.set_pointer_y(target);

            let events = session.run_frame(&mut (), &mut board);
            paddle_hits += events
                .iter()
                .filter(|e| matches!(e, GameEvent::PaddleBounce { .. }))
                .count() as u32;
        }

        let snapshot = session.snapshot();
        println!(
            "Final score after {} frames (seed {}): {}  [{} paddle hits]",
            FRAMES,
            session.seed(),
            snapshot.score_line,
            paddle_hits
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let args = headless::Args::parse();
    env_logger::init();
    log::info!("Table Pong (native, headless) starting...");
    headless::run(args);
}


#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is table_pong::wasm::wasm_start, this is just to satisfy the compiler
}
