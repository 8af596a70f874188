use std::io::{self, BufRead};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use engine_logging::{engine_info, engine_warn};
use lingua_core::{update, AppState, Msg};
use lingua_engine::{ensure_state_dir, FileKeyValueStore, NoPlatformCapabilities};

use super::effects::EffectRunner;
use super::ui::commands::{self, Command};
use super::ui::render;
use super::{config, logging, persistence};

const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let loaded = config::load(Path::new(config::CONFIG_FILENAME));
    logging::initialize(loaded.config.log_destination);
    for warning in &loaded.warnings {
        engine_warn!("{}", warning);
    }
    let config = loaded.config;

    ensure_state_dir(&config.state_dir)
        .with_context(|| format!("preparing state directory {:?}", config.state_dir))?;
    let store = Arc::new(FileKeyValueStore::new(config.state_dir.clone()));
    let runner = EffectRunner::new(Arc::new(NoPlatformCapabilities), store.clone())
        .context("starting capability engine")?;

    let mut app = App {
        state: AppState::with_settings(config.settings()),
        runner,
    };
    app.dispatch(Msg::Restore(persistence::load_snapshot(store.as_ref())));
    engine_info!(
        "Restored {} messages from {:?}",
        app.state.messages().len(),
        store.dir()
    );

    println!("{}", commands::HELP);
    app.print();

    let lines = spawn_stdin_reader();
    loop {
        match lines.recv_timeout(TICK) {
            Ok(line) => {
                let line = line.trim_end_matches(['\r', '\n']);
                if line.trim().is_empty() {
                    continue;
                }
                if !app.handle_line(line) {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
        for msg in app.runner.drain_events() {
            app.dispatch(msg);
        }
        app.dispatch(Msg::Tick);
        app.render_if_dirty();
    }

    engine_info!("Shutting down");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.runner.enqueue(effects, &state);
        self.state = state;
    }

    /// Returns false once the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        let command = match commands::parse(line) {
            Ok(command) => command,
            Err(err) => {
                println!("! {err}");
                return true;
            }
        };
        match command {
            Command::Quit => return false,
            Command::Help => println!("{}", commands::HELP),
            Command::List => self.print(),
            command => {
                let view = self.state.view();
                let now_ms = chrono::Utc::now().timestamp_millis();
                match commands::to_msgs(command, &view, now_ms) {
                    Ok(msgs) => {
                        for msg in msgs {
                            self.dispatch(msg);
                        }
                    }
                    Err(err) => println!("! {err}"),
                }
            }
        }
        true
    }

    fn render_if_dirty(&mut self) {
        if self.state.consume_dirty() {
            self.print();
        }
    }

    fn print(&mut self) {
        self.state.consume_dirty();
        println!();
        for line in render::render(&self.state.view()) {
            println!("{line}");
        }
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
