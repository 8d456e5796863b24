use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::LevelFilter;
use roster_core::{update, AppState, Msg};
use roster_logging::{roster_info, roster_warn, set_dispatch_seq};

use super::cli::Cli;
use super::config::{load_config, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::{render_catalog, render_selection, render_status};
use super::ui::viewport::Viewport;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = load_config(&cli.config)?;
    let from_file = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if let Some(url) = cli.initial_url {
        config.initial_cursor = Some(url);
    }

    logging::initialize(cli.log.unwrap_or(config.log_destination), LevelFilter::Info);
    if from_file {
        roster_info!("config loaded from {:?}", cli.config);
    } else {
        roster_info!("no config at {:?}; using defaults", cli.config);
    }

    let runner = EffectRunner::new(config.fetch_settings())?;
    let (input_tx, input_rx) = mpsc::channel();
    spawn_input_reader(input_tx);

    let stdout = io::stdout();
    let mut driver = Driver::new(&config, runner, stdout.lock());
    driver.start()?;
    driver.run(&input_rx, config.fetch_settings().request_timeout)?;
    roster_info!("session closed");
    Ok(())
}

enum InputEvent {
    Line(String),
    Closed,
}

fn spawn_input_reader(tx: mpsc::Sender<InputEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(InputEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    roster_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(InputEvent::Closed);
    });
}

/// Owns the session state and is the only place it is mutated.
struct Driver<W: Write> {
    state: AppState,
    viewport: Viewport,
    runner: EffectRunner,
    out: W,
    seq: u64,
}

impl<W: Write> Driver<W> {
    fn new(config: &AppConfig, runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(config.session()),
            viewport: Viewport::new(config.viewport_height, config.row_height, config.loader_height),
            runner,
            out,
            seq: 0,
        }
    }

    fn start(&mut self) -> io::Result<()> {
        writeln!(self.out, "type `help` for commands")?;
        self.dispatch(Msg::SessionStarted)
    }

    fn run(&mut self, input: &mpsc::Receiver<InputEvent>, settle_timeout: Duration) -> io::Result<()> {
        loop {
            match input.recv_timeout(POLL_INTERVAL) {
                Ok(InputEvent::Line(line)) => match parse_command(&line) {
                    Ok(Some(command)) => {
                        if !self.handle(command)? {
                            return Ok(());
                        }
                    }
                    Ok(None) => {}
                    Err(err) => writeln!(self.out, "{err}")?,
                },
                Ok(InputEvent::Closed) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                    // Piped input: let the last fetch land before leaving.
                    return self.settle(settle_timeout);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }
            self.pump()?;
        }
    }

    /// Returns false when the session should end.
    fn handle(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::ScrollDown(px) => {
                let sample = self.viewport.scroll_by(px);
                self.dispatch(Msg::Scrolled(sample))?;
            }
            Command::ScrollUp(px) => {
                let sample = self.viewport.scroll_up(px);
                self.dispatch(Msg::Scrolled(sample))?;
            }
            Command::ScrollToEnd => {
                let sample = self.viewport.scroll_to_bottom();
                self.dispatch(Msg::Scrolled(sample))?;
            }
            Command::LoadMore => self.dispatch(Msg::LoadMoreRequested)?,
            Command::Toggle(name) => self.dispatch(Msg::ItemToggled(name))?,
            Command::Remove(name) => self.dispatch(Msg::SelectionRemoved(name))?,
            Command::List => {
                let view = self.state.view();
                for line in render_catalog(&view, self.viewport.visible_rows()) {
                    writeln!(self.out, "{line}")?;
                }
            }
            Command::Selected => {
                for line in render_selection(&self.state.view()) {
                    writeln!(self.out, "{line}")?;
                }
            }
            Command::Status => writeln!(self.out, "{}", render_status(&self.state.view()))?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        self.seq += 1;
        set_dispatch_seq(self.seq);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.run(effects);

        if was_dirty {
            let view = self.state.view();
            self.viewport.update_content(&view);
            writeln!(self.out, "{}", render_status(&view))?;
        }
        Ok(())
    }

    fn pump(&mut self) -> io::Result<()> {
        for msg in self.runner.poll() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Process engine results until no fetch is in flight or `timeout` passes.
    fn settle(&mut self, timeout: Duration) -> io::Result<()> {
        let deadline = Instant::now() + timeout;
        while self.state.gate().is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            if let Some(msg) = self.runner.wait(remaining) {
                self.dispatch(msg)?;
            }
        }
        Ok(())
    }
}
