use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_error, engine_info, engine_warn};
use wizard_core::{update, Msg, WizardState};

use super::effects::EffectRunner;
use super::input::{self, Command};
use super::logging;
use super::render;
use super::settings;

pub enum AppInput {
    Line(String),
    Msg(Msg),
    Closed,
}

pub fn run_app() -> ExitCode {
    let settings_path = settings::settings_path(std::env::args());
    let loaded = settings::read_settings(&settings_path);
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    logging::initialize(settings.log_to_file);
    match &loaded {
        Ok(_) => engine_info!("Settings from {:?}", settings_path),
        Err(err) => engine_warn!("Using default settings: {}", err),
    }

    let (tx, rx) = mpsc::channel::<AppInput>();
    let runner = match EffectRunner::new(settings.engine_config(), tx.clone()) {
        Ok(runner) => runner,
        Err(err) => {
            engine_error!("Engine failed to start: {}", err);
            eprintln!("Cannot start: {err} (endpoint {:?})", settings.endpoint);
            return ExitCode::FAILURE;
        }
    };
    spawn_stdin_reader(tx);

    let mut state = WizardState::default();
    print_screen(&render::render(&state.view()));

    while let Ok(input) = rx.recv() {
        let msg = match input {
            AppInput::Msg(msg) => msg,
            AppInput::Closed => break,
            AppInput::Line(line) => match input::parse_command(&line, &state.view().keywords) {
                Ok(Command::Dispatch(msg)) => msg,
                Ok(Command::Help) => {
                    print_screen(input::HELP);
                    continue;
                }
                Ok(Command::Quit) => break,
                Err(err) => {
                    print_screen(&format!("? {err}"));
                    continue;
                }
            },
        };

        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
        if state.consume_dirty() {
            print_screen(&render::render(&state.view()));
        }
    }

    engine_info!("Wizard closed");
    ExitCode::SUCCESS
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(AppInput::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(AppInput::Closed);
    });
}

fn print_screen(text: &str) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{text}");
    let _ = write!(stdout, "> ");
    let _ = stdout.flush();
}
