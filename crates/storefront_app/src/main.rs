mod effects;
mod input;
mod logging;
mod render;

use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use storefront_core::{update, AppState, Msg};

use effects::EffectRunner;
use input::ShellEvent;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(event_tx.clone());
    spawn_input_reader(event_tx);

    let mut state = AppState::new();
    // Both fetches start immediately; either may resolve first.
    state = dispatch(state, Msg::ProductsRequested, &runner);
    state = dispatch(state, Msg::CategoriesRequested, &runner);

    println!("storefront — type `help` for commands");
    render_frame(&mut state);

    'main: while let Ok(event) = event_rx.recv() {
        let mut pending = Some(event);
        while let Some(event) = pending {
            match apply_event(state, event, &runner) {
                (next, LoopOutcome::Continue) => state = next,
                (_, LoopOutcome::Quit) => break 'main,
            }
            // Coalesce whatever queued up behind this event into one render.
            pending = event_rx.try_recv().ok();
        }
        render_frame(&mut state);
    }

    Ok(())
}

enum LoopOutcome {
    Continue,
    Quit,
}

fn apply_event(state: AppState, event: ShellEvent, runner: &EffectRunner) -> (AppState, LoopOutcome) {
    match event {
        ShellEvent::Quit => (state, LoopOutcome::Quit),
        ShellEvent::ShowHelp => {
            println!("{}", input::usage());
            (state, LoopOutcome::Continue)
        }
        ShellEvent::Unrecognized { hint } => {
            println!("{hint}");
            (state, LoopOutcome::Continue)
        }
        ShellEvent::ReloadAll => {
            let state = dispatch(state, Msg::ProductsRequested, runner);
            let state = dispatch(state, Msg::CategoriesRequested, runner);
            (state, LoopOutcome::Continue)
        }
        ShellEvent::Dispatch(msg) => (dispatch(state, msg, runner), LoopOutcome::Continue),
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn render_frame(state: &mut AppState) {
    let view = state.view();
    if state.consume_dirty() {
        println!("{}", render::render(&view));
    }
}

fn spawn_input_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(event) = input::parse(&line) {
                let quitting = matches!(event, ShellEvent::Quit);
                if event_tx.send(event).is_err() || quitting {
                    return;
                }
            }
        }
        // End of stdin quits the session too.
        let _ = event_tx.send(ShellEvent::Quit);
    });
}
