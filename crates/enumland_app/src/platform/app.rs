use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Result};
use enumland_core::{update, AppState, Msg, QueryClient};
use enumland_engine::EngineHandle;
use enumland_logging::{
    enumland_debug, enumland_info, enumland_warn, initialize, LogDestination,
};
use ratatui::crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use ratatui::crossterm::execute;
use ratatui::DefaultTerminal;
use throbber_widgets_tui::ThrobberState;

use super::effects::EffectRunner;
use super::settings::{self, SettingsSource};
use super::ui::constants::{FRAME_INTERVAL, INPUT_POLL};
use super::ui::input::{map_event, UiAction};
use super::ui::render;

pub fn run_app() -> Result<()> {
    let loaded = settings::load();
    let settings = loaded.settings;

    if let Some(path) = &settings.log_file {
        initialize(LogDestination::File(path.clone()), settings.log_level);
    }
    match &loaded.source {
        SettingsSource::Defaults => enumland_info!("Using default settings"),
        SettingsSource::File(path) => enumland_info!("Loaded settings from {:?}", path),
    }
    for warning in &loaded.warnings {
        enumland_warn!("{}", warning);
    }

    // One query client for the whole process.
    let client = QueryClient::new(settings.client.clone());
    let engine = EngineHandle::new(&settings.engine)?;
    enumland_info!("Querying {}", settings.engine.base_url);

    let mut app = App {
        state: AppState::with_debounce(settings.debounce),
        client,
        effects: EffectRunner::new(engine),
        throbber_state: ThrobberState::default(),
    };

    let mut terminal = ratatui::try_init()?;
    // Without bracketed paste a paste arrives as one key event per character.
    if let Err(err) = execute!(io::stdout(), EnableBracketedPaste) {
        ratatui::restore();
        return Err(err.into());
    }
    let result = app.run(&mut terminal);
    if let Err(err) = execute!(io::stdout(), DisableBracketedPaste) {
        enumland_warn!("Could not disable bracketed paste: {}", err);
    }
    ratatui::restore();
    result
}

struct App {
    state: AppState,
    client: QueryClient,
    effects: EffectRunner,
    throbber_state: ThrobberState,
}

impl App {
    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel();
        let input_running = Arc::new(AtomicBool::new(true));
        let input_flag = Arc::clone(&input_running);

        let input_thread = thread::spawn(move || -> Result<()> {
            while input_flag.load(Ordering::Relaxed) {
                if event::poll(INPUT_POLL)? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut force_redraw = true;
        let result: Result<()> = 'event_loop: loop {
            for msg in self.effects.drain() {
                self.dispatch(msg);
            }
            self.dispatch(Msg::Tick(Instant::now()));

            loop {
                match event_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => force_redraw = true,
                    Ok(event) => {
                        if let Some(action) = map_event(event, self.state.input()) {
                            if action == UiAction::Quit {
                                break 'event_loop Ok(());
                            }
                            self.apply(action);
                        }
                    }
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            let loading = self.state.request().is_loading();
            if loading {
                self.throbber_state.calc_next();
            }
            if self.state.consume_dirty() || loading || force_redraw {
                force_redraw = false;
                let view = self.state.view();
                terminal.draw(|frame| render::draw(frame, &view, &mut self.throbber_state))?;
            }

            thread::sleep(FRAME_INTERVAL);
        };

        input_running.store(false, Ordering::Relaxed);
        match input_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        enumland_info!("Exiting");
        result
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Edit(value) => self.dispatch(Msg::InputChanged {
                value,
                at: Instant::now(),
            }),
            UiAction::Scroll(delta) => self.dispatch(Msg::ResultsScrolled(delta)),
            UiAction::Quit => {}
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        if let Msg::QueryCompleted { request_id, query, .. } = &msg {
            let latest = self.client.in_flight().map(|(id, _)| id);
            if latest != Some(*request_id) {
                enumland_debug!("Discarding stale completion {} for {:?}", request_id, query);
            }
        }
        let before = self.state.committed_query().to_string();
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg, &mut self.client);
        self.state = state;

        if self.state.committed_query() != before {
            enumland_debug!("Committed query {:?}", self.state.committed_query());
        }
        self.effects.run(effects);
    }
}
