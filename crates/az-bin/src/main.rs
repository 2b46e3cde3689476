use anyhow::Result;
use clap::Parser;
use core_actions::dispatcher::open_and_report;
use core_actions::{Action, BrowseAction, DispatchResult, FsLister, dispatch, translate_key};
use core_config::load_from;
use core_events::{GesturePhase, InputEvent, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use core_render::{PointerTarget, RenderEngine};
use core_state::EditorState;
use core_terminal::{CrosstermBackend, ScreenGuard, TerminalBackend, read_event};
use core_text::Document;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, trace};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "az.log";

#[derive(Parser, Debug)]
#[command(name = "az", version, about = "az modal text editor")]
struct Args {
    /// File to open at startup. A missing file starts an empty buffer with that name.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `az.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn welcome_status() -> String {
    format!(
        "az {} | :help | Tab: browser | i: insert",
        env!("CARGO_PKG_VERSION")
    )
}

/// Everything the event loop owns besides the terminal.
struct Session {
    state: EditorState,
    lister: FsLister,
    engine: RenderEngine,
    size: (u16, u16),
}

impl Session {
    fn bootstrap(args: &Args) -> Result<Self> {
        let config = load_from(args.config.clone())?;
        let mut state =
            EditorState::with_history_capacity(Document::new(), config.history_capacity());
        state.tab_size = config.tab_size();
        state.page_rows = config.page_rows();

        match args.path.as_deref() {
            Some(path) => {
                open_and_report(&mut state, path);
            }
            None => state.set_status(welcome_status()),
        }

        info!(
            target: "runtime.startup",
            path = ?args.path,
            config = ?config.source,
            tab_size = state.tab_size,
            history_capacity = config.history_capacity(),
            "bootstrap_complete"
        );

        Ok(Self {
            state,
            lister: FsLister::new(config.show_hidden()),
            engine: RenderEngine::new(),
            size: (0, 0),
        })
    }

    fn resize(&mut self, size: (u16, u16)) {
        self.size = size;
        let rows = RenderEngine::layout(&self.state, size).text_rows as usize;
        if rows > 0 {
            self.state.page_rows = rows;
        }
        trace!(target: "runtime", width = size.0, height = size.1, page_rows = self.state.page_rows, "resize");
    }

    fn handle_key(&mut self, key: &KeyEvent) -> DispatchResult {
        match translate_key(&self.state.mode, key) {
            Some(action) => dispatch(action, &mut self.state, &self.lister),
            None => DispatchResult::clean(),
        }
    }

    fn handle_mouse(&mut self, ev: &MouseEvent) -> DispatchResult {
        let actions = pointer_actions(&self.engine, &self.state, self.size, ev);
        let mut result = DispatchResult::clean();
        for action in actions {
            let r = dispatch(action, &mut self.state, &self.lister);
            result.dirty |= r.dirty;
            result.buffer_replaced |= r.buffer_replaced;
            if r.quit {
                result.quit = true;
                break;
            }
        }
        result
    }

    fn handle_event(&mut self, event: InputEvent) -> DispatchResult {
        match event {
            InputEvent::Key(key) => self.handle_key(&key),
            InputEvent::Mouse(ev) => self.handle_mouse(&ev),
            InputEvent::Resize(w, h) => {
                self.resize((w, h));
                DispatchResult::dirty()
            }
        }
    }

    fn run(&mut self, backend: &mut dyn TerminalBackend) -> Result<()> {
        self.resize(backend.size()?);
        self.engine.render(&self.state, self.size)?;
        loop {
            let outcome = self.handle_event(read_event()?);
            if outcome.buffer_replaced {
                self.engine.reset();
            }
            if outcome.quit {
                info!(target: "runtime.shutdown", "quit");
                return Ok(());
            }
            if outcome.dirty {
                self.engine.render(&self.state, self.size)?;
            }
        }
    }
}

/// Map a pointer event to actions. Left-button gestures drive the text
/// selection; clicks in the browser pane select (left) or open (right) an entry.
fn pointer_actions(
    engine: &RenderEngine,
    state: &EditorState,
    size: (u16, u16),
    ev: &MouseEvent,
) -> Vec<Action> {
    let target = engine.pointer_target(state, size, ev.column, ev.row);
    if let MouseEventKind::Down(MouseButton::Right) = ev.kind {
        return match target {
            PointerTarget::Entry(idx) => vec![
                Action::Browse(BrowseAction::Select(idx)),
                Action::Browse(BrowseAction::Open),
            ],
            _ => Vec::new(),
        };
    }
    let Some(phase) = ev.gesture_phase() else {
        return Vec::new();
    };
    match (phase, target) {
        (GesturePhase::Press, PointerTarget::Entry(idx)) => {
            vec![Action::Browse(BrowseAction::Select(idx))]
        }
        (phase, PointerTarget::Text(at)) => vec![Action::Pointer { phase, at }],
        // A release off the text still ends the gesture where the head is.
        (GesturePhase::Release, _) => vec![Action::Pointer {
            phase: GesturePhase::Release,
            at: state.selection.head,
        }],
        _ => Vec::new(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", version = env!("CARGO_PKG_VERSION"), "startup");

    let mut session = Session::bootstrap(&args)?;
    let mut screen = ScreenGuard::enter(CrosstermBackend::new("az"))?;
    session.run(screen.backend_mut())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::KeyModifiers;
    use core_state::{DirEntry, Mode};
    use core_text::Position;
    use std::fs;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            mods: KeyModifiers::empty(),
        }
    }

    fn browsing_state() -> EditorState {
        let mut st = EditorState::new(Document::from_text("hello\nworld"));
        st.browser.set_listing(
            PathBuf::from("/d"),
            vec![DirEntry::new("a.txt", false), DirEntry::new("b.txt", false)],
        );
        st.browser.visible = true;
        st
    }

    #[test]
    fn left_press_in_text_starts_gesture() {
        let st = EditorState::new(Document::from_text("hello\nworld"));
        let engine = RenderEngine::new();
        let ev = mouse(MouseEventKind::Down(MouseButton::Left), 8, 1);
        assert_eq!(
            pointer_actions(&engine, &st, (40, 10), &ev),
            vec![Action::Pointer {
                phase: GesturePhase::Press,
                at: Position::new(1, 2)
            }]
        );
        let gutter = mouse(MouseEventKind::Down(MouseButton::Left), 2, 1);
        assert!(pointer_actions(&engine, &st, (40, 10), &gutter).is_empty());
    }

    #[test]
    fn sidebar_clicks_select_and_open() {
        let st = browsing_state();
        let engine = RenderEngine::new();
        let left = mouse(MouseEventKind::Down(MouseButton::Left), 4, 2);
        assert_eq!(
            pointer_actions(&engine, &st, (80, 10), &left),
            vec![Action::Browse(BrowseAction::Select(2))]
        );
        let right = mouse(MouseEventKind::Down(MouseButton::Right), 4, 1);
        assert_eq!(
            pointer_actions(&engine, &st, (80, 10), &right),
            vec![
                Action::Browse(BrowseAction::Select(1)),
                Action::Browse(BrowseAction::Open)
            ]
        );
    }

    #[test]
    fn release_outside_text_ends_gesture_at_head() {
        let mut st = browsing_state();
        st.selection.begin(Position::new(0, 3));
        let engine = RenderEngine::new();
        let ev = mouse(MouseEventKind::Up(MouseButton::Left), 4, 9);
        assert_eq!(
            pointer_actions(&engine, &st, (80, 10), &ev),
            vec![Action::Pointer {
                phase: GesturePhase::Release,
                at: Position::new(0, 3)
            }]
        );
        let scroll = mouse(MouseEventKind::ScrollDown, 40, 1);
        assert!(pointer_actions(&engine, &st, (80, 10), &scroll).is_empty());
    }

    #[test]
    fn bootstrap_applies_config_and_opens_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("az.toml");
        fs::write(&config, "[editor]\ntab_size = 2\n[history]\ncapacity = 5\n").unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "one\ntwo\n").unwrap();

        let session = Session::bootstrap(&Args {
            path: Some(file.clone()),
            config: Some(config),
        })
        .unwrap();
        assert_eq!(session.state.tab_size, 2);
        assert_eq!(session.state.history().capacity(), 5);
        assert_eq!(session.state.document.line_count(), 2);
        assert_eq!(
            session.state.status(),
            Some(format!("Opened: {} (2 lines)", file.display()).as_str())
        );
    }

    #[test]
    fn bootstrap_without_path_shows_welcome() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::bootstrap(&Args {
            path: None,
            config: Some(dir.path().join("missing.toml")),
        })
        .unwrap();
        assert_eq!(session.state.status(), Some(welcome_status().as_str()));
        assert!(session.state.status().is_some_and(|s| s.starts_with("az ")));
    }

    #[test]
    fn resize_updates_page_rows_and_events_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::bootstrap(&Args {
            path: None,
            config: Some(dir.path().join("missing.toml")),
        })
        .unwrap();
        let r = session.handle_event(InputEvent::Resize(80, 24));
        assert!(r.dirty);
        assert_eq!(session.state.page_rows, 22);
        let r = session.handle_event(InputEvent::Key(KeyEvent::plain(
            core_events::KeyCode::Char('i'),
        )));
        assert!(r.dirty);
        assert_eq!(session.state.mode, Mode::Insert);
        session.handle_event(InputEvent::Key(KeyEvent::plain(core_events::KeyCode::Esc)));
        let r = session.handle_event(InputEvent::Key(KeyEvent::ctrl('q')));
        assert!(r.quit);
    }
}
