//! Async runtime
//!
//! Event loop that drives terminal I/O: keyboard events and transport
//! events are multiplexed with `tokio::select!`, keyboard input mutates the
//! input state, chat events go to the view, and every display mutation
//! flows through the render dispatcher. Raw mode and the alternate screen
//! are held for the lifetime of the loop and restored on the way out.

use std::io::{self, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use hearth_app::{ChatEvent, ChatView, Dispatcher, SurfaceError};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    input::{InputAction, InputState, KeyInput},
    sim,
    surface::TerminalSurface,
};

/// Input lines recallable with Up/Down.
const MAX_HISTORY: usize = 10;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Surface construction failed.
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// Restores the terminal on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown and the main event loop, feeding chat
/// events to the view and keyboard input to the input state.
pub struct Runtime {
    dispatcher: Dispatcher,
    view: ChatView,
    input: InputState,
    events: mpsc::Receiver<ChatEvent>,
    outbound: mpsc::Sender<String>,
    transport: Option<sim::SimHandle>,
    surface_task: JoinHandle<TerminalSurface>,
    guard: TerminalGuard,
}

impl Runtime {
    /// Create a runtime wired to the in-process simulated transport.
    pub fn with_sim(self_nick: String) -> Result<Self, RuntimeError> {
        let sim = sim::spawn(self_nick.clone());
        Self::create(self_nick, sim.events, sim.outbound, Some(sim.handle))
    }

    /// Create a runtime over caller-provided transport channels.
    ///
    /// `events` delivers typed transport events; submitted input lines go
    /// out through `outbound`.
    pub fn new(
        self_nick: String,
        events: mpsc::Receiver<ChatEvent>,
        outbound: mpsc::Sender<String>,
    ) -> Result<Self, RuntimeError> {
        Self::create(self_nick, events, outbound, None)
    }

    fn create(
        self_nick: String,
        events: mpsc::Receiver<ChatEvent>,
        outbound: mpsc::Sender<String>,
        transport: Option<sim::SimHandle>,
    ) -> Result<Self, RuntimeError> {
        let guard = TerminalGuard::acquire()?;
        let surface = TerminalSurface::new()?;

        let (dispatcher, surface_task) = Dispatcher::spawn(surface);
        let view = ChatView::new(dispatcher.clone(), self_nick);

        Ok(Self {
            dispatcher,
            view,
            input: InputState::new(MAX_HISTORY),
            events,
            outbound,
            transport,
            surface_task,
            guard,
        })
    }

    /// Run the main event loop until quit or transport shutdown.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        // First paint
        self.sync_input();

        let mut keys = EventStream::new();

        loop {
            // Bind the winning branch first; handling it needs all of self.
            let step = tokio::select! {
                maybe_event = keys.next() => Step::Terminal(maybe_event),
                maybe_chat = self.events.recv() => Step::Chat(maybe_chat),
            };

            match step {
                Step::Terminal(Some(Ok(Event::Key(key)))) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key).await {
                        break;
                    }
                },
                Step::Terminal(Some(Ok(Event::Resize(_, _)))) => self.sync_input(),
                Step::Terminal(Some(Ok(_))) => {},
                Step::Terminal(Some(Err(e))) => return Err(RuntimeError::Io(e)),
                Step::Terminal(None) | Step::Chat(None) => break,
                Step::Chat(Some(event)) => self.view.handle(event),
            }
        }

        // Let the drain task apply everything queued before the terminal is
        // restored by the guard.
        let Self { dispatcher, view, input, events, outbound, transport, surface_task, guard } =
            self;
        if let Some(handle) = &transport {
            handle.stop();
        }
        drop((dispatcher, view, input, events, outbound, transport));
        let _ = surface_task.await;
        drop(guard);

        Ok(())
    }

    /// Handle one key press. Returns true to quit.
    async fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        let Some(key) = convert_key(key.code) else {
            return false;
        };

        let quit = match self.input.handle_key(key) {
            InputAction::Submit(text) => {
                if self.outbound.send(text).await.is_err() {
                    self.view
                        .handle(ChatEvent::SendError { text: "connection closed".to_string() });
                }
                false
            },
            InputAction::Quit => true,
            InputAction::Edited => false,
        };

        self.sync_input();
        quit
    }

    /// Push the current input buffer and cursor to the surface.
    fn sync_input(&self) {
        let text = self.input.buffer().to_string();
        let cursor = self.input.cursor();
        self.dispatcher.submit(move |surface| surface.set_input(&text, cursor));
    }
}

/// One resolved event-loop step.
enum Step {
    /// Terminal event (or stream end/error).
    Terminal(Option<io::Result<Event>>),
    /// Transport event (or channel close).
    Chat(Option<ChatEvent>),
}

/// Convert crossterm `KeyCode` to `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}
