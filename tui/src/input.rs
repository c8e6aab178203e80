//! Input handling: a blocking crossterm reader feeding the frame loop, and
//! translation of terminal events into carousel signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;
use tokio::task::{self, JoinHandle};
use tokio::time;

use marquee_engine::{ArrowKey, HostSignal, NavIntent, Showcase};

use crate::card::Card;
use crate::{CELL_HEIGHT_PX, CELL_WIDTH_PX, FrameLayout};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// What the host should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Quit,
    ToggleMode,
    Signal(HostSignal),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
    pointer: PointerTracker,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
            pointer: PointerTracker::default(),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; never block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending terminal events into the showcase. Returns `Ok(true)` when
/// the user asked to quit.
///
/// `layout` is the geometry of the most recent frame; it drives hit-testing
/// and keeps the carousel's viewport width in step with the terminal.
pub fn handle_events(
    showcase: &mut Showcase<Card>,
    input: &mut InputPump,
    layout: &FrameLayout,
) -> Result<bool> {
    if let Some(width) = input.pointer.sync_viewport(layout.carousel) {
        showcase.handle(HostSignal::Resize { width });
    }

    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if let Some(action) = input.pointer.translate(&ev, layout)
            && apply_action(showcase, &mut input.pointer, action)
        {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(false)
}

/// Apply one action to the showcase. Returns `true` on quit.
fn apply_action(
    showcase: &mut Showcase<Card>,
    pointer: &mut PointerTracker,
    action: InputAction,
) -> bool {
    match action {
        InputAction::Quit => return true,
        InputAction::ToggleMode => {
            showcase.toggle_mode();
            // The freshly mounted carousel starts un-hovered.
            pointer.release();
        }
        InputAction::Signal(signal) => {
            if let Some(change) = showcase.handle(signal) {
                tracing::debug!(
                    index = change.index,
                    direction = ?change.direction,
                    "Slide changed from input"
                );
            }
        }
    }
    false
}

/// Tracks hover and drag state across mouse events so that raw terminal
/// events can be turned into enter/leave edges, swipes and clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerTracker {
    hovered: bool,
    drag_origin: Option<Position>,
    viewport_cols: Option<u16>,
}

impl PointerTracker {
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Forget hover and drag state.
    pub fn release(&mut self) {
        self.hovered = false;
        self.drag_origin = None;
    }

    /// Viewport width in pixels when the carousel area changed width since
    /// the last call.
    pub fn sync_viewport(&mut self, carousel: Rect) -> Option<u32> {
        if carousel.width == 0 || self.viewport_cols == Some(carousel.width) {
            return None;
        }
        self.viewport_cols = Some(carousel.width);
        Some(u32::from(carousel.width) * u32::from(CELL_WIDTH_PX))
    }

    pub fn translate(&mut self, event: &Event, layout: &FrameLayout) -> Option<InputAction> {
        match event {
            Event::Key(key) => translate_key(*key),
            Event::Mouse(mouse) => self.translate_mouse(*mouse, layout),
            Event::FocusLost => self.set_hovered(false),
            _ => None,
        }
    }

    fn translate_mouse(&mut self, mouse: MouseEvent, layout: &FrameLayout) -> Option<InputAction> {
        let at = Position::new(mouse.column, mouse.row);
        let inside = layout.carousel.contains(at);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.set_hovered(inside),
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_origin = inside.then_some(at);
                self.set_hovered(inside)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let origin = self.drag_origin.take()?;
                if origin == at {
                    return click_target(at, layout);
                }
                let dx = (f32::from(at.x) - f32::from(origin.x)) * f32::from(CELL_WIDTH_PX);
                let dy = (f32::from(at.y) - f32::from(origin.y)) * f32::from(CELL_HEIGHT_PX);
                Some(InputAction::Signal(HostSignal::DragRelease { dx, dy }))
            }
            _ => None,
        }
    }

    fn set_hovered(&mut self, hovered: bool) -> Option<InputAction> {
        if self.hovered == hovered {
            return None;
        }
        self.hovered = hovered;
        let signal = if hovered {
            HostSignal::PointerEnter
        } else {
            HostSignal::PointerLeave
        };
        Some(InputAction::Signal(signal))
    }
}

fn translate_key(key: KeyEvent) -> Option<InputAction> {
    if matches!(key.kind, KeyEventKind::Release) {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        KeyCode::Char('m') => Some(InputAction::ToggleMode),
        KeyCode::Left => Some(InputAction::Signal(HostSignal::Key(ArrowKey::Left))),
        KeyCode::Right => Some(InputAction::Signal(HostSignal::Key(ArrowKey::Right))),
        _ => None,
    }
}

fn click_target(at: Position, layout: &FrameLayout) -> Option<InputAction> {
    if layout.prev_arrow.is_some_and(|rect| rect.contains(at)) {
        return Some(InputAction::Signal(HostSignal::ArrowButton(NavIntent::Prev)));
    }
    if layout.next_arrow.is_some_and(|rect| rect.contains(at)) {
        return Some(InputAction::Signal(HostSignal::ArrowButton(NavIntent::Next)));
    }
    layout
        .indicators
        .iter()
        .position(|rect| rect.contains(at))
        .map(|index| InputAction::Signal(HostSignal::Indicator(index)))
}
