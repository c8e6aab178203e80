//! Host input normalized into navigation intents.

/// Minimum horizontal drag, in pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIntent {
    Prev,
    Next,
}

/// Signals an embedding host feeds into a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostSignal {
    Key(ArrowKey),
    /// Pointer released after a drag; deltas are in pixels, positive is right/down.
    DragRelease { dx: f32, dy: f32 },
    PointerEnter,
    PointerLeave,
    /// Viewport width in pixels.
    Resize { width: u32 },
    /// An indicator dot was activated.
    Indicator(usize),
    /// A previous/next arrow button was activated.
    ArrowButton(NavIntent),
}

#[must_use]
pub fn key_intent(key: ArrowKey) -> NavIntent {
    match key {
        ArrowKey::Left => NavIntent::Prev,
        ArrowKey::Right => NavIntent::Next,
    }
}

/// Swipe direction for a released drag. Dragging right reveals the previous
/// slide. Movements at or under the threshold are ignored.
#[must_use]
pub fn drag_intent(dx: f32) -> Option<NavIntent> {
    if dx > SWIPE_THRESHOLD_PX {
        Some(NavIntent::Prev)
    } else if dx < -SWIPE_THRESHOLD_PX {
        Some(NavIntent::Next)
    } else {
        None
    }
}
