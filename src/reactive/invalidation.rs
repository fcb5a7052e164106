//! Repaint and relayout signalling shared by all widgets on the UI thread.
//!
//! Everything here is thread-local: widgets, animators and the frame loop all
//! run on one thread, so a plain `Cell`/`RefCell` is enough.

use std::cell::{Cell, RefCell};

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (size/position may change)
        const NEEDS_LAYOUT   = 0b001;
        /// Widget needs repainting (visual appearance changed)
        const NEEDS_PAINT    = 0b010;
        /// Cached outline/clip geometry must be rebuilt before the next paint
        const NEEDS_GEOMETRY = 0b100;
    }
}

/// Unique identifier for a widget
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId(u64);

thread_local! {
    static NEXT_WIDGET_ID: Cell<u64> = const { Cell::new(1) };
    static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
    static FRAME_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

impl WidgetId {
    /// Generate a new unique widget ID
    pub fn next() -> Self {
        NEXT_WIDGET_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            WidgetId(id)
        })
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Request that this widget be re-laid out (and repainted)
    pub fn request_layout(&self) {
        APP_STATE.with(|state| {
            state.borrow_mut().change_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        });
        request_frame();
    }

    /// Request that this widget be repainted (without layout)
    pub fn request_paint(&self) {
        APP_STATE.with(|state| {
            state.borrow_mut().change_flags |= ChangeFlags::NEEDS_PAINT;
        });
        request_frame();
    }
}

/// Application state for tracking what needs updating
#[derive(Debug)]
pub struct AppState {
    /// Global change flags
    pub change_flags: ChangeFlags,
    /// Whether animations are currently active
    pub has_animations: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            change_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            has_animations: false,
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.change_flags.contains(ChangeFlags::NEEDS_LAYOUT)
    }

    pub fn needs_paint(&self) -> bool {
        self.change_flags.contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn clear_layout_flag(&mut self) {
        self.change_flags.remove(ChangeFlags::NEEDS_LAYOUT);
    }

    pub fn clear_paint_flag(&mut self) {
        self.change_flags.remove(ChangeFlags::NEEDS_PAINT);
    }
}

/// Request that the frame loop process a frame
pub fn request_frame() {
    FRAME_REQUESTED.with(|requested| requested.set(true));
}

/// Check if a frame has been requested and clear the flag
pub fn take_frame_request() -> bool {
    FRAME_REQUESTED.with(|requested| requested.replace(false))
}

/// Request a frame for animation purposes
pub fn request_animation_frame() {
    APP_STATE.with(|state| {
        state.borrow_mut().has_animations = true;
    });
    request_frame();
}

/// Clear the animation flag (call after animation completes)
pub fn clear_animation_flag() {
    APP_STATE.with(|state| {
        state.borrow_mut().has_animations = false;
    });
}

/// Check if animations are active
pub fn has_animations() -> bool {
    APP_STATE.with(|state| state.borrow().has_animations)
}

/// Access the app state for rendering decisions
pub fn with_app_state<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    APP_STATE.with(|state| f(&state.borrow()))
}

/// Mutably access the app state
pub fn with_app_state_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    APP_STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Reset all invalidation state for this thread.
pub fn reset_invalidation() {
    APP_STATE.with(|state| *state.borrow_mut() = AppState::new());
    FRAME_REQUESTED.with(|requested| requested.set(false));
}
