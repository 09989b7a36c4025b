#![forbid(unsafe_code)]

//! Auto-advancing, queued, wrap-around carousel.
//!
//! The carousel shows `display_items` consecutive entries of a logically
//! infinite cyclic list. Moves are queued and played one at a time as slide
//! transitions; an optional autoplay timer enqueues moves on its own until
//! the first user move, which switches it off for good.
//!
//! # Model
//!
//! - The caller's items are doubled into a working set of `2N` entries so a
//!   slide across the wrap point always has real neighbours to reveal.
//! - `current_index` lives in `[0, 2N)`. The strip shows
//!   `[current - 1, current + display_items + 1)` modulo `2N`.
//! - Time only moves through [`Carousel::tick`].
//!
//! # Invariants
//!
//! 1. At most one transition is in flight; a fire from any other phase is a
//!    no-op.
//! 2. Queued moves fire in FIFO order, each after the previous transition's
//!    timeout.
//! 3. After the first [`Origin::User`] move no autoplay move is ever queued.
//! 4. `current_index < 2N` at all times.
//!
//! # Example
//!
//! ```
//! use marquee_widgets::carousel::{AutoPlay, Carousel, CarouselConfig, CarouselItem};
//! use web_time::Duration;
//!
//! let items = (0..5).map(|i| CarouselItem::new(format!("card-{i}"), i)).collect();
//! let config = CarouselConfig::new().display_items(3).autoplay(AutoPlay::Off);
//! let mut carousel = Carousel::new(items, config).unwrap();
//!
//! carousel.move_right();
//! carousel.tick(Duration::from_millis(300));
//! assert_eq!(carousel.current_index(), 1);
//! ```

mod config;
mod view;

use std::collections::{HashSet, VecDeque};

use marquee_core::timer::{Interval, Timeout};
use web_time::Duration;

pub use config::{AutoPlay, CarouselConfig, DEFAULT_LEFT_CONTROL, DEFAULT_RIGHT_CONTROL};
pub use view::{CarouselLayout, CarouselView, Controls, Slot, StripOffset};

/// Suffix appended to the ids of the second half of the working set.
pub const COPY_SUFFIX: &str = "-copy";

/// Direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards the previous item.
    Left,
    /// Towards the next item.
    Right,
}

impl Direction {
    #[inline]
    const fn step(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Who asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A human pressed a control or key.
    User,
    /// The autoplay timer.
    Autoplay,
}

/// Phase of the transition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CarouselPhase {
    #[default]
    Idle,
    TransitioningLeft,
    TransitioningRight,
}

/// Things that happened during a [`Carousel::push`] or [`Carousel::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Autoplay was switched off by the first user move.
    AutoplayStopped,
    /// A move entered the queue.
    Queued { direction: Direction, origin: Origin },
    /// A slide began. `to` is committed when it completes.
    TransitionStarted {
        direction: Direction,
        from: usize,
        to: usize,
    },
    /// A slide finished and `index` is now current.
    TransitionCompleted { index: usize },
}

/// Construction and replacement errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    NoItems,
    #[error("display_items must be at least 1")]
    ZeroDisplayItems,
    #[error("display_items ({display_items}) must be less than the number of items ({items})")]
    DisplayItemsNotLessThanItems { display_items: usize, items: usize },
    #[error("duplicate carousel item id {0:?}")]
    DuplicateItemId(String),
    #[error("autoplay_interval_ms must be greater than zero while autoplay is on")]
    ZeroAutoplayInterval,
}

/// A caller-supplied entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem<T> {
    id: String,
    content: T,
}

impl<T> CarouselItem<T> {
    pub fn new(id: impl Into<String>, content: T) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &T {
        &self.content
    }
}

/// One entry of the doubled working set; content stays with the source item.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WorkingEntry {
    id: String,
    source: usize,
}

/// The carousel state machine.
#[derive(Debug)]
pub struct Carousel<T> {
    items: Vec<CarouselItem<T>>,
    working: Vec<WorkingEntry>,
    config: CarouselConfig,
    current: usize,
    /// Index committed when the in-flight transition completes.
    pending: Option<usize>,
    transition: Option<Direction>,
    queue: VecDeque<Direction>,
    autoplay: Option<Direction>,
    user_acted: bool,
    autoplay_timer: Interval,
    transition_timer: Timeout,
    mounted: bool,
}

impl<T> Carousel<T> {
    /// Build a carousel. Autoplay, if configured, starts counting immediately.
    pub fn new(items: Vec<CarouselItem<T>>, config: CarouselConfig) -> Result<Self, CarouselError> {
        config.validate()?;
        let working = build_working_set(&items, config.display_items)?;
        let autoplay = config.autoplay.direction();
        let autoplay_timer = match autoplay {
            Some(_) => Interval::new(config.autoplay_interval()),
            None => Interval::stopped(),
        };
        Ok(Self {
            items,
            working,
            config,
            current: 0,
            pending: None,
            transition: None,
            queue: VecDeque::new(),
            autoplay,
            user_acted: false,
            autoplay_timer,
            transition_timer: Timeout::idle(),
            mounted: true,
        })
    }

    // --- Accessors ---

    pub fn items(&self) -> &[CarouselItem<T>] {
        &self.items
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Length of the doubled working set (`2 * items().len()`).
    pub fn working_len(&self) -> usize {
        self.working.len()
    }

    /// Id of a working-set entry.
    pub fn working_id(&self, index: usize) -> Option<&str> {
        self.working.get(index).map(|e| e.id.as_str())
    }

    /// Committed index into the working set.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index the in-flight transition will commit, if any.
    pub fn pending_index(&self) -> Option<usize> {
        self.pending
    }

    /// Direction of the in-flight transition, if any.
    pub fn transition(&self) -> Option<Direction> {
        self.transition
    }

    pub fn phase(&self) -> CarouselPhase {
        match self.transition {
            None => CarouselPhase::Idle,
            Some(Direction::Left) => CarouselPhase::TransitioningLeft,
            Some(Direction::Right) => CarouselPhase::TransitioningRight,
        }
    }

    /// Moves waiting for the current transition to finish, head first.
    pub fn queued(&self) -> &VecDeque<Direction> {
        &self.queue
    }

    /// Direction autoplay will move in, or `None` once disabled.
    pub fn autoplay(&self) -> Option<Direction> {
        self.autoplay
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Working-set indices of the strip, left overscan first.
    pub fn window(&self) -> Vec<usize> {
        let len = self.working.len();
        let first = self.current as isize - 1;
        (0..self.config.display_items + 2)
            .map(|k| wrap_index(first + k as isize, len))
            .collect()
    }

    /// Horizontal strip shift for the current phase.
    pub fn offset(&self) -> StripOffset {
        match self.transition {
            None => StripOffset::IDLE,
            Some(Direction::Left) => StripOffset::LEFT,
            Some(Direction::Right) => StripOffset::RIGHT,
        }
    }

    /// Snapshot of what to draw.
    pub fn view(&self) -> CarouselView<'_, T> {
        let slots = self
            .window()
            .into_iter()
            .map(|index| {
                let entry = &self.working[index];
                Slot {
                    index,
                    id: entry.id.as_str(),
                    source: entry.source,
                    content: &self.items[entry.source].content,
                }
            })
            .collect();
        CarouselView {
            slots,
            offset: self.offset(),
            animated: self.transition.is_some(),
            transition_duration: self.config.transition_duration(),
            display_items: self.config.display_items,
            controls: self.config.controls.then(|| Controls {
                left: self.config.left_label(),
                right: self.config.right_label(),
            }),
        }
    }

    // --- Input ---

    /// Request a move. Returns what happened as a result.
    ///
    /// The first [`Origin::User`] request replaces the whole queue and turns
    /// autoplay off permanently.
    pub fn push(&mut self, direction: Direction, origin: Origin) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        if self.mounted {
            self.enqueue(direction, origin, &mut events);
        }
        events
    }

    /// User shorthand for a left move.
    pub fn move_left(&mut self) -> Vec<CarouselEvent> {
        self.push(Direction::Left, Origin::User)
    }

    /// User shorthand for a right move.
    pub fn move_right(&mut self) -> Vec<CarouselEvent> {
        self.push(Direction::Right, Origin::User)
    }

    /// Advance the clock by `delta`, firing timers in chronological order.
    ///
    /// A transition expiry due at the same instant as an autoplay period is
    /// handled first.
    pub fn tick(&mut self, delta: Duration) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        if !self.mounted {
            return events;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "carousel.tick",
            delta_us = delta.as_micros() as u64,
            queued = self.queue.len()
        )
        .entered();

        let mut remaining = delta;
        loop {
            let due = [
                self.transition_timer.remaining(),
                self.autoplay_timer.until_next(),
            ]
            .into_iter()
            .flatten()
            .min();

            match due {
                Some(step) if step <= remaining => {
                    remaining -= step;
                    let expired = self.transition_timer.advance(step);
                    let periods = self.autoplay_timer.advance(step);
                    if expired {
                        self.commit(&mut events);
                    }
                    for _ in 0..periods {
                        if let Some(direction) = self.autoplay {
                            self.enqueue(direction, Origin::Autoplay, &mut events);
                        }
                    }
                }
                _ => {
                    self.transition_timer.advance(remaining);
                    self.autoplay_timer.advance(remaining);
                    break;
                }
            }
        }
        events
    }

    // --- Reconfiguration ---

    /// Replace the item list.
    ///
    /// The working set is rebuilt and the carousel returns to index 0. Any
    /// in-flight transition and queued moves are dropped since they refer to
    /// the old index space. Autoplay state is kept.
    pub fn set_items(&mut self, items: Vec<CarouselItem<T>>) -> Result<(), CarouselError> {
        let working = build_working_set(&items, self.config.display_items)?;
        self.items = items;
        self.working = working;
        self.current = 0;
        self.pending = None;
        self.transition = None;
        self.transition_timer.cancel();
        self.queue.clear();
        Ok(())
    }

    /// Change the autoplay period. A running autoplay timer restarts.
    ///
    /// While autoplay is on the period must be at least one millisecond, the
    /// same bound [`CarouselConfig::validate`] applies.
    pub fn set_autoplay_interval(&mut self, interval: Duration) -> Result<(), CarouselError> {
        let interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        if self.autoplay.is_some() && interval_ms == 0 {
            return Err(CarouselError::ZeroAutoplayInterval);
        }
        self.config.autoplay_interval_ms = interval_ms;
        if self.autoplay.is_some() && self.mounted {
            self.autoplay_timer.restart(interval);
        }
        Ok(())
    }

    /// Change the slide length. Applies from the next transition.
    pub fn set_transition_duration(&mut self, duration: Duration) {
        self.config.transition_duration_ms =
            u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    }

    /// Tear down: cancel both timers and drop queued moves.
    ///
    /// The carousel ignores all further input and ticks.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.autoplay_timer.cancel();
        self.transition_timer.cancel();
        self.queue.clear();
        self.pending = None;
        self.transition = None;
    }

    // --- Internal state machine ---

    fn enqueue(&mut self, direction: Direction, origin: Origin, events: &mut Vec<CarouselEvent>) {
        match origin {
            Origin::User if !self.user_acted => {
                self.user_acted = true;
                self.queue.clear();
                if self.autoplay.take().is_some() {
                    self.autoplay_timer.cancel();
                    #[cfg(feature = "tracing")]
                    tracing::debug!(message = "carousel.autoplay_stopped");
                    events.push(CarouselEvent::AutoplayStopped);
                }
            }
            Origin::Autoplay if self.autoplay.is_none() => return,
            _ => {}
        }
        self.queue.push_back(direction);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.enqueue",
            direction = direction.as_str(),
            user = origin == Origin::User,
            queued = self.queue.len()
        );
        events.push(CarouselEvent::Queued { direction, origin });
        self.drain(events);
    }

    /// Fire the head of the queue if nothing is in flight.
    ///
    /// The head stays queued when the fire is refused.
    fn drain(&mut self, events: &mut Vec<CarouselEvent>) {
        let Some(&direction) = self.queue.front() else {
            return;
        };
        if self.fire(direction, events) {
            self.queue.pop_front();
        }
    }

    fn fire(&mut self, direction: Direction, events: &mut Vec<CarouselEvent>) -> bool {
        if self.transition.is_some() {
            return false;
        }
        let from = self.current;
        let to = wrap_index(from as isize + direction.step(), self.working.len());
        self.transition = Some(direction);
        self.pending = Some(to);
        self.transition_timer.arm(self.config.transition_duration());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.transition_start",
            direction = direction.as_str(),
            from,
            to
        );
        events.push(CarouselEvent::TransitionStarted {
            direction,
            from,
            to,
        });
        true
    }

    fn commit(&mut self, events: &mut Vec<CarouselEvent>) {
        if let Some(to) = self.pending.take() {
            self.current = to;
        }
        self.transition = None;

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "carousel.transition_commit", index = self.current);
        events.push(CarouselEvent::TransitionCompleted {
            index: self.current,
        });
        self.drain(events);
    }
}

#[inline]
fn wrap_index(index: isize, len: usize) -> usize {
    // len is 2N with N >= 2, so both casts are lossless.
    index.rem_euclid(len as isize) as usize
}

fn build_working_set<T>(
    items: &[CarouselItem<T>],
    display_items: usize,
) -> Result<Vec<WorkingEntry>, CarouselError> {
    if items.is_empty() {
        return Err(CarouselError::NoItems);
    }
    if display_items == 0 {
        return Err(CarouselError::ZeroDisplayItems);
    }
    if display_items >= items.len() {
        return Err(CarouselError::DisplayItemsNotLessThanItems {
            display_items,
            items: items.len(),
        });
    }

    let originals = items.iter().enumerate().map(|(source, item)| WorkingEntry {
        id: item.id.clone(),
        source,
    });
    let copies = items.iter().enumerate().map(|(source, item)| WorkingEntry {
        id: format!("{}{COPY_SUFFIX}", item.id),
        source,
    });
    let working: Vec<WorkingEntry> = originals.chain(copies).collect();

    let mut seen = HashSet::with_capacity(working.len());
    for entry in &working {
        if !seen.insert(entry.id.as_str()) {
            return Err(CarouselError::DuplicateItemId(entry.id.clone()));
        }
    }
    Ok(working)
}
