//! Hero carousel: a cyclic slide index with auto-advance and a transition lock.
//!
//! [`Carousel`] is the pure state machine; callers pass the current instant to
//! every transition. [`CarouselDriver`] runs one on a tokio task, advancing it
//! on a timer and applying navigation commands sent from the outside.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::{WidgetError, WidgetResult};

/// Carousel timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarouselTiming {
    /// Time on a slide before auto-advancing, in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Input is ignored for this long after each transition, in milliseconds.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

fn default_interval_ms() -> u64 {
    6000
}

fn default_cooldown_ms() -> u64 {
    500
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

impl CarouselTiming {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

/// Whether the carousel accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselState {
    Idle,
    /// A transition is in progress; navigation is ignored until it ends.
    Transitioning,
}

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Next,
    Prev,
    GoTo(usize),
}

/// Carousel state machine.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    timing: CarouselTiming,
    locked_until: Option<Instant>,
    next_advance_at: Instant,
}

impl Carousel {
    /// Start on the first slide. The first auto-advance is one interval from `now`.
    pub fn new(len: usize, timing: CarouselTiming, now: Instant) -> WidgetResult<Self> {
        if len == 0 {
            return Err(WidgetError::EmptyCarousel);
        }
        if timing.interval_ms == 0 {
            return Err(WidgetError::InvalidTiming(
                "interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            len,
            index: 0,
            timing,
            locked_until: None,
            next_advance_at: now + timing.interval(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides, never zero.
    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    pub fn state(&self, now: Instant) -> CarouselState {
        match self.locked_until {
            Some(until) if now < until => CarouselState::Transitioning,
            _ => CarouselState::Idle,
        }
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        self.state(now) == CarouselState::Transitioning
    }

    /// When the next auto-advance is due.
    pub fn next_deadline(&self) -> Instant {
        self.next_advance_at
    }

    /// Move forward, wrapping to the first slide. Returns whether the slide changed.
    pub fn next(&mut self, now: Instant) -> bool {
        let to = (self.index + 1) % self.len;
        self.transition(to, now)
    }

    /// Move back, wrapping to the last slide. Returns whether the slide changed.
    pub fn prev(&mut self, now: Instant) -> bool {
        let to = (self.index + self.len - 1) % self.len;
        self.transition(to, now)
    }

    /// Jump to a slide. Selecting the current slide is a no-op.
    pub fn go_to(&mut self, index: usize, now: Instant) -> WidgetResult<bool> {
        if index >= self.len {
            return Err(WidgetError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.index {
            return Ok(false);
        }
        Ok(self.transition(index, now))
    }

    /// Apply a navigation command.
    pub fn apply(&mut self, command: CarouselCommand, now: Instant) -> WidgetResult<bool> {
        match command {
            CarouselCommand::Next => Ok(self.next(now)),
            CarouselCommand::Prev => Ok(self.prev(now)),
            CarouselCommand::GoTo(index) => self.go_to(index, now),
        }
    }

    /// Auto-advance if the deadline has passed.
    ///
    /// A deadline that lands inside a transition is pushed to the end of the
    /// lock rather than dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_advance_at {
            return false;
        }
        if let Some(until) = self.locked_until.filter(|until| now < *until) {
            self.next_advance_at = until;
            return false;
        }
        self.next(now)
    }

    /// Every slide change locks input and restarts the auto-advance interval.
    fn transition(&mut self, to: usize, now: Instant) -> bool {
        if self.is_locked(now) {
            debug!(from = self.index, to, "carousel locked, input ignored");
            return false;
        }
        self.index = to;
        self.locked_until = Some(now + self.timing.cooldown());
        self.next_advance_at = now + self.timing.interval();
        true
    }
}

/// Handle to a carousel running on its own task.
///
/// Dropping the handle stops the task, so a torn-down carousel never advances.
pub struct CarouselDriver {
    commands: mpsc::Sender<CarouselCommand>,
    index: watch::Receiver<usize>,
    len: usize,
    task: JoinHandle<()>,
}

impl CarouselDriver {
    /// Spawn a driver for `len` slides onto the current runtime.
    pub fn spawn(len: usize, timing: CarouselTiming) -> WidgetResult<Self> {
        let carousel = Carousel::new(len, timing, Instant::now())?;
        let (commands, receiver) = mpsc::channel(16);
        let (publisher, index) = watch::channel(carousel.index());

        info!(slides = len, interval_ms = timing.interval_ms, "carousel driver started");
        let task = tokio::spawn(run(carousel, receiver, publisher));

        Ok(Self {
            commands,
            index,
            len,
            task,
        })
    }

    /// Index of the slide currently shown.
    pub fn current(&self) -> usize {
        *self.index.borrow()
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Receiver that observes every slide change.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub async fn next(&self) -> WidgetResult<()> {
        self.send(CarouselCommand::Next).await
    }

    pub async fn prev(&self) -> WidgetResult<()> {
        self.send(CarouselCommand::Prev).await
    }

    pub async fn go_to(&self, index: usize) -> WidgetResult<()> {
        if index >= self.len {
            return Err(WidgetError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.send(CarouselCommand::GoTo(index)).await
    }

    /// Stop the driver. Subscribers see the channel close.
    pub fn stop(self) {
        drop(self);
    }

    async fn send(&self, command: CarouselCommand) -> WidgetResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| WidgetError::DriverStopped)
    }
}

impl Drop for CarouselDriver {
    fn drop(&mut self) {
        self.task.abort();
        info!("carousel driver stopped");
    }
}

async fn run(
    mut carousel: Carousel,
    mut commands: mpsc::Receiver<CarouselCommand>,
    publisher: watch::Sender<usize>,
) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(carousel.next_deadline()) => {
                if carousel.tick(Instant::now()) {
                    debug!(index = carousel.index(), "carousel auto-advanced");
                }
            }
            command = commands.recv() => {
                let Some(command) = command else { break };
                if let Err(e) = carousel.apply(command, Instant::now()) {
                    debug!(error = %e, "carousel command rejected");
                }
            }
        }

        let index = carousel.index();
        publisher.send_if_modified(|current| {
            if *current == index {
                return false;
            }
            *current = index;
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> (Carousel, Instant) {
        let now = Instant::now();
        (Carousel::new(len, CarouselTiming::default(), now).unwrap(), now)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_empty_carousel_rejected() {
        let err = Carousel::new(0, CarouselTiming::default(), Instant::now()).unwrap_err();
        assert_eq!(err, WidgetError::EmptyCarousel);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let timing = CarouselTiming {
            interval_ms: 0,
            cooldown_ms: 0,
        };
        assert!(matches!(
            Carousel::new(3, timing, Instant::now()),
            Err(WidgetError::InvalidTiming(_))
        ));
        assert!(matches!(
            CarouselDriver::spawn(3, timing),
            Err(WidgetError::InvalidTiming(_))
        ));
    }

    #[test]
    fn test_auto_advance_wraps() {
        let (mut c, start) = carousel(3);
        assert!(!c.tick(start + ms(5999)));
        assert!(c.tick(start + ms(6000)));
        assert!(c.tick(start + ms(12000)));
        assert_eq!(c.index(), 2);
        assert!(c.tick(start + ms(18000)));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_prev_wraps_backwards() {
        let (mut c, start) = carousel(3);
        assert!(c.prev(start));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_input_ignored_during_cooldown() {
        let (mut c, start) = carousel(3);
        assert!(c.next(start));
        assert_eq!(c.state(start + ms(100)), CarouselState::Transitioning);
        assert!(!c.next(start + ms(499)));
        assert_eq!(c.index(), 1);

        assert_eq!(c.state(start + ms(500)), CarouselState::Idle);
        assert!(c.next(start + ms(500)));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_manual_navigation_resets_interval() {
        let (mut c, start) = carousel(3);
        assert!(c.go_to(2, start + ms(5000)).unwrap());
        assert!(!c.tick(start + ms(6000)));
        assert_eq!(c.next_deadline(), start + ms(11000));
        assert!(c.tick(start + ms(11000)));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_go_to_bounds() {
        let (mut c, start) = carousel(3);
        assert_eq!(
            c.go_to(3, start).unwrap_err(),
            WidgetError::SlideOutOfRange { index: 3, len: 3 }
        );
        assert!(!c.go_to(0, start).unwrap());
        assert_eq!(c.state(start), CarouselState::Idle);
    }

    #[test]
    fn test_deadline_inside_lock_is_deferred() {
        let timing = CarouselTiming {
            interval_ms: 100,
            cooldown_ms: 500,
        };
        let start = Instant::now();
        let mut c = Carousel::new(2, timing, start).unwrap();
        assert!(c.next(start));
        assert!(!c.tick(start + ms(100)));
        assert_eq!(c.next_deadline(), start + ms(500));
        assert!(c.tick(start + ms(500)));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_single_slide_wraps_to_itself() {
        let (mut c, start) = carousel(1);
        assert!(c.next(start));
        assert_eq!(c.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_auto_advances() {
        let driver = CarouselDriver::spawn(3, CarouselTiming::default()).unwrap();
        let mut index = driver.subscribe();

        index.changed().await.unwrap();
        assert_eq!(*index.borrow_and_update(), 1);
        index.changed().await.unwrap();
        assert_eq!(*index.borrow_and_update(), 2);
        index.changed().await.unwrap();
        assert_eq!(*index.borrow_and_update(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_commands() {
        let driver = CarouselDriver::spawn(3, CarouselTiming::default()).unwrap();
        let mut index = driver.subscribe();

        driver.go_to(2).await.unwrap();
        index.changed().await.unwrap();
        assert_eq!(driver.current(), 2);

        tokio::time::sleep(ms(500)).await;
        driver.prev().await.unwrap();
        index.changed().await.unwrap();
        assert_eq!(driver.current(), 1);

        assert_eq!(
            driver.go_to(5).await.unwrap_err(),
            WidgetError::SlideOutOfRange { index: 5, len: 3 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_closes_subscribers() {
        let driver = CarouselDriver::spawn(3, CarouselTiming::default()).unwrap();
        assert_eq!(driver.slide_count(), 3);
        let mut index = driver.subscribe();
        driver.stop();
        assert!(index.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_driver_stops_task() {
        let driver = CarouselDriver::spawn(3, CarouselTiming::default()).unwrap();
        let mut index = driver.subscribe();
        drop(driver);

        tokio::time::sleep(ms(20_000)).await;
        assert_eq!(*index.borrow_and_update(), 0);
        assert!(index.changed().await.is_err());
    }
}
