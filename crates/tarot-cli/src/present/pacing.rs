//! Pauses between reveals, and noticing when the reader wants out.
//!
//! On an interactive terminal a pause runs in raw mode and reads Esc, `q`
//! and Ctrl-C as keys. Everywhere else Ctrl-C arrives as SIGINT; while a
//! reading is on screen the handler only raises a flag, which the next pause
//! turns into [`Pace::Interrupted`].

use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::PresentConfig;

/// Longest uninterrupted sleep while waiting for a signal.
const SLICE: Duration = Duration::from_millis(25);

/// Raised by the SIGINT handler.
static SIGNALLED: LazyLock<Arc<AtomicBool>> = LazyLock::new(Arc::default);
/// Set while a reading is being revealed.
static READING: AtomicBool = AtomicBool::new(false);

/// What happened during a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Interrupted,
}

/// Waits between reveal events.
pub trait Pacer {
    fn pause(&mut self, delay: Option<Duration>) -> io::Result<Pace>;
}

/// Never waits.
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _delay: Option<Duration>) -> io::Result<Pace> {
        Ok(Pace::Continue)
    }
}

/// Sleeps in short slices, giving up as soon as `interrupted` is raised.
pub struct Sleep {
    interrupted: Arc<AtomicBool>,
}

impl Sleep {
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self { interrupted }
    }
}

impl Pacer for Sleep {
    fn pause(&mut self, delay: Option<Duration>) -> io::Result<Pace> {
        let deadline = Instant::now() + delay.unwrap_or_default();
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                return Ok(Pace::Interrupted);
            }
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Ok(Pace::Continue);
            }
            thread::sleep(left.min(SLICE));
        }
    }
}

/// Waits in raw mode, watching for Esc, `q` or Ctrl-C.
pub struct KeyWatch {
    interrupted: Arc<AtomicBool>,
}

impl Pacer for KeyWatch {
    fn pause(&mut self, delay: Option<Duration>) -> io::Result<Pace> {
        if self.interrupted.load(Ordering::SeqCst) {
            return Ok(Pace::Interrupted);
        }
        let Some(delay) = delay else {
            return Ok(Pace::Continue);
        };
        terminal::enable_raw_mode()?;
        let outcome = watch(delay);
        terminal::disable_raw_mode()?;
        outcome
    }
}

fn watch(delay: Duration) -> io::Result<Pace> {
    let deadline = Instant::now() + delay;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return Ok(Pace::Continue);
        }
        if event::poll(left)? && matches!(event::read()?, Event::Key(key) if is_interrupt(&key)) {
            return Ok(Pace::Interrupted);
        }
    }
}

/// Esc, `q` and Ctrl-C abort a reading.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Route SIGINT to the running reading; outside a reading it still exits.
pub fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        if READING.load(Ordering::SeqCst) {
            SIGNALLED.store(true, Ordering::SeqCst);
        } else {
            std::process::exit(130);
        }
    });
    if let Err(e) = result {
        log::warn!("cannot watch for Ctrl-C: {e}");
    }
}

/// Marks a reading as on screen until dropped.
pub struct ReadingGuard(());

impl ReadingGuard {
    pub fn begin() -> Self {
        SIGNALLED.store(false, Ordering::SeqCst);
        READING.store(true, Ordering::SeqCst);
        Self(())
    }
}

impl Drop for ReadingGuard {
    fn drop(&mut self) {
        READING.store(false, Ordering::SeqCst);
    }
}

/// The pacer that fits the current terminal and configuration.
pub fn pacer_for(config: &PresentConfig) -> Box<dyn Pacer> {
    let interrupted = Arc::clone(&SIGNALLED);
    if config.instant {
        Box::new(NoPause)
    } else if io::stdin().is_terminal() && io::stdout().is_terminal() {
        Box::new(KeyWatch { interrupted })
    } else {
        log::debug!("not a terminal, only Ctrl-C interrupts");
        Box::new(Sleep::new(interrupted))
    }
}
