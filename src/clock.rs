//! Wall clock, display formatting, and the once-per-second ticker

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format as `day, Month year - H:M:S` without zero padding.
pub fn format_display_time<T: Datelike + Timelike>(t: &T) -> String {
    format!(
        "{}, {} {} - {}:{}:{}",
        t.day(),
        MONTH_NAMES[t.month0() as usize],
        t.year(),
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    fn display_now(&self) -> String {
        format_display_time(&self.now())
    }
}

/// The machine's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl ManualClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock reading `naive` as local wall time (UTC offset)
    pub fn at_naive(naive: NaiveDateTime) -> Self {
        Self::new(Utc.fix().from_utc_datetime(&naive))
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        if let Ok(delta) = chrono::Duration::from_std(by) {
            *now += delta;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock()
    }
}

/// Background task publishing the formatted time at a fixed period.
///
/// The value is available immediately after [`ClockTicker::spawn`]. The task
/// stops when the ticker is dropped or [`ClockTicker::stop`] is called.
pub struct ClockTicker {
    clock: Arc<dyn Clock>,
    rx: watch::Receiver<String>,
    cancel: CancellationToken,
}

impl ClockTicker {
    /// Spawn the ticker on the current tokio runtime
    pub fn spawn(clock: Arc<dyn Clock>, period: Duration) -> Self {
        let (tx, rx) = watch::channel(clock.display_now());
        let cancel = CancellationToken::new();

        tokio::spawn(run_ticker(clock.clone(), period, tx, cancel.clone()));

        Self { clock, rx, cancel }
    }

    /// Latest formatted time
    pub fn current(&self) -> String {
        self.rx.borrow().clone()
    }

    /// Receiver notified on every tick
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_ticker(
    clock: Arc<dyn Clock>,
    period: Duration,
    tx: watch::Sender<String>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Skip the first immediate tick; the channel was seeded at spawn
    interval.tick().await;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                if tx.send(clock.display_now()).is_err() {
                    break;
                }
            }
        }
    }

    tracing::debug!("Clock ticker stopped");
}
