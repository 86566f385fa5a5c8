use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use subtitler_core::{Msg, Timer};

const SLEEP_SLICE: Duration = Duration::from_millis(20);

/// Handle to one armed timer. Dropping it does not cancel; call
/// [`Subscription::stop`].
#[derive(Debug)]
pub struct Subscription {
    cancelled: Arc<AtomicBool>,
    settled: Arc<AtomicBool>,
}

impl Subscription {
    pub fn stop(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// True once the timer thread is done, whether it fired or was stopped.
    fn is_settled(&self) -> bool {
        self.settled.load(Ordering::Relaxed)
    }
}

/// Owns every outstanding timer subscription. Arming a timer that is already
/// outstanding replaces it, so at most one delivery per [`Timer`] key is ever
/// in flight.
pub struct TimerBank {
    msg_tx: mpsc::Sender<Msg>,
    active: HashMap<Timer, Subscription>,
}

impl TimerBank {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            msg_tx,
            active: HashMap::new(),
        }
    }

    /// Arms `timer` to deliver `Msg::TimerFired` after `delay` unless stopped
    /// first. Entries whose timer already fired or was stopped are pruned
    /// here, so the map tracks live subscriptions only.
    pub fn schedule(&mut self, timer: Timer, delay: Duration) {
        self.active.retain(|_, subscription| !subscription.is_settled());
        if let Some(existing) = self.active.remove(&timer) {
            existing.stop();
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        let settled = Arc::new(AtomicBool::new(false));
        let subscription = Subscription {
            cancelled: cancelled.clone(),
            settled: settled.clone(),
        };
        let msg_tx = self.msg_tx.clone();
        let fired = timer.clone();
        thread::spawn(move || {
            let mut remaining = delay;
            while remaining > Duration::ZERO {
                if cancelled.load(Ordering::Relaxed) {
                    settled.store(true, Ordering::Relaxed);
                    return;
                }
                let nap = remaining.min(SLEEP_SLICE);
                thread::sleep(nap);
                remaining = remaining.saturating_sub(nap);
            }
            // Settle before sending so delivery implies the entry is dead.
            settled.store(true, Ordering::Relaxed);
            if !cancelled.load(Ordering::Relaxed) {
                let _ = msg_tx.send(Msg::TimerFired(fired));
            }
        });

        self.active.insert(timer, subscription);
    }

    /// Stops every outstanding subscription. Used on teardown so no timer
    /// outlives the page.
    pub fn stop_all(&mut self) {
        for (_, subscription) in self.active.drain() {
            subscription.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use subtitler_core::Timer;

    #[test]
    fn armed_timer_fires() {
        let (tx, rx) = mpsc::channel();
        let mut bank = TimerBank::new(tx);
        bank.schedule(Timer::ReloadGrace, Duration::from_millis(10));

        let msg = rx.recv_timeout(Duration::from_secs(1)).expect("fires");
        assert_eq!(msg, Msg::TimerFired(Timer::ReloadGrace));
    }

    #[test]
    fn stopped_timer_stays_silent() {
        let (tx, rx) = mpsc::channel();
        let mut bank = TimerBank::new(tx);
        bank.schedule(Timer::AutoRefresh, Duration::from_millis(50));
        bank.stop_all();

        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn fired_subscriptions_are_pruned_on_the_next_schedule() {
        let (tx, rx) = mpsc::channel();
        let mut bank = TimerBank::new(tx);
        bank.schedule(
            Timer::AlertDismiss { alert_id: 1 },
            Duration::from_millis(10),
        );
        bank.schedule(
            Timer::AlertDismiss { alert_id: 2 },
            Duration::from_millis(10),
        );
        rx.recv_timeout(Duration::from_secs(1)).expect("first fires");
        rx.recv_timeout(Duration::from_secs(1)).expect("second fires");

        // Arming another timer sweeps the two dead entries.
        bank.schedule(Timer::AutoRefresh, Duration::from_secs(60));
        assert_eq!(bank.active.len(), 1);
        assert!(bank.active.contains_key(&Timer::AutoRefresh));
        bank.stop_all();
    }

    #[test]
    fn rearming_replaces_the_outstanding_subscription() {
        let (tx, rx) = mpsc::channel();
        let mut bank = TimerBank::new(tx);
        bank.schedule(Timer::ReloadGrace, Duration::from_secs(60));
        bank.schedule(Timer::ReloadGrace, Duration::from_millis(10));

        let msg = rx.recv_timeout(Duration::from_secs(1)).expect("fires");
        assert_eq!(msg, Msg::TimerFired(Timer::ReloadGrace));
        // The long subscription was stopped; nothing else arrives.
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }
}
