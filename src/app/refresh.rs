//! Simulated refresh timing
//!
//! A refresh flips the flag on immediately and a timer thread flips it off
//! after the configured delay. Each cycle carries a generation id; a timer
//! from a superseded cycle can never clear a newer cycle's flag.

use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, info};

pub struct RefreshController {
    refreshing: bool,
    generation: u64,
    delay: Duration,
    tx: Sender<u64>,
    rx: Receiver<u64>,
}

impl RefreshController {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = channel();
        Self {
            refreshing: false,
            generation: 0,
            delay,
            tx,
            rx,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Begin a refresh cycle. No-op while one is already running.
    pub fn start(&mut self, ctx: &egui::Context) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;
        self.generation += 1;

        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        info!(generation, delay_ms = delay.as_millis() as u64, "Refresh started");
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            tx.send(generation).ok();
            ctx.request_repaint();
        });
    }

    /// Drain timer completions. Called once per frame.
    pub fn poll(&mut self) {
        while let Ok(generation) = self.rx.try_recv() {
            self.complete(generation);
        }
    }

    fn complete(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Stale refresh timer ignored");
            return;
        }
        if self.refreshing {
            self.refreshing = false;
            info!(generation, "Refresh finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_sets_flag_immediately() {
        let ctx = egui::Context::default();
        let mut refresh = RefreshController::new(Duration::from_secs(60));
        assert!(!refresh.is_refreshing());
        refresh.start(&ctx);
        assert!(refresh.is_refreshing());
        // Timer far in the future: polling now must not clear the flag.
        refresh.poll();
        assert!(refresh.is_refreshing());
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let ctx = egui::Context::default();
        let mut refresh = RefreshController::new(Duration::from_secs(60));
        refresh.start(&ctx);
        let generation = refresh.generation;
        refresh.start(&ctx);
        assert_eq!(refresh.generation, generation);
    }

    #[test]
    fn stale_generation_never_clears_the_flag() {
        let ctx = egui::Context::default();
        let mut refresh = RefreshController::new(Duration::from_secs(60));
        refresh.start(&ctx);
        refresh.complete(refresh.generation - 1);
        assert!(refresh.is_refreshing());
        refresh.complete(refresh.generation + 1);
        assert!(refresh.is_refreshing());
        refresh.complete(refresh.generation);
        assert!(!refresh.is_refreshing());
    }

    #[test]
    fn flag_clears_after_the_delay_elapses() {
        let ctx = egui::Context::default();
        let mut refresh = RefreshController::new(Duration::from_millis(20));
        refresh.start(&ctx);
        assert!(refresh.is_refreshing());

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while refresh.is_refreshing() {
            assert!(std::time::Instant::now() < deadline, "refresh never completed");
            std::thread::sleep(Duration::from_millis(5));
            refresh.poll();
        }
        // Exactly one transition: still false on further polls.
        refresh.poll();
        assert!(!refresh.is_refreshing());
    }
}
