//! Drives a traveller along a resolved path in real time.
//!
//! A [`Voyage`] maps elapsed time onto a progress percentage; the
//! [`ProgressDriver`] ticks, samples the path through the tracking API and
//! publishes a [`Fix`] per tick until the voyage arrives or nobody listens.

use async_channel::Sender;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::{interval, Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::api::TrackingAPI;
use crate::entities::{Coordinates, Path, RouteKey};

#[derive(Debug, Clone, PartialEq)]
pub struct Voyage {
    pub id: Uuid,
    pub key: RouteKey,
    pub path: Path,
    pub duration: Duration,
}

impl Voyage {
    pub fn new(key: RouteKey, path: Path, duration: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            key,
            path,
            duration,
        }
    }

    /// Percentage of the voyage completed after `elapsed`; a zero duration
    /// arrives immediately.
    pub fn progress_after(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 100.0;
        }

        (elapsed.as_secs_f64() / self.duration.as_secs_f64() * 100.0).min(100.0)
    }
}

/// One published position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    pub voyage_id: Uuid,
    pub progress: f64,
    pub position: Coordinates,
    pub traveled: Path,
}

impl Fix {
    pub fn has_arrived(&self) -> bool {
        self.progress >= 100.0
    }
}

pub struct ProgressDriver {
    tick: Duration,
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
        }
    }
}

impl ProgressDriver {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    /// Publishes a fix on every tick, starting immediately. Returns the number
    /// of fixes sent; stops after the arrival fix or once the receiver is
    /// dropped.
    #[tracing::instrument(skip_all, fields(voyage = %voyage.id, key = %voyage.key))]
    pub async fn run<T>(&self, tracker: &T, voyage: &Voyage, fixes: Sender<Fix>) -> usize
    where
        T: TrackingAPI + ?Sized,
    {
        let started = Instant::now();
        let mut ticker = interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut sent = 0;
        loop {
            ticker.tick().await;

            let progress = voyage.progress_after(started.elapsed());
            let fix = Fix {
                voyage_id: voyage.id,
                progress,
                position: tracker.sample_at(&voyage.path, progress),
                traveled: tracker.prefix_up_to(&voyage.path, progress),
            };
            let arrived = fix.has_arrived();

            if fixes.send(fix).await.is_err() {
                tracing::debug!(sent, "fix receiver closed");
                break;
            }
            sent += 1;

            if arrived {
                tracing::info!(sent, "voyage arrived");
                break;
            }
        }

        sent
    }
}
