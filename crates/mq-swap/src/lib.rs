//! # mq-swap
//!
//! Background scheduler for the daily midnight swap.
//!
//! Computes "today" and the next fire time in the gym's configured IANA time
//! zone, sleeps until then, and runs the swap on `MarqueeService`. A failed
//! run logs and waits for the next fire; the loop never dies on a swap error.

use std::sync::Arc;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tokio::task::JoinHandle;

use mq_config::SwapConfig;
use mq_db::error::DatabaseError;
use mq_db::repos::swap::SwapOutcome;
use mq_db::service::MarqueeService;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid swap time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Owns the daily swap loop for one service instance.
pub struct SwapScheduler {
    service: Arc<MarqueeService>,
    config: SwapConfig,
}

impl SwapScheduler {
    #[must_use]
    pub fn new(service: Arc<MarqueeService>, config: SwapConfig) -> Self {
        Self { service, config }
    }

    fn zone(&self) -> Result<Tz, SwapError> {
        self.config
            .timezone
            .parse()
            .map_err(|_| SwapError::UnknownTimezone(self.config.timezone.clone()))
    }

    /// Today's date in the gym's time zone.
    ///
    /// # Errors
    ///
    /// Returns `SwapError::UnknownTimezone` if the configured zone is invalid.
    pub fn today(&self) -> Result<NaiveDate, SwapError> {
        Ok(Utc::now().with_timezone(&self.zone()?).date_naive())
    }

    /// The next UTC instant at which the swap should fire, strictly after
    /// `now`.
    ///
    /// A DST gap at the configured wall-clock time shifts that day's fire an
    /// hour later; an ambiguous time fires at the earlier instant.
    ///
    /// # Errors
    ///
    /// Returns `SwapError` if the zone is unknown or the configured
    /// hour/minute is out of range.
    pub fn next_fire_time(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, SwapError> {
        let zone = self.zone()?;
        let local_now = now.with_timezone(&zone);

        let mut date = local_now.date_naive();
        // At most two iterations outside of DST edge cases
        for _ in 0..4 {
            if let Some(fire) = self.fire_time_on(zone, date)? {
                if fire > local_now {
                    return Ok(fire.with_timezone(&Utc));
                }
            }
            date = date.succ_opt().ok_or(SwapError::InvalidTime {
                hour: self.config.hour,
                minute: self.config.minute,
            })?;
        }
        Err(SwapError::InvalidTime {
            hour: self.config.hour,
            minute: self.config.minute,
        })
    }

    fn fire_time_on(
        &self,
        zone: Tz,
        date: NaiveDate,
    ) -> Result<Option<DateTime<Tz>>, SwapError> {
        let naive = date
            .and_hms_opt(u32::from(self.config.hour), u32::from(self.config.minute), 0)
            .ok_or(SwapError::InvalidTime {
                hour: self.config.hour,
                minute: self.config.minute,
            })?;
        Ok(match zone.from_local_datetime(&naive) {
            LocalResult::Single(fire) => Some(fire),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => zone
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest(),
        })
    }

    /// Run one swap for today, immediately.
    ///
    /// # Errors
    ///
    /// Returns `SwapError` if the zone is invalid or the swap fails.
    pub async fn run_once(&self) -> Result<SwapOutcome, SwapError> {
        let today = self.today()?;
        Ok(self.service.run_daily_swap(today).await?)
    }

    /// The swap loop: sleep until the next fire time, swap, repeat.
    pub async fn run(self) {
        loop {
            let next = match self.next_fire_time(Utc::now()) {
                Ok(next) => next,
                Err(e) => {
                    tracing::error!("swap scheduler cannot compute fire time, stopping: {e}");
                    return;
                }
            };
            let wait = (next - Utc::now()).to_std().unwrap_or_default();
            tracing::info!(next = %next, "swap scheduler sleeping");
            tokio::time::sleep(wait).await;

            match self.run_once().await {
                Ok(outcome) => {
                    tracing::info!(date = %outcome.date, activated = outcome.activated, "swap fired");
                }
                Err(e) => {
                    tracing::error!("swap run failed, will retry at next fire: {e}");
                }
            }
        }
    }

    /// Spawn the loop as an owned background task.
    #[must_use]
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mq_db::layers::LayerWriter;
    use pretty_assertions::assert_eq;

    async fn scheduler(config: SwapConfig) -> SwapScheduler {
        let service = MarqueeService::new_local(":memory:", LayerWriter::disabled())
            .await
            .unwrap();
        SwapScheduler::new(Arc::new(service), config)
    }

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn next_fire_is_upcoming_local_midnight() {
        let sched = scheduler(SwapConfig::default()).await;

        // 07:00 in Chicago (CDT, UTC-5): next midnight is 05:00Z tomorrow
        let next = sched.next_fire_time(utc("2026-06-01T12:00:00Z")).unwrap();
        assert_eq!(next, utc("2026-06-02T05:00:00Z"));
    }

    #[tokio::test]
    async fn next_fire_same_day_when_time_still_ahead() {
        let config = SwapConfig {
            hour: 9,
            ..Default::default()
        };
        let sched = scheduler(config).await;

        // 07:00 local, fire at 09:00 local the same day
        let next = sched.next_fire_time(utc("2026-06-01T12:00:00Z")).unwrap();
        assert_eq!(next, utc("2026-06-01T14:00:00Z"));
    }

    #[tokio::test]
    async fn next_fire_is_strictly_after_now() {
        let sched = scheduler(SwapConfig::default()).await;

        // Exactly at local midnight: fire next midnight, not now
        let now = utc("2026-06-01T05:00:00Z");
        let next = sched.next_fire_time(now).unwrap();
        assert!(next > now);
        assert_eq!(next, utc("2026-06-02T05:00:00Z"));
    }

    #[tokio::test]
    async fn winter_offset_respected() {
        let sched = scheduler(SwapConfig::default()).await;

        // CST is UTC-6
        let next = sched.next_fire_time(utc("2026-01-15T12:00:00Z")).unwrap();
        assert_eq!(next, utc("2026-01-16T06:00:00Z"));
    }

    #[tokio::test]
    async fn unknown_timezone_is_an_error() {
        let config = SwapConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        let sched = scheduler(config).await;
        assert!(matches!(
            sched.next_fire_time(Utc::now()),
            Err(SwapError::UnknownTimezone(_))
        ));
        assert!(matches!(sched.today(), Err(SwapError::UnknownTimezone(_))));
    }

    #[tokio::test]
    async fn run_once_swaps_today() {
        let sched = scheduler(SwapConfig::default()).await;
        let outcome = sched.run_once().await.unwrap();
        assert_eq!(outcome.activated, 0);
    }
}
