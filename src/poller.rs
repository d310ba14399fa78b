use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time::sleep;

use crate::error::CycleError;
use crate::practicum::{HomeworkRecord, HomeworkSource};
use crate::status::parse_status;
use crate::telegram::{MessageSender, Notifier};
use crate::validate::{check_response, current_date};

/// Where the poller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// No fetch attempted yet.
    Idle,
    Polling,
}

/// What a single cycle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API returned no homework in the window.
    Empty,
    /// The first homework still has the last observed status.
    Unchanged,
    /// A status change was announced; `delivered` is false if the send failed.
    Notified { delivered: bool },
    /// The cycle failed and the error was reported to the chat (best effort).
    Failed { reported: bool },
}

/// Polls the homework API and announces status changes of the latest submission.
pub struct Poller<S, M> {
    source: S,
    notifier: Notifier<M>,
    retry_interval: Duration,
    state: PollState,
    /// Lower bound (unix seconds) for the next fetch.
    cursor: i64,
    /// `None` until the first status is seen.
    last_status: Option<String>,
}

impl<S: HomeworkSource, M: MessageSender> Poller<S, M> {
    pub fn new(source: S, notifier: Notifier<M>, retry_interval: Duration, cursor: i64) -> Self {
        Self {
            source,
            notifier,
            retry_interval,
            state: PollState::Idle,
            cursor,
            last_status: None,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    /// Fetch, validate, compare and (on change) announce. Errors are returned as is.
    pub async fn poll_once(&mut self) -> Result<CycleOutcome, CycleError> {
        self.state = PollState::Polling;

        let from_date = if self.cursor > 0 {
            self.cursor
        } else {
            Utc::now().timestamp()
        };
        let response = self.source.fetch(from_date).await?;

        if let Some(date) = current_date(&response) {
            self.cursor = date;
        }

        let homeworks = check_response(&response)?;
        let Some(first) = homeworks.first() else {
            tracing::info!(cursor = self.cursor, "task list is empty, has the project been pushed?");
            return Ok(CycleOutcome::Empty);
        };

        let homework = HomeworkRecord::from_value(first);
        if homework.status.is_some() && homework.status == self.last_status {
            tracing::debug!(status = ?homework.status, "review status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        // Record the new status before translating so an unknown status is
        // reported once, not on every cycle.
        if let Some(status) = &homework.status {
            tracing::info!(
                homework = ?homework.homework_name,
                from = ?self.last_status,
                to = %status,
                "review status changed"
            );
            self.last_status = Some(status.clone());
        }

        let message = parse_status(&homework)?;
        let delivered = self.notifier.notify(&message).await;
        Ok(CycleOutcome::Notified { delivered })
    }

    /// One full iteration: any error is logged and reported to the chat, never returned.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = format!("Сбой в работе программы: {e}");
                tracing::error!(error = %e, "poll cycle failed");
                let reported = self.notifier.notify(&message).await;
                CycleOutcome::Failed { reported }
            }
        }
    }

    /// Polls until `shutdown` turns true, pausing `retry_interval` after every cycle.
    ///
    /// The flag is checked before each cycle and raced against both the cycle
    /// itself and the pause, so a shutdown never waits out a full interval.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            interval_secs = self.retry_interval.as_secs(),
            cursor = self.cursor(),
            "polling started"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                Ok(_) = shutdown.wait_for(|stop| *stop) => break,
                outcome = self.run_cycle() => {
                    tracing::debug!(?outcome, cursor = self.cursor(), "cycle finished");
                }
            }

            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                Ok(_) = shutdown.wait_for(|stop| *stop) => break,
                () = sleep(self.retry_interval) => {}
            }
        }

        tracing::info!(
            state = ?self.state(),
            last_status = ?self.last_status(),
            cursor = self.cursor(),
            "polling stopped"
        );
    }
}
