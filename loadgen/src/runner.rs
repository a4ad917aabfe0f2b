use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;

use crate::config::LoadConfig;
use crate::sampler::RandomSampler;
use crate::task::ConversationTask;

/// Counters collected over one run. Printed once at the end; nothing is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub total_requests: usize,
    pub status_counts: HashMap<u16, usize>,
    pub transport_errors: usize,
    pub elapsed: Duration,
}

/// Simulates concurrent users, each invoking the conversation task in a loop
/// with a uniformly random pause between requests, until the run deadline.
pub struct LoadRunner {
    task: ConversationTask,
    load: LoadConfig,
}

impl LoadRunner {
    pub fn new(task: ConversationTask, load: LoadConfig) -> Self {
        Self { task, load }
    }

    pub async fn run(&self) -> RunSummary {
        let summary = Arc::new(Mutex::new(RunSummary::default()));
        let started = Instant::now();
        let deadline = started + self.load.duration;

        log::info!(
            "starting {} simulated users for {:?}",
            self.load.users,
            self.load.duration
        );

        let mut handles = Vec::with_capacity(self.load.users);
        for user in 0..self.load.users {
            let task = self.task.clone();
            let summary = summary.clone();
            let wait_min = self.load.wait_min_secs;
            let wait_max = self.load.wait_max_secs;

            handles.push(tokio::spawn(async move {
                // Each user owns its sampler; nothing is shared between users
                // but the summary counters.
                let mut sampler = RandomSampler::new();

                while Instant::now() < deadline {
                    match task.run_once(&mut sampler).await {
                        Ok(outcome) => {
                            let mut summary = summary.lock().unwrap();
                            summary.total_requests += 1;
                            *summary.status_counts.entry(outcome.status()).or_insert(0) += 1;
                        }
                        Err(e) => {
                            log::warn!("user {}: request failed: {}", user, e);
                            let mut summary = summary.lock().unwrap();
                            summary.total_requests += 1;
                            summary.transport_errors += 1;
                        }
                    }

                    let pause = rand::thread_rng().gen_range(wait_min..=wait_max);
                    tokio::time::sleep(Duration::from_secs_f64(pause)).await;
                }
            }));
        }

        for handle in handles {
            let _ = handle.await;
        }

        let mut summary = summary.lock().unwrap().clone();
        summary.elapsed = started.elapsed();
        log::info!(
            "run finished: {} requests, {} transport errors",
            summary.total_requests,
            summary.transport_errors
        );
        summary
    }
}
