// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Waits for a job by polling.
//!
//! This is the simplest way to learn when a job completes. Applications
//! running many jobs should prefer Pub/Sub notifications, see
//! [crate::jobs::create_job_with_pubsub_notification].

use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::Job;
use google_cloud_video_transcoder_v1::model::job::ProcessingState;
use std::time::Duration;

/// The job did not reach a terminal state before the deadline.
#[derive(Debug, thiserror::Error)]
#[error("job {job} still in state {state} after {waited:?}")]
pub struct PollTimeout {
    pub job: String,
    pub state: ProcessingState,
    pub waited: Duration,
}

/// Polls `job_name` every `poll_period` until it succeeds or fails.
///
/// A failed job is returned as `Ok`, inspect `job.state` and `job.error`.
/// Returns a [PollTimeout] error if the job is still pending or running
/// after `timeout`.
pub async fn wait_for_job_state(
    client: &TranscoderService,
    job_name: &str,
    timeout: Duration,
    poll_period: Duration,
) -> anyhow::Result<Job> {
    let start = tokio::time::Instant::now();
    let deadline = start + timeout;
    loop {
        let job = client.get_job().set_name(job_name).send().await?;
        if is_terminal(&job.state) {
            tracing::info!(job = job_name, state = %job.state, "job completed");
            return Ok(job);
        }
        if tokio::time::Instant::now() + poll_period > deadline {
            return Err(PollTimeout {
                job: job_name.to_string(),
                state: job.state,
                waited: start.elapsed(),
            }
            .into());
        }
        tracing::debug!(job = job_name, state = %job.state, "waiting {poll_period:?}");
        tokio::time::sleep(poll_period).await;
    }
}

fn is_terminal(state: &ProcessingState) -> bool {
    matches!(state, ProcessingState::Succeeded | ProcessingState::Failed)
}
