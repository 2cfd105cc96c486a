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

//! Learn about the completion of long-running jobs through Pub/Sub.
//!
//! Services such as Cloud DLP and the Transcoder API publish a message to a
//! Pub/Sub topic when a job completes. This crate provisions the topic and
//! subscription used for these notifications, and waits (with a deadline)
//! for the one notification about a given job:
//!
//! ```no_run
//! # use google_cloud_job_notifications::*;
//! # use google_cloud_pubsub::client::{Subscriber, SubscriptionAdmin, TopicAdmin};
//! # async fn sample(project_id: &str, job_name: &str) -> anyhow::Result<()> {
//! let topics = TopicAdmin::builder().build().await?;
//! let subscriptions = SubscriptionAdmin::builder().build().await?;
//! let channel = ensure_channel(&topics, &subscriptions, project_id, "dlp-jobs", "dlp-jobs-sub").await?;
//!
//! // ... create a job that publishes to `channel.topic` ...
//!
//! let subscriber = Subscriber::builder().build().await?;
//! let mut session = subscribe(&subscriber, &channel);
//! let matcher = AttributeMatcher::dlp_job(job_name);
//! match wait_for_job(&mut session, &matcher, std::time::Duration::from_secs(600)).await {
//!     Ok(_) => println!("job {job_name} completed"),
//!     Err(e) if e.is_timeout() => println!("job {job_name} status is unknown: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(()) }
//! ```

pub mod channel;
mod error;
pub mod matcher;
pub mod source;
#[cfg(any(test, feature = "_internal-testing"))]
#[doc(hidden)]
pub mod testing;
mod wait;

pub use channel::{Channel, ensure_channel, notification_channel, subscribe};
pub use error::{Error, Result};
pub use matcher::{AttributeMatcher, JobMatcher, TranscoderJobMatcher, TranscoderNotification};
pub use source::{Acknowledge, NotificationSource};
pub use wait::wait_for_job;
