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


//! In-memory notification sources for tests.
//!
//! [FakeSource] delivers queued messages in order and records how each one
//! was settled. Once the queue is empty it behaves like an idle
//! subscription, unless it was [closed](FakeSource::closed).

use crate::matcher::DLP_JOB_NAME_ATTRIBUTE;
use crate::source::{Acknowledge, NotificationSource};
use google_cloud_pubsub::model::Message as PubsubMessage;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// How a message delivered by a [FakeSource] was settled.
#[derive(Clone, Debug, PartialEq)]
pub enum Settled {
    Ack(String),
    Nack(String),
}

type Log = Arc<Mutex<Vec<Settled>>>;

#[derive(Debug, Default)]
pub struct FakeSource {
    pending: VecDeque<google_cloud_gax::Result<PubsubMessage>>,
    closed: bool,
    log: Log,
}

impl FakeSource {
    pub fn new<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = PubsubMessage>,
    {
        Self {
            pending: messages.into_iter().map(Ok).collect(),
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: PubsubMessage) -> Self {
        self.pending.push_back(Ok(message));
        self
    }

    pub fn with_error(mut self, error: google_cloud_gax::error::Error) -> Self {
        self.pending.push_back(Err(error));
        self
    }

    /// Ends the stream after the queued messages.
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    /// The messages settled so far, by message id.
    pub fn settled(&self) -> Vec<Settled> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct FakeHandler {
    id: String,
    log: Log,
}

impl FakeHandler {
    fn settle(self, settled: fn(String) -> Settled) {
        if let Ok(mut log) = self.log.lock() {
            log.push(settled(self.id));
        }
    }
}

impl Acknowledge for FakeHandler {
    fn ack(self) {
        self.settle(Settled::Ack);
    }
    fn nack(self) {
        self.settle(Settled::Nack);
    }
}

impl NotificationSource for FakeSource {
    type Handler = FakeHandler;

    async fn receive(&mut self) -> Option<google_cloud_gax::Result<(PubsubMessage, FakeHandler)>> {
        match self.pending.pop_front() {
            Some(item) => Some(item.map(|m| {
                let handler = FakeHandler {
                    id: m.message_id.clone(),
                    log: self.log.clone(),
                };
                (m, handler)
            })),
            None if self.closed => None,
            None => std::future::pending().await,
        }
    }
}

/// A DLP notification, identified by its `DlpJobName` attribute.
pub fn dlp_message(id: &str, job_name: &str) -> PubsubMessage {
    PubsubMessage::new()
        .set_message_id(id)
        .set_attributes([(DLP_JOB_NAME_ATTRIBUTE, job_name)])
}

/// A Transcoder notification, carrying the job as a JSON body.
pub fn transcoder_message(id: &str, body: &str) -> PubsubMessage {
    PubsubMessage::new()
        .set_message_id(id)
        .set_data(body.to_string())
}
