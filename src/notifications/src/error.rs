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

use std::time::Duration;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while provisioning a notification channel or waiting on it.
///
/// Applications should distinguish [Error::Timeout] from the other variants:
/// a timeout says nothing about the job itself, which may still be running,
/// may have completed, or may have failed. The other variants indicate the
/// notification channel is unusable.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The topic or subscription could not be created.
    #[error("cannot create notification resource {name}: {source}")]
    Setup {
        name: String,
        #[source]
        source: google_cloud_gax::error::Error,
    },

    /// The Pub/Sub clients could not be created.
    #[error("cannot create the Pub/Sub clients: {0}")]
    Client(#[source] google_cloud_gax::client_builder::Error),

    /// The subscription stream returned an error.
    #[error("error receiving notifications: {0}")]
    Receive(#[source] google_cloud_gax::error::Error),

    /// The subscription stream ended before a matching notification arrived.
    #[error("the notification stream closed before {job} reported completion")]
    StreamClosed { job: String },

    /// No matching notification arrived before the deadline.
    #[error("timed out after {waited:?} waiting for a notification about {job}")]
    Timeout { job: String, waited: Duration },

    /// The notification payload could not be decoded.
    #[error("cannot decode notification payload: {0}")]
    Payload(#[source] serde_json::Error),
}

impl Error {
    /// Returns true if the wait ended because the deadline expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns true if the error happened while creating the channel.
    pub fn is_setup(&self) -> bool {
        matches!(self, Self::Setup { .. } | Self::Client(_))
    }
}
