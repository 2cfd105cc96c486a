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

//! Random resource ids for integration tests.
//!
//! All ids start with [PREFIX] so cleanup jobs can find resources leaked by
//! failed test runs.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

pub const PREFIX: &str = "rust-sdk-testing-";

const BUCKET_ID_LENGTH: usize = 63;

// Pub/Sub accepts up to 255 characters, keep the names readable.
const TOPIC_ID_LENGTH: usize = 48;

// Transcoder templates and DLP triggers accept up to 63 and 100 characters.
const TEMPLATE_ID_LENGTH: usize = 48;
const TRIGGER_ID_LENGTH: usize = 48;

pub fn random_bucket_id() -> String {
    random_id(BUCKET_ID_LENGTH)
}

pub fn random_topic_id() -> String {
    random_id(TOPIC_ID_LENGTH)
}

pub fn random_subscription_id() -> String {
    random_id(TOPIC_ID_LENGTH)
}

pub fn random_job_template_id() -> String {
    random_id(TEMPLATE_ID_LENGTH)
}

pub fn random_trigger_id() -> String {
    random_id(TRIGGER_ID_LENGTH)
}

fn random_id(length: usize) -> String {
    let id = LowercaseAlphanumeric.random_string(length - PREFIX.len());
    format!("{PREFIX}{id}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}
