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

//! Samples for the Cloud Storage client library.
//!
//! Samples that read or write object data take a [Storage] client. Samples
//! that only touch metadata (buckets, ACLs, holds, rewrites) take a
//! [StorageControl] client.
//!
//! [Storage]: google_cloud_storage::client::Storage
//! [StorageControl]: google_cloud_storage::client::StorageControl

pub mod acl;
pub mod buckets;
pub mod objects;

/// The resource name for a bucket.
pub fn bucket_name(bucket_id: &str) -> String {
    format!("projects/_/buckets/{bucket_id}")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(bucket_name("my-bucket"), "projects/_/buckets/my-bucket");
    }
}
