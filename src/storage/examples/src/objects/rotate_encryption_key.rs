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

// [START storage_rotate_encryption_key]
use super::rewrite_until_done;
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::{CommonObjectRequestParams, Object};
use google_cloud_storage::model_ext::KeyAes256;

/// Re-encrypts an object, in place, with a new customer-supplied key.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    object_name: &str,
    old_key: KeyAes256,
    new_key: KeyAes256,
) -> anyhow::Result<Object> {
    let old: CommonObjectRequestParams = old_key.into();
    let builder = client
        .rewrite_object()
        .set_source_bucket(bucket_name(bucket_id))
        .set_source_object(object_name)
        .set_copy_source_encryption_algorithm(old.encryption_algorithm)
        .set_copy_source_encryption_key_bytes(old.encryption_key_bytes)
        .set_copy_source_encryption_key_sha256_bytes(old.encryption_key_sha256_bytes)
        .set_destination_bucket(bucket_name(bucket_id))
        .set_destination_name(object_name)
        .set_common_object_request_params(new_key);
    let rotated = rewrite_until_done(builder).await?;
    println!("Rotated the encryption key for {object_name} in bucket {bucket_id}");
    Ok(rotated)
}
// [END storage_rotate_encryption_key]
