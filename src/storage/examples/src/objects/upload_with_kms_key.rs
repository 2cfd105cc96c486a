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

// [START storage_upload_with_kms_key]
use crate::bucket_name;
use google_cloud_storage::client::Storage;
use google_cloud_storage::model::Object;

/// Uploads `contents` encrypted with a Cloud KMS key.
///
/// `kms_key` is the full key name, e.g.
/// `projects/my-project/locations/us/keyRings/my-ring/cryptoKeys/my-key`.
pub async fn sample(
    client: &Storage,
    bucket_id: &str,
    object_name: &str,
    contents: bytes::Bytes,
    kms_key: &str,
) -> anyhow::Result<Object> {
    let object = client
        .write_object(bucket_name(bucket_id), object_name, contents)
        .set_kms_key(kms_key)
        .send_buffered()
        .await?;
    println!(
        "Uploaded {object_name} to bucket {bucket_id} with key {}",
        object.kms_key
    );
    Ok(object)
}
// [END storage_upload_with_kms_key]
