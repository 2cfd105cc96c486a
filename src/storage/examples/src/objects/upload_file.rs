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

// [START storage_upload_file]
use crate::bucket_name;
use google_cloud_storage::client::Storage;
use google_cloud_storage::model::Object;

/// Uploads `contents` to a new object.
///
/// The upload fails if the object already exists.
pub async fn sample(
    client: &Storage,
    bucket_id: &str,
    object_name: &str,
    contents: bytes::Bytes,
) -> anyhow::Result<Object> {
    let object = client
        .write_object(bucket_name(bucket_id), object_name, contents)
        .set_if_generation_match(0)
        .send_buffered()
        .await?;
    println!(
        "Uploaded {} bytes to {object_name} in bucket {bucket_id}, generation {}",
        object.size, object.generation
    );
    Ok(object)
}
// [END storage_upload_file]
