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

// [START storage_download_file]
use crate::bucket_name;
use google_cloud_storage::client::Storage;

/// Downloads the full contents of an object into memory.
pub async fn sample(
    client: &Storage,
    bucket_id: &str,
    object_name: &str,
) -> anyhow::Result<bytes::Bytes> {
    let mut reader = client
        .read_object(bucket_name(bucket_id), object_name)
        .send()
        .await?;

    let mut contents = Vec::new();
    while let Some(data) = reader.next().await.transpose()? {
        contents.extend_from_slice(&data);
    }
    println!(
        "Downloaded {} bytes of {object_name} in bucket {bucket_id}",
        contents.len()
    );
    Ok(bytes::Bytes::from(contents))
}
// [END storage_download_file]
