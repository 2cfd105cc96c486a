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

// [START storage_move_file]
use super::rewrite_until_done;
use crate::bucket_name;
use anyhow::Context;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;

/// Moves an object, possibly to a different bucket.
///
/// Copies the source generation to the destination, then deletes exactly
/// that generation. If the source changed in between, the delete fails and
/// both objects remain.
pub async fn sample(
    client: &StorageControl,
    source_bucket_id: &str,
    source_object: &str,
    destination_bucket_id: &str,
    destination_object: &str,
) -> anyhow::Result<Object> {
    let source = client
        .get_object()
        .set_bucket(bucket_name(source_bucket_id))
        .set_object(source_object)
        .send()
        .await?;
    let builder = client
        .rewrite_object()
        .set_source_bucket(bucket_name(source_bucket_id))
        .set_source_object(source_object)
        .set_source_generation(source.generation)
        .set_destination_bucket(bucket_name(destination_bucket_id))
        .set_destination_name(destination_object)
        .set_if_generation_match(0);
    let moved = rewrite_until_done(builder).await?;
    client
        .delete_object()
        .set_bucket(bucket_name(source_bucket_id))
        .set_object(source_object)
        .set_if_generation_match(source.generation)
        .send()
        .await
        .with_context(|| format!("cannot delete {source_object} after copying it"))?;
    println!(
        "Moved {source_object} in bucket {source_bucket_id} to {destination_object} in bucket {destination_bucket_id}"
    );
    Ok(moved)
}
// [END storage_move_file]
