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

// [START storage_copy_file]
use super::rewrite_until_done;
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;

/// Copies an object, possibly to a different bucket.
///
/// The copy fails if the destination object already exists.
pub async fn sample(
    client: &StorageControl,
    source_bucket_id: &str,
    source_object: &str,
    destination_bucket_id: &str,
    destination_object: &str,
) -> anyhow::Result<Object> {
    let builder = client
        .rewrite_object()
        .set_source_bucket(bucket_name(source_bucket_id))
        .set_source_object(source_object)
        .set_destination_bucket(bucket_name(destination_bucket_id))
        .set_destination_name(destination_object)
        .set_if_generation_match(0);
    let copied = rewrite_until_done(builder).await?;
    println!(
        "Copied {source_object} in bucket {source_bucket_id} to {destination_object} in bucket {destination_bucket_id}"
    );
    Ok(copied)
}
// [END storage_copy_file]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_ID, BUCKET_NAME, MockStorageControl, control};
    use google_cloud_gax::response::Response;
    use google_cloud_storage::model::RewriteResponse;

    #[tokio::test]
    async fn copy() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_rewrite_object()
            .withf(|r, _| {
                r.source_bucket == BUCKET_NAME
                    && r.source_object == "original"
                    && r.destination_bucket == "projects/_/buckets/backup"
                    && r.destination_name == "original-copy"
                    && r.if_generation_match == Some(0)
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    RewriteResponse::new()
                        .set_done(true)
                        .set_resource(Object::new().set_name("original-copy")),
                ))
            });
        let client = control(mock);

        let got = sample(&client, BUCKET_ID, "original", "backup", "original-copy").await?;
        assert_eq!(got.name, "original-copy");
        Ok(())
    }
}
