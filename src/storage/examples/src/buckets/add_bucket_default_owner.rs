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

// [START storage_add_bucket_default_owner]
use crate::acl::{OWNER, user_entity, with_acl_entry};
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Bucket;
use google_cloud_wkt::FieldMask;

/// Makes the user an owner of every object created in the bucket from now on.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    user_email: &str,
) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let acl = with_acl_entry(
        bucket.default_object_acl.clone(),
        &user_entity(user_email),
        OWNER,
    );
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_default_object_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["default_object_acl"]))
        .send()
        .await?;
    println!("Added user {user_email} as a default owner on bucket {bucket_id}");
    Ok(bucket)
}
// [END storage_add_bucket_default_owner]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_ID, MockStorageControl, control};
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn default_owner() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket()
            .return_once(|_, _| Ok(Response::from(Bucket::new().set_metageneration(2))));
        mock.expect_update_bucket()
            .withf(|r, _| {
                r.update_mask
                    .as_ref()
                    .is_some_and(|m| m.paths == ["default_object_acl"])
                    && r.bucket.as_ref().is_some_and(|b| {
                        b.acl.is_empty()
                            && b.default_object_acl.len() == 1
                            && b.default_object_acl[0].entity == "user-alice@example.com"
                    })
            })
            .return_once(|r, _| Ok(Response::from(r.bucket.unwrap_or_default())));
        let client = control(mock);

        let got = sample(&client, BUCKET_ID, "alice@example.com").await?;
        assert_eq!(got.default_object_acl.len(), 1);
        Ok(())
    }
}
