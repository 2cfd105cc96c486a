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

// [START storage_remove_bucket_owner]
use crate::acl::{user_entity, without_acl_entry};
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_wkt::FieldMask;

/// Removes the user's entries from the bucket ACL.
///
/// Returns `false`, without updating the bucket, if the user had no entry.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    user_email: &str,
) -> anyhow::Result<bool> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let before = bucket.acl.len();
    let acl = without_acl_entry(bucket.acl.clone(), &user_entity(user_email));
    if acl.len() == before {
        println!("User {user_email} has no role on bucket {bucket_id}");
        return Ok(false);
    }
    let metageneration = bucket.metageneration;
    client
        .update_bucket()
        .set_bucket(bucket.set_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["acl"]))
        .send()
        .await?;
    println!("Removed user {user_email} from the ACL of bucket {bucket_id}");
    Ok(true)
}
// [END storage_remove_bucket_owner]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_ID, MockStorageControl, control};
    use google_cloud_gax::response::Response;
    use google_cloud_storage::model::{Bucket, BucketAccessControl};

    fn bucket() -> Bucket {
        Bucket::new().set_metageneration(3).set_acl([
            BucketAccessControl::new()
                .set_entity("user-alice@example.com")
                .set_role("OWNER"),
            BucketAccessControl::new()
                .set_entity("project-editors-123")
                .set_role("OWNER"),
        ])
    }

    #[tokio::test]
    async fn removed() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket()
            .return_once(|_, _| Ok(Response::from(bucket())));
        mock.expect_update_bucket()
            .withf(|r, _| {
                r.if_metageneration_match == Some(3)
                    && r.bucket.as_ref().is_some_and(|b| {
                        b.acl.len() == 1 && b.acl[0].entity == "project-editors-123"
                    })
            })
            .return_once(|r, _| Ok(Response::from(r.bucket.unwrap_or_default())));
        let client = control(mock);

        assert!(sample(&client, BUCKET_ID, "alice@example.com").await?);
        Ok(())
    }

    #[tokio::test]
    async fn missing_user() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket()
            .return_once(|_, _| Ok(Response::from(bucket())));
        mock.expect_update_bucket().never();
        let client = control(mock);

        assert!(!sample(&client, BUCKET_ID, "bob@example.com").await?);
        Ok(())
    }
}
