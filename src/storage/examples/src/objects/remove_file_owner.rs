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

// [START storage_remove_file_owner]
use crate::acl::{user_entity, without_acl_entry};
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_wkt::FieldMask;

/// Removes the user's entries from the object ACL.
///
/// Returns `false`, without updating the object, if the user had no entry.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    object_name: &str,
    user_email: &str,
) -> anyhow::Result<bool> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket_id))
        .set_object(object_name)
        .send()
        .await?;
    let entity = user_entity(user_email);
    let before = object.acl.len();
    let acl = without_acl_entry(object.acl.clone(), &entity);
    if acl.len() == before {
        println!("User {user_email} has no role on {object_name} in bucket {bucket_id}");
        return Ok(false);
    }
    let metageneration = object.metageneration;
    client
        .update_object()
        .set_object(object.set_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["acl"]))
        .send()
        .await?;
    println!("Removed user {user_email} from the ACL of {object_name} in bucket {bucket_id}");
    Ok(true)
}
// [END storage_remove_file_owner]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_ID, MockStorageControl, control};
    use google_cloud_gax::response::Response;
    use google_cloud_storage::model::{Object, ObjectAccessControl};

    fn object() -> Object {
        Object::new().set_metageneration(2).set_acl([
            ObjectAccessControl::new()
                .set_entity("user-alice@example.com")
                .set_role("OWNER"),
            ObjectAccessControl::new()
                .set_entity("project-owners-123")
                .set_role("OWNER"),
        ])
    }

    #[tokio::test]
    async fn removed() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_object()
            .return_once(|_, _| Ok(Response::from(object())));
        mock.expect_update_object()
            .withf(|r, _| {
                let entities = r
                    .object
                    .as_ref()
                    .map(|o| o.acl.iter().map(|e| e.entity.as_str()).collect::<Vec<_>>())
                    .unwrap_or_default();
                r.if_metageneration_match == Some(2) && entities == ["project-owners-123"]
            })
            .return_once(|r, _| Ok(Response::from(r.object.unwrap_or_default())));
        let client = control(mock);

        let got = sample(&client, BUCKET_ID, "notes.txt", "alice@example.com").await?;
        assert!(got);
        Ok(())
    }

    #[tokio::test]
    async fn missing_user() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_object()
            .return_once(|_, _| Ok(Response::from(object())));
        mock.expect_update_object().never();
        let client = control(mock);

        let got = sample(&client, BUCKET_ID, "notes.txt", "bob@example.com").await?;
        assert!(!got);
        Ok(())
    }
}
