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

// [START storage_make_public]
use crate::acl::{ALL_USERS, READER, with_acl_entry};
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;
use google_cloud_wkt::FieldMask;

/// Grants read access on the object to anyone on the internet.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    object_name: &str,
) -> anyhow::Result<Object> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket_id))
        .set_object(object_name)
        .send()
        .await?;
    let metageneration = object.metageneration;
    let acl = with_acl_entry(object.acl.clone(), ALL_USERS, READER);
    let updated = client
        .update_object()
        .set_object(object.set_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["acl"]))
        .send()
        .await?;
    println!("{object_name} in bucket {bucket_id} is now publicly readable");
    Ok(updated)
}
// [END storage_make_public]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_ID, MockStorageControl, control};
    use google_cloud_gax::response::Response;
    use google_cloud_storage::model::ObjectAccessControl;

    #[tokio::test]
    async fn all_users() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_object().return_once(|_, _| {
            Ok(Response::from(
                Object::new().set_metageneration(3).set_acl([
                    ObjectAccessControl::new()
                        .set_entity("project-owners-123")
                        .set_role("OWNER"),
                ]),
            ))
        });
        mock.expect_update_object()
            .withf(|r, _| {
                let acl = r
                    .object
                    .as_ref()
                    .map(|o| {
                        o.acl
                            .iter()
                            .map(|e| (e.entity.as_str(), e.role.as_str()))
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default();
                r.if_metageneration_match == Some(3)
                    && acl == [("project-owners-123", "OWNER"), ("allUsers", "READER")]
            })
            .return_once(|r, _| Ok(Response::from(r.object.unwrap_or_default())));
        let client = control(mock);

        let got = sample(&client, BUCKET_ID, "logo.png").await?;
        assert_eq!(got.acl.len(), 2);
        Ok(())
    }
}
