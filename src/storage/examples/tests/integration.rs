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

#[cfg(all(test, feature = "run-integration-tests"))]
mod tests {
    use google_cloud_gax::error::{Error, rpc::Code};
    use google_cloud_gax::paginator::ItemPaginator;
    use google_cloud_storage::client::{Storage, StorageControl};
    use google_cloud_storage::model::Bucket;
    use google_cloud_test_utils::resource_names::random_bucket_id;
    use google_cloud_test_utils::runtime_config::{project_id, test_service_account};
    use google_cloud_test_utils::tracing::enable_tracing;
    use storage_samples::{bucket_name, buckets, objects};

    #[tokio::test]
    async fn object_samples() -> anyhow::Result<()> {
        let _guard = enable_tracing();
        let control = StorageControl::builder().build().await?;
        let client = Storage::builder().build().await?;
        let bucket_id = create_bucket(&control).await?;

        let result = run_object_samples(&control, &client, &bucket_id).await;
        let _ = cleanup_bucket(&control, &bucket_id).await;
        result
    }

    #[tokio::test]
    async fn bucket_samples() -> anyhow::Result<()> {
        let _guard = enable_tracing();
        let control = StorageControl::builder().build().await?;
        let bucket_id = create_bucket(&control).await?;

        let result = run_bucket_samples(&control, &bucket_id).await;
        let _ = cleanup_bucket(&control, &bucket_id).await;
        result
    }

    async fn run_object_samples(
        control: &StorageControl,
        client: &Storage,
        bucket_id: &str,
    ) -> anyhow::Result<()> {
        const CONTENTS: &str = "how vexingly quick daft zebras jump\n";
        objects::upload_file::sample(client, bucket_id, "logs/a.txt", CONTENTS.into()).await?;
        let again =
            objects::upload_file::sample(client, bucket_id, "logs/a.txt", CONTENTS.into()).await;
        anyhow::ensure!(again.is_err(), "upload should not replace {again:?}");

        let got = objects::download_file::sample(client, bucket_id, "logs/a.txt").await?;
        assert_eq!(got, CONTENTS);
        objects::set_metadata::sample(control, bucket_id, "logs/a.txt", "reviewed", "yes").await?;
        let object = objects::get_metadata::sample(control, bucket_id, "logs/a.txt").await?;
        assert_eq!(
            object.metadata.get("reviewed").map(String::as_str),
            Some("yes")
        );

        objects::copy_file::sample(control, bucket_id, "logs/a.txt", bucket_id, "logs/b.txt")
            .await?;
        let got = objects::download_file::sample(client, bucket_id, "logs/b.txt").await?;
        assert_eq!(got, CONTENTS);

        objects::rename_file::sample(control, bucket_id, "logs/b.txt", "logs/c.txt").await?;
        let got = objects::download_file::sample(client, bucket_id, "logs/c.txt").await?;
        assert_eq!(got, CONTENTS);
        let gone = objects::get_metadata::sample(control, bucket_id, "logs/b.txt").await;
        assert!(is_not_found(&gone), "{gone:?}");

        objects::move_file::sample(control, bucket_id, "logs/c.txt", bucket_id, "moved.txt")
            .await?;
        let got = objects::download_file::sample(client, bucket_id, "moved.txt").await?;
        assert_eq!(got, CONTENTS);
        let gone = objects::get_metadata::sample(control, bucket_id, "logs/c.txt").await;
        assert!(is_not_found(&gone), "{gone:?}");

        let names = objects::list_files_with_prefix::sample(control, bucket_id, "logs/", "").await?;
        assert_eq!(names, ["logs/a.txt"]);

        objects::set_temporary_hold::sample(control, bucket_id, "moved.txt").await?;
        objects::release_temporary_hold::sample(control, bucket_id, "moved.txt").await?;
        objects::set_event_based_hold::sample(control, bucket_id, "moved.txt").await?;
        objects::release_event_based_hold::sample(control, bucket_id, "moved.txt").await?;
        objects::delete_file::sample(control, bucket_id, "moved.txt").await?;

        let service_account = test_service_account()?;
        objects::add_file_owner::sample(control, bucket_id, "logs/a.txt", &service_account)
            .await?;
        let role = objects::print_file_acl_for_user::sample(
            control,
            bucket_id,
            "logs/a.txt",
            &service_account,
        )
        .await?;
        assert_eq!(role.as_deref(), Some("OWNER"));
        objects::print_file_acl::sample(control, bucket_id, "logs/a.txt").await?;
        objects::remove_file_owner::sample(control, bucket_id, "logs/a.txt", &service_account)
            .await?;

        let key = objects::generate_encryption_key::sample()?;
        let encoded = key.to_string();
        objects::upload_encrypted_file::sample(
            client,
            bucket_id,
            "secret.txt",
            CONTENTS.into(),
            key,
        )
        .await?;
        let new_key = objects::generate_encryption_key::sample()?;
        let new_encoded = new_key.to_string();
        objects::rotate_encryption_key::sample(
            control,
            bucket_id,
            "secret.txt",
            objects::key_from_base64(&encoded)?,
            new_key,
        )
        .await?;
        let got = objects::download_encrypted_file::sample(
            client,
            bucket_id,
            "secret.txt",
            objects::key_from_base64(&new_encoded)?,
        )
        .await?;
        assert_eq!(got, CONTENTS);

        let url = objects::generate_signed_url_v4::sample(bucket_id, "logs/a.txt").await?;
        assert!(url.contains("X-Goog-Signature="), "{url}");
        let url = objects::generate_upload_signed_url_v4::sample(bucket_id, "upload.txt").await?;
        assert!(url.contains("upload.txt"), "{url}");
        Ok(())
    }

    async fn run_bucket_samples(control: &StorageControl, bucket_id: &str) -> anyhow::Result<()> {
        let service_account = test_service_account()?;
        buckets::print_bucket_acl::sample(control, bucket_id).await?;
        buckets::add_bucket_owner::sample(control, bucket_id, &service_account).await?;
        let role =
            buckets::print_bucket_acl_for_user::sample(control, bucket_id, &service_account)
                .await?;
        assert_eq!(role.as_deref(), Some("OWNER"));
        assert!(buckets::remove_bucket_owner::sample(control, bucket_id, &service_account).await?);

        buckets::add_bucket_default_owner::sample(control, bucket_id, &service_account).await?;
        assert!(
            buckets::remove_bucket_default_owner::sample(control, bucket_id, &service_account)
                .await?
        );

        buckets::enable_default_event_based_hold::sample(control, bucket_id).await?;
        buckets::disable_default_event_based_hold::sample(control, bucket_id).await?;

        buckets::set_retention_policy::sample(control, bucket_id, 10).await?;
        let policy = buckets::get_retention_policy::sample(control, bucket_id).await?;
        assert!(policy.is_some_and(|p| !p.is_locked));
        buckets::remove_retention_policy::sample(control, bucket_id).await?;
        let policy = buckets::get_retention_policy::sample(control, bucket_id).await?;
        assert!(policy.is_none(), "{policy:?}");
        Ok(())
    }

    fn is_not_found<T>(result: &anyhow::Result<T>) -> bool {
        let Err(e) = result else {
            return false;
        };
        e.downcast_ref::<Error>()
            .and_then(|e| e.status())
            .map(|s| &s.code)
            == Some(&Code::NotFound)
    }

    async fn create_bucket(control: &StorageControl) -> anyhow::Result<String> {
        let project_id = project_id()?;
        let bucket_id = random_bucket_id();
        control
            .create_bucket()
            .set_parent("projects/_")
            .set_bucket_id(&bucket_id)
            .set_bucket(Bucket::new().set_project(format!("projects/{project_id}")))
            .send()
            .await?;
        Ok(bucket_id)
    }

    async fn cleanup_bucket(control: &StorageControl, bucket_id: &str) -> anyhow::Result<()> {
        let name = bucket_name(bucket_id);
        let mut objects = control
            .list_objects()
            .set_parent(&name)
            .set_versions(true)
            .by_item();
        let mut pending = Vec::new();
        while let Some(item) = objects.next().await {
            let Ok(object) = item else {
                continue;
            };
            pending.push(
                control
                    .delete_object()
                    .set_bucket(object.bucket)
                    .set_object(object.name)
                    .set_generation(object.generation)
                    .send(),
            );
        }
        let _ = futures::future::join_all(pending).await;
        control.delete_bucket().set_name(&name).send().await?;
        Ok(())
    }
}
