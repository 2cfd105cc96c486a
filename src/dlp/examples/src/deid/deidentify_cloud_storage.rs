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

// [START dlp_deidentify_cloud_storage]
use crate::inspect::info_types;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    Action, BigQueryTable, CloudStorageOptions, DlpJob, FileType, InspectConfig, InspectJobConfig,
    StorageConfig, TransformationConfig, TransformationDetailsStorageConfig, action,
    cloud_storage_options,
};

/// The templates applied to each kind of file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Templates {
    /// Applied to unstructured files, e.g. text.
    pub deidentify: String,
    /// Applied to structured files, e.g. CSV.
    pub structured_deidentify: String,
    pub image_redact: String,
}

/// Writes de-identified copies of the files under `gcs_uri` to
/// `output_directory`.
///
/// The details of each transformation go to the BigQuery table
/// `{project_id}.{dataset_id}.{table_id}`. The sample returns once the job is
/// created.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    gcs_uri: &str,
    dataset_id: &str,
    table_id: &str,
    output_directory: &str,
    templates: &Templates,
) -> anyhow::Result<DlpJob> {
    let storage = StorageConfig::new().set_cloud_storage_options(
        CloudStorageOptions::new()
            .set_file_set(cloud_storage_options::FileSet::new().set_url(gcs_uri)),
    );
    let details = TransformationDetailsStorageConfig::new().set_table(
        BigQueryTable::new()
            .set_project_id(project_id)
            .set_dataset_id(dataset_id)
            .set_table_id(table_id),
    );
    let deidentify = action::Deidentify::new()
        .set_transformation_config(
            TransformationConfig::new()
                .set_deidentify_template(&templates.deidentify)
                .set_structured_deidentify_template(&templates.structured_deidentify)
                .set_image_redact_template(&templates.image_redact),
        )
        .set_transformation_details_storage_config(details)
        .set_cloud_storage_output(output_directory)
        .set_file_types_to_transform([FileType::Csv, FileType::Image, FileType::TextFile]);

    let job = client
        .create_dlp_job()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_job(
            InspectJobConfig::new()
                .set_storage_config(storage)
                .set_inspect_config(
                    InspectConfig::new()
                        .set_info_types(info_types(["PERSON_NAME", "EMAIL_ADDRESS"]))
                        .set_include_quote(true),
                )
                .set_actions([Action::new().set_deidentify(deidentify)]),
        )
        .send()
        .await?;
    println!("Job created successfully: {}", job.name);
    Ok(job)
}
// [END dlp_deidentify_cloud_storage]
