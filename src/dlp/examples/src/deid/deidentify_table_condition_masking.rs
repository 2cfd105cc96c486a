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

// [START dlp_deidentify_table_condition_masking]
use crate::deid::{field_ids, greater_than, table_of};
use crate::format_table;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CharacterMaskConfig, ContentItem, DeidentifyConfig, FieldTransformation,
    PrimitiveTransformation, RecordTransformations, Table,
};

/// Masks the `HAPPINESS SCORE` of the rows where it is greater than 89.
pub async fn sample(client: &DlpService, project_id: &str, table: Table) -> anyhow::Result<Table> {
    let transformation = FieldTransformation::new()
        .set_fields(field_ids(["HAPPINESS SCORE"]))
        .set_condition(greater_than("HAPPINESS SCORE", 89))
        .set_primitive_transformation(PrimitiveTransformation::new().set_character_mask_config(
            CharacterMaskConfig::new().set_masking_character("*"),
        ));
    let response = client
        .deidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_deidentify_config(DeidentifyConfig::new().set_record_transformations(
            RecordTransformations::new().set_field_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_table(table))
        .send()
        .await?;
    let table = table_of(response.item);
    println!("Table after de-identification :\n{}", format_table(&table));
    Ok(table)
}
// [END dlp_deidentify_table_condition_masking]
