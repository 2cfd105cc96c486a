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

// [START dlp_deidentify_table_condition_infotypes]
use crate::deid::{field_ids, greater_than, table_of};
use crate::format_table;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, DeidentifyConfig, FieldTransformation, InfoType, InfoTypeTransformations,
    PrimitiveTransformation, RecordTransformations, ReplaceWithInfoTypeConfig, Table,
    info_type_transformations::InfoTypeTransformation,
};

/// Replaces the names in `column_names` with `[PERSON_NAME]`, only for the
/// rows where `AGE` is greater than 89.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    table: Table,
    column_names: &[&str],
) -> anyhow::Result<Table> {
    let info_types = InfoTypeTransformations::new().set_transformations([
        InfoTypeTransformation::new()
            .set_info_types([InfoType::new().set_name("PERSON_NAME")])
            .set_primitive_transformation(
                PrimitiveTransformation::new()
                    .set_replace_with_info_type_config(ReplaceWithInfoTypeConfig::new()),
            ),
    ]);
    let transformation = FieldTransformation::new()
        .set_fields(field_ids(column_names.iter().copied()))
        .set_condition(greater_than("AGE", 89))
        .set_info_type_transformations(info_types);
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
// [END dlp_deidentify_table_condition_infotypes]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deid::{patients_with_factoids, string_table};
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::DeidentifyContentResponse;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn replaced_when_older() -> anyhow::Result<()> {
        let replaced = string_table(
            ["AGE", "PATIENT", "HAPPINESS SCORE", "FACTOID"],
            &[
                [
                    "22",
                    "Jane Austen",
                    "21",
                    "There are 14 kisses in Jane Austen's novels.",
                ],
                ["55", "Mark Twain", "75", "Mark Twain loved cats."],
                [
                    "101",
                    "[PERSON_NAME]",
                    "95",
                    "[PERSON_NAME] name was a curse invented by [PERSON_NAME].",
                ],
            ],
        );
        let response = replaced.clone();
        let mut mock = MockDlpService::new();
        mock.expect_deidentify_content()
            .withf(|r, _| {
                let transformation = r
                    .deidentify_config
                    .as_ref()
                    .and_then(|c| c.record_transformations())
                    .and_then(|t| t.field_transformations.first());
                transformation.is_some_and(|t| {
                    t.fields == field_ids(["PATIENT", "FACTOID"])
                        && t.condition == Some(greater_than("AGE", 89))
                        && t.info_type_transformations().is_some()
                })
            })
            .return_once(move |_, _| {
                Ok(Response::from(
                    DeidentifyContentResponse::new().set_item(ContentItem::new().set_table(response)),
                ))
            });
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            patients_with_factoids(),
            &["PATIENT", "FACTOID"],
        )
        .await?;
        assert_eq!(got, replaced);
        Ok(())
    }
}
