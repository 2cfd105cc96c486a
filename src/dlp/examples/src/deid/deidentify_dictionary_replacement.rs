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

// [START dlp_deidentify_dictionary_replacement]
use crate::deid::text_of;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, DeidentifyConfig, InfoType, InfoTypeTransformations, InspectConfig,
    PrimitiveTransformation, ReplaceDictionaryConfig, custom_info_type::dictionary::WordList,
    info_type_transformations::InfoTypeTransformation,
};

/// The replacement candidates, the service picks one at random per finding.
pub const WORDS: [&str; 2] = ["izumi@example.com", "alex@example.com"];

pub async fn sample(client: &DlpService, project_id: &str, input: &str) -> anyhow::Result<String> {
    let email = InfoType::new().set_name("EMAIL_ADDRESS");
    let replace = ReplaceDictionaryConfig::new().set_word_list(WordList::new().set_words(WORDS));
    let transformation = InfoTypeTransformation::new()
        .set_info_types([email.clone()])
        .set_primitive_transformation(
            PrimitiveTransformation::new().set_replace_dictionary_config(replace),
        );
    let response = client
        .deidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(InspectConfig::new().set_info_types([email]))
        .set_deidentify_config(DeidentifyConfig::new().set_info_type_transformations(
            InfoTypeTransformations::new().set_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_value(input))
        .send()
        .await?;
    let output = text_of(response.item);
    println!("output: {output}");
    Ok(output)
}
// [END dlp_deidentify_dictionary_replacement]
