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

// [START dlp_inspect_string_custom_excluding_substring]
use crate::inspect::print_findings;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ByteContentItem, ContentItem, CustomInfoType, ExclusionRule, Finding, InfoType,
    InspectConfig, InspectionRule, InspectionRuleSet, MatchingType,
    byte_content_item::BytesType, custom_info_type,
};

pub async fn sample(
    client: &DlpService,
    project_id: &str,
    text_to_inspect: &str,
    custom_detector_pattern: &str,
    excluded_substrings: &[&str],
) -> anyhow::Result<Vec<Finding>> {
    let info_type = InfoType::new().set_name("CUSTOM_NAME_DETECTOR");
    let detector = CustomInfoType::new()
        .set_info_type(info_type.clone())
        .set_regex(custom_info_type::Regex::new().set_pattern(custom_detector_pattern));
    let exclusion = ExclusionRule::new()
        .set_dictionary(custom_info_type::Dictionary::new().set_word_list(
            custom_info_type::dictionary::WordList::new()
                .set_words(excluded_substrings.iter().copied()),
        ))
        .set_matching_type(MatchingType::PartialMatch);
    let rule_set = InspectionRuleSet::new()
        .set_info_types([info_type])
        .set_rules([InspectionRule::new().set_exclusion_rule(exclusion)]);

    let response = client
        .inspect_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_item(
            ContentItem::new().set_byte_item(
                ByteContentItem::new()
                    .set_type(BytesType::TextUtf8)
                    .set_data(text_to_inspect.to_string()),
            ),
        )
        .set_inspect_config(
            InspectConfig::new()
                .set_custom_info_types([detector])
                .set_include_quote(true)
                .set_rule_set([rule_set]),
        )
        .send()
        .await?;
    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_string_custom_excluding_substring]
