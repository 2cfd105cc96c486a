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

// [START dlp_inspect_string_custom_omit_overlap]
use crate::inspect::print_findings;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ByteContentItem, ContentItem, CustomInfoType, ExcludeInfoTypes, ExclusionRule, Finding,
    InfoType, InspectConfig, InspectionRule, InspectionRuleSet, MatchingType,
    byte_content_item::BytesType, custom_info_type,
};

/// Finds `info_type_name` matches, except those also matched by a custom
/// detector, e.g. `VIP_DETECTOR`.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    text_to_inspect: &str,
    custom_info_type_name: &str,
    info_type_name: &str,
    regex: &str,
) -> anyhow::Result<Vec<Finding>> {
    let custom = InfoType::new().set_name(custom_info_type_name);
    // The custom detector only suppresses findings, it reports none itself.
    let detector = CustomInfoType::new()
        .set_info_type(custom.clone())
        .set_regex(custom_info_type::Regex::new().set_pattern(regex))
        .set_exclusion_type(custom_info_type::ExclusionType::Exclude);
    let exclusion = ExclusionRule::new()
        .set_exclude_info_types(ExcludeInfoTypes::new().set_info_types([custom]))
        .set_matching_type(MatchingType::FullMatch);
    let rule_set = InspectionRuleSet::new()
        .set_info_types([InfoType::new().set_name(info_type_name)])
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
                .set_info_types([InfoType::new().set_name(info_type_name)])
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
// [END dlp_inspect_string_custom_omit_overlap]
