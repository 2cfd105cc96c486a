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

// [START dlp_inspect_string_without_overlap]
use crate::inspect::print_findings;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ByteContentItem, ContentItem, CustomInfoType, ExcludeInfoTypes, ExclusionRule, Finding,
    InfoType, InspectConfig, InspectionRule, InspectionRuleSet, MatchingType,
    byte_content_item::BytesType, custom_info_type,
};

/// Reports domain names, unless they are part of an email address.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    text_to_inspect: &str,
) -> anyhow::Result<Vec<Finding>> {
    // Email addresses are still detected, to exclude them, but not reported.
    let email = CustomInfoType::new()
        .set_info_type(InfoType::new().set_name("EMAIL_ADDRESS"))
        .set_exclusion_type(custom_info_type::ExclusionType::Exclude);
    let exclusion = ExclusionRule::new()
        .set_exclude_info_types(
            ExcludeInfoTypes::new().set_info_types([InfoType::new().set_name("EMAIL_ADDRESS")]),
        )
        .set_matching_type(MatchingType::PartialMatch);
    let rule_set = InspectionRuleSet::new()
        .set_info_types([InfoType::new().set_name("DOMAIN_NAME")])
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
                .set_info_types([
                    InfoType::new().set_name("DOMAIN_NAME"),
                    InfoType::new().set_name("EMAIL_ADDRESS"),
                ])
                .set_custom_info_types([email])
                .set_include_quote(true)
                .set_rule_set([rule_set]),
        )
        .send()
        .await?;
    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_string_without_overlap]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::{InspectContentResponse, InspectResult};

    #[tokio::test]
    async fn domains_only() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .withf(|r, _| {
                r.inspect_config.as_ref().is_some_and(|c| {
                    c.info_types.len() == 2
                        && c.rule_set.iter().all(|s| {
                            s.info_types.iter().all(|t| t.name == "DOMAIN_NAME")
                        })
                })
            })
            .return_once(|_, _| {
                Ok(Response::from(InspectContentResponse::new().set_result(
                    InspectResult::new().set_findings([Finding::new()
                        .set_quote("example.com")
                        .set_info_type(InfoType::new().set_name("DOMAIN_NAME"))]),
                )))
            });
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            "example.com is a domain, james@example.org is an email.",
        )
        .await?;
        let names = got
            .iter()
            .filter_map(|f| f.info_type.as_ref())
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["DOMAIN_NAME"]);
        Ok(())
    }
}
