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

// [START dlp_inspect_string_multiple_rules]
use crate::inspect::print_findings;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ByteContentItem, ContentItem, ExclusionRule, Finding, InfoType, InspectConfig, InspectionRule,
    InspectionRuleSet, Likelihood, MatchingType, byte_content_item::BytesType, custom_info_type,
    custom_info_type::detection_rule,
};

fn hotword(pattern: &str, likelihood: Likelihood) -> InspectionRule {
    InspectionRule::new().set_hotword_rule(
        detection_rule::HotwordRule::new()
            .set_hotword_regex(custom_info_type::Regex::new().set_pattern(pattern))
            .set_proximity(detection_rule::Proximity::new().set_window_before(10))
            .set_likelihood_adjustment(
                detection_rule::LikelihoodAdjustment::new().set_fixed_likelihood(likelihood),
            ),
    )
}

pub async fn sample(
    client: &DlpService,
    project_id: &str,
    text_to_inspect: &str,
) -> anyhow::Result<Vec<Finding>> {
    // Names near "patient" are very likely names, near "doctor" unlikely.
    let doctor = hotword("doctor", Likelihood::Unlikely);
    let patient = hotword("patient", Likelihood::VeryLikely);
    let quasimodo = InspectionRule::new().set_exclusion_rule(
        ExclusionRule::new()
            .set_dictionary(custom_info_type::Dictionary::new().set_word_list(
                custom_info_type::dictionary::WordList::new().set_words(["Quasimodo"]),
            ))
            .set_matching_type(MatchingType::PartialMatch),
    );
    let redacted = InspectionRule::new().set_exclusion_rule(
        ExclusionRule::new()
            .set_regex(custom_info_type::Regex::new().set_pattern("REDACTED"))
            .set_matching_type(MatchingType::PartialMatch),
    );
    let rule_set = InspectionRuleSet::new()
        .set_info_types([InfoType::new().set_name("PERSON_NAME")])
        .set_rules([doctor, patient, quasimodo, redacted]);

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
                .set_info_types([InfoType::new().set_name("PERSON_NAME")])
                .set_include_quote(true)
                .set_rule_set([rule_set]),
        )
        .send()
        .await?;
    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_string_multiple_rules]
