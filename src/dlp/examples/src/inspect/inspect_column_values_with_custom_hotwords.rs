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

// [START dlp_inspect_column_values_w_custom_hotwords]
use crate::inspect::print_findings;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, FieldId, Finding, InfoType, InspectConfig, InspectionRule, InspectionRuleSet,
    Likelihood, Table, Value, custom_info_type, custom_info_type::detection_rule, table,
};

/// Lowers the likelihood of findings in columns whose header matches
/// `hotword_regex_pattern`, e.g. `(Fake Social Security Number)`.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    hotword_regex_pattern: &str,
) -> anyhow::Result<Vec<Finding>> {
    let table = Table::new()
        .set_headers([
            FieldId::new().set_name("Fake Social Security Number"),
            FieldId::new().set_name("Real Social Security Number"),
        ])
        .set_rows([table::Row::new().set_values([
            Value::new().set_string_value("111-11-1111"),
            Value::new().set_string_value("222-22-2222"),
        ])]);

    let hotword = detection_rule::HotwordRule::new()
        .set_hotword_regex(custom_info_type::Regex::new().set_pattern(hotword_regex_pattern))
        .set_proximity(detection_rule::Proximity::new().set_window_before(5))
        .set_likelihood_adjustment(
            detection_rule::LikelihoodAdjustment::new()
                .set_fixed_likelihood(Likelihood::VeryUnlikely),
        );
    let info_types = [InfoType::new().set_name("US_SOCIAL_SECURITY_NUMBER")];
    let rule_set = InspectionRuleSet::new()
        .set_info_types(info_types.clone())
        .set_rules([InspectionRule::new().set_hotword_rule(hotword)]);

    let response = client
        .inspect_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_item(ContentItem::new().set_table(table))
        .set_inspect_config(
            InspectConfig::new()
                .set_info_types(info_types)
                .set_include_quote(true)
                .set_min_likelihood(Likelihood::Possible)
                .set_rule_set([rule_set]),
        )
        .send()
        .await?;
    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_column_values_w_custom_hotwords]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::{InspectContentResponse, InspectResult};

    #[tokio::test]
    async fn table_request() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .withf(|r, _| {
                let headers = r
                    .item
                    .as_ref()
                    .and_then(|i| i.table())
                    .map(|t| t.headers.len());
                let pattern = r
                    .inspect_config
                    .as_ref()
                    .and_then(|c| c.rule_set.first())
                    .and_then(|s| s.rules.first())
                    .and_then(|r| r.hotword_rule())
                    .and_then(|h| h.hotword_regex.as_ref())
                    .map(|p| p.pattern.clone());
                headers == Some(2)
                    && pattern.as_deref() == Some("(Fake Social Security Number)")
                    && r.inspect_config
                        .as_ref()
                        .is_some_and(|c| c.min_likelihood == Likelihood::Possible)
            })
            .return_once(|_, _| {
                Ok(Response::from(InspectContentResponse::new().set_result(
                    InspectResult::new().set_findings([Finding::new()
                        .set_quote("222-22-2222")
                        .set_likelihood(Likelihood::Likely)]),
                )))
            });
        let client = client(mock);

        let got = sample(&client, PROJECT_ID, "(Fake Social Security Number)").await?;
        let quotes = got.iter().map(|f| f.quote.as_str()).collect::<Vec<_>>();
        assert_eq!(quotes, ["222-22-2222"]);
        Ok(())
    }
}
