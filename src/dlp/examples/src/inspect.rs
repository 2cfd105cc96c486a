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

//! Samples finding sensitive data in strings, files, tables, and storage.

pub mod inspect_bigquery;
pub mod inspect_bigquery_send_to_scc;
pub mod inspect_bigquery_with_sampling;
pub mod inspect_column_values_with_custom_hotwords;
pub mod inspect_datastore;
pub mod inspect_file;
pub mod inspect_gcs_file;
pub mod inspect_gcs_with_sampling;
pub mod inspect_string;
pub mod inspect_string_custom_omit_overlap;
pub mod inspect_string_excluding_substring;
pub mod inspect_string_multiple_rules;
pub mod inspect_string_without_overlap;

use google_cloud_privacy_dlp_v2::model::{
    CustomInfoType, Finding, InfoType, InspectConfig, Likelihood, custom_info_type, inspect_config,
};

/// The info types used when the caller does not name any.
pub const DEFAULT_INFO_TYPES: [&str; 4] = [
    "PHONE_NUMBER",
    "EMAIL_ADDRESS",
    "CREDIT_CARD_NUMBER",
    "US_SOCIAL_SECURITY_NUMBER",
];

/// What to look for, shared by the configurable inspection samples.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectOptions {
    pub info_types: Vec<String>,
    /// Each entry is a comma separated list of words.
    pub custom_dictionaries: Vec<String>,
    pub custom_regexes: Vec<String>,
    pub min_likelihood: Likelihood,
    /// Zero means the service default.
    pub max_findings: i32,
    pub include_quote: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            info_types: DEFAULT_INFO_TYPES.iter().map(|s| s.to_string()).collect(),
            custom_dictionaries: Vec::new(),
            custom_regexes: Vec::new(),
            min_likelihood: Likelihood::Unspecified,
            max_findings: 0,
            include_quote: false,
        }
    }
}

impl InspectOptions {
    pub fn inspect_config(&self) -> InspectConfig {
        let dictionaries = self.custom_dictionaries.iter().enumerate().map(|(i, words)| {
            CustomInfoType::new()
                .set_info_type(InfoType::new().set_name(format!("CUSTOM_DICTIONARY_{i}")))
                .set_dictionary(custom_info_type::Dictionary::new().set_word_list(
                    custom_info_type::dictionary::WordList::new().set_words(words.split(',')),
                ))
        });
        let regexes = self.custom_regexes.iter().enumerate().map(|(i, pattern)| {
            CustomInfoType::new()
                .set_info_type(InfoType::new().set_name(format!("CUSTOM_REGEX_{i}")))
                .set_regex(custom_info_type::Regex::new().set_pattern(pattern))
        });
        InspectConfig::new()
            .set_info_types(info_types(&self.info_types))
            .set_custom_info_types(dictionaries.chain(regexes))
            .set_min_likelihood(self.min_likelihood.clone())
            .set_limits(
                inspect_config::FindingLimits::new().set_max_findings_per_request(self.max_findings),
            )
            .set_include_quote(self.include_quote)
    }
}

/// Converts info type names to the request representation.
pub fn info_types<I, S>(names: I) -> Vec<InfoType>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| InfoType::new().set_name(n.as_ref()))
        .collect()
}

pub fn print_findings(findings: &[Finding]) {
    println!("Findings: {}", findings.len());
    for f in findings {
        println!("Quote: {}", f.quote);
        let name = f.info_type.as_ref().map(|t| t.name.as_str()).unwrap_or_default();
        println!("Infotype Name: {name}");
        println!("Likelihood: {}", f.likelihood);
    }
}
