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

use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use dlp_samples::inspect::{DEFAULT_INFO_TYPES, InspectOptions};
use google_cloud_privacy_dlp_v2::model::{DlpJobType, Likelihood, byte_content_item::BytesType};
use humantime::parse_duration;
use std::path::PathBuf;
use std::time::Duration;

/// Command line options for the DLP samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The project used to make the DLP requests.
    #[arg(long)]
    pub project: String,

    /// The minimum likelihood reported by the inspection samples.
    #[arg(long, value_enum, default_value_t = MinLikelihood::Unspecified)]
    pub min_likelihood: MinLikelihood,

    /// The maximum number of findings per request, 0 is the service default.
    #[arg(long, default_value_t = 0)]
    pub max_findings: i32,

    /// Include the matching text in the findings.
    #[arg(long, default_value_t = false)]
    pub include_quote: bool,

    /// The info types to look for, separated by commas.
    ///
    /// Defaults to phone numbers, e-mail addresses, credit card numbers, and
    /// US social security numbers.
    #[arg(long, value_delimiter = ',')]
    pub info_types: Vec<String>,

    /// A custom dictionary, as comma separated words. May be repeated.
    #[arg(long)]
    pub custom_dictionary: Vec<String>,

    /// A custom regular expression. May be repeated.
    #[arg(long)]
    pub custom_regex: Vec<String>,

    /// The type of the file used by `inspect-file` and `redact-image`.
    #[arg(long, value_enum, default_value_t = FileKind::TextUtf8)]
    pub bytes_type: FileKind,

    /// The language for the info type display names.
    #[arg(long, default_value = "")]
    pub language_code: String,

    /// Triggers scan only the objects modified since their last run.
    #[arg(long, default_value_t = false)]
    pub auto_populate_timespan: bool,

    /// How long to wait for job notifications.
    #[arg(long, value_parser = parse_duration, default_value = "10m")]
    pub timeout: Duration,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_findings < 0 {
            bail!("invalid --max-findings, should be >= 0")
        }
        if self.timeout.is_zero() {
            bail!("invalid --timeout, should be > 0")
        }
        if let Command::CreateTrigger {
            scan_period_days, ..
        } = &self.command
        {
            if *scan_period_days < 1 {
                bail!("invalid --scan-period-days, should be >= 1")
            }
        }
        Ok(())
    }

    pub fn inspect_options(&self) -> InspectOptions {
        let info_types = if self.info_types.is_empty() {
            DEFAULT_INFO_TYPES.iter().map(|s| s.to_string()).collect()
        } else {
            self.info_types.clone()
        };
        InspectOptions {
            info_types,
            custom_dictionaries: self.custom_dictionary.clone(),
            custom_regexes: self.custom_regex.clone(),
            min_likelihood: self.min_likelihood.into(),
            max_findings: self.max_findings,
            include_quote: self.include_quote,
        }
    }

    pub fn info_type_names(&self) -> Vec<&str> {
        if self.info_types.is_empty() {
            return DEFAULT_INFO_TYPES.to_vec();
        }
        self.info_types.iter().map(String::as_str).collect()
    }
}

/// The Pub/Sub resources used to wait for jobs.
#[derive(Clone, Debug, PartialEq, clap::Args)]
pub struct Channel {
    #[arg(long)]
    pub topic: String,
    #[arg(long)]
    pub subscription: String,
}

/// A BigQuery table, in `--project` unless `--data-project` is set.
#[derive(Clone, Debug, PartialEq, clap::Args)]
pub struct Table {
    #[arg(long)]
    pub data_project: Option<String>,
    #[arg(long)]
    pub dataset: String,
    #[arg(long)]
    pub table: String,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Inspects a string.
    Inspect { input: String },
    /// Inspects a local file.
    InspectFile { path: PathBuf },
    /// Inspects a Cloud Storage object with a DLP job.
    InspectGcs {
        #[arg(long)]
        bucket: String,
        #[arg(long)]
        file: String,
        #[command(flatten)]
        channel: Channel,
    },
    /// Inspects a Datastore kind with a DLP job.
    InspectDatastore {
        #[arg(long)]
        data_project: Option<String>,
        #[arg(long, default_value = "")]
        namespace: String,
        #[arg(long)]
        kind: String,
        #[command(flatten)]
        channel: Channel,
    },
    /// Inspects a BigQuery table with a DLP job.
    InspectBigquery {
        #[command(flatten)]
        table: Table,
        #[command(flatten)]
        channel: Channel,
    },
    /// Masks the sensitive data in a string.
    Mask {
        input: String,
        #[arg(long, default_value = "*")]
        masking_character: String,
        /// Zero masks all the characters.
        #[arg(long, default_value_t = 0)]
        number_to_mask: i32,
    },
    /// Shifts the dates in a string.
    DateShift {
        input: String,
        #[arg(long, allow_negative_numbers = true)]
        lower_bound_days: i32,
        #[arg(long, allow_negative_numbers = true)]
        upper_bound_days: i32,
    },
    /// Encrypts the sensitive data in a string with format-preserving
    /// encryption.
    Fpe {
        input: String,
        #[arg(long)]
        kms_key_name: String,
        #[arg(long)]
        wrapped_key: String,
        #[arg(long)]
        surrogate_info_type: String,
    },
    /// Reverts `fpe`.
    ReidentifyFpe {
        input: String,
        #[arg(long)]
        kms_key_name: String,
        #[arg(long)]
        wrapped_key: String,
        #[arg(long)]
        surrogate_info_type: String,
    },
    /// Computes numerical statistics over a column.
    RiskNumerical {
        #[command(flatten)]
        table: Table,
        #[arg(long)]
        column: String,
        #[command(flatten)]
        channel: Channel,
    },
    /// Computes categorical statistics over a column.
    RiskCategorical {
        #[command(flatten)]
        table: Table,
        #[arg(long)]
        column: String,
        #[command(flatten)]
        channel: Channel,
    },
    /// Computes the k-anonymity of a set of quasi-identifiers.
    RiskKAnonymity {
        #[command(flatten)]
        table: Table,
        #[arg(long, value_delimiter = ',', required = true)]
        quasi_ids: Vec<String>,
        #[command(flatten)]
        channel: Channel,
    },
    /// Computes the l-diversity of a sensitive attribute.
    RiskLDiversity {
        #[command(flatten)]
        table: Table,
        #[arg(long)]
        sensitive_attribute: String,
        #[arg(long, value_delimiter = ',', required = true)]
        quasi_ids: Vec<String>,
        #[command(flatten)]
        channel: Channel,
    },
    /// Estimates the k-map of a set of quasi-identifiers.
    RiskKMap {
        #[command(flatten)]
        table: Table,
        #[arg(long, default_value = "US")]
        region_code: String,
        #[arg(long, value_delimiter = ',', required = true)]
        quasi_ids: Vec<String>,
        #[command(flatten)]
        channel: Channel,
    },
    /// Creates a trigger scanning a bucket periodically.
    CreateTrigger {
        #[arg(long, default_value = "")]
        trigger_id: String,
        #[arg(long, default_value = "")]
        display_name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        bucket: String,
        #[arg(long, default_value_t = 1)]
        scan_period_days: i64,
    },
    ListTriggers,
    DeleteTrigger { name: String },
    CreateInspectTemplate {
        #[arg(long, default_value = "")]
        template_id: String,
        #[arg(long, default_value = "")]
        display_name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    ListInspectTemplates,
    DeleteInspectTemplate { name: String },
    ListJobs {
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, value_enum, default_value_t = JobKind::Inspect)]
        job_type: JobKind,
    },
    DeleteJob { name: String },
    /// Lists the built-in info types.
    InfoTypes {
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Redacts the sensitive data in an image.
    RedactImage { input: PathBuf, output: PathBuf },
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum MinLikelihood {
    Unspecified,
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

impl From<MinLikelihood> for Likelihood {
    fn from(value: MinLikelihood) -> Self {
        match value {
            MinLikelihood::Unspecified => Likelihood::Unspecified,
            MinLikelihood::VeryUnlikely => Likelihood::VeryUnlikely,
            MinLikelihood::Unlikely => Likelihood::Unlikely,
            MinLikelihood::Possible => Likelihood::Possible,
            MinLikelihood::Likely => Likelihood::Likely,
            MinLikelihood::VeryLikely => Likelihood::VeryLikely,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum FileKind {
    Image,
    ImageJpeg,
    ImageBmp,
    ImagePng,
    ImageSvg,
    TextUtf8,
}

impl From<FileKind> for BytesType {
    fn from(value: FileKind) -> Self {
        match value {
            FileKind::Image => BytesType::Image,
            FileKind::ImageJpeg => BytesType::ImageJpeg,
            FileKind::ImageBmp => BytesType::ImageBmp,
            FileKind::ImagePng => BytesType::ImagePng,
            FileKind::ImageSvg => BytesType::ImageSvg,
            FileKind::TextUtf8 => BytesType::TextUtf8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum JobKind {
    Inspect,
    Risk,
}

impl From<JobKind> for DlpJobType {
    fn from(value: JobKind) -> Self {
        match value {
            JobKind::Inspect => DlpJobType::InspectJob,
            JobKind::Risk => DlpJobType::RiskAnalysisJob,
        }
    }
}
