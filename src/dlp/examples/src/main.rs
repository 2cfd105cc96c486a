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

//! Runs the DLP samples from the command line.

mod args;

use args::{Args, Channel, Command, Table};
use clap::Parser;
use dlp_samples::triggers::create_trigger::TriggerSpec;
use dlp_samples::{Notifications, deid, inspect, jobs, metadata, redact, risk, templates, triggers};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::BigQueryTable;

const DESCRIPTION: &str = concat!(
    "This program runs the Data Loss Prevention samples.",
    " The samples that create jobs wait for a Pub/Sub notification",
    " before printing the results."
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.validate()?;
    enable_tracing()?;
    tracing::info!("Configuration: {args:?}");

    let client = DlpService::builder().build().await?;
    run(&client, &args).await
}

async fn run(client: &DlpService, args: &Args) -> anyhow::Result<()> {
    let project = args.project.as_str();
    let options = args.inspect_options();
    let notifications = |c: &Channel| {
        Notifications::new(&c.topic, &c.subscription).with_timeout(args.timeout)
    };
    let source = |t: &Table| {
        let data_project = t.data_project.as_deref().unwrap_or(project);
        risk::bigquery_table(data_project, &t.dataset, &t.table)
    };

    match &args.command {
        Command::Inspect { input } => {
            inspect::inspect_string::sample(client, project, input, &options).await?;
        }
        Command::InspectFile { path } => {
            inspect::inspect_file::sample(client, project, path, args.bytes_type.into(), &options)
                .await?;
        }
        Command::InspectGcs {
            bucket,
            file,
            channel,
        } => {
            let n = notifications(channel);
            inspect::inspect_gcs_file::sample(client, project, &options, bucket, file, &n).await?;
        }
        Command::InspectDatastore {
            data_project,
            namespace,
            kind,
            channel,
        } => {
            let n = notifications(channel);
            let data_project = data_project.as_deref().unwrap_or(project);
            inspect::inspect_datastore::sample(
                client,
                project,
                &options,
                data_project,
                namespace,
                kind,
                &n,
            )
            .await?;
        }
        Command::InspectBigquery { table, channel } => {
            let n = notifications(channel);
            let table: BigQueryTable = source(table);
            inspect::inspect_bigquery::sample(client, project, &options, table, &n).await?;
        }
        Command::Mask {
            input,
            masking_character,
            number_to_mask,
        } => {
            deid::deidentify_mask::sample(
                client,
                project,
                input,
                &args.info_type_names(),
                masking_character,
                *number_to_mask,
            )
            .await?;
        }
        Command::DateShift {
            input,
            lower_bound_days,
            upper_bound_days,
        } => {
            deid::deidentify_date_shift::sample(
                client,
                project,
                input,
                *lower_bound_days,
                *upper_bound_days,
            )
            .await?;
        }
        Command::Fpe {
            input,
            kms_key_name,
            wrapped_key,
            surrogate_info_type,
        } => {
            deid::deidentify_fpe::sample(
                client,
                project,
                input,
                &args.info_type_names(),
                kms_key_name,
                wrapped_key,
                surrogate_info_type,
            )
            .await?;
        }
        Command::ReidentifyFpe {
            input,
            kms_key_name,
            wrapped_key,
            surrogate_info_type,
        } => {
            deid::reidentify_fpe::sample(
                client,
                project,
                input,
                kms_key_name,
                wrapped_key,
                surrogate_info_type,
            )
            .await?;
        }
        Command::RiskNumerical {
            table,
            column,
            channel,
        } => {
            let n = notifications(channel);
            risk::risk_numerical::sample(client, project, &source(table), column, &n).await?;
        }
        Command::RiskCategorical {
            table,
            column,
            channel,
        } => {
            let n = notifications(channel);
            risk::risk_categorical::sample(client, project, &source(table), column, &n).await?;
        }
        Command::RiskKAnonymity {
            table,
            quasi_ids,
            channel,
        } => {
            let n = notifications(channel);
            let ids = quasi(quasi_ids);
            risk::risk_k_anonymity::sample(client, project, &source(table), &ids, &n).await?;
        }
        Command::RiskLDiversity {
            table,
            sensitive_attribute,
            quasi_ids,
            channel,
        } => {
            let n = notifications(channel);
            let ids = quasi(quasi_ids);
            risk::risk_l_diversity::sample(
                client,
                project,
                &source(table),
                sensitive_attribute,
                &ids,
                &n,
            )
            .await?;
        }
        Command::RiskKMap {
            table,
            region_code,
            quasi_ids,
            channel,
        } => {
            let n = notifications(channel);
            let ids = quasi(quasi_ids);
            risk::risk_k_map::sample(client, project, &source(table), region_code, &ids, &n)
                .await?;
        }
        Command::CreateTrigger {
            trigger_id,
            display_name,
            description,
            bucket,
            scan_period_days,
        } => {
            let spec = TriggerSpec {
                trigger_id: trigger_id.clone(),
                display_name: display_name.clone(),
                description: description.clone(),
                scan_period_days: *scan_period_days,
                auto_populate_timespan: args.auto_populate_timespan,
            };
            triggers::create_trigger::sample(client, project, bucket, &spec, &options).await?;
        }
        Command::ListTriggers => {
            triggers::list_triggers::sample(client, project).await?;
        }
        Command::DeleteTrigger { name } => {
            triggers::delete_trigger::sample(client, name).await?;
        }
        Command::CreateInspectTemplate {
            template_id,
            display_name,
            description,
        } => {
            templates::create_inspect_template::sample(
                client,
                project,
                template_id,
                display_name,
                description,
                &options,
            )
            .await?;
        }
        Command::ListInspectTemplates => {
            templates::list_inspect_templates::sample(client, project).await?;
        }
        Command::DeleteInspectTemplate { name } => {
            templates::delete_inspect_template::sample(client, name).await?;
        }
        Command::ListJobs { filter, job_type } => {
            jobs::list_jobs::sample(client, project, filter, (*job_type).into()).await?;
        }
        Command::DeleteJob { name } => {
            jobs::delete_job::sample(client, name).await?;
        }
        Command::InfoTypes { filter } => {
            metadata::list_info_types::sample(client, &args.language_code, filter).await?;
        }
        Command::RedactImage { input, output } => {
            redact::redact_image::sample(
                client,
                project,
                input,
                output,
                &args.info_type_names(),
                args.min_likelihood.into(),
                args.bytes_type.into(),
            )
            .await?;
        }
    }
    Ok(())
}

fn quasi(ids: &[String]) -> Vec<&str> {
    ids.iter().map(String::as_str).collect()
}

fn enable_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt::format::FmtSpan;

    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
