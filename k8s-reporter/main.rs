use anyhow::Result;
use clap::Parser;
use k8s_reporter::{Reader, ReporterConfig, YamlReporter};
use k8s_reporter_common::{APP_NAME, APP_VERSION};
use kube::api::{GetParams, ListParams};
use tokio::runtime::Builder;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod cli;

#[cfg(test)]
#[path = "./main.tests.rs"]
mod main_tests;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = k8s_reporter_common::logging::initialize(APP_NAME)?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    let rt = Builder::new_current_thread().enable_all().build()?;
    if let Err(error) = rt.block_on(run(args)) {
        error!("{} v{} terminated with an error: {:?}", APP_NAME, APP_VERSION, error);
        Err(error)
    } else {
        info!("{} v{} stopped", APP_NAME, APP_VERSION);
        Ok(())
    }
}

async fn run(args: cli::Args) -> Result<()> {
    let config = build_config(&args).await?;
    let reporter = YamlReporter::from_config(&config).await?;
    let namespace = config.namespace.as_deref().unwrap_or_default();
    let cancellation = CancellationToken::new();

    if let Some(name) = &args.name {
        let params = match &args.resource_version {
            Some(resource_version) => GetParams::at(resource_version),
            None => GetParams::default(),
        };
        println!("{}", reporter.get(&cancellation, name, namespace, &params).await?);
    } else {
        let mut params = ListParams::default();
        if let Some(labels) = &args.selector {
            params = params.labels(labels);
        }
        if let Some(fields) = &args.field_selector {
            params = params.fields(fields);
        }

        let documents = reporter.list(&cancellation, namespace, &params).await?;
        if let Some(output) = join_documents(&documents) {
            println!("{output}");
        }
    }

    Ok(())
}

/// Builds configuration from the optional configuration file overridden by the command line arguments.
async fn build_config(args: &cli::Args) -> Result<ReporterConfig> {
    let mut config = match (&args.config, &args.resource) {
        (Some(path), _) => ReporterConfig::load(path).await?,
        (None, Some(resource)) => ReporterConfig::new(resource.clone()),
        (None, None) => anyhow::bail!("resource type is required, pass it as an argument or in the configuration file"),
    };

    if let Some(resource) = &args.resource {
        config.resource = resource.clone();
    }
    if args.context.is_some() {
        config.context.clone_from(&args.context);
    }
    if args.namespace.is_some() {
        config.namespace.clone_from(&args.namespace);
    }

    Ok(config)
}

/// Joins YAML documents into one multi-document stream, returns `None` if there is nothing to print.
fn join_documents(documents: &[String]) -> Option<String> {
    if documents.is_empty() {
        None
    } else {
        Some(documents.join("---\n"))
    }
}
