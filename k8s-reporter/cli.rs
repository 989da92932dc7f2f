use clap::Parser;
use k8s_reporter::GroupVersionResource;
use std::path::PathBuf;

/// kreport prints kubernetes resources of one type as YAML documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Resource type in the `resource.group/version` form (e.g. pods, deployments.apps/v1).
    #[arg()]
    pub resource: Option<GroupVersionResource>,

    /// Name of the resource to get, all resources are listed if omitted.
    #[arg()]
    pub name: Option<String>,

    /// Namespace to read from (all namespaces if omitted).
    #[arg(long, short)]
    pub namespace: Option<String>,

    /// Context to use from the kubeconfig file.
    #[arg(long)]
    pub context: Option<String>,

    /// Path to the YAML configuration file, command line arguments take priority over it.
    #[arg(long, env = "KREPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Label selector used when listing resources.
    #[arg(long, short = 'l')]
    pub selector: Option<String>,

    /// Field selector used when listing resources.
    #[arg(long)]
    pub field_selector: Option<String>,

    /// Resource version to get.
    #[arg(long)]
    pub resource_version: Option<String>,
}
