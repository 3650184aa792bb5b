//! # NetBox DNS
//!
//! Resolves host names through a NetBox IPAM inventory, one address of the
//! requested family per name.

mod bootstrap;

use bootstrap::{init_logging, load_config, log_config};
use clap::Parser;
use netbox_dns_domain::{AddressFamily, CliOverrides};
use netbox_dns_infrastructure::ipam::IpamResolverBuilder;
use netbox_dns_jobs::{CacheSweepJob, JobRunner};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "netbox-dns")]
#[command(version)]
#[command(about = "Resolve host names to IP addresses from a NetBox IPAM inventory")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// IPAM ip-addresses endpoint (overrides ipam.url)
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// API token (overrides ipam.token)
    #[arg(short = 't', long)]
    token: Option<String>,

    /// Cache TTL in seconds (overrides ipam.cache_ttl)
    #[arg(long)]
    ttl: Option<u64>,

    /// Address family: 4 / 6 (also "A" / "AAAA")
    #[arg(short = 'f', long, default_value = "4")]
    family: AddressFamily,

    /// Log level (overrides logging.level)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Give up on unresolved names after this many seconds (0 = retry budget only)
    #[arg(long, default_value = "0")]
    deadline: u64,

    /// Host names to resolve
    #[arg(required = true)]
    names: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        url: cli.url,
        token: cli.token,
        cache_ttl: cli.ttl,
        log_level: cli.log_level,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;

    init_logging(&config);
    log_config(cli.config.as_deref(), &config);

    let resolver = Arc::new(IpamResolverBuilder::new(config.ipam.clone()).build()?);

    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new();
    if config.cache.sweep_interval > 0 {
        runner = runner.with_cache_sweep(
            CacheSweepJob::new(resolver.cache().clone())
                .with_interval(config.cache.sweep_interval)
                .with_cancellation(shutdown.clone()),
        );
    }
    let jobs = runner.start();

    let cancel = shutdown.child_token();
    spawn_cancel_triggers(cancel.clone(), cli.deadline);

    let mut lookups = JoinSet::new();
    for (index, name) in cli.names.into_iter().enumerate() {
        let resolver = resolver.clone();
        let cancel = cancel.clone();
        let family = cli.family;
        lookups.spawn(async move {
            let address = resolver.resolve_with_cancel(&name, family, &cancel).await;
            (index, name, address)
        });
    }

    let mut answers = Vec::with_capacity(lookups.len());
    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok(answer) => answers.push(answer),
            Err(e) => warn!(error = %e, "Lookup task failed"),
        }
    }
    answers.sort_by_key(|(index, _, _)| *index);

    for (_, name, address) in &answers {
        println!("{name}\t{address}");
    }

    let resolved = answers.iter().filter(|(_, _, a)| !a.is_empty()).count();
    info!(
        resolved,
        unresolved = answers.len() - resolved,
        family = %cli.family,
        "Lookups finished"
    );

    shutdown.cancel();
    for job in jobs {
        let _ = job.await;
    }

    Ok(())
}

/// Cancel outstanding lookups on Ctrl+C or once `deadline_secs` elapse.
fn spawn_cancel_triggers(cancel: CancellationToken, deadline_secs: u64) {
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = on_signal.cancelled() => {}
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    warn!("Interrupted, cancelling lookups");
                    on_signal.cancel();
                }
            }
        }
    });

    if deadline_secs > 0 {
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(Duration::from_secs(deadline_secs)) => {
                    warn!(deadline_secs, "Deadline reached, cancelling lookups");
                    cancel.cancel();
                }
            }
        });
    }
}
