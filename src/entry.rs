use clap::{CommandFactory, FromArgMatches};
use tracing::info;

use crate::args::JobArgs;
use crate::backend::BackendClient;
use crate::config::JobConfig;
use crate::derive::{derive_availability, format_series};
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let args = parse_args()?;
    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

fn parse_args() -> AppResult<JobArgs> {
    let cmd = JobArgs::command();
    let matches = cmd.get_matches();
    Ok(JobArgs::from_arg_matches(&matches)?)
}

/// The whole job: fetch, partition, reduce, format, publish. Each stage runs
/// exactly once; nothing persists past the invocation.
async fn run_async(args: &JobArgs) -> AppResult<()> {
    let config = JobConfig::from_args(args)?;
    let client = BackendClient::new(&config)?;

    let samples = client.query_error_rate(&config).await?;
    let derived = derive_availability(
        &samples,
        &config.error_thresholds,
        config.granularity_divisor,
    )?;
    let records = format_series(&derived, &config);
    let ack = client.publish(&records).await?;
    info!(
        "Published {} availability series under {} ({})",
        records.len(),
        config.destination_metric_name,
        ack.status
    );
    Ok(())
}
