use clap::Parser;

use super::JobArgs;

fn parse(args: &[&str]) -> Result<JobArgs, clap::Error> {
    JobArgs::try_parse_from(std::iter::once("availr").chain(args.iter().copied()))
}

#[test]
fn thresholds_split_on_commas() -> Result<(), clap::Error> {
    let args = parse(&["--error-thresholds", "0.1,0.01,0.005,0.001"])?;
    assert_eq!(args.error_thresholds, vec![0.1, 0.01, 0.005, 0.001]);
    Ok(())
}

#[test]
fn tags_split_on_commas() -> Result<(), clap::Error> {
    let args = parse(&["--destination-metric-tags", "env:prod,team:sre"])?;
    assert_eq!(
        args.destination_metric_tags,
        vec!["env:prod".to_owned(), "team:sre".to_owned()]
    );
    Ok(())
}

#[test]
fn granularity_divisor_parses() -> Result<(), clap::Error> {
    let args = parse(&["--granularity-divisor", "6"])?;
    assert_eq!(args.granularity_divisor.get(), 6);
    Ok(())
}

#[test]
fn granularity_divisor_rejects_zero() {
    assert!(parse(&["--granularity-divisor", "0"]).is_err());
}

#[test]
fn granularity_divisor_rejects_garbage() {
    assert!(parse(&["--granularity-divisor", "six"]).is_err());
}

#[test]
fn window_bounds_parse_as_epoch_seconds() -> Result<(), clap::Error> {
    let args = parse(&["--start-time", "1583603820", "--end-time", "1583607420"])?;
    assert_eq!(args.start_time, Some(1_583_603_820));
    assert_eq!(args.end_time, Some(1_583_607_420));
    Ok(())
}
