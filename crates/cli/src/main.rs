use log::{debug, info, warn};
use service::AdmissionQueue;
use std::path::PathBuf;
use std::str::FromStr;

use crate::args::{Arguments, SubCommandEnum};
use crate::read::read_records;

mod args;
mod read;

fn open_queue(
    args: &Arguments,
    records: &str,
    capacity: Option<u32>,
    limit: Option<u32>,
) -> AdmissionQueue {
    let options = args
        .get_queue_options(capacity, limit)
        .expect("failed to parse queue options");
    let mut queue = AdmissionQueue::new(&options).expect("failed to create the queue");
    let path = PathBuf::from_str(records).expect("failed to parse the records path");
    let records = read_records(&path).expect("failed to read the records file");
    let report = queue.admit_all(records);
    if report.rejected_full != 0 || report.rejected_null != 0 {
        warn!(
            "{} records rejected: {} over capacity, {} absent",
            report.rejected_full + report.rejected_null,
            report.rejected_full,
            report.rejected_null,
        );
    }
    info!(
        "{} records have been admitted (capacity: {})",
        report.admitted,
        queue.capacity()
    );
    queue
}

fn main() {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    match &args.cmd {
        SubCommandEnum::List(list) => {
            let queue = open_queue(&args, &list.records, list.capacity, list.limit);
            let listing = queue.listing(None);
            if !listing.is_empty() {
                println!("{listing}");
            }
        }
        SubCommandEnum::Drain(drain) => {
            let mut queue = open_queue(&args, &drain.records, drain.capacity, None);
            let count = drain.count.unwrap_or(queue.len());
            for _ in 0..count {
                match queue.pop() {
                    Ok(record) => println!("{record}"),
                    Err(err) => {
                        warn!("{err}");
                        break;
                    }
                }
            }
            info!("{} records are still waiting", queue.len());
        }
    }
}
