use argh::FromArgs;
use log::warn;

use base::options::QueueOptions;

#[derive(Debug, Eq, PartialEq)]
pub struct ArgumentParseError;

#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand)]
pub enum SubCommandEnum {
    List(ListArguments),
    Drain(DrainArguments),
}

#[derive(FromArgs, Debug, PartialEq)]
/// admit records and print them in priority order
#[argh(subcommand, name = "list")]
pub struct ListArguments {
    /// records file path (`.json` or `.jsonl`)
    #[argh(option)]
    pub records: String,

    /// override the queue capacity
    #[argh(option)]
    pub capacity: Option<u32>,

    /// print at most `limit` records
    #[argh(option)]
    pub limit: Option<u32>,
}

#[derive(FromArgs, Debug, PartialEq)]
/// admit records, then release them one by one
#[argh(subcommand, name = "drain")]
pub struct DrainArguments {
    /// records file path (`.json` or `.jsonl`)
    #[argh(option)]
    pub records: String,

    /// override the queue capacity
    #[argh(option)]
    pub capacity: Option<u32>,

    /// number of records to release, all by default
    #[argh(option)]
    pub count: Option<usize>,
}

#[derive(FromArgs, Debug)]
/// bounded admissions queue CLI
pub struct Arguments {
    #[argh(subcommand)]
    pub cmd: SubCommandEnum,

    /// queue options file path in TOML
    #[argh(option, short = 'o')]
    pub options: Option<String>,

    /// verbose
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl Arguments {
    pub fn get_queue_options(
        &self,
        capacity: Option<u32>,
        render_limit: Option<u32>,
    ) -> Result<QueueOptions, ArgumentParseError> {
        let mut options = match &self.options {
            Some(path) => {
                let content = match std::fs::read_to_string(path) {
                    Ok(content) => content,
                    Err(err) => {
                        warn!("failed to read the options file {path}: {err}");
                        return Err(ArgumentParseError);
                    }
                };
                match QueueOptions::from_toml(&content) {
                    Ok(options) => options,
                    Err(err) => {
                        warn!("failed to parse the TOML queue options: {err}");
                        return Err(ArgumentParseError);
                    }
                }
            }
            None => QueueOptions::default(),
        };
        if let Some(capacity) = capacity {
            options.capacity = capacity;
        }
        if render_limit.is_some() {
            options.render_limit = render_limit;
        }
        if let Err(err) = options.check() {
            warn!("{err}");
            return Err(ArgumentParseError);
        }
        Ok(options)
    }
}
