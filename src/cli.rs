//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "cailnorm", about = "CAIL2018 corpus normalization tool.")]
/// Holds every command that is callable by the `cailnorm` command.
pub enum Cailnorm {
    #[structopt(about = "Normalize the CAIL2018 dataset into a flat JSON corpus")]
    Normalize(Normalize),
    #[structopt(about = "Preview the first records of a JSON file")]
    Sample(Sample),
    #[structopt(about = "Preview the first lines of a large text file")]
    Head(Head),
}

#[derive(Debug, StructOpt)]
/// Normalize command and parameters.
pub struct Normalize {
    #[structopt(
        parse(from_os_str),
        help = "dataset root (contains first_stage/, restData/, ...)",
        default_value = "cail2018_data/final_all_data"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "output corpus file",
        default_value = "knowledge_base/processed_cases.json"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Sample command and parameters.
pub struct Sample {
    #[structopt(parse(from_os_str), help = "JSON file to preview")]
    pub file: PathBuf,
    #[structopt(
        short = "n",
        long = "records",
        help = "number of records to show",
        default_value = "2"
    )]
    pub records: usize,
}

#[derive(Debug, StructOpt)]
/// Head command and parameters.
pub struct Head {
    #[structopt(parse(from_os_str), help = "file to preview")]
    pub file: PathBuf,
    #[structopt(
        short = "n",
        long = "lines",
        help = "number of lines to show",
        default_value = "20"
    )]
    pub lines: usize,
}
