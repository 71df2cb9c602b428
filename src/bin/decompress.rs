use huffman_coding::HuffmanError;
use huffman_coding::cli::{FileArgs, init_logging};
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn main() -> Result<(), HuffmanError> {
    let Some(args) = FileArgs::parse_or_usage() else {
        return Ok(());
    };
    init_logging(args.verbose);

    let input = BufReader::new(File::open(&args.infile)?);
    let output = BufWriter::new(File::create(&args.outfile)?);
    huffman_coding::decompress(input, output)?;

    info!(
        "{} -> {}",
        args.infile.display(),
        args.outfile.display()
    );
    Ok(())
}
