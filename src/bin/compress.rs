use huffman_coding::HuffmanError;
use huffman_coding::cli::{FileArgs, init_logging, ratio};
use log::info;
use std::fs::{self, File};
use std::io::BufWriter;

fn main() -> Result<(), HuffmanError> {
    let Some(args) = FileArgs::parse_or_usage() else {
        return Ok(());
    };
    init_logging(args.verbose);

    let input = fs::read(&args.infile)?;
    let output = BufWriter::new(File::create(&args.outfile)?);
    huffman_coding::compress(&input, output)?;

    let written = fs::metadata(&args.outfile)?.len() as usize;
    info!(
        "{} -> {}: {} bytes to {} bytes ({:.1}%)",
        args.infile.display(),
        args.outfile.display(),
        input.len(),
        written,
        ratio(input.len(), written)
    );
    Ok(())
}
