use std::{fs::OpenOptions, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use fat16_inspect::{Fat16Image, ScanOptions};
use tracing_subscriber::EnvFilter;

mod report;

/// Prints the boot sector and root directory of a FAT16 image
#[derive(Debug, Clone, Parser)]
#[command(name = "fat16info", version)]
pub struct Args {
    /// Path to the FAT16 image
    image: PathBuf,
    /// Stop at the first root directory slot starting with 0x00
    #[arg(long)]
    stop_at_end: bool,
    /// Leave out entries marked as deleted (0xE5)
    #[arg(long)]
    hide_deleted: bool,
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_stop_at_end_marker(self.stop_at_end)
            .with_include_deleted(!self.hide_deleted)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default_level = if args.verbose { "trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match inspect(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[fat16info] {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn inspect(args: &Args) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .read(true)
        .open(&args.image)
        .with_context(|| format!("cannot open image {}", args.image.display()))?;
    tracing::debug!(image = %args.image.display(), "opened image");

    let mut image = Fat16Image::open(file).context("cannot read boot sector")?;
    print!("{}", report::boot_sector_table(image.boot_sector()));
    println!();

    let entries = image
        .root_directory(args.scan_options())
        .context("cannot read root directory")?
        .collect::<Result<Vec<_>, _>>()
        .context("cannot read root directory")?;
    tracing::debug!(count = entries.len(), "root directory scanned");
    for entry in entries.iter() {
        if entry.modification_time.decode().to_naive().is_none() {
            tracing::warn!(
                slot = entry.index,
                name = %entry.display_name(),
                "modification time is not a valid calendar date"
            );
        }
    }
    print!("{}", report::directory_table(&entries));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["fat16info", "disk.img", "--stop-at-end"]).unwrap();
        assert_eq!(args.image, PathBuf::from("disk.img"));
        let options = args.scan_options();
        assert!(options.stop_at_end_marker);
        assert!(options.include_deleted);

        let args = Args::try_parse_from(["fat16info", "disk.img", "--hide-deleted", "-v"]).unwrap();
        assert!(args.verbose);
        assert!(!args.scan_options().include_deleted);
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(Args::try_parse_from(["fat16info"]).is_err());
        assert!(Args::try_parse_from(["fat16info", "a.img", "b.img"]).is_err());
    }

    #[test]
    fn test_missing_image() {
        let args = Args::try_parse_from(["fat16info", "/nonexistent/fat16.img"]).unwrap();
        let err = inspect(&args).unwrap_err();
        assert!(format!("{err:#}").starts_with("cannot open image /nonexistent/fat16.img"));
    }
}
