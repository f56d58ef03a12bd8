use anyhow::{Context, bail};
use clap::Parser;
use fastlines::{Encoding, LineReader, LineSequence, Options};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const STDIN: &str = "-";

#[derive(Parser)]
#[command(name = "fastlines")]
#[command(version, about = "Read the lines of a text file")]
struct Args {
    /// File to read, `-` for standard input. Defaults to the `path` of the configuration
    path: Option<PathBuf>,
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Replace invalid UTF-8 instead of failing
    #[arg(long)]
    lossy: bool,
    /// Do not decompress gzip files
    #[arg(long)]
    raw: bool,
    /// Report failures on standard error and print what could be read
    #[arg(long)]
    lenient: bool,
    /// Only print the number of lines
    #[arg(long)]
    count: bool,
    /// Save the effective options into the configuration file
    #[arg(long)]
    write_config: bool,
}

impl Args {
    fn options(&self, mut options: Options) -> Options {
        if let Some(path) = &self.path {
            options.path = Some(path.clone());
        }
        if self.lossy {
            options.encoding = Encoding::Utf8Lossy;
        }
        if self.raw {
            options.decompress = false;
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(Options::config_path);
    let options = args.options(Options::load(&config_path));
    if args.write_config {
        options
            .save(&config_path)
            .with_context(|| format!("Unable to save {config_path:?}"))?;
    }

    let Some(path) = options.path.clone() else {
        bail!("No file to read, give a path or set `path` in {config_path:?}");
    };

    let reader = LineReader::from(&options);
    let lines = read(&reader, &path, args.lenient)?;

    let mut out = BufWriter::new(io::stdout().lock());
    if args.count {
        writeln!(out, "{}", lines.line_count())?;
    } else {
        for line in &lines {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn read(reader: &LineReader, path: &Path, lenient: bool) -> anyhow::Result<LineSequence> {
    if path.as_os_str() == STDIN {
        let stdin = io::stdin().lock();
        if lenient {
            return Ok(reader.read_all_from(stdin, STDIN));
        }
        return Ok(reader.read_from(stdin, STDIN)?);
    }
    if lenient {
        Ok(reader.read_all_lines(path))
    } else {
        Ok(reader.try_read_all_lines(path)?)
    }
}
