use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::exit;

use bmpmask::{DecodeRequest, FormatError, Limits, RowPadding, Unstoppable};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{Level, error, info};

#[rustfmt::skip]
fn create_cmd_args() -> Command {
    Command::new("bmpmask")
        .about("Print the non-white pixels of a 24/32-bit BMP as text")
        .arg(Arg::new("input")
            .help("BMP file to read")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("aligned-rows")
            .long("aligned-rows")
            .action(ArgAction::SetTrue)
            .help("Skip the padding that aligns each stored row to 4 bytes"))
        .arg(Arg::new("headers-only")
            .long("headers-only")
            .action(ArgAction::SetTrue)
            .help("Print the header summary without decoding pixels"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("LIMITS")
            .help("Refuse images wider than this")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("LIMITS")
            .help("Refuse images taller than this")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("max-pixels")
            .long("max-pixels")
            .help_heading("LIMITS")
            .help("Refuse images with more pixels than this")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("max-pixel-data")
            .long("max-pixel-data")
            .help_heading("LIMITS")
            .help("Refuse images whose pixel data is larger than this many bytes")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}

fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
    }
    info!("Log level: {}", log_level);
}

fn parse_limits(options: &ArgMatches) -> Limits {
    Limits {
        max_width: options.get_one::<u64>("max-width").copied(),
        max_height: options.get_one::<u64>("max-height").copied(),
        max_pixels: options.get_one::<u64>("max-pixels").copied(),
        max_pixel_data_bytes: options.get_one::<u64>("max-pixel-data").copied(),
    }
}

fn run(options: &ArgMatches) -> Result<(), FormatError> {
    let input = options
        .get_one::<PathBuf>("input")
        .expect("clap enforces the required input argument");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.get_flag("headers-only") {
        let file = File::open(input).map_err(FormatError::Io)?;
        let (file_header, info_header) = bmpmask::read_headers(BufReader::new(file))?;
        writeln!(out, "{} bytes", file_header.file_size).map_err(FormatError::Io)?;
        writeln!(
            out,
            "{}x{}px {}-bit",
            info_header.width, info_header.height, info_header.bit_count
        )
        .map_err(FormatError::Io)?;
        return Ok(());
    }

    let limits = parse_limits(options);
    let row_padding = if options.get_flag("aligned-rows") {
        info!("Skipping row padding");
        RowPadding::Aligned
    } else {
        RowPadding::Packed
    };

    let image = DecodeRequest::new()
        .with_limits(&limits)
        .with_row_padding(row_padding)
        .decode_file(input, Unstoppable)?;

    writeln!(out, "{} bytes", image.file_header.file_size).map_err(FormatError::Io)?;
    writeln!(
        out,
        "{}x{}px {}-bit",
        image.info_header.width, image.info_header.height, image.info_header.bit_count
    )
    .map_err(FormatError::Io)?;
    bmpmask::render(&image, &mut out).map_err(FormatError::Io)?;
    Ok(())
}

fn main() {
    let options = create_cmd_args().get_matches();

    setup_logger(&options);

    if let Err(e) = run(&options) {
        error!("Could not decode bitmap, reason: {e}");
        exit(1);
    }
}
