use colored::*;
use flipper_pinout::{
    connection_kind_names, render_boxed_pinout, render_full_reference, render_wiring_diagram,
    ConnectionKind, Error,
};
use std::io::{self, BufRead, Write};
use structopt::StructOpt;

mod shell;

fn main() {
    let opt = Opt::from_args();

    init_logging(opt.debug);
    log::debug!("{:?}", opt);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = run(&opt, stdin.lock(), &mut stdout.lock(), &mut stderr.lock());
    std::process::exit(exit_code(result))
}

/// A reader closing the pipe early is not a failure.
fn exit_code(result: io::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => 0,
        Err(e) => {
            log::error!("couldn't write output: {}", e);
            1
        }
    }
}

/// `RUST_LOG` filters, raised to debug by `--debug`.
fn init_logging(debug: bool) {
    let mut builder = pretty_env_logger::formatted_builder();

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}

/// Exit status: 1 when the selector is not a known kind, 0 otherwise.
fn run<R: BufRead, W: Write, E: Write>(
    opt: &Opt,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<i32> {
    if opt.interactive {
        shell::Session::new(opt.connection, opt.width).run(input, out)?;
        return Ok(0);
    }

    match select(opt.kind.as_deref(), opt.width) {
        Ok(text) => {
            writeln!(out, "{}", text)?;
            Ok(0)
        }
        Err(e) => {
            report(&e, err)?;
            Ok(1)
        }
    }
}

/// What to print for the positional argument: usage without one, the full
/// reference for `full`, otherwise the diagrams of a connection kind.
fn select(selector: Option<&str>, width: usize) -> Result<String, Error> {
    let selector = match selector {
        Some(selector) => selector,
        None => return Ok(usage()),
    };

    if selector.eq_ignore_ascii_case("full") {
        return Ok(render_full_reference());
    }

    let kind: ConnectionKind = selector.parse()?;
    Ok(diagrams(kind, width))
}

fn usage() -> String {
    format!(
        "Usage: flipper-pinout <KIND>\nAvailable connection kinds: {}\n\nOr use 'full' for the complete pin reference",
        connection_kind_names()
    )
}

/// Boxed pinout followed by the wiring diagram.
pub(crate) fn diagrams(kind: ConnectionKind, width: usize) -> String {
    format!(
        "{}\n\n{}",
        render_boxed_pinout(kind, width),
        render_wiring_diagram(kind)
    )
}

pub(crate) fn report<W: Write>(error: &Error, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}: {}", "error".red().bold(), error)?;
    writeln!(out, "Available connection kinds: {}", connection_kind_names())
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "flipper-pinout",
    about = "Pinout and wiring diagrams for Flipper Zero GPIO accessories"
)]
struct Opt {
    /// Connection kind (uart, ftdi, direct, usb), or `full` for the complete pin reference
    #[structopt(name = "KIND")]
    kind: Option<String>,

    /// Inner width of the pinout box
    #[structopt(short = "w", long = "width", default_value = "60")]
    width: usize,

    /// Start the interactive shell
    #[structopt(short = "i", long = "interactive")]
    interactive: bool,

    /// Connection kind preselected in the interactive shell
    #[structopt(short = "c", long = "connection")]
    connection: Option<ConnectionKind>,

    /// Log at debug level
    #[structopt(short = "d", long = "debug")]
    debug: bool,
}
