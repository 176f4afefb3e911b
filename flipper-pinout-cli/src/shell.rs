use crate::{diagrams, report};
use colored::*;
use flipper_pinout::{connection_kind_names, render_full_reference, ConnectionKind};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "flipper-pinout> ";

const COMMANDS: [(&str, &str); 8] = [
    ("help", "show this help"),
    ("status", "show the connection status"),
    ("connect [KIND]", "connect, optionally choosing the connection kind"),
    ("disconnect", "drop the connection"),
    ("pinout [KIND]", "pinout and wiring for KIND or the selected kind"),
    ("full", "complete pin reference"),
    ("kinds", "list connection kinds"),
    ("exit", "leave the shell"),
];

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Line based shell around a simulated link to the Flipper.
///
/// No transport is attached: connecting only records the chosen kind and
/// flips the connected flag.
#[derive(Debug)]
pub struct Session {
    kind: Option<ConnectionKind>,
    connected: bool,
    width: usize,
}

impl Session {
    pub fn new(kind: Option<ConnectionKind>, width: usize) -> Self {
        Session {
            kind,
            connected: false,
            width,
        }
    }

    /// Reads commands until `exit` or end of input. Any open connection is
    /// dropped before returning.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", "=== Flipper Zero pinout shell ===".bold())?;
        print_help(out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    writeln!(out)?;
                    break;
                }
            };

            if self.execute(&line, out)? == Flow::Exit {
                break;
            }
        }

        self.disconnect(out)?;
        writeln!(out, "Goodbye!")
    }

    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(command) => command.to_ascii_lowercase(),
            None => return Ok(Flow::Continue),
        };
        let argument = words.next();

        log::debug!("command {:?} argument {:?}", command, argument);

        match command.as_str() {
            "exit" | "quit" | "q" => return Ok(Flow::Exit),
            "help" => print_help(out)?,
            "status" => self.status(out)?,
            "connect" => self.connect(argument, out)?,
            "disconnect" => {
                if !self.disconnect(out)? {
                    writeln!(out, "Not connected")?;
                }
            }
            "pinout" => self.pinout(argument, out)?,
            "full" => writeln!(out, "{}", render_full_reference())?,
            "kinds" => writeln!(
                out,
                "Available connection kinds: {}",
                connection_kind_names()
            )?,
            _ => writeln!(out, "Unknown command: {}. Type 'help' for help.", command)?,
        }

        Ok(Flow::Continue)
    }

    fn status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let state = if self.connected {
            "connected"
        } else {
            "disconnected"
        };
        let kind = self.kind.map_or("none", ConnectionKind::name);

        writeln!(out, "Status: {} (kind: {})", state, kind)
    }

    fn connect<W: Write>(&mut self, argument: Option<&str>, out: &mut W) -> io::Result<()> {
        if let Some(argument) = argument {
            let kind = match argument.parse::<ConnectionKind>() {
                Ok(kind) => kind,
                Err(e) => return report(&e, out),
            };

            if self.kind != Some(kind) {
                self.disconnect(out)?;
                self.kind = Some(kind);
            }
        }

        let kind = match self.kind {
            Some(kind) => kind,
            None => return no_kind_selected(out),
        };

        if self.connected {
            return writeln!(out, "Already connected via {}", kind);
        }

        log::info!("connecting via {}, no transport attached", kind);
        self.connected = true;
        writeln!(out, "Connected via {}", kind)
    }

    /// Returns whether there was a connection to drop.
    fn disconnect<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        if !self.connected {
            return Ok(false);
        }

        log::info!("disconnecting");
        self.connected = false;
        writeln!(out, "Disconnected")?;
        Ok(true)
    }

    fn pinout<W: Write>(&self, argument: Option<&str>, out: &mut W) -> io::Result<()> {
        let kind = match argument {
            Some(argument) => match argument.parse::<ConnectionKind>() {
                Ok(kind) => kind,
                Err(e) => return report(&e, out),
            },
            None => match self.kind {
                Some(kind) => kind,
                None => return no_kind_selected(out),
            },
        };

        writeln!(out, "{}", diagrams(kind, self.width))
    }
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Available commands:".bold())?;
    for (command, help) in COMMANDS.iter() {
        writeln!(out, "  {:<15} {}", command, help)?;
    }
    Ok(())
}

fn no_kind_selected<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "No connection kind selected, choose one of: {}",
        connection_kind_names()
    )
}
