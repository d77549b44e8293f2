//! List command - print the solution as text.

use std::io::{self, BufWriter, Write};
use std::ops::ControlFlow;

use hanoi::move_generator::MoveGenerator;
use hanoi::tower::{validate_disk_count, MAX_DISKS};

use super::Command;
use crate::cli::Hanoi;

pub struct ListCommand {
    pub disks: i64,
}

fn write_moves<W: Write>(disk_count: usize, out: &mut W) -> io::Result<u64> {
    let mut generator = MoveGenerator::new(disk_count)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    write!(out, "{}", generator.store().to_ascii())?;

    let mut write_result = Ok(());
    let moves = generator
        .run(|descriptor, _| match writeln!(out, "{}", descriptor) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                // Stop early, e.g. when piped into `head`
                write_result = Err(e);
                ControlFlow::Break(())
            }
        })
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    write_result?;

    write!(out, "{}", generator.store().to_ascii())?;
    writeln!(out, "Solved {} disks in {} moves.", disk_count, moves)?;
    Ok(moves)
}

impl Command for ListCommand {
    fn execute(self) {
        let disk_count = match validate_disk_count(self.disks, MAX_DISKS) {
            Ok(count) => count,
            Err(e) => {
                println!("{}\n", e);
                Hanoi::print_usage();
                std::process::exit(1);
            }
        };

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        if let Err(e) = write_moves(disk_count, &mut out).and_then(|_| out.flush()) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
