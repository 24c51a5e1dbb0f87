//! Terminal-side collaborators: piped input, size detection, screen clearing
//! and the text-mode loop.

use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use terminal_size::{Height, Width, terminal_size};
use tracing::{debug, info};

use crate::application::{BoardSize, Simulation};
use crate::rendering;

/// Rows kept free below the board for the status line
const STATUS_ROWS: usize = 2;

/// Longest board-size line accepted on stdin
const MAX_PIPED_BYTES: u64 = 64;

/// Printed once the text loop ends
pub const STOPPED_MESSAGE: &str = "\nSimulation stopped.\n";

/// Read the first piped line on stdin; `None` when stdin is a terminal or empty
pub fn read_piped_input() -> Option<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return None;
    }

    match read_board_line(stdin.lock()) {
        Ok(line) => line,
        Err(err) => {
            debug!(%err, "could not read piped input");
            None
        }
    }
}

/// First line of `reader`, cut at `MAX_PIPED_BYTES`.
/// Returns without waiting for EOF, so an endless producer cannot stall startup.
fn read_board_line(reader: impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    reader.take(MAX_PIPED_BYTES).read_line(&mut line)?;
    Ok((!line.trim().is_empty()).then_some(line))
}

/// Board size that fills the attached terminal
pub fn detect_board_size() -> Option<BoardSize> {
    let (Width(cols), Height(rows)) = terminal_size()?;
    let height = usize::from(rows).saturating_sub(STATUS_ROWS);
    (cols > 0 && height > 0).then(|| BoardSize::new(usize::from(cols), height))
}

/// Clear the screen and home the cursor
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\x1B[2J\x1B[H")
}

/// Draw, wait, step until `stop` is raised or `limit` generations are done.
/// `stop` is only read between steps, so a transition in progress always finishes.
pub fn run_text_loop<W: Write>(
    sim: &mut Simulation,
    out: &mut W,
    stop: &AtomicBool,
    delay: Duration,
    limit: Option<u64>,
) -> io::Result<()> {
    loop {
        clear_screen(out)?;
        out.write_all(rendering::text::render_frame(sim.current(), sim.generation).as_bytes())?;
        out.flush()?;

        if stop.load(Ordering::SeqCst) || sim.reached_limit(limit) {
            break;
        }
        thread::sleep(delay);
        if stop.load(Ordering::SeqCst) {
            break;
        }
        sim.step();
    }

    info!(generation = sim.generation, "stopped");
    out.write_all(STOPPED_MESSAGE.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::StartPattern;
    use crate::domain::default_rule;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn block_sim() -> Simulation {
        let start = StartPattern::parse("block").unwrap();
        Simulation::new(BoardSize::new(20, 10), start, default_rule(), &mut StdRng::seed_from_u64(0))
    }

    /// Raises the stop flag once `frames` flushes have happened
    struct StopAfter<'a> {
        buf: Vec<u8>,
        stop: &'a AtomicBool,
        frames: usize,
    }

    impl Write for StopAfter<'_> {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.write(data)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.frames = self.frames.saturating_sub(1);
            if self.frames == 0 {
                self.stop.store(true, Ordering::SeqCst);
            }
            Ok(())
        }
    }

    #[test]
    fn test_first_line_only() {
        let input = Cursor::new("10 20\n10 20\n10 20\n");
        assert_eq!(read_board_line(input).unwrap().as_deref(), Some("10 20\n"));
    }

    #[test]
    fn test_endless_input_is_bounded() {
        let line = read_board_line(io::BufReader::new(io::repeat(b'7'))).unwrap().unwrap();
        assert_eq!(line.len() as u64, MAX_PIPED_BYTES);
    }

    #[test]
    fn test_blank_input_is_none() {
        assert_eq!(read_board_line(Cursor::new("")).unwrap(), None);
        assert_eq!(read_board_line(Cursor::new("  \n5 5\n")).unwrap(), None);
    }

    #[test]
    fn test_loop_stops_at_limit() {
        let mut sim = block_sim();
        let mut out = Vec::new();
        let stop = AtomicBool::new(false);

        run_text_loop(&mut sim, &mut out, &stop, Duration::ZERO, Some(3)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(sim.generation, 3);
        assert!(text.contains("Generation: 0\n"));
        assert!(text.contains("Generation: 3\n"));
        assert!(!text.contains("Generation: 4"));
        assert!(text.ends_with(STOPPED_MESSAGE));
    }

    #[test]
    fn test_raised_flag_stops_before_stepping() {
        let mut sim = block_sim();
        let mut out = Vec::new();
        let stop = AtomicBool::new(true);

        run_text_loop(&mut sim, &mut out, &stop, Duration::ZERO, None).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(sim.generation, 0);
        assert_eq!(text.matches("Generation:").count(), 1);
        assert!(text.ends_with("Generation: 0\n\nSimulation stopped.\n"));
    }

    #[test]
    fn test_interrupt_between_steps() {
        let mut sim = block_sim();
        let stop = AtomicBool::new(false);
        let mut out = StopAfter { buf: Vec::new(), stop: &stop, frames: 3 };

        run_text_loop(&mut sim, &mut out, &stop, Duration::ZERO, None).unwrap();
        let text = String::from_utf8(out.buf).unwrap();

        // Three frames drawn, two complete steps between them
        assert_eq!(sim.generation, 2);
        assert_eq!(text.matches("Generation:").count(), 3);
        assert_eq!(sim.current().len(), 4);
        assert!(text.ends_with(STOPPED_MESSAGE));
    }
}
