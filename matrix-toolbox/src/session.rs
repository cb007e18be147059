//! Interactive session: owns the current matrix and dispatches commands to the kernel.

use std::io::{BufRead, Write};

use fastrand::Rng;
use matrix_core::{codec, DenseMatrix};

use crate::command::{Command, Source, HELP};
use crate::error::{CommandError, Result, ToolboxError};
use crate::render::{format_general, render_matrix};

pub struct Session<R, W> {
    input: R,
    out: W,
    current: Option<DenseMatrix>,
    rng: Rng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, rng: Rng) -> Self {
        Self {
            input,
            out,
            current: None,
            rng,
        }
    }

    pub fn current(&self) -> Option<&DenseMatrix> {
        self.current.as_ref()
    }

    /// Reads and executes commands until `quit` or end of input.
    ///
    /// Command and kernel failures are reported to the user and the loop goes on;
    /// only I/O failures on the session streams end it.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", HELP)?;
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let command = match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.out, "Error: {}", err)?;
                    continue;
                }
            };
            log::debug!("Executing {:?}", command);
            match self.execute(command) {
                Ok(()) => {}
                Err(ToolboxError::Io(err)) => return Err(err.into()),
                Err(err) => {
                    log::warn!("Command failed: {}", err);
                    writeln!(self.out, "Error: {}", err)?;
                }
            }
        }
        writeln!(self.out, "Bye.")?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Create(source) => {
                let matrix = self.materialize(source)?;
                writeln!(
                    self.out,
                    "Current matrix is {}x{}",
                    matrix.rows(),
                    matrix.cols()
                )?;
                self.current = Some(matrix);
            }
            Command::Show => match &self.current {
                Some(matrix) => write!(self.out, "{}", render_matrix(matrix))?,
                None => writeln!(self.out, "No current matrix.")?,
            },
            Command::Save(path) => {
                codec::save(self.require_current()?, &path)?;
                log::info!("Matrix saved to {}", path.display());
                writeln!(self.out, "Saved to '{}'", path.display())?;
            }
            Command::Add(source) => self.binary(source, "addition", DenseMatrix::add)?,
            Command::Subtract(source) => {
                self.binary(source, "subtraction", DenseMatrix::subtract)?
            }
            Command::Multiply(source) => {
                self.binary(source, "multiplication", DenseMatrix::multiply)?
            }
            Command::Transpose => {
                let transposed = self.require_current()?.transpose()?;
                writeln!(
                    self.out,
                    "Transposed. Matrix is now {}x{}",
                    transposed.rows(),
                    transposed.cols()
                )?;
                self.current = Some(transposed);
            }
            Command::Determinant => {
                let det = matrix_solver::determinant(self.require_current()?)?;
                writeln!(self.out, "Determinant = {}", format_general(det, 12))?;
            }
            Command::Inverse => {
                let inv = matrix_solver::inverse(self.require_current()?)?;
                writeln!(self.out, "Inverse:")?;
                write!(self.out, "{}", render_matrix(&inv))?;
            }
            Command::Clear => match self.current.take() {
                Some(_) => writeln!(self.out, "Matrix released.")?,
                None => writeln!(self.out, "No current matrix.")?,
            },
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn require_current(&self) -> Result<&DenseMatrix> {
        self.current
            .as_ref()
            .ok_or_else(|| CommandError::NoCurrentMatrix.into())
    }

    fn binary(
        &mut self,
        source: Source,
        label: &str,
        op: fn(&DenseMatrix, &DenseMatrix) -> matrix_core::Result<DenseMatrix>,
    ) -> Result<()> {
        self.require_current()?;
        let other = self.materialize(source)?;
        let result = match &self.current {
            Some(current) => op(current, &other)?,
            None => return Err(CommandError::NoCurrentMatrix.into()),
        };
        writeln!(self.out, "Result ({}):", label)?;
        write!(self.out, "{}", render_matrix(&result))?;
        Ok(())
    }

    /// Turns a source into a matrix, prompting for any manual values not given yet.
    fn materialize(&mut self, source: Source) -> Result<DenseMatrix> {
        match source {
            Source::Manual {
                rows,
                cols,
                mut values,
            } => {
                let mut matrix = DenseMatrix::create(rows, cols)?;
                let expected = matrix.data().len();
                if values.len() > expected {
                    return Err(CommandError::TooManyValues {
                        expected,
                        found: values.len(),
                    }
                    .into());
                }
                while values.len() < expected {
                    let idx = values.len();
                    write!(self.out, "A[{}][{}] = ", idx / cols, idx % cols)?;
                    self.out.flush()?;
                    let line = self.read_line()?.ok_or(CommandError::UnexpectedEof)?;
                    for token in line.split_ascii_whitespace() {
                        if values.len() == expected {
                            break;
                        }
                        match token.parse::<f64>() {
                            Ok(v) => values.push(v),
                            Err(_) => writeln!(self.out, "Invalid number '{}', try again", token)?,
                        }
                    }
                }
                matrix.data_mut().copy_from_slice(&values);
                Ok(matrix)
            }
            Source::Random {
                rows,
                cols,
                min,
                max,
            } => Ok(DenseMatrix::random(rows, cols, min, max, &mut self.rng)?),
            Source::Load(path) => {
                let matrix = codec::load(&path).inspect_err(|err| {
                    log::warn!("Unable to load '{}': {}", path.display(), err);
                })?;
                log::info!("Matrix loaded from {}", path.display());
                Ok(matrix)
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_core::Matrix;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Option<DenseMatrix>) {
        let mut out = Vec::new();
        let mut session = Session::new(Cursor::new(script.as_bytes()), &mut out, Rng::with_seed(1));
        session.run().unwrap();
        let current = session.current().cloned();
        drop(session);
        (String::from_utf8(out).unwrap(), current)
    }

    #[test]
    fn test_manual_entry_and_determinant() {
        let (out, current) = run_script("new 2 2 2 1 5 3\ndet\nquit\n");
        assert!(out.contains("Current matrix is 2x2"));
        assert!(out.contains("Determinant = 1\n"));
        assert_eq!(
            current,
            Some(DenseMatrix::from_rows(&[vec![2.0, 1.0], vec![5.0, 3.0]]).unwrap())
        );
    }

    #[test]
    fn test_manual_entry_prompts_for_missing_values() {
        let (out, current) = run_script("new 2 2 1\n2 x\n3 4\nshow\n");
        assert!(out.contains("A[0][1] = "));
        assert!(out.contains("Invalid number 'x', try again"));
        assert!(out.contains("A[1][0] = "));
        assert_eq!(current.unwrap().data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_multiply_with_manual_operand() {
        let (out, _) = run_script("new 2 2 1 2 3 4\nmul new 2 2 5 6 7 8\n");
        assert!(out.contains("Result (multiplication):"));
        assert!(out.contains("        19         22 \n        43         50 \n"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (out, current) = run_script("det\nnew 2 3 1 2 3 4 5 6\ninv\nadd new 1 1 5\ntranspose\n");
        assert!(out.contains("Error: No current matrix"));
        assert!(out.contains("Error: Matrix is not square (2x3)"));
        assert!(out.contains("Error: Dimension mismatch in add"));
        assert!(out.contains("Transposed. Matrix is now 3x2"));
        assert_eq!(current.unwrap().dims(), (3, 2));
        assert!(out.ends_with("Bye.\n"));
    }

    #[test]
    fn test_singular_inverse_reported() {
        let (out, _) = run_script("new 2 2 1 0 0 0\ninv\n");
        assert!(out.contains("Error: Matrix is singular"));
    }

    #[test]
    fn test_random_and_clear() {
        let (out, current) = run_script("random 3 2 5 1\nclear\nclear\n");
        assert!(out.contains("Current matrix is 3x2"));
        assert!(out.contains("Matrix released."));
        assert!(out.contains("No current matrix."));
        assert!(current.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "matrix-toolbox-session-{}-{}.txt",
            std::process::id(),
            fastrand::u64(..)
        ));
        let script = format!(
            "new 1 3 0.5 -1 2\nsave {p}\nclear\nload {p}\n",
            p = path.display()
        );
        let (out, current) = run_script(&script);
        std::fs::remove_file(&path).ok();
        assert!(out.contains("Saved to"));
        assert_eq!(current.unwrap().data(), &[0.5, -1.0, 2.0]);
    }

    #[test]
    fn test_unexpected_eof_during_entry() {
        let (out, current) = run_script("new 2 2 1\n");
        assert!(out.contains("Error: Input ended before the matrix was complete"));
        assert!(current.is_none());
    }
}
