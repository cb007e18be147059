//! Line-oriented command grammar of the toolbox.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CommandError;

/// Where a matrix comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Values typed by the user; missing values are read from later lines.
    Manual {
        rows: usize,
        cols: usize,
        values: Vec<f64>,
    },
    Random {
        rows: usize,
        cols: usize,
        min: f64,
        max: f64,
    },
    Load(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create(Source),
    Show,
    Save(PathBuf),
    Add(Source),
    Subtract(Source),
    Multiply(Source),
    Transpose,
    Determinant,
    Inverse,
    Clear,
    Help,
    Quit,
}

pub const HELP: &str = "\
=== Matrix Toolbox ===
  new <rows> <cols> [values...]     enter a matrix manually
  random <rows> <cols> <min> <max>  generate a random matrix
  load <file>                       load a matrix from a file
  show                              print the current matrix
  save <file>                       save the current matrix
  add <source>                      add another matrix
  sub <source>                      subtract another matrix
  mul <source>                      multiply by another matrix
  transpose                         transpose the current matrix
  det                               determinant (square only)
  inv                               inverse (square, non-singular only)
  clear                             release the current matrix
  help                              show this menu
  quit                              exit
<source> is one of: new ..., random ..., load ...";

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut tokens = line.split_ascii_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();
        let command = match keyword.to_ascii_lowercase().as_str() {
            "new" | "random" | "load" => Command::Create(Source::parse(keyword, &args)?),
            "show" | "print" => no_args(Command::Show, &args)?,
            "save" => Command::Save(path_arg(&args)?),
            "add" => Command::Add(operand(&args)?),
            "sub" | "subtract" => Command::Subtract(operand(&args)?),
            "mul" | "multiply" => Command::Multiply(operand(&args)?),
            "transpose" | "t" => no_args(Command::Transpose, &args)?,
            "det" | "determinant" => no_args(Command::Determinant, &args)?,
            "inv" | "inverse" => no_args(Command::Inverse, &args)?,
            "clear" | "free" => no_args(Command::Clear, &args)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

impl Source {
    fn parse(keyword: &str, args: &[&str]) -> Result<Source, CommandError> {
        match keyword.to_ascii_lowercase().as_str() {
            "new" => {
                let rows = number(args.first(), "rows")?;
                let cols = number(args.get(1), "cols")?;
                let values = args
                    .iter()
                    .skip(2)
                    .map(|v| number(Some(v), "value"))
                    .collect::<Result<Vec<f64>, _>>()?;
                Ok(Source::Manual { rows, cols, values })
            }
            "random" => {
                if let Some(extra) = args.get(4) {
                    return Err(CommandError::UnexpectedArgument(extra.to_string()));
                }
                let rows = number(args.first(), "rows")?;
                let cols = number(args.get(1), "cols")?;
                let min = finite(args.get(2), "min")?;
                let max = finite(args.get(3), "max")?;
                Ok(Source::Random {
                    rows,
                    cols,
                    min,
                    max,
                })
            }
            "load" => Ok(Source::Load(path_arg(args)?)),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn operand(args: &[&str]) -> Result<Source, CommandError> {
    let (keyword, rest) = args
        .split_first()
        .ok_or(CommandError::MissingArgument("operand (new, random or load)"))?;
    Source::parse(keyword, rest)
}

fn no_args(command: Command, args: &[&str]) -> Result<Command, CommandError> {
    match args.first() {
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
        None => Ok(command),
    }
}

fn path_arg(args: &[&str]) -> Result<PathBuf, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument("file")),
        [path] => Ok(PathBuf::from(path)),
        [_, extra, ..] => Err(CommandError::UnexpectedArgument(extra.to_string())),
    }
}

fn number<T: FromStr>(token: Option<&&str>, name: &'static str) -> Result<T, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(name))?;
    token.parse().map_err(|_| CommandError::InvalidNumber {
        name,
        value: token.to_string(),
    })
}

fn finite(token: Option<&&str>, name: &'static str) -> Result<f64, CommandError> {
    let value: f64 = number(token, name)?;
    if !value.is_finite() {
        return Err(CommandError::InvalidNumber {
            name,
            value: value.to_string(),
        });
    }
    Ok(value)
}
