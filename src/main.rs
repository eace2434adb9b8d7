
use infixcalc::{CalculationMode, Calculator};
use infixcalc::display::format_result;
use infixcalc::parsing::operator::Operator;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::info;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const SUCCESS_MARK: char = '✓';

const EXAMPLES: [&str; 4] = [
  "5 + 3 * 2",
  "(10 + 20) * 3",
  "15 / 3 + 2 * 4",
  "((5 + 3) * 2) - 10 / 5",
];

/// Evaluates arithmetic expressions with +, -, *, / and parentheses.
///
/// With no expressions given, starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Report NaN and infinite results as errors.
  #[arg(long)]
  strict_finite: bool,

  /// Maximum number of nested parentheses to accept.
  #[arg(long, value_name = "N")]
  max_depth: Option<usize>,

  /// Also print how each expression was grouped.
  #[arg(long)]
  ast: bool,

  /// Expressions to evaluate.
  expressions: Vec<String>,
}

impl Args {
  fn calculation_mode(&self) -> CalculationMode {
    CalculationMode::new()
      .with_strict_finite(self.strict_finite)
      .with_max_depth(self.max_depth)
  }
}

fn main() -> anyhow::Result<ExitCode> {
  env_logger::init();
  let args = Args::parse();
  let calculator = Calculator::new(args.calculation_mode());
  info!("calculation mode: {:?}", calculator.mode());

  let stdout = io::stdout();
  let mut out = stdout.lock();
  if args.expressions.is_empty() {
    run_interactive(&calculator, args.ast, &mut io::stdin().lock(), &mut out)?;
    return Ok(ExitCode::SUCCESS);
  }

  let mut all_succeeded = true;
  for expression in &args.expressions {
    all_succeeded &= evaluate_and_print(&calculator, expression, args.ast, &mut out)?;
  }
  Ok(if all_succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Prints the result of one expression, returning whether it
/// succeeded.
fn evaluate_and_print(
  calculator: &Calculator,
  expression: &str,
  show_ast: bool,
  out: &mut impl Write,
) -> anyhow::Result<bool> {
  match calculator.calculate(expression) {
    Ok(value) => {
      writeln!(out, "{} {} = {}", SUCCESS_MARK, expression, format_result(value))?;
      if show_ast {
        // calculate() succeeded, so parse() cannot fail.
        if let Ok(expr) = calculator.parse(expression) {
          writeln!(out, "  grouped as: {}", expr)?;
        }
      }
      Ok(true)
    }
    Err(err) => {
      writeln!(out, "Error: {}", err)?;
      Ok(false)
    }
  }
}

fn run_interactive(
  calculator: &Calculator,
  show_ast: bool,
  input: &mut impl BufRead,
  out: &mut impl Write,
) -> anyhow::Result<()> {
  print_welcome(out)?;
  let mut line = String::new();
  loop {
    write!(out, "\nEnter expression: ")?;
    out.flush()?;
    line.clear();
    let bytes_read = input.read_line(&mut line).context("failed to read from stdin")?;
    if bytes_read == 0 {
      break;
    }
    let expression = line.trim();
    if expression.eq_ignore_ascii_case("exit") || expression.eq_ignore_ascii_case("quit") {
      writeln!(out, "Thank you for using the calculator. Goodbye!")?;
      break;
    }
    if expression.is_empty() {
      writeln!(out, "Please enter an expression")?;
      continue;
    }
    evaluate_and_print(calculator, expression, show_ast, out)?;
  }
  Ok(())
}

fn print_welcome(out: &mut impl Write) -> io::Result<()> {
  let rule = "=".repeat(60);
  writeln!(out, "{rule}")?;
  writeln!(out, "{:^60}", "INFIX CALCULATOR")?;
  writeln!(out, "{rule}")?;
  writeln!(out, "Supported operations: {} ( )", Operator::ALL.iter().join(" "))?;
  writeln!(out, "Examples:")?;
  for example in EXAMPLES {
    writeln!(out, "  {example}")?;
  }
  writeln!(out, "Type 'exit' or 'quit' to close the calculator")?;
  writeln!(out, "{rule}")
}
