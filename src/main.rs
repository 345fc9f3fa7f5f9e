use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossfactor::{
  Advance, ColumnInputs, FactorError, FactorOptions, FactorResult,
  Factorization, Locale, MAX_PRACTICE_BOUND, PolynomialCoeffs, StepSession,
  VisualData, enumerate_divisor_pairs, factorize_coeffs, format_factorization,
  format_polynomial, parse_assignment, parse_polynomial, practice_problem,
  presets, verification_lines,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Language of the narration (en, zh)
  #[arg(long, global = true, env = "CROSSFACTOR_LOCALE", default_value = "en")]
  locale: Locale,

  /// Largest coefficient magnitude the search accepts
  #[arg(
    long,
    global = true,
    default_value_t = FactorOptions::default().max_magnitude,
    value_parser = parse_magnitude
  )]
  max_magnitude: i128,

  /// Print results as JSON
  #[arg(long, global = true)]
  json: bool,

  /// Increase log verbosity (-v, -vv, -vvv)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
  /// Factor a polynomial such as "2x^2 + 7xy + 3y^2 + x + 4y - 1"
  Solve {
    /// The polynomial to factor
    expression: Option<String>,
    /// Set a coefficient directly, e.g. --coeff A=2 --coeff K=-1
    #[arg(short, long = "coeff", value_name = "KEY=VALUE", allow_hyphen_values = true)]
    coeffs: Vec<String>,
    /// Show the result with its checks instead of the narrated steps
    #[arg(long)]
    brief: bool,
  },
  /// List the ordered divisor pairs of an integer
  Divisors {
    #[arg(allow_hyphen_values = true)]
    n: i128,
  },
  /// Show the built-in example polynomials
  Examples,
  /// Generate a factorable practice polynomial
  Practice {
    /// Seed for a reproducible problem
    #[arg(long)]
    seed: Option<u64>,
    /// Largest magnitude of each factor coefficient
    #[arg(
      long,
      default_value_t = 5,
      value_parser = clap::value_parser!(u32).range(1..=MAX_PRACTICE_BOUND as i64)
    )]
    bound: u32,
    /// Also print the split the problem was built from
    #[arg(long)]
    answer: bool,
  },
  /// Work through the steps interactively
  Walk {
    /// The polynomial to factor
    expression: String,
  },
}

fn parse_magnitude(text: &str) -> Result<i128, String> {
  let value: i128 = text.parse().map_err(|e| format!("{e}"))?;
  if value < 0 {
    return Err(format!("{value} is negative"));
  }
  Ok(value)
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let options = FactorOptions {
    locale: cli.locale,
    max_magnitude: cli.max_magnitude,
  };

  match cli.command {
    Commands::Solve {
      expression,
      coeffs,
      brief,
    } => {
      let coeffs = read_coeffs(expression.as_deref(), &coeffs)?;
      tracing::info!(polynomial = %format_polynomial(&coeffs), "solving");
      let result = factorize_coeffs(&coeffs, &options);
      print_result(&result, &coeffs, &options, brief, cli.json)
    }
    Commands::Divisors { n } => {
      let pairs = enumerate_divisor_pairs(n);
      if cli.json {
        println!("{}", serde_json::to_string(&pairs)?);
      } else {
        for (p, q) in pairs {
          println!("{p} × {q}");
        }
      }
      Ok(ExitCode::SUCCESS)
    }
    Commands::Examples => {
      for preset in presets() {
        let result = factorize_coeffs(&preset.coeffs, &options);
        let outcome = match &result {
          FactorResult::Success(f) => format_factorization(&f.group1, &f.group2),
          FactorResult::Failure { reason } => {
            reason.message(options.locale).to_string()
          }
        };
        println!("{}  →  {}", preset.label, outcome);
      }
      Ok(ExitCode::SUCCESS)
    }
    Commands::Practice {
      seed,
      bound,
      answer,
    } => {
      let problem = practice_problem(seed, i128::from(bound));
      if cli.json {
        println!("{}", serde_json::to_string_pretty(&problem.coeffs)?);
      } else {
        println!("{}", format_polynomial(&problem.coeffs));
      }
      if answer {
        println!(
          "{}",
          format_factorization(&problem.group1, &problem.group2)
        );
      }
      Ok(ExitCode::SUCCESS)
    }
    Commands::Walk { expression } => {
      let coeffs = parse_polynomial(&expression)?;
      match factorize_coeffs(&coeffs, &options) {
        FactorResult::Success(factorization) => {
          walk(factorization, options.locale)?;
          Ok(ExitCode::SUCCESS)
        }
        FactorResult::Failure { reason } => {
          eprintln!("{}", reason.message(options.locale));
          Ok(ExitCode::FAILURE)
        }
      }
    }
  }
}

/// Coefficients from a polynomial expression, then `KEY=VALUE` overrides.
fn read_coeffs(
  expression: Option<&str>,
  assignments: &[String],
) -> Result<PolynomialCoeffs> {
  let mut coeffs = match expression {
    Some(text) => parse_polynomial(text)
      .with_context(|| format!("could not read polynomial {text:?}"))?,
    None if assignments.is_empty() => {
      anyhow::bail!("give a polynomial or at least one --coeff KEY=VALUE")
    }
    None => PolynomialCoeffs::default(),
  };
  for assignment in assignments {
    let (key, value) = parse_assignment(assignment)?;
    coeffs.set(key, value);
  }
  Ok(coeffs)
}

fn print_result(
  result: &FactorResult,
  coeffs: &PolynomialCoeffs,
  options: &FactorOptions,
  brief: bool,
  json: bool,
) -> Result<ExitCode> {
  if json {
    println!("{}", serde_json::to_string_pretty(result)?);
    return Ok(if result.is_success() {
      ExitCode::SUCCESS
    } else {
      ExitCode::FAILURE
    });
  }

  let factorization = match result {
    FactorResult::Success(factorization) => factorization,
    FactorResult::Failure { reason } => {
      eprintln!("{}", reason.message(options.locale));
      return Ok(ExitCode::FAILURE);
    }
  };

  println!("{}", format_polynomial(coeffs));
  if brief {
    print_brief(factorization, options.locale);
  } else {
    for (index, step) in factorization.steps.iter().enumerate() {
      println!();
      println!("[{}/{}] {}", index + 1, factorization.steps.len(), step.description);
      if let Some(visual) = &step.visual {
        print!("{}", render_diagram(visual));
      }
    }
  }
  Ok(ExitCode::SUCCESS)
}

fn print_brief(factorization: &Factorization, locale: Locale) {
  let (g1, g2) = (&factorization.group1, &factorization.group2);
  println!("= {}", format_factorization(g1, g2));
  println!();
  print!(
    "{}",
    render_diagram(&VisualData {
      term_left: Some("x".into()),
      term_mid: Some("y".into()),
      term_right: Some(if locale == Locale::Zh { "常数" } else { "const" }.into()),
      col_left: Some([g1.a, g2.a]),
      col_mid: Some([g1.b, g2.b]),
      col_right: Some([g1.c, g2.c]),
      cross_calc: None,
    })
  );
  println!();
  for line in verification_lines(g1, g2, locale) {
    println!("  {line}");
  }
}

/// The cross diagram as three text rows: labels, first factor, second factor.
fn render_diagram(visual: &VisualData) -> String {
  let columns: Vec<(&str, [i128; 2])> = [
    (&visual.term_left, visual.col_left),
    (&visual.term_mid, visual.col_mid),
    (&visual.term_right, visual.col_right),
  ]
  .into_iter()
  .filter_map(|(label, values)| {
    values.map(|v| (label.as_deref().unwrap_or(""), v))
  })
  .collect();

  let mut out = String::new();
  for row in 0..3 {
    out.push_str("   ");
    for (label, values) in &columns {
      let cell = match row {
        0 => label.to_string(),
        _ => values[row - 1].to_string(),
      };
      out.push_str(&format!("{cell:>8}"));
    }
    out.push('\n');
  }
  if let Some(calc) = &visual.cross_calc {
    for line in calc.lines() {
      out.push_str(&format!("   {line}\n"));
    }
  }
  out
}

fn prompt_pair(label: &str, input: &mut impl BufRead) -> Result<Option<[String; 2]>> {
  print!("  {label}: ");
  std::io::stdout().flush()?;
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  let mut parts = line.split_whitespace().map(str::to_string);
  Ok(Some([
    parts.next().unwrap_or_default(),
    parts.next().unwrap_or_default(),
  ]))
}

fn walk(factorization: Factorization, locale: Locale) -> Result<()> {
  let stdin = std::io::stdin();
  let mut input = stdin.lock();
  let mut session = StepSession::new(factorization);

  loop {
    let Some(step) = session.current().cloned() else {
      return Ok(());
    };
    println!();
    println!("[{}/{}] {}", session.position() + 1, session.len(), step.description);
    if let Some(visual) = &step.visual {
      print!("{}", render_diagram(visual));
    }

    let mut inputs = ColumnInputs::default();
    if step.interactive {
      let constant = if locale == Locale::Zh { "常数" } else { "const" };
      let slots = [
        (step.expected_left.is_some(), "x", &mut inputs.left),
        (step.expected_mid.is_some(), "y", &mut inputs.mid),
        (step.expected_right.is_some(), constant, &mut inputs.right),
      ];
      for (wanted, label, slot) in slots {
        if !wanted {
          continue;
        }
        let Some(pair) = prompt_pair(label, &mut input)? else {
          return Ok(());
        };
        *slot = Some(pair);
      }
    } else if session.position() + 1 < session.len() {
      print!("  ↵ ");
      std::io::stdout().flush()?;
      let mut line = String::new();
      if input.read_line(&mut line)? == 0 {
        return Ok(());
      }
    }

    match session.advance(&inputs) {
      Ok(Advance::Finished) => return Ok(()),
      Ok(Advance::Moved) | Ok(Advance::Revealed) => {}
      Err(FactorError::InputMismatch { .. }) => {
        println!(
          "  {}",
          match locale {
            Locale::En => "That does not match, try again",
            Locale::Zh => "输入有误，请重试",
          }
        );
      }
      Err(e) => return Err(e.into()),
    }
  }
}
