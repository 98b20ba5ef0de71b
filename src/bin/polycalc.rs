use polycalc::{
    display::{
        unicode::{significant, MAX_SIGNIFICANT_DIGITS},
        DisplayOptions, DEFAULT_PRECISION,
    },
    Polynomial,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const USAGE: &str = "Usage: polycalc [-v|--verbose] [--precision=N] [--derivative] [--integral] [--at=X] <c0> <c1> ... <cn>
Coefficients are given highest degree first: `polycalc 2 -3 1` is 2x² - 3x + 1";

/// Parsed command-line options
struct Options {
    verbose: bool,
    precision: usize,
    derivative: bool,
    integral: bool,
    at: Option<f64>,
    coefficients: Vec<f64>,
}

/// A negative number such as `-3` or `-.5` is a coefficient, not a flag
fn is_number(arg: &str) -> bool {
    let digits = arg.strip_prefix('-').unwrap_or(arg);
    digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        verbose: false,
        precision: DEFAULT_PRECISION,
        derivative: false,
        integral: false,
        at: None,
        coefficients: Vec::new(),
    };

    for arg in args {
        if is_number(&arg) {
            let value = arg
                .parse::<f64>()
                .map_err(|_| format!("Invalid coefficient: {arg}"))?;
            options.coefficients.push(value);
            continue;
        }

        if let Some(option) = arg.strip_prefix("--precision=") {
            options.precision = match option.parse::<usize>() {
                Ok(precision) if (1..=MAX_SIGNIFICANT_DIGITS).contains(&precision) => precision,
                _ => return Err(format!("Invalid precision value: {option}")),
            };
            continue;
        }

        if let Some(option) = arg.strip_prefix("--at=") {
            let x = option
                .parse::<f64>()
                .map_err(|_| format!("Invalid x value: {option}"))?;
            options.at = Some(x);
            continue;
        }

        match arg.as_str() {
            "-v" | "--verbose" => options.verbose = true,
            "--derivative" => options.derivative = true,
            "--integral" => options.integral = true,
            _ => return Err(format!("Unknown argument: {arg}")),
        }
    }

    Ok(options)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("{USAGE}");
        std::process::exit(0);
    }

    let options = match parse_args(args.into_iter()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(1);
        }
    };

    let log_level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let polynomial = match Polynomial::new(options.coefficients) {
        Ok(polynomial) => polynomial,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::debug!("parsed {polynomial:?}, degree {}", polynomial.degree());

    let style = DisplayOptions::default().with_precision(options.precision);
    println!("P(x) = {}", polynomial.equation_with(&style));

    if options.derivative {
        let derivative = polynomial.differentiate();
        println!("P'(x) = {}", derivative.equation_with(&style));
    }

    if options.integral {
        let integral = polynomial.integrate(0.0);
        println!("∫P(x)dx = {} + C", integral.equation_with(&style));
    }

    if let Some(x) = options.at {
        let y = polynomial.value(x);
        println!(
            "P({}) = {}",
            significant(x, options.precision),
            significant(y, options.precision)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        parse_args(args.iter().map(ToString::to_string))
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("3"));
        assert!(is_number("-3"));
        assert!(is_number("-.5"));
        assert!(is_number("2.5e3"));
        assert!(!is_number("-v"));
        assert!(!is_number("--at=1"));
    }

    #[test]
    fn test_parse_args() {
        let options = parse(&["-v", "1", "-1.5", "--precision=5", "--at=2", "--derivative"]).unwrap();
        assert!(options.verbose);
        assert!(options.derivative);
        assert!(!options.integral);
        assert_eq!(options.precision, 5);
        assert_eq!(options.at, Some(2.0));
        assert_eq!(options.coefficients, vec![1.0, -1.5]);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse(&["1", "abc"]).is_err());
        assert!(parse(&["1", "-2x"]).is_err());
        assert!(parse(&["--precision=0", "1"]).is_err());
        assert!(parse(&["--precision=18", "1"]).is_err());
        assert!(parse(&["--precision=70000", "1"]).is_err());
        assert_eq!(parse(&["--precision=17", "1"]).unwrap().precision, 17);
        assert!(parse(&["--at=pi", "1"]).is_err());
    }
}
