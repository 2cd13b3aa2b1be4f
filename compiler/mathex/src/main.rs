use std::io::{self, Read, Write};

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use mathex_ast::{collect_letters, AstPrinter, Node};
use mathex_lexer::Lexer;
use mathex_parser::{
    parse_str, render_snippet, Associativity, Bindings, Diagnostic, ParserConfig,
    DEFAULT_MAX_NESTING_DEPTH, DEFAULT_MAX_TREE_DEPTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
    Outline,
}

/// A failure reported on stderr
#[derive(Debug, Clone, PartialEq)]
enum Failure {
    /// A lex or parse error, already rendered as a diagnostic
    Syntax(String),
    /// Reading input or writing output failed
    Io(String),
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Failure::Syntax(_) => 1,
            Failure::Io(_) => 2,
        }
    }

    fn report(&self) {
        match self {
            Failure::Syntax(diagnostic) => eprintln!("{diagnostic}"),
            Failure::Io(message) => eprintln!("error: {message}"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mathex",
    version,
    about = "Parse mathematical expressions into expression trees",
    long_about = "mathex reads an expression such as 'sin x + 2 * [y - 1] ^ 2' and prints\n\
        the tree it parses to, fully parenthesized.\n\n\
        EXAMPLES:\n\
        \n  mathex parse '2 + 3 * 4'                 Print (2 + (3 * 4))\n\
        \n  mathex parse --var x=5 'x + 1'           Substitute x before printing\n\
        \n  mathex parse --json 'sqrt x'             Print the tree as JSON\n\
        \n  echo '2 ^ 3 ^ 2' | mathex parse          Read the expression from stdin\n\
        \n  mathex tokens 'x2 + 1'                   List the tokens"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an expression and print its tree
    Parse(ParseArgs),

    /// Print the tokens of an expression, one per line
    Tokens(InputArgs),
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// Expression to read (reads from stdin if not provided)
    #[arg(value_name = "EXPR")]
    expr: Option<String>,
}

#[derive(Debug, Args, Clone)]
struct ParseArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Replace a letter with a number while parsing
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Print the tree as JSON
    #[arg(long, conflicts_with = "outline")]
    json: bool,

    /// Print the tree as an indented outline
    #[arg(long)]
    outline: bool,

    /// Group chains of '^' to the right instead of the left
    #[arg(long = "right-assoc-power")]
    right_assoc_power: bool,

    /// Read a letter followed by a number, as in 'x2', as an indexed letter
    #[arg(long = "indexed-letters")]
    indexed_letters: bool,

    /// Maximum nesting of groups, signs and functions
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Maximum height of the parsed tree
    #[arg(long = "max-tree-depth", value_name = "N", default_value_t = DEFAULT_MAX_TREE_DEPTH)]
    max_tree_depth: usize,
}

impl ParseArgs {
    fn config(&self) -> ParserConfig {
        let associativity = if self.right_assoc_power {
            Associativity::Right
        } else {
            Associativity::Left
        };
        ParserConfig::default()
            .with_max_depth(self.max_depth)
            .with_max_tree_depth(self.max_tree_depth)
            .with_power_associativity(associativity)
            .with_indexed_letters(self.indexed_letters)
    }

    fn bindings(&self) -> Bindings {
        self.vars.iter().cloned().collect()
    }

    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.outline {
            OutputMode::Outline
        } else {
            OutputMode::Text
        }
    }
}

/// Parses a `NAME=VALUE` binding from the command line
fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))?;
    let name = name.trim();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {}
        _ => return Err(format!("invalid letter name '{name}'")),
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init();
}

fn read_source(input: &InputArgs) -> Result<String, Failure> {
    match &input.expr {
        Some(expr) => Ok(expr.clone()),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| Failure::Io(format!("failed to read from stdin: {e}")))?;
            Ok(buf)
        }
    }
}

fn write_output(out: &mut impl Write, text: &str) -> Result<(), Failure> {
    out.write_all(text.as_bytes())
        .map_err(|e| Failure::Io(format!("failed to write output: {e}")))
}

fn write_tree(out: &mut impl Write, node: &Node, mode: OutputMode) -> Result<(), Failure> {
    let text = match mode {
        OutputMode::Text => format!("{node}\n"),
        OutputMode::Outline => AstPrinter::new().print(node),
        OutputMode::Json => {
            let json = mathex_ast::to_json(node)
                .map_err(|e| Failure::Io(format!("failed to serialize JSON: {e}")))?;
            format!("{json}\n")
        }
    };
    write_output(out, &text)
}

fn run_parse(args: &ParseArgs, source: &str, out: &mut impl Write) -> Result<(), Failure> {
    let node = match parse_str(source, args.bindings(), args.config()) {
        Ok(Some(node)) => node,
        Ok(None) => {
            info!("empty input");
            return Ok(());
        }
        Err(e) => return Err(Failure::Syntax(render_snippet(&e.diagnostic(), source))),
    };

    match collect_letters(&node) {
        Ok(letters) if !letters.is_empty() => info!("unbound letters: {}", letters.join(", ")),
        Ok(_) => {}
        Err(e) => warn!("failed to collect letters: {e}"),
    }

    write_tree(out, &node, args.output_mode())
}

fn run_tokens(source: &str, out: &mut impl Write) -> Result<(), Failure> {
    for result in Lexer::new(source) {
        let token = result
            .map_err(|e| Failure::Syntax(render_snippet(&Diagnostic::from(&e), source)))?;
        write_output(out, &format!("{}\t{}\n", token.location, token.token_type))?;
    }
    Ok(())
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let input = match &cli.command {
        Command::Parse(args) => &args.input,
        Command::Tokens(input) => input,
    };
    let result = read_source(input).and_then(|source| {
        let mut stdout = io::stdout().lock();
        match &cli.command {
            Command::Parse(args) => run_parse(args, &source, &mut stdout),
            Command::Tokens(_) => run_tokens(&source, &mut stdout),
        }
    });

    let rc = match result {
        Ok(()) => 0,
        Err(failure) => {
            failure.report();
            failure.exit_code()
        }
    };
    if cli.verbose > 0 {
        eprintln!("note: finished with exit code {rc}");
    }
    rc
}

fn main() {
    std::process::exit(run_cli());
}
