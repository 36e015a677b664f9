use clap::{Parser as ClapParser, Subcommand};
use scim_filter_parser::{
    ParserMode, ScimVersion,
    cli::{self, CheckOptions, CheckResult, CliError, OutputFormat},
};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "scimfilter")]
#[command(about = "Parse and validate SCIM (RFC 7644) filters and attribute paths")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a filter or path and print its canonical form
    Check {
        /// The filter or path (reads from stdin if not provided)
        input: Option<String>,

        /// Parse a filter or a PATCH path
        #[arg(short, long, value_enum, default_value_t = ParserMode::Filter)]
        mode: ParserMode,

        /// SCIM protocol version
        #[arg(long, value_enum, default_value_t = ScimVersion::V2)]
        scim_version: ScimVersion,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the tokens of a filter or path
    Tokens {
        /// The filter or path (reads from stdin if not provided)
        input: Option<String>,

        /// SCIM protocol version
        #[arg(long, value_enum, default_value_t = ScimVersion::V2)]
        scim_version: ScimVersion,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            input,
            mode,
            scim_version,
            format,
            pretty,
            syntax_only,
        } => read_input(input).and_then(|input| {
            run_check(CheckOptions {
                input,
                mode,
                version: scim_version,
                format,
                pretty,
                syntax_only,
            })
        }),
        Commands::Tokens {
            input,
            scim_version,
        } => read_input(input).and_then(|input| run_tokens(&input, scim_version)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_input(input: Option<String>) -> Result<String, CliError> {
    match input {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(options: CheckOptions) -> Result<(), CliError> {
    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Text(text) => println!("{}", text),
        CheckResult::Json(output) => {
            let json = if options.pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_tokens(input: &str, version: ScimVersion) -> Result<(), CliError> {
    for line in cli::execute_tokens(input, version)? {
        println!("{}", line);
    }
    Ok(())
}
