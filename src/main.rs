use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use compass_utils::commands;
use compass_utils::config::DEFAULT_CONFIG_SUFFIX;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "compass-util")]
#[command(about = "Compass provisioning helper utilities", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a "YYYY-MM-DD HH:MM:SS" datetime
    ParseDatetime {
        /// Datetime text
        text: String,
    },

    /// Parse a "start,end" datetime range (either side may be empty)
    ParseRange {
        /// Range text
        text: String,
    },

    /// Convert a time interval such as "1d 2h" to seconds
    Interval {
        /// Interval tokens, e.g. 1w 2d -3h 30m 15s
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Recursively merge SOURCE into TARGET (both JSON files)
    Merge {
        /// JSON document to merge into
        target: String,

        /// JSON document to merge from
        source: String,

        /// Keep TARGET values when both sides define a key
        #[arg(long)]
        no_override: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Parse a "name=value;name=value" request argument string
    ParseArgs {
        /// Argument text
        text: String,

        /// Output format: json or text
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Hash a password
    Encrypt {
        /// Value to hash
        value: String,

        /// Base64 salt (random if omitted)
        #[arg(long)]
        salt: Option<String>,
    },

    /// Check a password against a hash
    Verify {
        /// Value to check
        value: String,

        /// Hash produced by `encrypt`
        hash: String,
    },

    /// Load switch and machine records from switch files
    Switches {
        /// Switch file(s); .gz and .zst are decompressed
        #[arg(required = true)]
        files: Vec<String>,

        /// Export file path (prints a summary when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Export format: json or csv
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Load a directory of declarative config files
    LoadConfigs {
        /// Config directory
        dir: String,

        /// File name suffix to load
        #[arg(long, default_value = DEFAULT_CONFIG_SUFFIX)]
        suffix: String,

        /// JSON file with default values every config starts from
        #[arg(long)]
        defaults: Option<String>,
    },

    /// Execute a command on a remote host over SSH
    Exec {
        /// Remote host (host or host:port)
        #[arg(long)]
        host: String,

        /// Remote user
        #[arg(long, default_value = "root")]
        user: String,

        /// Password authentication
        #[arg(long, conflicts_with = "keyfile")]
        password: Option<String>,

        /// Private key file (defaults to /root/.ssh/id_rsa)
        #[arg(long)]
        keyfile: Option<String>,

        /// Run detached with nohup and return immediately
        #[arg(long)]
        nowait: bool,

        /// Command to execute
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::ParseDatetime { text } => commands::datetime::run_parse(&text),
        Commands::ParseRange { text } => commands::datetime::run_range(&text),
        Commands::Interval { tokens } => commands::interval::run(&tokens),
        Commands::Merge {
            target,
            source,
            no_override,
            output,
        } => commands::merge::run(&target, &source, !no_override, output.as_deref()),
        Commands::ParseArgs { text, format } => commands::args::run(&text, &format),
        Commands::Encrypt { value, salt } => commands::crypt::run_encrypt(&value, salt.as_deref()),
        Commands::Verify { value, hash } => commands::crypt::run_verify(&value, &hash),
        Commands::Switches {
            files,
            output,
            format,
        } => commands::switches::run(&files, output.as_deref(), &format),
        Commands::LoadConfigs {
            dir,
            suffix,
            defaults,
        } => commands::configs::run(&dir, &suffix, defaults.as_deref()),
        Commands::Exec {
            host,
            user,
            password,
            keyfile,
            nowait,
            command,
        } => {
            commands::exec::run(
                &command.join(" "),
                &host,
                &user,
                password.as_deref(),
                keyfile.as_deref(),
                nowait,
            )
            .await
        }
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "compass-util", &mut std::io::stdout());
            Ok(())
        }
    }
}
