use speakfilter::{vocab, Lexicon, Offenses, WordSplitter, DEFAULT_FILTER_SIZE, DEFAULT_TABLE_SIZE};
use std::io::{self, Read, Write};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

struct Args {
    stats: bool,
    json: bool,
    verbose: bool,
    help: bool,
    version: bool,
    table_size: usize,
    filter_size: usize,
    badspeak: PathBuf,
    newspeak: PathBuf,
}

fn parse_size(flag: &str, value: Option<&String>) -> usize {
    let Some(value) = value else {
        eprintln!("Error: {} requires a value", flag);
        std::process::exit(1);
    };
    match value.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: {} expects a positive integer, got '{}'", flag, value);
            std::process::exit(1);
        }
    }
}

fn parse_path(flag: &str, value: Option<&String>) -> PathBuf {
    match value {
        Some(v) => PathBuf::from(v),
        None => {
            eprintln!("Error: {} requires a value", flag);
            std::process::exit(1);
        }
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args {
        stats: false,
        json: false,
        verbose: false,
        help: false,
        version: false,
        table_size: DEFAULT_TABLE_SIZE,
        filter_size: DEFAULT_FILTER_SIZE,
        badspeak: env_path("SPEAKFILTER_BADSPEAK", vocab::DEFAULT_BADSPEAK),
        newspeak: env_path("SPEAKFILTER_NEWSPEAK", vocab::DEFAULT_NEWSPEAK),
    };

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-V" | "--version" => args.version = true,
            "-h" | "--help" => args.help = true,
            "-s" | "--stats" => args.stats = true,
            "-v" | "--verbose" => args.verbose = true,
            "--json" => {
                args.stats = true;
                args.json = true;
            }
            "-t" | "--table-size" => {
                i += 1;
                args.table_size = parse_size("--table-size", argv.get(i));
            }
            "-f" | "--filter-size" => {
                i += 1;
                args.filter_size = parse_size("--filter-size", argv.get(i));
            }
            "--badspeak" => {
                i += 1;
                args.badspeak = parse_path("--badspeak", argv.get(i));
            }
            "--newspeak" => {
                i += 1;
                args.newspeak = parse_path("--newspeak", argv.get(i));
            }
            s => {
                eprintln!("Error: unknown option: {}", s);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    args
}

fn print_help() {
    eprintln!(
        "Usage: speakfilter [options] < input\n\
         \n\
         Report forbidden words read from stdin.\n\
         \n\
         Options:\n\
         \x20 -s, --stats              Print lookup statistics instead of the notice\n\
         \x20 --json                   Print statistics as JSON (implies -s)\n\
         \x20 -t, --table-size <n>     Hash table buckets (default: {})\n\
         \x20 -f, --filter-size <n>    Bloom filter bits (default: {})\n\
         \x20 --badspeak <path>        Forbidden words file (default: {})\n\
         \x20 --newspeak <path>        Translation pairs file (default: {})\n\
         \x20 -v, --verbose            Log progress to stderr (honours RUST_LOG)\n\
         \x20 -V, --version            Show version\n\
         \x20 -h, --help               Show this help\n\
         \n\
         Vocabulary paths may also be set with SPEAKFILTER_BADSPEAK and\n\
         SPEAKFILTER_NEWSPEAK.",
        DEFAULT_TABLE_SIZE,
        DEFAULT_FILTER_SIZE,
        vocab::DEFAULT_BADSPEAK,
        vocab::DEFAULT_NEWSPEAK,
    );
}

fn init_tracing(verbose: bool) {
    // Quiet unless -v; RUST_LOG only refines what -v shows.
    let filter = if verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> speakfilter::Result<()> {
    let mut lex = Lexicon::new(args.table_size, args.filter_size)?;
    vocab::load(&mut lex, &args.badspeak, &args.newspeak)?;

    let splitter = WordSplitter::new()?;
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .map_err(|source| speakfilter::Error::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    let words = splitter.bytes(&input);

    let mut offenses = Offenses::new();
    let false_positives = offenses.scan(&mut lex, words.iter().map(String::as_str))?;
    lex.record(offenses.stats);
    tracing::info!(
        words = words.len(),
        forbidden = offenses.forbidden.size(),
        translatable = offenses.translatable.size(),
        false_positives = false_positives,
        "scanned input"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if args.json {
        writeln!(out, "{}", lex.report().to_json())
    } else if args.stats {
        out.write_all(lex.report().render().as_bytes())
    } else {
        offenses.write(&mut out)
    };
    written.map_err(|source| speakfilter::Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

fn main() {
    let args = parse_args();

    if args.version {
        println!("speakfilter {}", VERSION);
        return;
    }
    if args.help {
        print_help();
        return;
    }

    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
