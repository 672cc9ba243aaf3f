use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use similar::{ChangeTag, TextDiff};

use formatrelay::utils::absolute_path;
use formatrelay::{Dispatcher, FormatError, FormatRequest, SearchPath, Selection};

mod cli;
use cli::{Cli, Commands};

fn read_buffer(file: &Path, from_stdin: bool) -> io::Result<String> {
    if from_stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(file)
    }
}

fn load_dispatcher(config: Option<&Path>, file: &Path) -> io::Result<Dispatcher> {
    let start_dir = file.parent().unwrap_or(Path::new("."));
    let (cfg, cfg_path) = formatrelay::config::load(config, start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(Dispatcher::new(cfg, SearchPath::from_env()))
}

fn parse_selections(raw: &[String]) -> Result<Vec<Selection>, String> {
    raw.iter().map(|s| s.parse::<Selection>()).collect()
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn print_diff(file_path: &str, original: &str, formatted: &str) {
    let diff = TextDiff::from_lines(original, formatted);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),
                };

                print!("{}{}{}", style, sign, change.value());

                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
            }
        }
    }
}

/// Text to keep after formatting; "nothing to replace" keeps the input.
fn formatted_or_input(result: Result<Option<String>, FormatError>, input: &str) -> String {
    match result {
        Ok(Some(output)) => output,
        Ok(None) => {
            log::info!("Formatter produced no output; nothing to replace");
            input.to_string()
        }
        Err(e) => fail(e),
    }
}

fn run_format(
    dispatcher: &Dispatcher,
    file: &Path,
    syntax: Option<&str>,
    selections: &[Selection],
    from_stdin: bool,
    to_stdout: bool,
    check: bool,
) -> io::Result<()> {
    let input = read_buffer(file, from_stdin)?;
    let request = FormatRequest::new(file, &input)
        .with_syntax(syntax)
        .with_selections(selections);

    let output = formatted_or_input(dispatcher.format(&request), &input);

    if check {
        if input != output {
            print_diff(&file.display().to_string(), &input, &output);
            std::process::exit(1);
        }
        if !from_stdin {
            println!("File is correctly formatted");
        }
    } else if from_stdin || to_stdout {
        print!("{output}");
    } else if input != output {
        fs::write(file, &output)?;
        println!("Formatted {}", file.display());
    } else {
        println!("{} is already formatted", file.display());
    }

    Ok(())
}

fn run_on_save(
    dispatcher: &Dispatcher,
    file: &Path,
    syntax: Option<&str>,
    from_stdin: bool,
) -> io::Result<()> {
    let input = read_buffer(file, from_stdin)?;
    let request = FormatRequest::new(file, &input).with_syntax(syntax);

    let output = dispatcher.on_pre_save(&request).unwrap_or_else(|e| fail(e));

    match output {
        Some(output) if from_stdin => print!("{output}"),
        None if from_stdin => print!("{input}"),
        Some(output) if output != input => {
            fs::write(file, &output)?;
            println!("Formatted {}", file.display());
        }
        _ => log::debug!("Nothing to do for {}", file.display()),
    }

    Ok(())
}

fn run_resolve(dispatcher: &Dispatcher, file: &Path, syntax: Option<&str>) {
    let request = FormatRequest::new(file, "").with_syntax(syntax);
    let formatter = dispatcher
        .formatter_for_request(&request)
        .unwrap_or_else(|e| fail(e));

    match dispatcher.resolve(formatter, file) {
        Some(binary) => println!("{}\t{}", formatter, binary.display()),
        None => fail(FormatError::BinaryNotFound(formatter)),
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            file,
            syntax,
            selections,
            stdin,
            stdout,
            check,
        } => {
            let selections = parse_selections(&selections).unwrap_or_else(|e| fail(e));
            let file: PathBuf = absolute_path(&file)?;
            let dispatcher = load_dispatcher(cli.config.as_deref(), &file)?;
            run_format(
                &dispatcher,
                &file,
                syntax.as_deref(),
                &selections,
                stdin,
                stdout,
                check,
            )
        }
        Commands::OnSave {
            file,
            syntax,
            stdin,
        } => {
            let file = absolute_path(&file)?;
            let dispatcher = load_dispatcher(cli.config.as_deref(), &file)?;
            run_on_save(&dispatcher, &file, syntax.as_deref(), stdin)
        }
        Commands::Resolve { file, syntax } => {
            let file = absolute_path(&file)?;
            let dispatcher = load_dispatcher(cli.config.as_deref(), &file)?;
            run_resolve(&dispatcher, &file, syntax.as_deref());
            Ok(())
        }
    }
}
