// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Compass CLI entrypoint.
//!
//! With a command argument the engine is asked once and the reply printed. Without one, an
//! interactive prompt reads commands from stdin; lines starting with `:` are handled by the
//! client itself (`:help` lists them).

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use compass::engine::{Client, Command, Engine, ReplyStatus};
use compass::query::{filter_resources, resolve_title, ResourceSearchMode};
use compass::render::{render_report, render_resources, RenderOptions};
use compass::{AppState, ClientConfig, ConfigError, Reply};

const LOG_ENV: &str = "COMPASS_LOG";
const PROMPT: &str = "compass> ";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--engine <path>] [--config <file.json>] [--json] [--verbose | --quiet] [<command>]\n\nWithout <command> an interactive prompt reads one command per line.\nCommands are sent to the engine as-is, e.g. LIST, LIST|TOPIC, SEARCH|Gra, PLAN|<title>,\nCRAM|<topic>|<minutes>, SUGGEST|<count>|<level>, TITLES. BACK is answered locally.\n\nEnvironment: COMPASS_ENGINE, COMPASS_TRIE_DEPTH, COMPASS_TRIE_CHILDREN, COMPASS_LOG."
    );
}

const REPL_HELP: &str = "\
:open <id>       show a resource and remember it for BACK
:add <id>        add a resource to the study session
:addall          add every resource of the current listing to the study session
:session         list the study session
:drop <n>        remove the n-th study session entry
:clear           empty the study session
:filter <text>   filter the current listing by title or topic
:plan <title>    PLAN for the closest matching title
:quit            leave";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    engine: Option<String>,
    config: Option<String>,
    json: bool,
    verbose: bool,
    quiet: bool,
    command: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--engine" => {
                if options.engine.is_some() {
                    return Err(());
                }
                options.engine = Some(args.next().ok_or(())?);
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--verbose" | "-v" => {
                if options.verbose {
                    return Err(());
                }
                options.verbose = true;
            }
            "--quiet" | "-q" => {
                if options.quiet {
                    return Err(());
                }
                options.quiet = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.command.is_some() {
                    return Err(());
                }
                options.command = Some(arg);
            }
        }
    }

    if options.verbose && options.quiet {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Json(serde_json::Error),
    Io(io::Error),
    Tracing(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "cannot encode reply as JSON: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Tracing(err) => write!(f, "failed to initialize logging: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Tracing(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), CliError> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| CliError::Tracing(err.to_string()))
}

fn load_config(options: &CliOptions) -> Result<ClientConfig, CliError> {
    let mut config = match &options.config {
        Some(path) => ClientConfig::load(Path::new(path))?,
        None => ClientConfig::default(),
    };
    config.apply_env()?;
    if let Some(engine) = &options.engine {
        config.engine = Some(PathBuf::from(engine));
    }
    Ok(config)
}

#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
    render: RenderOptions,
}

fn write_reply(out: &mut impl Write, reply: &Reply, output: Output) -> Result<(), CliError> {
    if output.json {
        writeln!(out, "{}", serde_json::to_string_pretty(reply)?)?;
        return Ok(());
    }

    match &reply.status {
        ReplyStatus::Unavailable { reason } => writeln!(out, "engine unavailable: {reason}")?,
        ReplyStatus::NoResults => writeln!(out, "no results")?,
        ReplyStatus::Malformed => writeln!(out, "engine reply could not be read (no table header)")?,
        ReplyStatus::Data if !reply.titles.is_empty() => {
            for title in &reply.titles {
                writeln!(out, "{title}")?;
            }
        }
        ReplyStatus::Data => writeln!(out, "{}", render_resources(reply.table.rows()))?,
    }
    if let Some(report) = &reply.report {
        writeln!(out, "\n{}", render_report(report, &output.render))?;
    }
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

fn handle_line<E: Engine>(
    client: &mut Client<E>,
    state: &mut AppState,
    line: &str,
    out: &mut impl Write,
    output: Output,
) -> Result<Flow, CliError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Flow::Continue);
    }
    let Some(local) = line.strip_prefix(':') else {
        let reply = client.execute(state, &Command::parse(line));
        write_reply(out, &reply, output)?;
        return Ok(Flow::Continue);
    };

    let (verb, arg) = local.split_once(' ').unwrap_or((local, ""));
    let arg = arg.trim();
    match verb {
        "q" | "quit" | "exit" => return Ok(Flow::Quit),
        "help" => writeln!(out, "{REPL_HELP}")?,
        "open" => match state.open(&arg.into()) {
            Some(resource) => {
                writeln!(out, "{}", render_resources(std::slice::from_ref(&resource)))?;
                if !resource.url().is_empty() {
                    writeln!(out, "{}", resource.url())?;
                }
            }
            None => writeln!(out, "unknown resource {arg:?}")?,
        },
        "add" => match state.add_to_study(&arg.into()) {
            Some(true) => writeln!(out, "added ({} in session)", state.study().len())?,
            Some(false) => writeln!(out, "already in the session")?,
            None => writeln!(out, "unknown resource {arg:?}")?,
        },
        "addall" => {
            let listed = state.view().resources().to_vec();
            let total = listed.len();
            let added = state.study_mut().add_all(listed);
            writeln!(out, "added {added} of {total} ({} in session)", state.study().len())?;
        }
        "clear" => {
            state.study_mut().clear();
            writeln!(out, "session cleared")?;
        }
        "session" => {
            writeln!(out, "{}", render_resources(state.study().items()))?;
            writeln!(out, "total: {} min", state.study().total_minutes())?;
        }
        "drop" => {
            let removed = arg
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| state.study_mut().remove(idx));
            match removed {
                Some(resource) => writeln!(out, "removed {}", resource.title())?,
                None => writeln!(out, "no session entry {arg:?}")?,
            }
        }
        "filter" => {
            match filter_resources(state.visible_resources(), arg, ResourceSearchMode::Substring, true) {
                Ok(found) => {
                    let found: Vec<_> = found.into_iter().cloned().collect();
                    writeln!(out, "{}", render_resources(&found))?;
                }
                Err(err) => writeln!(out, "invalid filter: {err}")?,
            }
        }
        "plan" => {
            let titles: Vec<&str> = state.master_library().iter().map(|r| r.title()).collect();
            let Some(title) = resolve_title(&titles, arg).map(str::to_owned) else {
                writeln!(out, "no title close to {arg:?}")?;
                return Ok(Flow::Continue);
            };
            let reply = client.execute(state, &Command::Plan { title });
            write_reply(out, &reply, output)?;
        }
        _ => writeln!(out, "unknown command :{verb} (try :help)")?,
    }
    Ok(Flow::Continue)
}

fn run_repl<E: Engine>(
    client: &mut Client<E>,
    state: &mut AppState,
    input: impl BufRead,
    out: &mut impl Write,
    output: Output,
) -> Result<(), CliError> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    for line in input.lines() {
        if let Flow::Quit = handle_line(client, state, &line?, out, output)? {
            return Ok(());
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn run(options: CliOptions) -> Result<(), CliError> {
    init_tracing(options.quiet, options.verbose)?;
    let config = load_config(&options)?;
    let output = Output {
        json: options.json,
        render: config.render,
    };

    let mut client = Client::new(config.process_engine());
    let mut state = AppState::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(command) = &options.command {
        let reply = client.execute(&mut state, &Command::parse(command));
        return write_reply(&mut out, &reply, output);
    }

    if !client.engine_mut().ensure_available() {
        eprintln!("compass: engine executable not found; commands will report it as unavailable");
    }
    client.load_library(&mut state);
    run_repl(&mut client, &mut state, io::stdin().lock(), &mut out, output)
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "compass".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("compass: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use compass::engine::{Client, Engine, EngineError};
    use compass::render::RenderOptions;
    use compass::AppState;

    use super::{parse_options, run_repl, CliOptions, Output};

    fn args(items: &[&str]) -> impl Iterator<Item = String> {
        items.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_flags_and_command() {
        let options = parse_options(args(&["--engine", "bin/engine", "--json", "-v", "SEARCH|Tr"]))
            .expect("parse options");
        assert_eq!(options.engine.as_deref(), Some("bin/engine"));
        assert!(options.json);
        assert!(options.verbose);
        assert_eq!(options.command.as_deref(), Some("SEARCH|Tr"));
    }

    #[test]
    fn rejects_bad_combinations() {
        parse_options(args(&["--verbose", "--quiet"])).unwrap_err();
        parse_options(args(&["--json", "--json"])).unwrap_err();
        parse_options(args(&["--config"])).unwrap_err();
        parse_options(args(&["LIST", "TITLES"])).unwrap_err();
        parse_options(args(&["--nope"])).unwrap_err();
    }

    struct CannedEngine {
        replies: VecDeque<Vec<String>>,
        calls: Vec<String>,
    }

    impl Engine for CannedEngine {
        fn ensure_available(&mut self) -> bool {
            true
        }

        fn invoke(&mut self, command: &str) -> Result<Vec<String>, EngineError> {
            self.calls.push(command.to_owned());
            Ok(self.replies.pop_front().unwrap_or_default())
        }
    }

    fn library_engine() -> CannedEngine {
        let lines = [
            "ID,Title,URL,Topic,Difficulty,Rating,Duration",
            "1,Intro to Graphs,https://x.test/1,Graphs,20,4.1,30",
            "2,Graph Traversal,https://x.test/2,Graphs,45,4.6,25",
        ];
        CannedEngine {
            replies: VecDeque::from([
                lines.iter().map(|l| (*l).to_owned()).collect(),
                lines.iter().map(|l| (*l).to_owned()).collect(),
            ]),
            calls: Vec::new(),
        }
    }

    fn output() -> Output {
        Output {
            json: false,
            render: RenderOptions::default(),
        }
    }

    #[test]
    fn repl_handles_local_commands_and_back() {
        let mut client = Client::new(library_engine());
        let mut state = AppState::new();
        client.load_library(&mut state);

        let input = ":open 1\n:open 2\nBACK\n:add 1\n:add 1\n:session\n:plan graph traversl\n\
                     :addall\n:session\n:clear\n:session\n:quit\nLIST\n";
        let mut out = Vec::new();
        run_repl(&mut client, &mut state, input.as_bytes(), &mut out, output()).expect("repl");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.contains("https://x.test/2"), "{text}");
        assert!(text.contains("added (1 in session)"), "{text}");
        assert!(text.contains("already in the session"), "{text}");
        assert!(text.contains("total: 30 min"), "{text}");
        assert!(text.contains("added 1 of 2 (2 in session)"), "{text}");
        assert!(text.contains("total: 55 min"), "{text}");
        assert!(text.contains("session cleared"), "{text}");
        assert!(text.contains("total: 0 min"), "{text}");
        assert_eq!(client.engine().calls, vec!["LIST", "PLAN|Graph Traversal"]);
    }

    #[test]
    fn malformed_and_empty_replies_print_differently() {
        let engine = CannedEngine {
            replies: VecDeque::from([
                vec!["garbage".to_owned()],
                vec!["ID,Title,URL,Topic,Difficulty,Rating,Duration".to_owned()],
            ]),
            calls: Vec::new(),
        };
        let mut client = Client::new(engine);
        let mut state = AppState::new();
        let mut out = Vec::new();
        run_repl(&mut client, &mut state, "SEARCH|x\nSEARCH|y\n".as_bytes(), &mut out, output())
            .expect("repl");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("engine reply could not be read"), "{text}");
        assert!(text.contains("no results"), "{text}");
    }

    #[test]
    fn repl_reports_unknown_resources() {
        let mut client = Client::new(library_engine());
        let mut state = AppState::new();
        let mut out = Vec::new();
        run_repl(&mut client, &mut state, ":open 9\n:drop 1\n".as_bytes(), &mut out, output())
            .expect("repl");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("unknown resource \"9\""), "{text}");
        assert!(text.contains("no session entry \"1\""), "{text}");
        assert!(client.engine().calls.is_empty());
    }
}
