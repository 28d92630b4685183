#![deny(unsafe_code)]

//! Demonstration binary for the logging and check layers.
//!
//! Runs a small staged pipeline over a fixed entry table, wiring every macro
//! of the check layer to observable behavior. The process exits with the
//! final accumulated status code, so failures injected via `--fail-stage` or
//! `--skip` surface directly in the exit status.

use std::env;
use std::process::ExitCode;

use checks::{check, check_continue, check_to, ct_assert, log_if, rt_assert};
use logging::{debug_log, log, Backend, Level};

const STATUS_OK: u8 = 0;
const STATUS_USAGE: u8 = 1;
const STATUS_INGEST: u8 = 10;
const STATUS_PUBLISH: u8 = 20;
const STATUS_PARTIAL: u8 = 23;

const ENTRIES: [&str; 3] = ["alpha", "beta", "gamma"];

ct_assert!(ENTRIES.len() <= 8);
ct_assert!(STATUS_OK == 0);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Stage {
    Ingest,
    Publish,
}

struct Options {
    backend: Backend,
    level: Level,
    module: String,
    fail_stage: Option<Stage>,
    skip: Option<String>,
    repeat: u32,
}

impl Options {
    fn parse<I>(mut args: I) -> Result<Self, u8>
    where
        I: Iterator<Item = String>,
    {
        let mut options = Self {
            backend: Backend::Stdout,
            level: Level::Info,
            module: String::from("chklog"),
            fail_stage: None,
            skip: None,
            repeat: 1,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--backend" => {
                    let value = required_value(&mut args, "--backend")?;
                    options.backend = Backend::from_name_or_fallback(&value);
                }
                "--level" => {
                    let value = required_value(&mut args, "--level")?;
                    options.level = parse_level(&value);
                }
                "--module" => {
                    options.module = required_value(&mut args, "--module")?;
                }
                "--fail-stage" => {
                    let value = required_value(&mut args, "--fail-stage")?;
                    options.fail_stage = Some(match value.as_str() {
                        "ingest" => Stage::Ingest,
                        "publish" => Stage::Publish,
                        other => {
                            eprintln!("error: unknown stage {other:?}");
                            usage();
                            return Err(STATUS_USAGE);
                        }
                    });
                }
                "--skip" => {
                    options.skip = Some(required_value(&mut args, "--skip")?);
                }
                "--repeat" => {
                    let value = required_value(&mut args, "--repeat")?;
                    options.repeat = value.parse().unwrap_or(0);
                }
                "--help" | "-h" => {
                    usage();
                    return Err(STATUS_OK);
                }
                other => {
                    eprintln!("error: unknown argument {other:?}");
                    usage();
                    return Err(STATUS_USAGE);
                }
            }
        }

        Ok(options)
    }
}

fn required_value<I>(args: &mut I, flag: &str) -> Result<String, u8>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or_else(|| {
        eprintln!("error: {flag} requires a value");
        usage();
        STATUS_USAGE
    })
}

/// Accepts level names and numeric ordinals; out-of-range ordinals are
/// clamped to the least severe level with a warning, unknown names fall back
/// to `info`.
fn parse_level(value: &str) -> Level {
    if let Ok(ordinal) = value.parse::<u8>() {
        let (level, clamped) = Level::sanitize(ordinal);
        if clamped {
            eprintln!("warning: level ordinal {ordinal} is out of range; using {level}");
        }
        return level;
    }
    value.parse().unwrap_or_else(|_| {
        eprintln!("warning: unknown level {value:?}; using INFO");
        Level::Info
    })
}

fn usage() {
    eprintln!(
        "usage: chklog [--backend stdout|stderr|syslog|tracing] [--level LEVEL] \
         [--module NAME] [--fail-stage ingest|publish] [--skip ENTRY] [--repeat N]"
    );
}

fn run(options: &Options) -> u8 {
    let mut status = STATUS_OK;

    check!(
        status,
        options.repeat == 0,
        STATUS_USAGE,
        Level::Error,
        "--repeat must be at least 1"
    );
    rt_assert!(!ENTRIES.is_empty(), "the demo entry table must not be empty");

    log!(
        Level::Info,
        "pipeline starting, {} entries, {} pass(es)",
        ENTRIES.len(),
        options.repeat
    );

    for pass in 1..=options.repeat {
        debug_log!(Level::Debug, "pass {} of {}", pass, options.repeat);

        'ingest: {
            log!(Level::Debug, "ingest stage acquiring resources");
            check_to!(
                'ingest,
                status,
                options.fail_stage == Some(Stage::Ingest),
                STATUS_INGEST,
                Level::Error,
                "ingest stage failed on pass {}",
                pass
            );

            'publish: {
                log!(Level::Debug, "publish stage acquiring resources");
                check_to!(
                    'publish,
                    status,
                    options.fail_stage == Some(Stage::Publish),
                    STATUS_PUBLISH,
                    Level::Critical,
                    "publish stage failed on pass {}",
                    pass
                );

                for entry in ENTRIES {
                    check_continue!(
                        status,
                        options.skip.as_deref() == Some(entry),
                        STATUS_PARTIAL,
                        Level::Warning,
                        "entry {} skipped",
                        entry
                    );
                    if options.skip.as_deref() != Some(entry) {
                        log!(Level::Info, "published {}", entry);
                    }
                }

                log_if!(
                    status == STATUS_OK,
                    Level::Notice,
                    "pass {} published every entry",
                    pass
                );
            }
            log!(Level::Debug, "publish stage resources released");
        }
        log!(Level::Debug, "ingest stage resources released");

        // A hard stage failure ends the run; partial passes keep going.
        let failure_status = status;
        check!(
            status,
            failure_status == STATUS_INGEST || failure_status == STATUS_PUBLISH,
            failure_status,
            Level::Error,
            "pipeline aborted with status {}",
            failure_status
        );
    }

    log!(Level::Notice, "pipeline finished with status {}", status);
    status
}

fn main() -> ExitCode {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(status) => return ExitCode::from(status),
    };

    #[cfg(feature = "tracing")]
    if matches!(options.backend, Backend::Tracing) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    logging::open(options.backend, options.level, &options.module);
    let status = run(&options);
    logging::close();
    ExitCode::from(status)
}
