pub mod error;
pub mod fmt;

use std::{
    io::Write,
    sync::{OnceLock, Mutex},
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use vela_mem::GlobalVec;

use crate::*;

use fmt::SegmentSpec;

/// Handle to a format registered with [`custom_fmt`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CustomFmt(usize);

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Always = -1,
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

pub enum LevelFmt {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Other(CustomFmt, Level),
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Per-target verbosity, in `RUST_LOG` syntax.
///
/// `level` sets the base level and `target=level` overrides it for a module
/// path and everything below it. Unparsable directives are ignored.
pub struct Filters {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Filters {

    pub fn parse(spec: &str) -> Self {
        let mut target_levels = FxHashMap::default();
        let mut base_level = Level::Error;
        for arg in spec.split(',') {
            let (target, level) = match arg.find('=') {
                Some(j) => (Some(arg[0..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            if let Some(target) = target {
                let entry = target_levels
                    .entry(CompactString::new(target))
                    .or_insert(level);
                *entry = (*entry).min(level);
            } else {
                base_level = level;
            }
        }
        Self {
            target_levels,
            base_level,
        }
    }

    pub fn from_env() -> Self {
        match std::env::var("RUST_LOG") {
            Ok(env) => Self::parse(&env),
            Err(_) => Self::parse(""),
        }
    }

    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }
}

fn default_fmt(label: &str, color: Color) -> Result<LogFmt> {
    let mut fmt = LogFmt::default();
    LogFmtBuilder::new(&mut fmt)
        .text(label, |spec| spec.with_color_spec(|c| { c.set_fg(Some(color)).set_bold(true); }))?
        .text(": ", |spec| spec)?
        .message(|spec| spec)?;
    Ok(fmt)
}

/// Writes one record laid out by `fmt`, followed by a newline.
pub fn write_record(
    out: &mut impl WriteColor,
    fmt: &LogFmt,
    msg: core::fmt::Arguments,
) -> Result<()>
{
    for segment in fmt {
        match segment {
            SegmentSpec::Message(log_spec) => {
                if let Some(color_spec) = &log_spec.color_spec {
                    out.set_color(color_spec)?;
                    write!(out, "{}", msg)?;
                    out.reset()?;
                } else {
                    write!(out, "{}", msg)?;
                }
            },
            SegmentSpec::Text(text, log_spec) => {
                if let Some(color_spec) = &log_spec.color_spec {
                    out.set_color(color_spec)?;
                    out.write_all(text.as_bytes())?;
                    out.reset()?;
                } else {
                    out.write_all(text.as_bytes())?;
                }
            },
        }
    }
    out.write_all(b"\n")?;
    Ok(())
}

struct Logger {
    stderr: StandardStream,
    info_fmt: LogFmt,
    warn_fmt: LogFmt,
    error_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    custom_fmt: GlobalVec<LogFmt>,
    filters: Filters,
}

impl Logger {

    fn new() -> Result<Self> {
        Ok(Self {
            stderr: StandardStream::stderr(ColorChoice::Auto),
            info_fmt: default_fmt("info", Color::Green)?,
            warn_fmt: default_fmt("warn", Color::Yellow)?,
            error_fmt: default_fmt("error", Color::Red)?,
            debug_fmt: default_fmt("debug", Color::Blue)?,
            trace_fmt: default_fmt("trace", Color::Cyan)?,
            custom_fmt: GlobalVec::new(),
            filters: Filters::from_env(),
        })
    }

    fn log(&mut self, target: &str, level: LevelFmt, msg: core::fmt::Arguments) -> Result<bool> {
        let target_level = self.filters.target_level(target);
        let (fmt, level) = match level {
            LevelFmt::Error => (&self.error_fmt, Level::Error),
            LevelFmt::Warn => (&self.warn_fmt, Level::Warn),
            LevelFmt::Info => (&self.info_fmt, Level::Info),
            LevelFmt::Debug => (&self.debug_fmt, Level::Debug),
            LevelFmt::Trace => (&self.trace_fmt, Level::Trace),
            LevelFmt::Other(fmt, level) => {
                let fmt = self.custom_fmt
                    .as_slice()
                    .get(fmt.0)
                    .ok_or(LogError::UnknownFormat { index: fmt.0 })?;
                (fmt, level)
            },
        };
        if target_level < level {
            return Ok(false)
        }
        write_record(&mut self.stderr, fmt, msg)?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Builds the global logger, reading `RUST_LOG`. Later calls do nothing.
pub fn init() -> Result<()> {
    if LOGGER.get().is_some() { return Ok(()) }
    let logger = Logger::new()?;
    // a concurrent init may have won, its logger is equivalent
    let _ = LOGGER.set(Mutex::new(logger));
    Ok(())
}

fn with_logger<R>(f: impl FnOnce(&mut Logger) -> Result<R>) -> Result<R> {
    let mut logger = LOGGER
        .get()
        .ok_or(LogError::Uninitialized)?
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut logger)
}

#[inline(always)]
pub fn error_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.error_fmt)))
}

#[inline(always)]
pub fn warn_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.warn_fmt)))
}

#[inline(always)]
pub fn info_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.info_fmt)))
}

#[inline(always)]
pub fn debug_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.debug_fmt)))
}

#[inline(always)]
pub fn trace_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    with_logger(|logger| f(&mut LogFmtBuilder::new(&mut logger.trace_fmt)))
}

#[inline(always)]
pub fn custom_fmt(fmt: LogFmt) -> Result<CustomFmt> {
    with_logger(|logger| {
        let index = logger.custom_fmt.len();
        logger.custom_fmt.push(fmt)?;
        Ok(CustomFmt(index))
    })
}

#[inline(always)]
pub fn log(target: &str, level: LevelFmt, args: core::fmt::Arguments) -> Result<bool> {
    with_logger(|logger| logger.log(target, level, args))
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}
