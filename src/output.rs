//! Consistent, colored user-facing messages on stdout/stderr.
//! Colors are enabled only when the stream is a TTY; log output goes through
//! tracing instead, these helpers are for the lines users script against.

use owo_colors::OwoColorize;

enum Level {
    Info,
    Warn,
    Error,
    Success,
}

fn emit(level: Level, msg: &str) {
    match level {
        Level::Info => {
            if atty::is(atty::Stream::Stdout) {
                println!("{} {}", "info:".cyan().bold(), msg);
            } else {
                println!("info: {}", msg);
            }
        }
        Level::Success => {
            if atty::is(atty::Stream::Stdout) {
                println!("{} {}", "ok:".green().bold(), msg);
            } else {
                println!("ok: {}", msg);
            }
        }
        Level::Warn => {
            if atty::is(atty::Stream::Stderr) {
                eprintln!("{} {}", "warn:".yellow().bold(), msg);
            } else {
                eprintln!("warn: {}", msg);
            }
        }
        Level::Error => {
            if atty::is(atty::Stream::Stderr) {
                eprintln!("{} {}", "error:".red().bold(), msg);
            } else {
                eprintln!("error: {}", msg);
            }
        }
    }
}

pub fn print_info(msg: &str) {
    emit(Level::Info, msg);
}

pub fn print_warn(msg: &str) {
    emit(Level::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Level::Error, msg);
}

pub fn print_success(msg: &str) {
    emit(Level::Success, msg);
}
