//! `nesframe` CLI entry point: loads a ROM, wires up a windowed
//! [`nesframe::Presentation`], and hands control to the scheduler's
//! real-time pacing loop (spec §4.5).

use std::path::PathBuf;
use std::process::ExitCode;

use ansi_term::Colour::{Cyan, Red, Yellow};

use nesframe::display::{Window, WindowConfig};
use nesframe::emulator::scheduler::Scheduler;
use nesframe::presentation::read_rom_file;
use nesframe::{Emulator, EmulatorConfig, InputConfig};

struct Args {
    rom_path: PathBuf,
    trace: bool,
    cache: bool,
    throttle: bool,
    scale: u32,
}

fn parse_args() -> Result<Args, String> {
    let mut rom_path = None;
    let mut trace = false;
    let mut cache = false;
    let mut throttle = true;
    let mut scale = 3u32;

    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--trace" => trace = true,
            "--cache" => cache = true,
            "--no-throttle" => throttle = false,
            "--scale" => {
                let value = raw.next().ok_or("--scale requires a value")?;
                scale = value.parse().map_err(|_| "--scale must be an integer")?;
            }
            other if rom_path.is_none() => rom_path = Some(PathBuf::from(other)),
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }

    Ok(Args {
        rom_path: rom_path.ok_or("usage: nesframe <rom.nes> [--trace] [--cache] [--no-throttle] [--scale N]")?,
        trace,
        cache,
        throttle,
        scale,
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", Red.paint(message));
            return ExitCode::FAILURE;
        }
    };

    println!("{}", Cyan.bold().paint("nesframe"));
    println!("loading {}", args.rom_path.display());

    let rom_bytes = match read_rom_file(&args.rom_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{}", Red.paint(err.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let config = EmulatorConfig {
        cache_instructions: args.cache,
        trace_instructions: args.trace,
        frequency_limiting: args.throttle,
        ..Default::default()
    };

    let emulator = match Emulator::load(&rom_bytes, config) {
        Ok(emulator) => emulator,
        Err(err) => {
            eprintln!("{}", Red.paint(err.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let window_config = WindowConfig::new().with_scale(args.scale);
    let window = match Window::new(window_config) {
        Ok(window) => window,
        Err(err) => {
            eprintln!("{}", Red.paint(err.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let input = InputConfig::load_or_default("input_config.toml");
    if !args.throttle {
        println!("{}", Yellow.paint("running unthrottled"));
    }

    let mut scheduler = Scheduler::new(emulator, window, input);
    if let Err(err) = scheduler.run() {
        eprintln!("{}", Red.paint(err.to_string()));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
