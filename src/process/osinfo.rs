//! Host operating-system facts. No filesystem interaction with the cursor.

use crate::cmd::OsFlag;
use crate::error::{CommandError, CommandResult};
use std::env;
use std::io::{self, Write};

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

struct Cpu {
    model: String,
    speed_mhz: f64,
}

/// Report the fact selected by the `os` sub-flag.
pub fn os_info(flag: OsFlag, out: &mut dyn Write) -> CommandResult<()> {
    match flag {
        OsFlag::Eol => {
            writeln!(
                out,
                "The default system end-of-line is {}",
                EOL.escape_debug()
            )?;
        }
        OsFlag::Cpus => {
            let cpus = read_cpus();
            writeln!(out, "The host machine has {} CPUs", cpus.len())?;
            for cpu in cpus {
                writeln!(
                    out,
                    "Model: {}, Clock rate: {} GHz",
                    cpu.model,
                    cpu.speed_mhz / 1000.0
                )?;
            }
        }
        OsFlag::Homedir => {
            let home = dirs::home_dir()
                .ok_or_else(|| io::Error::other("home directory unavailable"))?;
            writeln!(out, "The home directory is {}", home.display())?;
        }
        OsFlag::Username => {
            writeln!(out, "The current system user name is {}", system_user()?)?;
        }
        OsFlag::Architecture => {
            writeln!(out, "The CPU architecture is {}", env::consts::ARCH)?;
        }
    }

    Ok(())
}

fn system_user() -> CommandResult<String> {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .map_err(|_| CommandError::OperationFailed(io::Error::other("system user name unavailable")))
}

#[cfg(target_os = "linux")]
fn read_cpus() -> Vec<Cpu> {
    let cpus = parse_cpuinfo(&std::fs::read_to_string("/proc/cpuinfo").unwrap_or_default());
    if cpus.is_empty() {
        return fallback_cpus();
    }
    cpus
}

#[cfg(not(target_os = "linux"))]
fn read_cpus() -> Vec<Cpu> {
    fallback_cpus()
}

/// Pull one model name and clock rate per `processor` stanza.
#[cfg(target_os = "linux")]
fn parse_cpuinfo(contents: &str) -> Vec<Cpu> {
    let mut cpus = Vec::new();
    for stanza in contents.split("\n\n") {
        let mut model = None;
        let mut speed_mhz = 0.0;
        let mut seen_processor = false;

        for line in stanza.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            match key {
                "processor" => seen_processor = true,
                "model name" => model = Some(value.to_string()),
                "cpu MHz" => speed_mhz = value.parse().unwrap_or(0.0),
                _ => {}
            }
        }

        if seen_processor {
            cpus.push(Cpu {
                model: model.unwrap_or_else(|| "unknown".to_string()),
                speed_mhz,
            });
        }
    }
    cpus
}

fn fallback_cpus() -> Vec<Cpu> {
    let count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (0..count)
        .map(|_| Cpu {
            model: "unknown".to_string(),
            speed_mhz: 0.0,
        })
        .collect()
}
