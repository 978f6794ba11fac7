use std::{env, path::PathBuf, process::ExitCode};

use log::{error, info, warn};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use student_records::api::{self, Config};

const USAGE: &str = "usage: student-records [--json] [ROSTER.csv]";

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    if let Err(e) = TermLogger::init(
        config.log_level,
        ConfigBuilder::new().set_time_level(log::LevelFilter::Off).build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logger: {}", e);
    }

    let mut json = false;
    let mut roster: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ => roster = Some(PathBuf::from(arg)),
        }
    }

    let path = match roster.or(config.roster) {
        Some(path) => path,
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let students = match api::load_roster(&path) {
        Ok(students) => students,
        Err(e) => {
            error!("failed to load roster {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };
    info!("loaded {} students from {}", students.len(), path.display());

    for student in &students {
        if json {
            match serde_json::to_string(&student.summary()) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("failed to serialize student {}: {}", student.id(), e),
            }
        } else {
            println!("{}", student.describe());
        }
        match student.compute_cgpa() {
            Ok(cgpa) => info!("{} CGPA: {:.2}", student.full_name(), cgpa),
            Err(e) => warn!("{}: {}", student.full_name(), e),
        }
    }

    ExitCode::SUCCESS
}
