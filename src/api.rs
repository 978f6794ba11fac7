use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::LevelFilter;

pub mod course;
pub mod csv_processor;
pub mod degree;
pub mod err;
pub mod person;
pub mod student;

pub use course::Course;
pub use degree::StudentDegree;
pub use err::CustomError;
pub use person::Person;
pub use student::{StudentRecord, StudentRecordBuilder, StudentSummary};

/// 日志级别的环境变量
pub const LOG_LEVEL_VAR: &str = "STUDENT_RECORDS_LOG_LEVEL";
/// 默认花名册路径的环境变量
pub const ROSTER_VAR: &str = "STUDENT_RECORDS_ROSTER";

/// 运行配置, 来自环境变量 (可由 .env 提供)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub roster: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            roster: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 按给定的查找函数构建配置, 无法识别的日志级别回退为 info
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => eprintln!("ignoring invalid {}: {}", LOG_LEVEL_VAR, level),
            }
        }
        config.roster = lookup(ROSTER_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        config
    }
}

/// 读取花名册
pub fn load_roster(path: &Path) -> Result<Vec<StudentRecord>, CustomError> {
    csv_processor::extract_students_from_file(path)
}
