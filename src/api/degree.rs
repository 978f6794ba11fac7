use std::{fmt, str::FromStr};

use serde::Serialize;

use super::err::CustomError;

/// 学位类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StudentDegree {
    // 本科
    Undergrad,
    // 硕士
    Grad,
    // 博士
    Phd,
}

impl fmt::Display for StudentDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StudentDegree::Undergrad => "UNDERGRAD",
            StudentDegree::Grad => "GRAD",
            StudentDegree::Phd => "PHD",
        };
        f.write_str(label)
    }
}

impl FromStr for StudentDegree {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNDERGRAD" => Ok(StudentDegree::Undergrad),
            "GRAD" => Ok(StudentDegree::Grad),
            "PHD" => Ok(StudentDegree::Phd),
            other => Err(CustomError::InvalidArgument(format!(
                "unknown degree type: {}",
                other
            ))),
        }
    }
}
