use std::path::Path;

use log::debug;
use regex::Regex;
use serde::Deserialize;

use super::{
    degree::StudentDegree, err::CustomError, person::Person, student::StudentRecord,
};

// 行记录
#[derive(Debug, Deserialize)]
pub struct RowRecord {
    // 编号
    pub id: i32,
    // 姓名
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    // 出生日期, 格式为 YYYY-MM-DD
    pub date_of_birth: String,
    // 专业
    pub major: String,
    // 学位类型
    pub degree: String,
    // 当前学期
    pub semester: i32,
    // 各学期绩点, 以 | 分隔
    pub gpas: String,
    // 论文题目, 可为空
    #[serde(deserialize_with = "csv::invalid_option")]
    pub thesis_title: Option<String>,
    pub internship_completed: bool,
    pub teaching_assistant: bool,
}

// 花名册构建器
pub struct RosterBuilder<'builder> {
    csv_path: &'builder Path,
}

impl<'builder> RosterBuilder<'builder> {
    pub fn new(csv_path: &'builder Path) -> Self {
        Self { csv_path }
    }

    pub fn build(&self) -> Result<Vec<StudentRecord>, CustomError> {
        verify_file_name(self.csv_path)?;

        let file = std::fs::File::open(self.csv_path)?;
        let mut rdr = csv::Reader::from_reader(file);
        let mut students = vec![];

        for rd in rdr.deserialize() {
            let record: RowRecord = rd?;
            let student = build_student(record)?;
            debug!("imported student {}", student.id());
            students.push(student);
        }

        Ok(students)
    }
}

/// 由行记录构建学生记录
fn build_student(record: RowRecord) -> Result<StudentRecord, CustomError> {
    let dob = StudentRecord::validate_date_of_birth(&record.date_of_birth).map_err(|e| {
        CustomError::CsvDataError(format!("student {}: {}", record.id, e))
    })?;
    let degree: StudentDegree = record.degree.parse().map_err(|e: CustomError| {
        CustomError::CsvDataError(format!("student {}: {}", record.id, e))
    })?;
    let gpas = parse_gpas(&record.gpas).map_err(|e| {
        CustomError::CsvDataError(format!("student {}: {}", record.id, e))
    })?;

    let person = Person::new(
        record.id,
        record.full_name,
        record.address,
        record.phone,
        record.email,
        dob,
    );
    let mut student = StudentRecord::builder()
        .person(person)
        .major(record.major)
        .degree(degree)
        .gpas(gpas)
        .thesis_title(record.thesis_title)
        .internship_completed(record.internship_completed)
        .teaching_assistant(record.teaching_assistant)
        .build()?;
    student.set_semester(record.semester);

    Ok(student)
}

/// 解析以 | 分隔的绩点列表, 空单元格视为无绩点.
/// 绩点取值不做范围限制, 但列表中不允许出现空项.
fn parse_gpas(cell: &str) -> Result<Vec<f64>, CustomError> {
    if cell.trim().is_empty() {
        return Ok(vec![]);
    }
    cell.split('|')
        .map(str::trim)
        .map(|gpa| {
            gpa.parse::<f64>()
                .map_err(|e| CustomError::CsvDataError(format!("{}: {}", gpa, e)))
        })
        .collect()
}

/// 校验文件名称
fn verify_file_name(file_path: &Path) -> Result<(), CustomError> {
    let re = Regex::new(r"(?i)^[^.].*\.csv$")?;

    let file_name = get_file_name(file_path)?;
    if !re.is_match(file_name) {
        return Err(CustomError::UnexpectedFileError(format!(
            "{} 文件名不符合要求",
            file_name
        )));
    }

    Ok(())
}

fn get_file_name(path: &Path) -> Result<&str, CustomError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CustomError::UnexpectedFileError(path.display().to_string()))
}

/// 读取指定路径下的花名册
pub fn extract_students_from_file(path: &Path) -> Result<Vec<StudentRecord>, CustomError> {
    RosterBuilder::new(path).build()
}
