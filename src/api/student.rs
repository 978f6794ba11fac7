use std::{fmt, sync::Arc};

use log::{debug, log, Level};
use serde::Serialize;
use time::{macros::format_description, Date, Duration, OffsetDateTime};

use super::{course::Course, degree::StudentDegree, err::CustomError, person::Person};

/// 出生日期校验的基准: 今天往前推的天数
const DOB_GRACE_DAYS: i64 = 10;
/// 出生日期校验的最小年龄
const MIN_AGE_YEARS: i32 = 10;

/// 学生记录
///
/// 课程列表与绩点历史由记录独占: 构造时按值接收, 设置时复制, 读取时只暴露切片.
/// 课程本身由课程目录持有, 这里只保存 `Arc` 共享引用.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    person: Person,
    // 专业
    major: String,
    // 学位类型
    degree: StudentDegree,
    // 已选课程
    courses: Vec<Arc<Course>>,
    // 各学期绩点
    gpas: Vec<f64>,
    // 当前学期
    semester: i32,
    // 论文题目
    thesis_title: Option<String>,
    // 是否完成实习
    internship_completed: bool,
    // 是否为助教
    teaching_assistant: bool,
}

impl StudentRecord {
    /// 构造学生记录, 所有字段按原样保存 (学期不做修正)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        person: Person,
        major: String,
        degree: StudentDegree,
        courses: Vec<Arc<Course>>,
        gpas: Vec<f64>,
        semester: i32,
        thesis_title: Option<String>,
        internship_completed: bool,
        teaching_assistant: bool,
    ) -> Self {
        Self {
            person,
            major,
            degree,
            courses,
            gpas,
            semester,
            thesis_title,
            internship_completed,
            teaching_assistant,
        }
    }

    pub fn builder() -> StudentRecordBuilder {
        StudentRecordBuilder::default()
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn id(&self) -> i32 {
        self.person.id()
    }

    pub fn full_name(&self) -> &str {
        self.person.full_name()
    }

    pub fn date_of_birth(&self) -> Date {
        self.person.date_of_birth()
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn degree(&self) -> StudentDegree {
        self.degree
    }

    pub fn courses(&self) -> &[Arc<Course>] {
        &self.courses
    }

    pub fn gpas(&self) -> &[f64] {
        &self.gpas
    }

    pub fn semester(&self) -> i32 {
        self.semester
    }

    pub fn thesis_title(&self) -> Option<&str> {
        self.thesis_title.as_deref()
    }

    pub fn is_internship_completed(&self) -> bool {
        self.internship_completed
    }

    pub fn is_teaching_assistant(&self) -> bool {
        self.teaching_assistant
    }

    pub fn set_major(&mut self, major: String) {
        self.major = major;
    }

    pub fn set_degree(&mut self, degree: StudentDegree) {
        self.degree = degree;
    }

    /// 复制传入的课程列表, 未提供时置空
    pub fn set_courses(&mut self, courses: Option<&[Arc<Course>]>) {
        self.courses = courses.map(<[_]>::to_vec).unwrap_or_default();
    }

    /// 复制传入的绩点列表, 未提供时置空
    pub fn set_gpas(&mut self, gpas: Option<&[f64]>) {
        self.gpas = gpas.map(<[_]>::to_vec).unwrap_or_default();
    }

    /// 非正数的学期一律记为第1学期
    pub fn set_semester(&mut self, semester: i32) {
        self.semester = if semester > 0 { semester } else { 1 };
    }

    pub fn set_thesis_title(&mut self, thesis_title: Option<String>) {
        self.thesis_title = thesis_title;
    }

    pub fn set_internship_completed(&mut self, internship_completed: bool) {
        self.internship_completed = internship_completed;
    }

    pub fn set_teaching_assistant(&mut self, teaching_assistant: bool) {
        self.teaching_assistant = teaching_assistant;
    }

    /// 选课
    ///
    /// # Returns
    ///
    /// 课程为空时返回 `InvalidArgument`, 否则追加到课程列表并返回 `true`
    pub fn add_course(&mut self, course: Option<Arc<Course>>) -> Result<bool, CustomError> {
        let course =
            course.ok_or_else(|| CustomError::InvalidArgument("Course cannot be null".into()))?;
        self.courses.push(course);
        Ok(true)
    }

    /// 退课
    ///
    /// # Arguments
    ///
    /// * `course_code` - 要退的课程编号, 所有编号相同的课程都会被移除
    ///
    /// # Returns
    ///
    /// 课程列表为空时返回 `IllegalState`; 否则返回是否有课程被移除.
    /// 编号不存在不视为错误.
    pub fn withdraw_from_course(&mut self, course_code: i32) -> Result<bool, CustomError> {
        if self.courses.is_empty() {
            return Err(CustomError::IllegalState(
                "No courses to withdraw from".into(),
            ));
        }
        let before = self.courses.len();
        self.courses
            .retain(|course| course.course_code() != course_code);
        Ok(self.courses.len() != before)
    }

    /// 计算累计绩点, 即各学期绩点的算术平均 (不按学分加权)
    pub fn compute_cgpa(&self) -> Result<f64, CustomError> {
        if self.gpas.is_empty() {
            return Err(CustomError::IllegalState(
                "No GPAs recorded, cannot compute CGPA".into(),
            ));
        }
        let sum: f64 = self.gpas.iter().sum();
        Ok(sum / self.gpas.len() as f64)
    }

    /// 以本地日期为基准校验出生日期, 见 [`StudentRecord::validate_date_of_birth_on`]
    pub fn validate_date_of_birth(input: &str) -> Result<Date, CustomError> {
        Self::validate_date_of_birth_on(input, local_today())
    }

    /// 校验出生日期
    ///
    /// # Arguments
    ///
    /// * `input` - 格式为 "YYYY-MM-DD" 的日期
    /// * `today` - 校验基准日
    ///
    /// # Returns
    ///
    /// 出生日期不得晚于 (today - 10天) - 10年, 合法时返回解析后的日期
    pub fn validate_date_of_birth_on(input: &str, today: Date) -> Result<Date, CustomError> {
        let dob = Date::parse(input, format_description!("[year]-[month]-[day]"))?;
        if dob > dob_threshold(today)? {
            return Err(CustomError::DateOfBirthTooRecent(dob));
        }
        Ok(dob)
    }

    /// 校验出生日期并把结果写入日志, 不向调用方返回错误
    pub fn report_date_of_birth(input: &str) {
        let (level, message) = date_of_birth_report(input, local_today());
        log!(level, "{}", message);
    }

    /// 文本摘要, 课程与绩点只给出数量
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            id: self.id(),
            full_name: self.full_name().to_string(),
            date_of_birth: self.date_of_birth().to_string(),
            major: self.major.clone(),
            semester: self.semester,
            degree: self.degree,
            thesis_title: self.thesis_title.clone(),
            internship_completed: self.internship_completed,
            teaching_assistant: self.teaching_assistant,
            course_count: self.courses.len(),
            gpa_count: self.gpas.len(),
            cgpa: self.compute_cgpa().ok(),
        }
    }
}

/// 出生日期校验结果对应的日志级别与信息
fn date_of_birth_report(input: &str, today: Date) -> (Level, String) {
    match StudentRecord::validate_date_of_birth_on(input, today) {
        Ok(dob) => (Level::Info, format!("Valid date of birth: {}", dob)),
        Err(e) => (Level::Warn, e.to_string()),
    }
}

/// 本地日期; 无法确定本地时区偏移时退回 UTC 日期
fn local_today() -> Date {
    today_or_utc(OffsetDateTime::now_local())
}

fn today_or_utc<E: fmt::Display>(local: Result<OffsetDateTime, E>) -> Date {
    match local {
        Ok(now) => now.date(),
        Err(e) => {
            debug!("local offset unavailable ({}), using UTC date", e);
            OffsetDateTime::now_utc().date()
        }
    }
}

/// (today - 10天) - 10年; 2月29日在非闰年退到2月28日
fn dob_threshold(today: Date) -> Result<Date, CustomError> {
    let base = today
        .checked_sub(Duration::days(DOB_GRACE_DAYS))
        .ok_or_else(|| CustomError::InvalidArgument(format!("{} is out of range", today)))?;
    let year = base.year() - MIN_AGE_YEARS;
    Date::from_calendar_date(year, base.month(), base.day())
        .or_else(|_| Date::from_calendar_date(year, base.month(), base.day() - 1))
        .map_err(|e| CustomError::InvalidArgument(e.to_string()))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{id={}, fullName='{}', dateOfBirth={}, major='{}', semester={}, type='{}', \
             thesisTitle='{}', internshipCompleted={}, TA={}, courses={} courses, GPAs={} GPAs}}",
            self.id(),
            self.full_name(),
            self.date_of_birth(),
            self.major,
            self.semester,
            self.degree,
            self.thesis_title().unwrap_or("N/A"),
            yes_no(self.internship_completed),
            yes_no(self.teaching_assistant),
            self.courses.len(),
            self.gpas.len(),
        )
    }
}

/// 学生记录的可序列化视图
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    id: i32,
    full_name: String,
    date_of_birth: String,
    major: String,
    semester: i32,
    degree: StudentDegree,
    thesis_title: Option<String>,
    internship_completed: bool,
    teaching_assistant: bool,
    course_count: usize,
    gpa_count: usize,
    cgpa: Option<f64>,
}

/// 学生记录构建器, 标志位默认为 `false`, 学期默认为1
#[derive(Default)]
pub struct StudentRecordBuilder {
    person: Option<Person>,
    major: String,
    degree: Option<StudentDegree>,
    courses: Vec<Arc<Course>>,
    gpas: Vec<f64>,
    semester: Option<i32>,
    thesis_title: Option<String>,
    internship_completed: bool,
    teaching_assistant: bool,
}

impl StudentRecordBuilder {
    pub fn person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    pub fn degree(mut self, degree: StudentDegree) -> Self {
        self.degree = Some(degree);
        self
    }

    pub fn courses(mut self, courses: Vec<Arc<Course>>) -> Self {
        self.courses = courses;
        self
    }

    pub fn gpas(mut self, gpas: Vec<f64>) -> Self {
        self.gpas = gpas;
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn thesis_title(mut self, thesis_title: Option<String>) -> Self {
        self.thesis_title = thesis_title;
        self
    }

    pub fn internship_completed(mut self, internship_completed: bool) -> Self {
        self.internship_completed = internship_completed;
        self
    }

    pub fn teaching_assistant(mut self, teaching_assistant: bool) -> Self {
        self.teaching_assistant = teaching_assistant;
        self
    }

    pub fn build(self) -> Result<StudentRecord, CustomError> {
        let person = self
            .person
            .ok_or_else(|| CustomError::InvalidArgument("person is required".into()))?;
        let degree = self
            .degree
            .ok_or_else(|| CustomError::InvalidArgument("degree type is required".into()))?;

        Ok(StudentRecord::new(
            person,
            self.major,
            degree,
            self.courses,
            self.gpas,
            self.semester.unwrap_or(1),
            self.thesis_title,
            self.internship_completed,
            self.teaching_assistant,
        ))
    }
}
