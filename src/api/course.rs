/// 课程信息, 由课程目录持有, 学生记录只保存其共享引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    // 课程编号
    course_code: i32,
    // 课程名称
    title: String,
    // 学分
    credit_hours: u8,
}

impl Course {
    pub fn new(course_code: i32, title: String, credit_hours: u8) -> Self {
        Self {
            course_code,
            title,
            credit_hours,
        }
    }

    pub fn course_code(&self) -> i32 {
        self.course_code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn credit_hours(&self) -> u8 {
        self.credit_hours
    }
}
