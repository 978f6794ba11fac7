use time::Date;

/// 个人基本信息
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    // 编号
    id: i32,
    // 姓名
    full_name: String,
    // 住址
    address: String,
    // 电话
    phone: String,
    // 邮箱
    email: String,
    // 出生日期
    date_of_birth: Date,
}

impl Person {
    pub fn new(
        id: i32,
        full_name: String,
        address: String,
        phone: String,
        email: String,
        date_of_birth: Date,
    ) -> Self {
        Self {
            id,
            full_name,
            address,
            phone,
            email,
            date_of_birth,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }
}
