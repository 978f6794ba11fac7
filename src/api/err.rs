/// 自定义错误类型
#[derive(thiserror::Error, Debug)]
pub enum CustomError {
    /// 非法参数, 如添加空课程
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// 当前状态不允许该操作, 如无课程可退
    #[error("illegal state: {0}")]
    IllegalState(String),
    /// 日期无法解析
    #[error("Invalid date format. Please enter a valid date in the format YYYY-MM-DD.")]
    InvalidDateFormat(#[from] time::error::Parse),
    /// 出生日期距今不足10年(以10天前为基准)
    #[error("Date of birth must be at least 10 years ago (10 days before today).")]
    DateOfBirthTooRecent(time::Date),
    /// 文件读取失败
    #[error("读取文件失败: {0}")]
    FileReadError(#[from] std::io::Error),
    /// 不符合预期的文件,如csv文件名称不符合预期
    #[error("不符合预期的文件: {0}")]
    UnexpectedFileError(String),
    /// csv处理错误
    #[error("解析csv失败: {0}")]
    CsvParseError(#[from] csv::Error),
    /// csv文件中的数据不符合预期
    #[error("csv数据错误: {0}")]
    CsvDataError(String),
    /// regex相关错误
    #[error("failed to parse or compile a regular expression: {0}")]
    RegexError(#[from] regex::Error),
}
