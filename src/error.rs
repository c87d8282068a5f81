use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZhNumError {
    // 数字文本错误
    #[error("Unrecognized character in numeral: {ch}")]
    UnrecognizedCharacter { ch: char },

    // 计数文法错误：单位字符重复出现，或两侧无可识别数字
    #[error("Malformed unit sequence: {0}")]
    MalformedUnitSequence(String),
}

pub type ZhNumResult<T> = Result<T, ZhNumError>;
