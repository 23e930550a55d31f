//! 小题字母编号
//!
//! 把从 1 开始的小题序号转换成表格列名式的字母：a..z, aa, ab, ...
//! 这是双射 26 进制，没有"零"位，所以 z 之后是 aa。

use crate::error::NamingError;

const ALPHABET_LEN: usize = 26;

/// 将小题序号转换为小写字母编号
///
/// # 参数
/// - `n`: 小题序号（从 1 开始，无上限）
///
/// # 返回
/// 字母编号；`n == 0` 时返回 `NamingError::NonPositiveIndex`
pub fn encode_letters(n: usize) -> Result<String, NamingError> {
    if n == 0 {
        return Err(NamingError::NonPositiveIndex(n));
    }

    let mut remaining = n;
    let mut letters = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        letters.push(b'a' + (remaining % ALPHABET_LEN) as u8);
        remaining /= ALPHABET_LEN;
    }
    letters.reverse();

    Ok(letters.into_iter().map(char::from).collect())
}
