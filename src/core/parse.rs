use crate::domain::model::{FieldFailure, InputField, Number, NumberKind, ValidationOutcome};

/// 將去除空白後的文字解析為欄位所需的數字種類
///
/// 整數使用 32 位元有號範圍，可帶正負號。
/// 小數接受 `f64` 能解析的任何值，是否有限交給業務規則檢查。
pub fn parse_field(field: &InputField, raw: &str) -> ValidationOutcome {
    let text = raw.trim();
    let parsed = match field.kind {
        NumberKind::Whole => text.parse::<i32>().ok().map(Number::Whole),
        NumberKind::Decimal => text.parse::<f64>().ok().map(Number::Decimal),
    };

    parsed.ok_or_else(|| FieldFailure::NotANumber {
        field: field.name.to_string(),
        input: raw.to_string(),
    })
}
