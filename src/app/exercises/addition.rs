use super::{rendered, whole};
use crate::domain::model::{ComputationResult, DerivedValue, FieldValues, InputField, ValueFormat};
use crate::domain::ports::{DisplaySettings, Exercise};
use crate::utils::error::Result;

const FIELDS: [InputField; 2] = [
    InputField::whole("x", "Enter the first number:"),
    InputField::whole("y", "Enter the second number:"),
];

/// 兩個整數相加
#[derive(Debug, Clone, Copy, Default)]
pub struct Addition;

impl Exercise for Addition {
    fn name(&self) -> &'static str {
        "add"
    }

    fn fields(&self) -> &[InputField] {
        &FIELDS
    }

    fn parse_error_message(&self) -> &'static str {
        "Please enter whole numbers only."
    }

    // 沒有業務規則，任意兩個整數都能相加
    fn domain_error_message(&self) -> &'static str {
        self.parse_error_message()
    }

    fn compute(&self, values: &FieldValues) -> Result<ComputationResult> {
        let x = whole(values, "x")?;
        let y = whole(values, "y")?;
        // 以 i64 計算，避免溢位
        let sum = i64::from(x) + i64::from(y);

        Ok(ComputationResult::new(self.name())
            .with_value(DerivedValue::new("x", f64::from(x), ValueFormat::Integer))
            .with_value(DerivedValue::new("y", f64::from(y), ValueFormat::Integer))
            .with_value(DerivedValue::new("sum", sum as f64, ValueFormat::Integer)))
    }

    fn render(&self, result: &ComputationResult, settings: &dyn DisplaySettings) -> Result<String> {
        let symbol = settings.currency_symbol();
        Ok(format!(
            "{} + {} = {}",
            rendered(result, "x", symbol)?,
            rendered(result, "y", symbol)?,
            rendered(result, "sum", symbol)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::AppConfig;
    use crate::domain::model::Number;

    fn values(x: i32, y: i32) -> FieldValues {
        let mut values = FieldValues::new();
        values.insert("x", Number::Whole(x));
        values.insert("y", Number::Whole(y));
        values
    }

    #[test]
    fn test_sum_and_render() {
        let result = Addition.compute(&values(-4, 10)).unwrap();
        let text = Addition.render(&result, &AppConfig::default()).unwrap();
        assert_eq!(text, "-4 + 10 = 6");
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let result = Addition.compute(&values(i32::MAX, i32::MAX)).unwrap();
        let text = Addition.render(&result, &AppConfig::default()).unwrap();
        assert_eq!(text, "2147483647 + 2147483647 = 4294967294");
    }
}
