use super::{rendered, whole};
use crate::domain::model::{
    ComputationResult, DerivedValue, FieldValues, InputField, Number, ValueFormat,
};
use crate::domain::ports::{DisplaySettings, Exercise};
use crate::utils::error::Result;

const FIELDS: [InputField; 2] = [
    InputField::whole(
        "age",
        "Enter your age (no cheating now, just round numbers and no decimal points please):",
    ),
    InputField::whole(
        "current_year",
        "Enter the current year (in the following format please 2025):",
    ),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct BirthYear;

impl Exercise for BirthYear {
    fn name(&self) -> &'static str {
        "birth-year"
    }

    fn fields(&self) -> &[InputField] {
        &FIELDS
    }

    fn parse_error_message(&self) -> &'static str {
        "Enter whole numbers only please, no drama here with decimal points please or words."
    }

    fn domain_error_message(&self) -> &'static str {
        "Please enter positive whole numbers please, no need for technicalities."
    }

    fn check_domain(&self, field: &InputField, value: Number) -> Option<String> {
        let value = value.as_whole()?;
        match field.name {
            "age" if value < 0 => Some(format!("age {} is negative", value)),
            "current_year" if value <= 0 => Some(format!("year {} is not positive", value)),
            _ => None,
        }
    }

    fn compute(&self, values: &FieldValues) -> Result<ComputationResult> {
        let age = whole(values, "age")?;
        let current_year = whole(values, "current_year")?;
        // age >= 0 且 year > 0，相減不會溢位
        let birth_year = current_year - age;

        Ok(ComputationResult::new(self.name()).with_value(DerivedValue::new(
            "birth_year",
            f64::from(birth_year),
            ValueFormat::Year,
        )))
    }

    fn render(&self, result: &ComputationResult, settings: &dyn DisplaySettings) -> Result<String> {
        Ok(format!(
            "You were (apparently 😉) born in year {}.",
            rendered(result, "birth_year", settings.currency_symbol())?
        ))
    }
}
