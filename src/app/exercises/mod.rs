pub mod addition;
pub mod birth_year;
pub mod wage;

pub use addition::Addition;
pub use birth_year::BirthYear;
pub use wage::Wage;

use crate::domain::model::{ComputationResult, FieldValues};
use crate::domain::ports::Exercise;
use crate::utils::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    Add,
    Wage,
    BirthYear,
}

impl ExerciseKind {
    pub fn exercise(self) -> Box<dyn Exercise> {
        match self {
            ExerciseKind::Add => Box::new(Addition),
            ExerciseKind::Wage => Box::new(Wage),
            ExerciseKind::BirthYear => Box::new(BirthYear),
        }
    }
}

pub(crate) fn whole(values: &FieldValues, name: &str) -> Result<i32> {
    values
        .get(name)
        .and_then(|v| v.as_whole())
        .ok_or_else(|| CalcError::processing(format!("missing whole number field '{}'", name)))
}

pub(crate) fn decimal(values: &FieldValues, name: &str) -> Result<f64> {
    values
        .get(name)
        .map(|v| v.as_decimal())
        .ok_or_else(|| CalcError::processing(format!("missing field '{}'", name)))
}

pub(crate) fn rendered(
    result: &ComputationResult,
    name: &str,
    currency_symbol: &str,
) -> Result<String> {
    result
        .value(name)
        .map(|v| v.render(currency_symbol))
        .ok_or_else(|| CalcError::processing(format!("result has no value '{}'", name)))
}
