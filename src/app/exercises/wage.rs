use super::{decimal, rendered};
use crate::domain::model::{
    ComputationResult, DerivedValue, FieldValues, InputField, Number, ValueFormat,
};
use crate::domain::ports::{DisplaySettings, Exercise};
use crate::utils::error::Result;

const MONTHS_PER_YEAR: f64 = 12.0;
const WEEKS_PER_YEAR: f64 = 52.0;

const FIELDS: [InputField; 2] = [
    InputField::decimal("monthly_wage", "Enter your monthly wage:"),
    InputField::decimal("weekly_hours", "Enter your weekly hours:"),
];

/// 月薪與每週工時換算成年薪與時薪
#[derive(Debug, Clone, Copy, Default)]
pub struct Wage;

impl Exercise for Wage {
    fn name(&self) -> &'static str {
        "wage"
    }

    fn fields(&self) -> &[InputField] {
        &FIELDS
    }

    fn parse_error_message(&self) -> &'static str {
        "Please enter numbers only, decimal points are fine."
    }

    fn domain_error_message(&self) -> &'static str {
        "Please enter a monthly wage of zero or more and weekly hours above zero."
    }

    fn check_domain(&self, field: &InputField, value: Number) -> Option<String> {
        let value = value.as_decimal();
        if !value.is_finite() {
            return Some(format!("{} must be a finite number", field.name));
        }
        match field.name {
            "monthly_wage" if value < 0.0 => Some("monthly wage is negative".to_string()),
            "weekly_hours" if value <= 0.0 => Some("weekly hours must be above zero".to_string()),
            _ => None,
        }
    }

    fn compute(&self, values: &FieldValues) -> Result<ComputationResult> {
        let monthly = decimal(values, "monthly_wage")?;
        let weekly_hours = decimal(values, "weekly_hours")?;

        let yearly = monthly * MONTHS_PER_YEAR;
        let hourly = yearly / (weekly_hours * WEEKS_PER_YEAR);

        Ok(ComputationResult::new(self.name())
            .with_value(DerivedValue::new("yearly", yearly, ValueFormat::Currency))
            .with_value(DerivedValue::new("hourly", hourly, ValueFormat::Currency)))
    }

    fn check_result(&self, result: &ComputationResult) -> Option<String> {
        result
            .values
            .iter()
            .find(|v| !v.value.is_finite())
            .map(|v| format!("{} wage is not a finite number", v.name))
    }

    fn render(&self, result: &ComputationResult, settings: &dyn DisplaySettings) -> Result<String> {
        let symbol = settings.currency_symbol();
        Ok(format!(
            "Your yearly wage is: {}\nYour hourly wage is: {}",
            rendered(result, "yearly", symbol)?,
            rendered(result, "hourly", symbol)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::AppConfig;

    #[test]
    fn test_full_time_wage() {
        let mut values = FieldValues::new();
        values.insert("monthly_wage", Number::Decimal(3000.0));
        values.insert("weekly_hours", Number::Decimal(40.0));

        let result = Wage.compute(&values).unwrap();
        assert_eq!(result.value("yearly").unwrap().value, 36000.0);

        let text = Wage.render(&result, &AppConfig::default()).unwrap();
        assert_eq!(
            text,
            "Your yearly wage is: €36000.00\nYour hourly wage is: €17.31"
        );
    }

    #[test]
    fn test_overflowing_result_is_rejected() {
        let cases = [(1e308, 40.0, "yearly"), (3000.0, 1e-320, "hourly")];

        for (monthly, hours, culprit) in cases {
            let mut values = FieldValues::new();
            values.insert("monthly_wage", Number::Decimal(monthly));
            values.insert("weekly_hours", Number::Decimal(hours));

            let result = Wage.compute(&values).unwrap();
            let reason = Wage.check_result(&result).expect("non-finite wage must be rejected");
            assert!(reason.starts_with(culprit), "{}", reason);
        }
    }

    #[test]
    fn test_regular_result_passes() {
        let mut values = FieldValues::new();
        values.insert("monthly_wage", Number::Decimal(3000.0));
        values.insert("weekly_hours", Number::Decimal(40.0));

        let result = Wage.compute(&values).unwrap();
        assert!(Wage.check_result(&result).is_none());
    }

    #[test]
    fn test_domain_rules() {
        let hours = &FIELDS[1];
        assert!(Wage.check_domain(hours, Number::Decimal(0.0)).is_some());
        assert!(Wage.check_domain(hours, Number::Decimal(f64::INFINITY)).is_some());
        assert!(Wage.check_domain(hours, Number::Decimal(37.5)).is_none());

        let monthly = &FIELDS[0];
        assert!(Wage.check_domain(monthly, Number::Decimal(-1.0)).is_some());
        assert!(Wage.check_domain(monthly, Number::Decimal(0.0)).is_none());
    }
}
