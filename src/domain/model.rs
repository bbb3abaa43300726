use serde::Serialize;
use std::fmt;

/// 欄位文字需要解析成的數字種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Whole,
    Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub name: &'static str,
    pub prompt: &'static str,
    pub kind: NumberKind,
}

impl InputField {
    pub const fn whole(name: &'static str, prompt: &'static str) -> Self {
        Self {
            name,
            prompt,
            kind: NumberKind::Whole,
        }
    }

    pub const fn decimal(name: &'static str, prompt: &'static str) -> Self {
        Self {
            name,
            prompt,
            kind: NumberKind::Decimal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Whole(i32),
    Decimal(f64),
}

impl Number {
    pub fn as_whole(&self) -> Option<i32> {
        match self {
            Number::Whole(n) => Some(*n),
            Number::Decimal(_) => None,
        }
    }

    pub fn as_decimal(&self) -> f64 {
        match self {
            Number::Whole(n) => f64::from(*n),
            Number::Decimal(d) => *d,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Whole(n) => write!(f, "{}", n),
            Number::Decimal(d) => write!(f, "{}", d),
        }
    }
}

/// 欄位無法產生可用數字的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFailure {
    Cancelled,
    NotANumber { field: String, input: String },
    OutOfDomain { field: String, reason: String },
}

pub type ValidationOutcome = std::result::Result<Number, FieldFailure>;

/// 已收集的欄位值，依提示順序
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    entries: Vec<(&'static str, Number)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: Number) {
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<Number> {
        self.entries
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    Integer,
    Currency,
    Year,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedValue {
    pub name: String,
    pub value: f64,
    pub format: ValueFormat,
}

impl DerivedValue {
    pub fn new(name: &str, value: f64, format: ValueFormat) -> Self {
        Self {
            name: name.to_string(),
            value,
            format,
        }
    }

    /// 格式化數值：貨幣固定兩位小數並加上 `currency_symbol`
    pub fn render(&self, currency_symbol: &str) -> String {
        match self.format {
            ValueFormat::Integer | ValueFormat::Year => format!("{}", self.value as i64),
            ValueFormat::Currency => format!("{}{:.2}", currency_symbol, self.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputationResult {
    pub exercise: String,
    pub values: Vec<DerivedValue>,
}

impl ComputationResult {
    pub fn new(exercise: &str) -> Self {
        Self {
            exercise: exercise.to_string(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: DerivedValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn value(&self, name: &str) -> Option<&DerivedValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Info,
    Error,
}

/// 顯示給使用者的一則訊息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ComputationResult>,
}

impl Message {
    pub fn result(body: String, result: ComputationResult) -> Self {
        Self {
            kind: MessageKind::Info,
            title: "Result".to_string(),
            body,
            result: Some(result),
        }
    }

    pub fn input_error(body: &str) -> Self {
        Self {
            kind: MessageKind::Error,
            title: "Input error".to_string(),
            body: body.to_string(),
            result: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}
