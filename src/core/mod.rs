pub mod parse;
pub mod pipeline;

pub use crate::domain::model::{
    ComputationResult, FieldFailure, FieldValues, InputField, Message, Number, ValidationOutcome,
};
pub use crate::domain::ports::{Display, DisplaySettings, Exercise, Prompter};
pub use crate::utils::error::Result;
