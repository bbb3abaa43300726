// Adapters layer: 具體的 prompter 與 display 實作

pub mod console;
pub mod scripted;

pub use console::{ConsoleDisplay, ConsolePrompter};
pub use scripted::{RecordingDisplay, ScriptedPrompter};
