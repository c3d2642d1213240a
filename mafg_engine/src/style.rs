//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn heading_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn question_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn system_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn heading_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn npc_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).underline()
    }
    fn question_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn system_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
}

impl GameStyle for String {
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn npc_style(&self) -> ColoredString {
        self.as_str().npc_style()
    }
    fn question_style(&self) -> ColoredString {
        self.as_str().question_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn system_style(&self) -> ColoredString {
        self.as_str().system_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
}
