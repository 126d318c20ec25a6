//! Application state and key handling for the BMI calculator.
//!
//! The `App` struct holds the two input buffers, the focused field, the
//! most recent evaluation result, and the timestamp driving the result
//! fade-in. All derived display attributes (category label, background
//! color) come from the `BmiResult` at render time; nothing is stored
//! twice.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::bmi::{evaluate, parse_measurement, BmiResult};

/// How long the result card takes to fade in after a calculation.
pub const FADE_DURATION: Duration = Duration::from_millis(800);

/// Which input field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Height,
    Weight,
}

impl Field {
    pub fn toggle(&self) -> Self {
        match self {
            Field::Height => Field::Weight,
            Field::Weight => Field::Height,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Height => "Height (cm)",
            Field::Weight => "Weight (kg)",
        }
    }
}

/// Application state
pub struct App {
    pub height_input: String,
    pub weight_input: String,
    pub focus: Field,
    /// Latest evaluation result; replaced wholesale on each calculation.
    pub result: Option<BmiResult>,
    /// Blocking validation notice; cleared by the next keypress.
    pub notice: Option<String>,
    /// When the current result appeared, for the fade-in.
    result_shown_at: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        Self {
            height_input: String::new(),
            weight_input: String::new(),
            focus: Field::Height,
            result: None,
            notice: None,
            result_shown_at: None,
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        // A notice blocks everything else until dismissed.
        if self.notice.is_some() {
            self.notice = None;
            return false;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Enter => self.calculate(),
            KeyCode::Backspace => {
                self.focused_input_mut().pop();
            }
            // Numeric entry only: digits and a decimal point.
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                self.focused_input_mut().push(c);
            }
            _ => {}
        }
        false
    }

    /// Run the validate-then-compute pipeline on the current inputs.
    ///
    /// On success the previous result is replaced and the fade restarts.
    /// On invalid input a notice is raised and any previous result stays
    /// on screen untouched.
    pub fn calculate(&mut self) {
        match parse_measurement(&self.height_input, &self.weight_input) {
            Ok(measurement) => {
                self.result = Some(evaluate(&measurement));
                self.result_shown_at = Some(Instant::now());
            }
            Err(err) => {
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Fade-in progress for the result card, from 0.0 to 1.0.
    pub fn fade_alpha(&self) -> f64 {
        match self.result_shown_at {
            Some(shown_at) => {
                (shown_at.elapsed().as_secs_f64() / FADE_DURATION.as_secs_f64()).min(1.0)
            }
            None => 1.0,
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Height => &mut self.height_input,
            Field::Weight => &mut self.weight_input,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
