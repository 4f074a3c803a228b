//! Raw value to display text conversion.

use serde_json::Value;

/// Turns a cell's raw value into display text.
///
/// Missing and null values render as empty text rather than failing.
pub trait CellFormatter: Send + Sync {
    fn from_raw(&self, raw: Option<&Value>) -> String;
}

/// Default formatter: strings verbatim, everything else via JSON display.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringFormatter;

impl CellFormatter for StringFormatter {
    fn from_raw(&self, raw: Option<&Value>) -> String {
        match raw {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Fixed-point numbers with a thousands separator.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    pub decimals: usize,
    pub decimal_separator: char,
    pub order_separator: Option<char>,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self {
            decimals: 2,
            decimal_separator: '.',
            order_separator: Some(','),
        }
    }
}

impl NumberFormatter {
    pub fn new(decimals: usize) -> Self {
        Self {
            decimals,
            ..Default::default()
        }
    }

    fn format(&self, n: f64) -> String {
        let fixed = format!("{:.*}", self.decimals, n.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::new();
        if n < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }

        match self.order_separator {
            Some(sep) => {
                let len = int_part.len();
                for (i, ch) in int_part.chars().enumerate() {
                    if i > 0 && (len - i) % 3 == 0 {
                        out.push(sep);
                    }
                    out.push(ch);
                }
            }
            None => out.push_str(int_part),
        }

        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

impl CellFormatter for NumberFormatter {
    fn from_raw(&self, raw: Option<&Value>) -> String {
        let number = match raw {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match number {
            Some(n) if n.is_finite() => self.format(n),
            // Unparseable input is shown as-is.
            _ => StringFormatter.from_raw(raw),
        }
    }
}

/// Booleans as a pair of words.
#[derive(Debug, Clone)]
pub struct BooleanFormatter {
    pub yes: String,
    pub no: String,
}

impl Default for BooleanFormatter {
    fn default() -> Self {
        Self {
            yes: "yes".into(),
            no: "no".into(),
        }
    }
}

impl CellFormatter for BooleanFormatter {
    fn from_raw(&self, raw: Option<&Value>) -> String {
        match raw {
            Some(Value::Bool(true)) => self.yes.clone(),
            Some(Value::Bool(false)) => self.no.clone(),
            _ => StringFormatter.from_raw(raw),
        }
    }
}
