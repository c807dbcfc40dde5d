//! Label and formatting helpers for templates. Unknown inputs never fail:
//! they come back unchanged or as a neutral default.

use entities::calendar_event::{
    EVENT_CUSTOM, EVENT_DEADLINE, EVENT_MEETING, EVENT_MILESTONE, EVENT_PAYMENT, EVENT_PROJECT,
    EVENT_TASK, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_URGENT,
};

pub const DEFAULT_PRIORITY_CLASS: &str = "secondary";

pub fn get_event_type_display(event_type: &str) -> &str {
    match event_type {
        EVENT_TASK => "Görev",
        EVENT_PROJECT => "Proje",
        EVENT_PAYMENT => "Ödeme",
        EVENT_DEADLINE => "Son Tarih",
        EVENT_MEETING => "Toplantı",
        EVENT_MILESTONE => "Kilometre Taşı",
        EVENT_CUSTOM => "Özel Etkinlik",
        other => other,
    }
}

pub fn get_priority_display(priority: &str) -> &str {
    match priority {
        PRIORITY_URGENT => "Acil",
        PRIORITY_HIGH => "Yüksek",
        PRIORITY_MEDIUM => "Orta",
        PRIORITY_LOW => "Düşük",
        other => other,
    }
}

/// Bootstrap contextual class for a priority badge.
pub fn get_priority_class(priority: &str) -> &'static str {
    match priority {
        PRIORITY_URGENT => "danger",
        PRIORITY_HIGH => "warning",
        PRIORITY_MEDIUM => "info",
        PRIORITY_LOW => DEFAULT_PRIORITY_CLASS,
        _ => DEFAULT_PRIORITY_CLASS,
    }
}

/// Extension of the last path segment of a path or URL, without the dot.
///
/// A dot only starts an extension when some other character precedes it in
/// the segment, so `.bashrc` has none.
pub fn file_extension(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or_default();
    let Some(dot) = file_name.rfind('.') else {
        return "";
    };
    if file_name[..dot].chars().all(|c| c == '.') {
        return "";
    }
    &file_name[dot + 1..]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

impl Operand<'_> {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(*n),
            Operand::Text(s) => s.trim().parse::<f64>().ok(),
            Operand::Missing => None,
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Number(value as f64)
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Number(value as f64)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(value: &'a str) -> Self {
        Operand::Text(value)
    }
}

impl<'a, T: Into<Operand<'a>>> From<Option<T>> for Operand<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Operand::Missing)
    }
}

/// `value` as a percentage of `arg`, or `None` when either operand is
/// missing or non-numeric or `arg` is zero.
pub fn percentage<'a>(
    value: impl Into<Operand<'a>>,
    arg: impl Into<Operand<'a>>,
) -> Option<f64> {
    let value = value.into().to_f64()?;
    let arg = arg.into().to_f64()?;
    if arg == 0.0 {
        return None;
    }
    Some(value / arg * 100.0)
}

/// `value` as a percentage of `arg`: `5 |> divisibleby(10) == 50.0`.
/// Zero, missing or non-numeric operands give `0.0`.
pub fn divisibleby<'a>(value: impl Into<Operand<'a>>, arg: impl Into<Operand<'a>>) -> f64 {
    percentage(value, arg).unwrap_or_default()
}
