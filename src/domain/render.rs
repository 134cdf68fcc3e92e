//! Text rendering shared by every generated shape.
//!
//! Shapes render as `{Name: value,Other: value}`, skipping unset fields.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{self, Formatter};

/// How a field value appears inside a shape's `Display` output.
pub trait RenderField {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

impl RenderField for String {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl RenderField for str {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl RenderField for bool {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl RenderField for i32 {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl RenderField for i64 {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl RenderField for DateTime<Utc> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<T: RenderField> RenderField for Vec<T> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

/// Brace-delimited field list writer.
pub struct FieldList<'a, 'b> {
    f: &'a mut Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> FieldList<'a, 'b> {
    pub fn begin(f: &'a mut Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    /// Writes `name: value` when the value is set; unset fields are skipped.
    pub fn entry<T: RenderField + ?Sized>(&mut self, name: &str, value: Option<&T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_str(",")?;
        }
        self.empty = false;
        write!(self.f, "{}: ", name)?;
        value.render(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        first: Option<String>,
        second: Option<Vec<i32>>,
    }

    impl fmt::Display for Pair {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            let mut fields = FieldList::begin(f)?;
            fields.entry("First", self.first.as_ref())?;
            fields.entry("Second", self.second.as_ref())?;
            fields.finish()
        }
    }

    #[test]
    fn test_unset_fields_are_skipped() {
        let pair = Pair {
            first: None,
            second: Some(vec![1, 2]),
        };
        assert_eq!(pair.to_string(), "{Second: [1, 2]}");
    }

    #[test]
    fn test_fields_are_comma_joined() {
        let pair = Pair {
            first: Some("a".to_string()),
            second: Some(vec![]),
        };
        assert_eq!(pair.to_string(), "{First: a,Second: []}");
    }

    #[test]
    fn test_empty() {
        let pair = Pair {
            first: None,
            second: None,
        };
        assert_eq!(pair.to_string(), "{}");
    }
}
