//! Recursive-descent decoding primitives over `serde_json::Value`.
//!
//! The decoder never stops at the first problem: every helper records an
//! issue at the current path and returns `None`, and callers keep decoding
//! sibling fields so one pass reports everything wrong with a document.
//! Only fields the manifest shape names are visited, so the work done is
//! bounded by the size of the recognised part of the document.

use serde_json::{Map, Value};

use super::issue::{json_type_name, IssueKind, IssuePath, Measure, PathSegment, SchemaIssue};
use gamegate_domain::{DomainError, WireEnum, MAX_TOKEN_LENGTH};

/// Longest echo of a rejected value kept in an issue message
const MAX_ECHOED_VALUE_CHARS: usize = 64;

pub(crate) struct Decoder {
    path: Vec<PathSegment>,
    issues: Vec<SchemaIssue>,
    max_issues: usize,
    dropped: usize,
}

impl Decoder {
    pub(crate) fn new(max_issues: usize) -> Self {
        Self {
            path: Vec::new(),
            issues: Vec::new(),
            max_issues: max_issues.max(1),
            dropped: 0,
        }
    }

    /// Resolve the decode into the typed value or the collected issues.
    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, Vec<SchemaIssue>> {
        if self.dropped > 0 {
            tracing::debug!(
                reported = self.issues.len(),
                dropped = self.dropped,
                "Structural issue limit reached"
            );
        }
        if !self.issues.is_empty() {
            return Err(self.issues);
        }
        value.ok_or_else(|| {
            vec![SchemaIssue::at_root(IssueKind::Malformed {
                reason: "document could not be decoded".to_string(),
            })]
        })
    }

    pub(super) fn report(&mut self, kind: IssueKind) {
        if self.issues.len() < self.max_issues {
            self.issues
                .push(SchemaIssue::new(IssuePath::from(self.path.clone()), kind));
        } else {
            self.dropped += 1;
        }
    }

    /// Run `f` with `segment` appended to the current path.
    pub(super) fn at<T>(&mut self, segment: PathSegment, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment);
        let out = f(self);
        self.path.pop();
        out
    }

    fn mismatch(&mut self, expected: &'static str, value: &Value) {
        self.report(IssueKind::InvalidType {
            expected,
            received: json_type_name(value),
        });
    }

    pub(super) fn object<'v>(&mut self, value: &'v Value) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.mismatch("object", other);
                None
            }
        }
    }

    /// Decode a field that must be present.
    pub(super) fn required<'v, T>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &'static str,
        expected: &'static str,
        f: impl FnOnce(&mut Self, &'v Value) -> Option<T>,
    ) -> Option<T> {
        self.at(PathSegment::Key(key.to_string()), |d| match obj.get(key) {
            Some(value) => f(d, value),
            None => {
                d.report(IssueKind::InvalidType {
                    expected,
                    received: "undefined",
                });
                None
            }
        })
    }

    /// Decode a field that may be absent or `null`.
    ///
    /// The outer `Option` is `None` when the field is present but invalid.
    pub(super) fn optional<'v, T>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &'static str,
        f: impl FnOnce(&mut Self, &'v Value) -> Option<T>,
    ) -> Option<Option<T>> {
        self.at(PathSegment::Key(key.to_string()), |d| match obj.get(key) {
            None | Some(Value::Null) => Some(None),
            Some(value) => f(d, value).map(Some),
        })
    }

    /// A string whose length in characters lies in `min..=max`.
    pub(super) fn string(&mut self, value: &Value, min: usize, max: usize) -> Option<String> {
        let Some(s) = value.as_str() else {
            self.mismatch("string", value);
            return None;
        };
        let len = s.chars().count();
        if len < min {
            self.report(IssueKind::TooSmall {
                measure: Measure::StringLength,
                minimum: min as u64,
            });
            None
        } else if len > max {
            self.report(IssueKind::TooBig {
                measure: Measure::StringLength,
                maximum: max as u64,
            });
            None
        } else {
            Some(s.to_string())
        }
    }

    /// A whole number in `min..=max`. Floats with no fractional part are accepted.
    pub(super) fn integer(&mut self, value: &Value, min: u32, max: u32) -> Option<u32> {
        let Value::Number(n) = value else {
            self.mismatch("number", value);
            return None;
        };
        let candidate: i128 = if let Some(u) = n.as_u64() {
            i128::from(u)
        } else if let Some(i) = n.as_i64() {
            i128::from(i)
        } else {
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 => {
                    if f < f64::from(min) {
                        i128::from(min) - 1
                    } else if f > f64::from(max) {
                        i128::from(max) + 1
                    } else {
                        f as i128
                    }
                }
                _ => {
                    self.report(IssueKind::InvalidType {
                        expected: "integer",
                        received: "float",
                    });
                    return None;
                }
            }
        };
        if candidate < i128::from(min) {
            self.report(IssueKind::TooSmall {
                measure: Measure::Number,
                minimum: u64::from(min),
            });
            None
        } else if candidate > i128::from(max) {
            self.report(IssueKind::TooBig {
                measure: Measure::Number,
                maximum: u64::from(max),
            });
            None
        } else {
            u32::try_from(candidate).ok()
        }
    }

    /// Any number that is not negative.
    pub(super) fn non_negative(&mut self, value: &Value) -> Option<f64> {
        let Some(f) = value.as_f64() else {
            self.mismatch("number", value);
            return None;
        };
        if f < 0.0 {
            self.report(IssueKind::TooSmall {
                measure: Measure::Number,
                minimum: 0,
            });
            None
        } else {
            Some(f)
        }
    }

    pub(super) fn boolean(&mut self, value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            other => {
                self.mismatch("boolean", other);
                None
            }
        }
    }

    /// An identifier token, validated by the domain newtype.
    pub(super) fn token<T>(&mut self, value: &Value) -> Option<T>
    where
        T: TryFrom<String, Error = DomainError>,
    {
        let raw = self.string(value, 1, MAX_TOKEN_LENGTH)?;
        match T::try_from(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                self.report(IssueKind::InvalidIdentifier);
                None
            }
        }
    }

    /// One of the wire names of `E`.
    pub(super) fn wire_enum<E: WireEnum>(&mut self, value: &Value) -> Option<E> {
        let Some(s) = value.as_str() else {
            self.mismatch("string", value);
            return None;
        };
        match E::from_wire(s) {
            Some(variant) => Some(variant),
            None => {
                self.report(IssueKind::InvalidEnumValue {
                    options: E::wire_names(),
                    received: echo(s),
                });
                None
            }
        }
    }

    /// An array whose length lies in `min..=max`, decoding every element.
    pub(super) fn list<'v, T>(
        &mut self,
        value: &'v Value,
        min: usize,
        max: usize,
        mut each: impl FnMut(&mut Self, &'v Value) -> Option<T>,
    ) -> Option<Vec<T>> {
        let Some(items) = value.as_array() else {
            self.mismatch("array", value);
            return None;
        };
        let mut ok = true;
        if items.len() < min {
            self.report(IssueKind::TooSmall {
                measure: Measure::ArrayLength,
                minimum: min as u64,
            });
            ok = false;
        } else if items.len() > max {
            self.report(IssueKind::TooBig {
                measure: Measure::ArrayLength,
                maximum: max as u64,
            });
            ok = false;
        }

        let mut out = Vec::with_capacity(items.len().min(max));
        for (index, item) in items.iter().enumerate() {
            match self.at(PathSegment::Index(index), |d| each(d, item)) {
                Some(decoded) => out.push(decoded),
                None => ok = false,
            }
        }
        ok.then_some(out)
    }
}

fn echo(value: &str) -> String {
    if value.chars().count() <= MAX_ECHOED_VALUE_CHARS {
        value.to_string()
    } else {
        let mut short: String = value.chars().take(MAX_ECHOED_VALUE_CHARS).collect();
        short.push('…');
        short
    }
}
