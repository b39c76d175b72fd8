//! Field rule types.

/// How a field's value is interpreted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string; `minimum`/`maximum` bound its character count.
    Text,
    /// A JSON number, integer or decimal.
    Number,
    /// A JSON boolean literal.
    Boolean,
    /// A JSON string of exactly `minimum` characters holding a real
    /// calendar date in `yyyy-MM-dd` form.
    Date,
}

/// The validation contract for one payload field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Wire name of the field; unique within its rule list.
    pub name: &'static str,
    /// Whether a missing field is a violation.
    pub required: bool,
    /// Lower bound. Character count for `Text`, exact string length for
    /// `Date`. Carried but not evaluated for `Number` and `Boolean`.
    pub minimum: i64,
    /// Upper bound. Character count for `Text`. Carried but not
    /// evaluated for `Number`, `Boolean`, and `Date`.
    pub maximum: i64,
    pub kind: FieldKind,
}

impl FieldRule {
    /// A text field bounded to `minimum..=maximum` characters.
    pub const fn text(name: &'static str, required: bool, minimum: i64, maximum: i64) -> Self {
        Self {
            name,
            required,
            minimum,
            maximum,
            kind: FieldKind::Text,
        }
    }

    /// A numeric field. The bounds ride along in the table but the
    /// engine only type-checks numbers; it does not enforce ranges.
    pub const fn number(name: &'static str, required: bool, minimum: i64, maximum: i64) -> Self {
        Self {
            name,
            required,
            minimum,
            maximum,
            kind: FieldKind::Number,
        }
    }

    /// A boolean field.
    pub const fn boolean(name: &'static str, required: bool) -> Self {
        Self {
            name,
            required,
            minimum: 0,
            maximum: 0,
            kind: FieldKind::Boolean,
        }
    }

    /// A `yyyy-MM-dd` date field of exactly `length` characters.
    pub const fn date(name: &'static str, required: bool, length: i64) -> Self {
        Self {
            name,
            required,
            minimum: length,
            maximum: length,
            kind: FieldKind::Date,
        }
    }
}
