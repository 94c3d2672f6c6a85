//! Typed quantities and SI prefix parsing.
//!
//! Front ends accept values such as `"4.7 µF"` or `"10mH"`. [`parse_quantity`]
//! turns that text into a base-unit [`Quantity`], rejecting a unit symbol that
//! does not belong to the requested unit.

use std::fmt;
use std::marker::PhantomData;

use crate::errors::{Result, ValidationError};
use crate::math::Scalar;

/// Marker trait for physical units.
pub trait Unit {
    /// Canonical display symbol.
    const SYMBOL: &'static str;
    /// Additional accepted spellings (matched case-sensitively).
    const ALIASES: &'static [&'static str] = &[];
}

macro_rules! unit {
    ($(#[$doc:meta])* $name:ident, $symbol:expr $(, $alias:expr)*) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Unit for $name {
            const SYMBOL: &'static str = $symbol;
            const ALIASES: &'static [&'static str] = &[$($alias),*];
        }
    };
}

unit!(
    /// Volts.
    Volt, "V"
);
unit!(
    /// Amperes.
    Ampere, "A"
);
unit!(
    /// Ohms.
    Ohm, "Ω", "ohm", "Ohm", "R"
);
unit!(
    /// Henries.
    Henry, "H"
);
unit!(
    /// Farads.
    Farad, "F"
);
unit!(
    /// Hertz.
    Hertz, "Hz", "hz"
);
unit!(
    /// Radians per second.
    RadiansPerSecond, "rad/s"
);

/// Scalar value tagged with a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U> {
    value: T,
    unit: PhantomData<U>,
}

impl<T: Copy, U: Unit> Quantity<T, U> {
    /// Wraps a value expressed in base units.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Value in base units.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }

    /// Unit symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        U::SYMBOL
    }
}

impl<U: Unit> fmt::Display for Quantity<Scalar, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::SYMBOL)
    }
}

/// Voltage in volts.
pub type Voltage<T> = Quantity<T, Volt>;
/// Current in amperes.
pub type Current<T> = Quantity<T, Ampere>;
/// Resistance, reactance or impedance magnitude in ohms.
pub type Impedance<T> = Quantity<T, Ohm>;
/// Inductance in henries.
pub type Inductance<T> = Quantity<T, Henry>;
/// Capacitance in farads.
pub type Capacitance<T> = Quantity<T, Farad>;
/// Linear frequency in hertz.
pub type Frequency<T> = Quantity<T, Hertz>;
/// Angular frequency in radians per second.
pub type AngularFrequency<T> = Quantity<T, RadiansPerSecond>;

const PREFIXES: &[(&str, Scalar)] = &[
    ("p", 1.0e-12),
    ("n", 1.0e-9),
    ("u", 1.0e-6),
    ("µ", 1.0e-6),
    ("μ", 1.0e-6),
    ("m", 1.0e-3),
    ("k", 1.0e3),
    ("M", 1.0e6),
    ("G", 1.0e9),
];

/// Parses `"<number>[ ][prefix][symbol]"` into a base-unit quantity.
///
/// The number may use a decimal comma. The symbol is optional but, when
/// present, must be `U::SYMBOL` or one of `U::ALIASES`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidQuantity`] when the text is empty, the
/// number does not parse, the prefix is unknown or the symbol names a
/// different unit.
pub fn parse_quantity<U: Unit>(text: &str) -> Result<Quantity<Scalar, U>> {
    let invalid = |reason: String| ValidationError::InvalidQuantity {
        text: text.to_owned(),
        reason,
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty input".into()));
    }

    let split = number_prefix_len(trimmed);
    let (number, suffix) = trimmed.split_at(split);
    let number: Scalar = number
        .replace(',', ".")
        .parse()
        .map_err(|_| invalid(format!("{number:?} is not a number")))?;

    let suffix = strip_unit::<U>(suffix.trim_start()).ok_or_else(|| {
        invalid(format!("unit does not match {}", U::SYMBOL))
    })?;
    let scale = if suffix.is_empty() {
        1.0
    } else {
        PREFIXES
            .iter()
            .find(|(prefix, _)| *prefix == suffix)
            .map(|(_, scale)| *scale)
            .ok_or_else(|| invalid(format!("unknown SI prefix {suffix:?}")))?
    };

    Ok(Quantity::new(number * scale))
}

/// Length of the leading numeric part, including an exponent such as `e-6`.
fn number_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        let b = bytes[end];
        let exponent = (b == b'e' || b == b'E')
            && end > 0
            && bytes
                .get(end + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == b'-' || *n == b'+');
        let sign_after_exponent =
            (b == b'-' || b == b'+') && (end == 0 || matches!(bytes[end - 1], b'e' | b'E'));
        if b.is_ascii_digit() || b == b'.' || b == b',' || exponent || sign_after_exponent {
            end += 1;
        } else {
            break;
        }
    }
    end
}

/// Removes a trailing unit symbol, leaving only the SI prefix.
fn strip_unit<U: Unit>(suffix: &str) -> Option<&str> {
    if suffix.is_empty() {
        return Some(suffix);
    }
    // Longest spelling first so that "Hz" wins over a bare prefix.
    let mut spellings: Vec<&str> = std::iter::once(U::SYMBOL)
        .chain(U::ALIASES.iter().copied())
        .collect();
    spellings.sort_by_key(|s| std::cmp::Reverse(s.len()));
    for spelling in spellings {
        if let Some(prefix) = suffix.strip_suffix(spelling) {
            return Some(prefix.trim_end());
        }
    }
    // No symbol at all: the whole suffix must be a prefix.
    PREFIXES
        .iter()
        .any(|(prefix, _)| *prefix == suffix)
        .then_some(suffix)
}
