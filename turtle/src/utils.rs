use std::fmt;

/// Formats a `f64` with its shortest round-trip representation.
///
/// Integral values keep a fractional part and exponents are signed with at least two digits.
///
/// ```
/// use osmrdf_turtle::Double;
///
/// assert_eq!("10.0", Double(10.).to_string());
/// assert_eq!("-0.1275", Double(-0.1275).to_string());
/// ```
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Double(pub f64);

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0. { "inf" } else { "-inf" });
        }
        let repr = format!("{:?}", value);
        match repr.find('e') {
            Some(position) => {
                let (mantissa, exponent) = (&repr[..position], &repr[position + 1..]);
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => f.write_str(&repr),
        }
    }
}
