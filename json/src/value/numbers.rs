use core::fmt::{self, Display};

/// A JSON number represented by some Rust primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    U64(u64),
    I64(i64),
    F64(f64),
}

impl Number {
    pub fn is_finite(&self) -> bool {
        match self {
            Number::U64(_) | Number::I64(_) => true,
            Number::F64(f) => f.is_finite(),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::U64(n) => *n as f64,
            Number::I64(i) => *i as f64,
            Number::F64(f) => *f,
        }
    }

    /// JSON text for this number. Non-finite floats have no JSON form and
    /// render as `null`.
    pub fn to_json(&self) -> String {
        if self.is_finite() {
            self.to_string()
        } else {
            "null".to_string()
        }
    }
}

impl Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::U64(n) => formatter.write_str(&n.to_string()),
            Number::I64(i) => formatter.write_str(&i.to_string()),
            Number::F64(f) => formatter.write_str(&format_f64(*f)),
        }
    }
}

/// Shortest round-trip digits laid out the way `Number.prototype.toString`
/// does: plain decimal for exponents in `[-7, 21)`, `d.ddde±x` otherwise.
fn format_f64(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        // covers -0
        return "0".to_string();
    }

    let sci = format!("{:e}", f.abs());
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return f.to_string(),
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let mut out = String::new();
    if f < 0.0 {
        out.push('-');
    }
    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        out.push_str(&digits[..n as usize]);
        out.push('.');
        out.push_str(&digits[n as usize..]);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(-n as usize));
        out.push_str(&digits);
    } else {
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if n - 1 >= 0 { '+' } else { '-' });
        out.push_str(&(n - 1).abs().to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_verbatim() {
        assert_eq!(Number::U64(32).to_json(), "32");
        assert_eq!(Number::I64(-7).to_json(), "-7");
        assert_eq!(Number::U64(u64::MAX).to_json(), "18446744073709551615");
    }

    #[test]
    fn integral_floats_drop_the_fraction() {
        assert_eq!(Number::F64(32.0).to_json(), "32");
        assert_eq!(Number::F64(-0.0).to_json(), "0");
        assert_eq!(Number::F64(100.0).to_json(), "100");
    }

    #[test]
    fn floats_use_shortest_digits() {
        assert_eq!(Number::F64(0.1).to_json(), "0.1");
        assert_eq!(Number::F64(150.99).to_json(), "150.99");
        assert_eq!(Number::F64(-2.5).to_json(), "-2.5");
        assert_eq!(Number::F64(0.000001).to_json(), "0.000001");
    }

    #[test]
    fn large_and_small_floats_switch_to_exponent_form() {
        assert_eq!(Number::F64(1e21).to_json(), "1e+21");
        assert_eq!(Number::F64(1e20).to_json(), "100000000000000000000");
        assert_eq!(Number::F64(1.5e-7).to_json(), "1.5e-7");
        assert_eq!(Number::F64(1e-7).to_json(), "1e-7");
        assert_eq!(Number::F64(-1.25e30).to_json(), "-1.25e+30");
    }

    #[test]
    fn non_finite_floats_render_as_null() {
        assert_eq!(Number::F64(f64::NAN).to_json(), "null");
        assert_eq!(Number::F64(f64::INFINITY).to_json(), "null");
        assert_eq!(Number::F64(f64::NEG_INFINITY).to_json(), "null");
        assert_eq!(Number::F64(f64::NAN).to_string(), "NaN");
    }
}
