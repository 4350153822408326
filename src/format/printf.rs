//! printf-style substitution of a single value into a column format string.
//!
//! Supported verbs: `%v %s %q %d %c %x %X %o %b %t %f %F %e %E %g %G %%`,
//! flags `- + space 0 #`, width and precision. Mistakes never fail: a verb
//! that does not fit the value renders as `%!d(string=abc)`, a second verb
//! renders as `%!d(MISSING)`, and a format without any verb gets
//! `%!(EXTRA type=value)` appended. A trailing `%` renders as `%!(NOVERB)`.
//! Width and precision above one million render as `%!(BADWIDTH)` and
//! `%!(BADPREC)` and the value is formatted without them.

use crate::value::Value;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Largest accepted width or precision.
const MAX_FIELD: usize = 1_000_000;

static VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([-+# 0]*)(\d+)?(?:\.(\d*))?([a-zA-Z%]|$)").expect("valid printf verb pattern")
});

#[derive(Debug, Default)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
    verb: char,
}

impl Spec {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let mut spec = Spec::default();
        if let Some(flags) = caps.get(1) {
            for flag in flags.as_str().chars() {
                match flag {
                    '-' => spec.minus = true,
                    '+' => spec.plus = true,
                    ' ' => spec.space = true,
                    '0' => spec.zero = true,
                    '#' => spec.sharp = true,
                    _ => {}
                }
            }
        }
        if let Some(m) = caps.get(2) {
            spec.width = parse_field(m.as_str());
            spec.bad_width = spec.width.is_none();
        }
        if let Some(m) = caps.get(3) {
            // "%.f" means precision 0
            spec.precision = if m.as_str().is_empty() {
                Some(0)
            } else {
                parse_field(m.as_str())
            };
            spec.bad_precision = spec.precision.is_none();
        }
        spec.verb = caps
            .get(4)
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or('v');
        spec
    }

    fn is_verb_missing(caps: &Captures<'_>) -> bool {
        caps.get(4).is_none_or(|m| m.as_str().is_empty())
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }
}

/// Substitute `value` into `format`.
pub fn sprintf(format: &str, value: &Value) -> String {
    let mut out = String::with_capacity(format.len() + 8);
    let mut last = 0;
    let mut consumed = false;

    for caps in VERB.captures_iter(format) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&format[last..whole.start()]);
        last = whole.end();

        if Spec::is_verb_missing(&caps) {
            out.push_str("%!(NOVERB)");
            continue;
        }
        let spec = Spec::from_captures(&caps);
        if spec.verb == '%' {
            out.push('%');
            continue;
        }
        if consumed {
            out.push_str(&format!("%!{}(MISSING)", spec.verb));
            continue;
        }
        consumed = true;
        if spec.bad_width {
            out.push_str("%!(BADWIDTH)");
        }
        if spec.bad_precision {
            out.push_str("%!(BADPREC)");
        }
        out.push_str(&render(&spec, value));
    }
    out.push_str(&format[last..]);

    if !consumed {
        out.push_str(&format!("%!(EXTRA {}={})", value.type_name(), value));
    }
    out
}

fn parse_field(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok().filter(|n| *n <= MAX_FIELD)
}

fn render(spec: &Spec, value: &Value) -> String {
    match (spec.verb, value) {
        ('v', Value::Str(_) | Value::Bytes(_) | Value::Custom(_)) if spec.precision.is_some() => {
            pad(spec, truncate(&value.to_string(), spec.precision))
        }
        ('v', Value::Int(_) | Value::UInt(_)) => integer(spec, value, 'd'),
        ('v', Value::F32(_) | Value::F64(_)) => float(spec, value, 'v'),
        ('v', _) => pad(spec, value.to_string()),

        ('s', Value::Str(s)) => pad(spec, truncate(s, spec.precision)),
        ('s', Value::Bytes(b)) => pad(spec, truncate(&String::from_utf8_lossy(b), spec.precision)),
        ('s', Value::Custom(c)) => pad(spec, truncate(&c.stringify(), spec.precision)),

        ('q', Value::Str(s)) => pad(spec, format!("{s:?}")),
        ('q', Value::Bytes(b)) => pad(spec, format!("{:?}", String::from_utf8_lossy(b))),
        ('q', Value::Char(c)) => pad(spec, format!("{c:?}")),

        ('t', Value::Bool(b)) => pad(spec, b.to_string()),

        ('c', Value::Char(c)) => pad(spec, c.to_string()),
        ('c', Value::Int(_) | Value::UInt(_)) => match as_integer(value)
            .and_then(|i| u32::try_from(i).ok())
            .and_then(char::from_u32)
        {
            Some(c) => pad(spec, c.to_string()),
            None => pad(spec, char::REPLACEMENT_CHARACTER.to_string()),
        },

        ('d' | 'x' | 'X' | 'o' | 'b', Value::Int(_) | Value::UInt(_) | Value::Char(_)) => {
            integer(spec, value, spec.verb)
        }
        ('x' | 'X', Value::Str(s)) => pad(spec, hex(s.as_bytes(), spec.verb == 'X')),
        ('x' | 'X', Value::Bytes(b)) => pad(spec, hex(b, spec.verb == 'X')),

        ('f' | 'F' | 'e' | 'E' | 'g' | 'G', Value::F32(_) | Value::F64(_)) => {
            float(spec, value, spec.verb)
        }

        _ => bad_verb(spec.verb, value),
    }
}

fn bad_verb(verb: char, value: &Value) -> String {
    match value {
        Value::Nil => format!("%!{verb}(<nil>)"),
        other => format!("%!{verb}({}={})", other.type_name(), other),
    }
}

fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Int(i) => Some(*i as i128),
        Value::UInt(u) => Some(*u as i128),
        Value::Char(c) => Some(*c as u32 as i128),
        _ => None,
    }
}

fn integer(spec: &Spec, value: &Value, verb: char) -> String {
    let Some(n) = as_integer(value) else {
        return bad_verb(verb, value);
    };
    let magnitude = n.unsigned_abs();
    let (mut digits, prefix) = match verb {
        'x' => (format!("{magnitude:x}"), "0x"),
        'X' => (format!("{magnitude:X}"), "0X"),
        'o' => (format!("{magnitude:o}"), "0"),
        'b' => (format!("{magnitude:b}"), "0b"),
        _ => (magnitude.to_string(), ""),
    };
    if let Some(min_digits) = spec.precision
        && digits.len() < min_digits
    {
        digits = format!("{}{}", "0".repeat(min_digits - digits.len()), digits);
    }
    let lead = if spec.sharp {
        format!("{}{}", spec.sign(n < 0), prefix)
    } else {
        spec.sign(n < 0).to_string()
    };
    pad_number(spec, &lead, digits)
}

fn float(spec: &Spec, value: &Value, verb: char) -> String {
    let x = match value {
        Value::F32(x) => *x as f64,
        Value::F64(x) => *x,
        other => return bad_verb(verb, other),
    };
    let sign = spec.sign(x.is_sign_negative() && !x.is_nan());

    if x.is_nan() {
        return pad(spec, "NaN".to_string());
    }
    if x.is_infinite() {
        let sign = if x < 0.0 { "-" } else if spec.plus { "+" } else { "" };
        return pad(spec, format!("{sign}Inf"));
    }

    let x = x.abs();
    let digits = match verb {
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), x),
        'e' | 'E' => exponent(x, spec.precision.unwrap_or(6), verb == 'E'),
        // %v keeps plain notation up to 1e21, %g switches at 1e6
        'v' => general(spec, value, x, false, 21),
        _ => general(spec, value, x, verb == 'G', 6),
    };
    pad_number(spec, sign, digits)
}

/// `1.5e0` (Rust) becomes `1.500000e+00` (C style).
fn exponent(x: f64, precision: usize, upper: bool) -> String {
    c_exponent(&format!("{:.*e}", precision, x), upper)
}

fn c_exponent(rust: &str, upper: bool) -> String {
    let (mantissa, exp) = rust.split_once('e').unwrap_or((rust, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{e}{sign}{:02}", exp.abs())
}

/// `%g`: shortest representation, switching to exponent form for very large
/// or very small magnitudes. `limit` is the exponent where the switch
/// happens when no precision is given.
fn general(spec: &Spec, value: &Value, x: f64, upper: bool, limit: i32) -> String {
    match spec.precision {
        None => {
            let (fixed, exp_form) = match value {
                Value::F32(f) => (format!("{}", f.abs()), format!("{:e}", f.abs())),
                _ => (format!("{x}"), format!("{x:e}")),
            };
            let exp = exponent_of(&exp_form);
            if exp < -4 || exp >= limit {
                c_exponent(&exp_form, upper)
            } else {
                fixed
            }
        }
        Some(p) => {
            let p = p.max(1);
            let rounded = format!("{:.*e}", p - 1, x);
            let exp = exponent_of(&rounded);
            if exp < -4 || exp >= p as i32 {
                let (mantissa, _) = rounded.split_once('e').unwrap_or((rounded.as_str(), "0"));
                let mantissa = if spec.sharp {
                    mantissa.to_string()
                } else {
                    trim_zeros(mantissa)
                };
                c_exponent(&format!("{mantissa}e{exp}"), upper)
            } else {
                let decimals = (p as i32 - 1 - exp).max(0) as usize;
                let fixed = format!("{:.*}", decimals, x);
                if spec.sharp { fixed } else { trim_zeros(&fixed) }
            }
        }
    }
}

fn exponent_of(rust_exp: &str) -> i32 {
    rust_exp
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0)
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn hex(bytes: &[u8], upper: bool) -> String {
    bytes
        .iter()
        .map(|b| {
            if upper {
                format!("{b:02X}")
            } else {
                format!("{b:02x}")
            }
        })
        .collect()
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_string(),
    }
}

/// Numbers zero-pad between the sign and the digits when asked to.
fn pad_number(spec: &Spec, lead: &str, digits: String) -> String {
    let len = lead.chars().count() + digits.chars().count();
    match spec.width {
        Some(w) if spec.zero && !spec.minus && w > len => {
            format!("{lead}{}{digits}", "0".repeat(w - len))
        }
        _ => pad(spec, format!("{lead}{digits}")),
    }
}

fn pad(spec: &Spec, body: String) -> String {
    let len = body.chars().count();
    match spec.width {
        Some(w) if w > len => {
            let fill = " ".repeat(w - len);
            if spec.minus {
                format!("{body}{fill}")
            } else {
                format!("{fill}{body}")
            }
        }
        _ => body,
    }
}
