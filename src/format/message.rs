use serde_json::Value;

/// A single message argument.
///
/// Stands in for the loosely typed variadic arguments a logging call accepts:
/// plain strings, numbers, booleans, or arbitrary JSON values for
/// object-style inspection. Conversion never fails; anything that cannot be
/// represented more precisely degrades to its textual form.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Json(Value),
}

impl LogValue {
    /// JSON rendering used by the `%j` substitution token.
    fn as_json(&self) -> String {
        match self {
            LogValue::Str(s) => Value::String(s.clone()).to_string(),
            LogValue::Int(i) => i.to_string(),
            LogValue::Float(x) => x.to_string(),
            LogValue::Bool(b) => b.to_string(),
            LogValue::Json(v) => v.to_string(),
        }
    }
}

impl std::fmt::Display for LogValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogValue::Str(s) => f.write_str(s),
            LogValue::Int(i) => write!(f, "{i}"),
            LogValue::Float(x) => write!(f, "{x}"),
            LogValue::Bool(b) => write!(f, "{b}"),
            LogValue::Json(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Str(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Str(s)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<f32> for LogValue {
    fn from(x: f32) -> Self {
        LogValue::Float(f64::from(x))
    }
}

impl From<f64> for LogValue {
    fn from(x: f64) -> Self {
        LogValue::Float(x)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<Value> for LogValue {
    fn from(v: Value) -> Self {
        LogValue::Json(v)
    }
}

/// Builds a `Vec<LogValue>` from mixed arguments for the per-level logging
/// calls, e.g. `log_args!["connection failed: %s", "timeout"]`.
#[macro_export]
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<$crate::format::LogValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::format::LogValue::from($value)),+]
    };
}

/// Merges an argument list into one message string, printf-style.
///
/// When the first argument is a string, `%s`, `%d`, `%i`, `%f` and `%j`
/// tokens in it each consume the next remaining argument (`%%` emits a
/// literal percent); tokens without a matching argument are left verbatim.
/// Remaining arguments are appended space-separated. When the first argument
/// is not a string, all arguments are simply joined with spaces. A token
/// whose argument has a different kind degrades to the argument's textual
/// representation rather than failing.
pub fn format_message(args: &[LogValue]) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    let LogValue::Str(template) = first else {
        return join_values(args);
    };

    let mut out = String::with_capacity(template.len());
    let mut next = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(&spec) if is_token(spec) && next < rest.len() => {
                chars.next();
                out.push_str(&substitute(spec, &rest[next]));
                next += 1;
            }
            _ => out.push('%'),
        }
    }

    for value in &rest[next..] {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }

    out
}

fn is_token(spec: char) -> bool {
    matches!(spec, 's' | 'd' | 'i' | 'f' | 'j')
}

fn substitute(spec: char, value: &LogValue) -> String {
    match (spec, value) {
        ('j', _) => value.as_json(),
        ('d' | 'i', LogValue::Float(x)) => (*x as i64).to_string(),
        // Kind mismatches (e.g. %d with a string) fall back to Display.
        _ => value.to_string(),
    }
}

fn join_values(args: &[LogValue]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
