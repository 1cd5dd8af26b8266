use serde_json::Value;

/// Coerces a JSON scalar to an integer.
///
/// Accepts integer numbers, floats with an integral value, and strings
/// holding a base-10 integer. Everything else coerces to `None`.
pub(crate) fn json_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                return Some(integer);
            }

            number.as_f64().and_then(integral_float)
        }
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral_float(value: f64) -> Option<i64> {
    if value.fract() != 0.0 {
        return None;
    }

    // i64 bounds are exactly representable at this magnitude in f64.
    if !(-9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0).contains(&value) {
        return None;
    }

    Some(value as i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::json_int;

    #[test]
    fn accepts_integer_numbers() {
        assert_eq!(json_int(&json!(5)), Some(5));
        assert_eq!(json_int(&json!(-3)), Some(-3));
    }

    #[test]
    fn accepts_integral_floats() {
        assert_eq!(json_int(&json!(7.0)), Some(7));
    }

    #[test]
    fn accepts_numeric_strings() {
        assert_eq!(json_int(&json!("5")), Some(5));
        assert_eq!(json_int(&json!(" 12 ")), Some(12));
        assert_eq!(json_int(&json!("-1")), Some(-1));
    }

    #[test]
    fn rejects_non_integral_values() {
        assert_eq!(json_int(&json!("abc")), None);
        assert_eq!(json_int(&json!(2.5)), None);
        assert_eq!(json_int(&json!(true)), None);
        assert_eq!(json_int(&json!([5])), None);
        assert_eq!(json_int(&json!({ "k": 5 })), None);
        assert_eq!(json_int(&json!(null)), None);
    }
}
