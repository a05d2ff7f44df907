//! Inbound payload validation for `POST /pollution-data`

use serde_json::{Number, Value};

use crate::types::PollutionQuery;
use crate::{Error, Result};

pub const INVALID_COUNTRY: &str = "Invalid country code (must be 2 letters)";
pub const INVALID_PAGE: &str = "Page must be a positive integer";
pub const INVALID_LIMIT: &str = "Limit must be a positive integer and not more than 50";

/// Largest accepted `limit`. The message says 50 but 51 has always passed.
pub const MAX_LIMIT: u64 = 51;

/// Validate a JSON body into a [`PollutionQuery`].
///
/// Checks run in order country, page, limit; the first failure wins.
/// A body that is not an object has none of the fields.
pub fn parse_query(body: &Value) -> Result<PollutionQuery> {
    let country = match body.get("country") {
        Some(Value::String(code)) if code.chars().count() == 2 => code.clone(),
        _ => return Err(Error::validation(INVALID_COUNTRY)),
    };

    let page =
        positive_integer(body.get("page")).ok_or_else(|| Error::validation(INVALID_PAGE))?;

    let limit = positive_integer(body.get("limit"))
        .filter(|limit| *limit <= MAX_LIMIT)
        .ok_or_else(|| Error::validation(INVALID_LIMIT))?;

    Ok(PollutionQuery {
        country,
        page,
        limit,
    })
}

/// Accepts integral JSON numbers > 0, including float forms such as `3.0`.
fn positive_integer(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(number) => integral(number).filter(|n| *n > 0),
        _ => None,
    }
}

fn integral(number: &Number) -> Option<u64> {
    if let Some(n) = number.as_u64() {
        return Some(n);
    }
    if number.is_i64() {
        return None;
    }

    let f = number.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(body: Value) -> String {
        parse_query(&body).unwrap_err().to_string()
    }

    #[test]
    fn accepts_valid_query() {
        let query = parse_query(&json!({"country": "PL", "page": 1, "limit": 10})).unwrap();
        assert_eq!(
            query,
            PollutionQuery {
                country: "PL".into(),
                page: 1,
                limit: 10
            }
        );
    }

    #[test]
    fn rejects_bad_country() {
        for body in [
            json!({"page": 1, "limit": 10}),
            json!({"country": "POL", "page": 1, "limit": 10}),
            json!({"country": "P", "page": 1, "limit": 10}),
            json!({"country": "", "page": 1, "limit": 10}),
            json!({"country": 12, "page": 1, "limit": 10}),
            json!(null),
            json!([1, 2]),
        ] {
            assert_eq!(message(body), INVALID_COUNTRY);
        }
    }

    #[test]
    fn country_length_counts_characters() {
        assert!(parse_query(&json!({"country": "ÅÖ", "page": 1, "limit": 1})).is_ok());
    }

    #[test]
    fn rejects_bad_page() {
        for page in [json!(0), json!(-1), json!(1.5), json!("1"), json!(true), json!(null)] {
            assert_eq!(
                message(json!({"country": "PL", "page": page, "limit": 10})),
                INVALID_PAGE
            );
        }
    }

    #[test]
    fn country_checked_before_page() {
        assert_eq!(
            message(json!({"country": "POL", "page": 0, "limit": 0})),
            INVALID_COUNTRY
        );
        assert_eq!(
            message(json!({"country": "PL", "page": 0, "limit": 0})),
            INVALID_PAGE
        );
    }

    #[test]
    fn limit_boundary_is_fifty_one() {
        let ok = parse_query(&json!({"country": "PL", "page": 1, "limit": 51})).unwrap();
        assert_eq!(ok.limit, 51);

        for limit in [json!(52), json!(0), json!(-5), json!(2.5), json!("10")] {
            assert_eq!(
                message(json!({"country": "PL", "page": 1, "limit": limit})),
                INVALID_LIMIT
            );
        }
    }

    #[test]
    fn integral_floats_are_integers() {
        let query = parse_query(&json!({"country": "PL", "page": 2.0, "limit": 50.0})).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 50);
    }
}
