//! Coercion of untyped coordinates into points.

use serde_json::Value;

use super::error::ApiError;
use crate::geo::{GeoPoint, GeoPointError};

/// Parses a JSON number or numeric string.
pub fn coordinate(field: &str, value: &Value) -> Result<f64, ApiError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ApiError::Validation(format!("{field} must be a number")))
}

/// Builds a point out of two untyped values, `missing` is the error when either is absent.
pub fn point(lt: Option<&Value>, ln: Option<&Value>, missing: &str) -> Result<GeoPoint, ApiError> {
    let (Some(lt), Some(ln)) = (lt, ln) else {
        return Err(ApiError::Validation(missing.to_string()));
    };

    Ok(GeoPoint::try_new(coordinate("lt", lt)?, coordinate("ln", ln)?)?)
}

/// Like [`point`] but without the range check, for matching against stored stops.
/// Out of range values simply match nothing.
pub fn lookup_point(
    lt: Option<&Value>,
    ln: Option<&Value>,
    missing: &str,
) -> Result<GeoPoint, ApiError> {
    let (Some(lt), Some(ln)) = (lt, ln) else {
        return Err(ApiError::Validation(missing.to_string()));
    };

    let (latitude, longitude) = (coordinate("lt", lt)?, coordinate("ln", ln)?);
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(GeoPointError::NotFinite.into());
    }

    Ok(GeoPoint {
        latitude,
        longitude,
    })
}

/// Builds a point out of two query string parameters.
pub fn query_point(
    lat_name: &str,
    lat: Option<&str>,
    lon_name: &str,
    lon: Option<&str>,
) -> Result<GeoPoint, ApiError> {
    let parse = |name: &str, value: Option<&str>| -> Result<f64, ApiError> {
        let value = value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::Validation(format!("{name} is required")))?;
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::Validation(format!("{name} must be a number")))
    };

    Ok(GeoPoint::try_new(parse(lat_name, lat)?, parse(lon_name, lon)?)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_and_numeric_strings() -> Result<(), anyhow::Error> {
        assert_eq!(coordinate("lt", &json!(45.5))?, 45.5);
        assert_eq!(coordinate("lt", &json!(-3))?, -3.0);
        assert_eq!(coordinate("lt", &json!(" 12.25 "))?, 12.25);
        Ok(())
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        for value in [json!("north"), json!(true), json!([1.0]), json!({"lt": 1.0}), json!("")] {
            assert!(matches!(
                coordinate("lt", &value),
                Err(ApiError::Validation(_))
            ));
        }
    }

    #[test]
    fn missing_half_of_a_point() {
        let res = point(Some(&json!(1.0)), None, "Latitude and longitude are required");
        assert!(matches!(res, Err(ApiError::Validation(m)) if m == "Latitude and longitude are required"));
    }

    #[test]
    fn out_of_range_point() {
        let res = point(Some(&json!(91.0)), Some(&json!(0.0)), "required");
        assert!(matches!(res, Err(ApiError::Validation(_))));
    }

    #[test]
    fn lookup_points_skip_the_range_check() -> Result<(), anyhow::Error> {
        let p = lookup_point(Some(&json!(99)), Some(&json!("99")), "required")?;
        assert_eq!((p.latitude, p.longitude), (99.0, 99.0));

        assert!(matches!(
            lookup_point(Some(&json!("NaN")), Some(&json!(1.0)), "required"),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            lookup_point(None, Some(&json!(1.0)), "required"),
            Err(ApiError::Validation(m)) if m == "required"
        ));
        Ok(())
    }

    #[test]
    fn query_points() -> Result<(), anyhow::Error> {
        let p = query_point("s_lat", Some("10.5"), "s_lon", Some("20"))?;
        assert_eq!(p, GeoPoint::try_new(10.5, 20.0)?);

        assert!(matches!(
            query_point("s_lat", None, "s_lon", Some("20")),
            Err(ApiError::Validation(m)) if m == "s_lat is required"
        ));
        assert!(matches!(
            query_point("s_lat", Some("1"), "s_lon", Some("NaNa")),
            Err(ApiError::Validation(m)) if m == "s_lon must be a number"
        ));
        assert!(matches!(
            query_point("s_lat", Some("NaN"), "s_lon", Some("1")),
            Err(ApiError::Validation(_))
        ));
        Ok(())
    }
}
