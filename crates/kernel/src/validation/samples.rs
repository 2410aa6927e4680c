//! Per-sample checks on profiles.

use super::config::ValidationConfig;
use super::types::{ErrorCode, Location, ValidationError};
use crate::profile::Profile;

/// Check one profile. `locate` maps a sample index to the location reported,
/// so sequence members can tag findings with their member index.
pub fn check_profile(
    profile: &Profile,
    config: &ValidationConfig,
    locate: impl Fn(usize) -> Location,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationError>,
) {
    let n = profile.len();
    if profile.arc.len() != n {
        errors.push(
            ValidationError::error(
                Location::Whole,
                ErrorCode::SampleCountMismatch,
                format!("{} arc values for {n} points", profile.arc.len()),
            )
            .with_value(profile.arc.len() as f64, None),
        );
        return;
    }
    if let Some(thickness) = &profile.thickness {
        if thickness.len() != n {
            errors.push(
                ValidationError::error(
                    Location::Whole,
                    ErrorCode::SampleCountMismatch,
                    format!("{} thickness values for {n} points", thickness.len()),
                )
                .with_value(thickness.len() as f64, None),
            );
            return;
        }
    }
    if let Some(region) = &profile.curl_region {
        if region.end > n {
            errors.push(
                ValidationError::error(
                    Location::Whole,
                    ErrorCode::CurlRegionOutOfBounds,
                    format!("curl region {region:?} exceeds {n} samples"),
                )
                .with_value(region.end as f64, Some(n as f64)),
            );
        }
    }

    for (i, p) in profile.points.iter().enumerate() {
        if !p.is_finite() || !profile.arc[i].is_finite() {
            errors.push(ValidationError::error(
                locate(i),
                ErrorCode::NonFiniteValue,
                format!("non-finite sample ({}, {}) at arc {}", p.x, p.y, profile.arc[i]),
            ));
            continue;
        }
        if p.y < -config.ground_tolerance && !profile.in_curl_region(i) {
            errors.push(
                ValidationError::error(locate(i), ErrorCode::BelowGround, "height below still water outside the lip")
                    .with_value(p.y, Some(config.ground_tolerance)),
            );
        }
    }

    if config.check_arc_order {
        for (i, w) in profile.arc.windows(2).enumerate() {
            if w[1] < w[0] {
                errors.push(
                    ValidationError::error(locate(i + 1), ErrorCode::ArcNotMonotonic, "arc coordinate decreases")
                        .with_value(w[1], Some(w[0])),
                );
            }
        }
    }

    let Some(thickness) = &profile.thickness else {
        return;
    };
    for (i, &t) in thickness.iter().enumerate() {
        if !t.is_finite() {
            errors.push(ValidationError::error(
                locate(i),
                ErrorCode::NonFiniteValue,
                format!("non-finite thickness {t}"),
            ));
        } else if t < 0.0 {
            errors.push(
                ValidationError::error(locate(i), ErrorCode::NegativeThickness, "negative wall thickness")
                    .with_value(t, Some(0.0)),
            );
        } else if let Some(min) = config.thin_wall.filter(|&min| t < min) {
            warnings.push(
                ValidationError::warning(locate(i), ErrorCode::ThinWall, "wall thinner than threshold")
                    .with_value(t, Some(min)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point2d;

    fn run(profile: &Profile, config: &ValidationConfig) -> (Vec<ValidationError>, Vec<ValidationError>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        check_profile(profile, config, Location::Sample, &mut errors, &mut warnings);
        (errors, warnings)
    }

    #[test]
    fn test_below_ground_allowed_in_lip() {
        let mut p = Profile::from_points(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, -0.2),
            Point2d::new(2.0, -0.3),
        ]);
        let (errors, _) = run(&p, &ValidationConfig::default());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].location, Location::Sample(1));

        p.curl_region = Some(1..3);
        let (errors, _) = run(&p, &ValidationConfig::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_thickness_findings() {
        let p = Profile::from_points(vec![Point2d::ORIGIN; 3]);
        let p = Profile {
            thickness: Some(vec![0.5, 0.0, -0.1]),
            ..p
        };
        let (errors, warnings) = run(&p, &ValidationConfig::strict(0.1));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::NegativeThickness);
        assert_eq!(errors[0].location, Location::Sample(2));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ErrorCode::ThinWall);
    }

    #[test]
    fn test_non_finite_and_arc_order() {
        let p = Profile {
            points: vec![Point2d::ORIGIN, Point2d::new(f64::NAN, 0.0), Point2d::ORIGIN],
            arc: vec![0.0, 0.6, 0.5],
            thickness: None,
            curl_region: None,
        };
        let (errors, _) = run(&p, &ValidationConfig::default());
        let codes: Vec<ErrorCode> = errors.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![ErrorCode::NonFiniteValue, ErrorCode::ArcNotMonotonic]);
    }

    #[test]
    fn test_length_mismatch_stops_checks() {
        let p = Profile {
            points: vec![Point2d::new(0.0, -1.0); 3],
            arc: vec![0.0, 1.0],
            thickness: None,
            curl_region: None,
        };
        let (errors, _) = run(&p, &ValidationConfig::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::SampleCountMismatch);
    }
}
