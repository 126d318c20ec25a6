//! BMI evaluation core.
//!
//! This module contains the pure calculation pipeline: parsing raw input
//! text into a validated `Measurement`, then evaluating it into an
//! immutable `BmiResult`. Nothing here touches the terminal or any other
//! I/O, so every branch is unit-testable in isolation.

use std::fmt;

/// Lower bound of the normal BMI range (inclusive).
const BMI_NORMAL_MIN: f64 = 18.5;

/// Upper bound of the normal BMI range (inclusive).
const BMI_NORMAL_MAX: f64 = 25.0;

/// Coefficient used for the ideal-weight figure shown in the result table.
/// Intentionally 24.9 rather than the classification bound of 25.0; the
/// two disagree about the top of "normal" and the discrepancy is kept.
const IDEAL_WEIGHT_COEFFICIENT: f64 = 24.9;

/// Validated height/weight pair, in centimeters and kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Weight category derived from the BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightCategory {
    Underweight,
    Normal,
    Overweight,
}

impl WeightCategory {
    /// Display label for the category, as shown on the result screen.
    pub fn label(&self) -> &'static str {
        match self {
            WeightCategory::Underweight => "Underweight 😕",
            WeightCategory::Normal => "Normal weight 😃",
            WeightCategory::Overweight => "Overweight 😐",
        }
    }
}

/// Result of a single evaluation. Fully replaced on every calculation;
/// all display attributes (label, color) derive from `category`.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to one decimal place.
    pub bmi: f64,
    pub category: WeightCategory,
    /// Kilograms to gain (Underweight) or lose (Overweight) to reach the
    /// normal range. Always a non-negative magnitude; the direction is
    /// carried by `category`, never by the sign of this field.
    pub weight_delta_kg: f64,
    /// Ideal weight in kilograms, one decimal place.
    pub ideal_weight_kg: f64,
    pub recommendation: String,
}

/// Validation failure for user-entered height/weight text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidInput,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidInput => {
                write!(f, "Please enter valid height and weight")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse height and weight text into a `Measurement`.
///
/// Both values must parse as decimal numbers and be finite and strictly
/// positive. Negative values are rejected along with zero and garbage.
pub fn parse_measurement(
    height_text: &str,
    weight_text: &str,
) -> Result<Measurement, ValidationError> {
    let height_cm = parse_positive(height_text)?;
    let weight_kg = parse_positive(weight_text)?;
    Ok(Measurement {
        height_cm,
        weight_kg,
    })
}

fn parse_positive(text: &str) -> Result<f64, ValidationError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidInput)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidInput)
    }
}

/// Evaluate a measurement into a `BmiResult`.
///
/// Classification uses the unrounded BMI, not the rounded display value,
/// so a raw BMI of exactly 25.0 lands in Normal even though it rounds the
/// same as 25.04.
pub fn evaluate(measurement: &Measurement) -> BmiResult {
    let height_m = measurement.height_cm / 100.0;
    let weight_kg = measurement.weight_kg;
    let bmi_raw = weight_kg / (height_m * height_m);

    let (category, weight_delta_kg) = if bmi_raw < BMI_NORMAL_MIN {
        let min_normal_weight = BMI_NORMAL_MIN * height_m * height_m;
        (
            WeightCategory::Underweight,
            round1(min_normal_weight - weight_kg),
        )
    } else if bmi_raw <= BMI_NORMAL_MAX {
        (WeightCategory::Normal, 0.0)
    } else {
        let max_normal_weight = BMI_NORMAL_MAX * height_m * height_m;
        (
            WeightCategory::Overweight,
            round1(weight_kg - max_normal_weight),
        )
    };

    let recommendation = match category {
        WeightCategory::Normal => "Perfect! You are in normal weight 😃".to_string(),
        WeightCategory::Overweight => format!(
            "You need to lose at least {} kg to reach normal weight",
            weight_delta_kg
        ),
        WeightCategory::Underweight => format!(
            "You need to gain at least {} kg to reach normal weight",
            weight_delta_kg
        ),
    };

    BmiResult {
        bmi: round1(bmi_raw),
        category,
        weight_delta_kg,
        ideal_weight_kg: round1(IDEAL_WEIGHT_COEFFICIENT * height_m * height_m),
        recommendation,
    }
}

/// Round to one decimal place, half away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(height: &str, weight: &str) -> BmiResult {
        let measurement = parse_measurement(height, weight).unwrap();
        evaluate(&measurement)
    }

    #[test]
    fn test_parse_valid_pair() {
        let m = parse_measurement("170", "65").unwrap();
        assert_eq!(m.height_cm, 170.0);
        assert_eq!(m.weight_kg, 65.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let m = parse_measurement(" 170 ", "65.5\n").unwrap();
        assert_eq!(m.height_cm, 170.0);
        assert_eq!(m.weight_kg, 65.5);
    }

    #[test]
    fn test_parse_empty_height_fails() {
        assert_eq!(
            parse_measurement("", "70"),
            Err(ValidationError::InvalidInput)
        );
    }

    #[test]
    fn test_parse_non_numeric_fails() {
        assert_eq!(
            parse_measurement("tall", "70"),
            Err(ValidationError::InvalidInput)
        );
        assert_eq!(
            parse_measurement("170", "7o"),
            Err(ValidationError::InvalidInput)
        );
    }

    #[test]
    fn test_parse_zero_fails() {
        assert_eq!(
            parse_measurement("170", "0"),
            Err(ValidationError::InvalidInput)
        );
        assert_eq!(
            parse_measurement("0", "70"),
            Err(ValidationError::InvalidInput)
        );
    }

    #[test]
    fn test_parse_negative_fails() {
        assert_eq!(
            parse_measurement("-170", "70"),
            Err(ValidationError::InvalidInput)
        );
    }

    #[test]
    fn test_parse_non_finite_fails() {
        // "inf" and "NaN" are accepted by f64 parsing but are not usable
        // measurements.
        assert_eq!(
            parse_measurement("inf", "70"),
            Err(ValidationError::InvalidInput)
        );
        assert_eq!(
            parse_measurement("170", "NaN"),
            Err(ValidationError::InvalidInput)
        );
    }

    #[test]
    fn test_validation_error_message() {
        assert_eq!(
            ValidationError::InvalidInput.to_string(),
            "Please enter valid height and weight"
        );
    }

    #[test]
    fn test_evaluate_normal() {
        let result = eval("170", "65");
        assert_eq!(result.bmi, 22.5);
        assert_eq!(result.category, WeightCategory::Normal);
        assert_eq!(result.weight_delta_kg, 0.0);
        assert_eq!(result.recommendation, "Perfect! You are in normal weight 😃");
    }

    #[test]
    fn test_evaluate_underweight() {
        let result = eval("160", "45");
        assert_eq!(result.bmi, 17.6);
        assert_eq!(result.category, WeightCategory::Underweight);
        assert_eq!(result.weight_delta_kg, 2.4);
        assert_eq!(
            result.recommendation,
            "You need to gain at least 2.4 kg to reach normal weight"
        );
    }

    #[test]
    fn test_evaluate_overweight() {
        let result = eval("170", "90");
        assert_eq!(result.bmi, 31.1);
        assert_eq!(result.category, WeightCategory::Overweight);
        assert_eq!(result.weight_delta_kg, 17.8);
        assert_eq!(
            result.recommendation,
            "You need to lose at least 17.8 kg to reach normal weight"
        );
    }

    #[test]
    fn test_evaluate_upper_boundary_is_normal() {
        // 81 / 1.80² is exactly BMI 25, the closed top of the normal range.
        let result = eval("180", "81");
        assert_eq!(result.category, WeightCategory::Normal);
        assert_eq!(result.weight_delta_kg, 0.0);
        assert_eq!(result.bmi, 25.0);
    }

    #[test]
    fn test_evaluate_lower_boundary_is_normal() {
        // 74 / 2.00² = 18.5 exactly, the closed bottom of the normal range.
        let result = eval("200", "74");
        assert_eq!(result.category, WeightCategory::Normal);
        assert_eq!(result.weight_delta_kg, 0.0);
    }

    #[test]
    fn test_evaluate_just_below_lower_boundary() {
        // 73.9 / 4.0 = 18.475, infinitesimally under the normal range.
        let result = eval("200", "73.9");
        assert_eq!(result.category, WeightCategory::Underweight);
        assert!(result.weight_delta_kg > 0.0);
    }

    #[test]
    fn test_evaluate_just_above_upper_boundary() {
        // 100.1 / 4.0 = 25.025.
        let result = eval("200", "100.1");
        assert_eq!(result.category, WeightCategory::Overweight);
        assert!(result.weight_delta_kg > 0.0);
    }

    #[test]
    fn test_classification_uses_unrounded_bmi() {
        // 100.1 / 4.0 = 25.025 rounds down to 25.0 for display but must
        // still classify as Overweight.
        let result = eval("200", "100.1");
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.category, WeightCategory::Overweight);
    }

    #[test]
    fn test_delta_zero_iff_normal() {
        for (h, w) in [("160", "45"), ("170", "65"), ("170", "90"), ("180", "81")] {
            let result = eval(h, w);
            assert_eq!(
                result.weight_delta_kg == 0.0,
                result.category == WeightCategory::Normal,
                "height={h} weight={w}"
            );
        }
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let measurement = parse_measurement("172.5", "68.2").unwrap();
        assert_eq!(evaluate(&measurement), evaluate(&measurement));
    }

    #[test]
    fn test_ideal_weight_uses_24_9_coefficient() {
        // The ideal weight figure uses 24.9 while classification tops out
        // at 25.0; the two intentionally disagree.
        let result = eval("170", "65");
        assert_eq!(result.ideal_weight_kg, 72.0); // 24.9 * 1.7² = 71.961
        let result = eval("200", "80");
        assert_eq!(result.ideal_weight_kg, 99.6); // 24.9 * 4.0
    }

    #[test]
    fn test_round1_half_away_from_zero() {
        assert_eq!(round1(17.75), 17.8);
        assert_eq!(round1(22.49), 22.5);
        assert_eq!(round1(22.44), 22.4);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(WeightCategory::Underweight.label(), "Underweight 😕");
        assert_eq!(WeightCategory::Normal.label(), "Normal weight 😃");
        assert_eq!(WeightCategory::Overweight.label(), "Overweight 😐");
    }
}
