use serde::Serialize;

/// Unit a nutrient column is expressed in, read from its header title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientUnit {
    Grams,
    Milligrams,
    Micrograms,
    InternationalUnits,
}

impl NutrientUnit {
    /// `(mg)`, `(mcg)` and `(IU)` anywhere in the title select the unit;
    /// anything else is grams.
    pub fn from_header(title: &str) -> Self {
        if title.contains("(mg)") {
            NutrientUnit::Milligrams
        } else if title.contains("(mcg)") {
            NutrientUnit::Micrograms
        } else if title.contains("(IU)") {
            NutrientUnit::InternationalUnits
        } else {
            NutrientUnit::Grams
        }
    }

    /// Convert `value` to grams. IU go through a fixed retinol-equivalent
    /// factor applied per million units.
    pub fn to_grams(self, value: f64, iu_factor: f64) -> f64 {
        match self {
            NutrientUnit::Grams => value,
            NutrientUnit::Milligrams => value / 1_000.0,
            NutrientUnit::Micrograms => value / 1_000_000.0,
            NutrientUnit::InternationalUnits => value / 1_000_000.0 * iu_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn detects_unit_suffix() {
        assert_eq!(NutrientUnit::from_header("Calcium (mg)"), NutrientUnit::Milligrams);
        assert_eq!(NutrientUnit::from_header("Folate (mcg)"), NutrientUnit::Micrograms);
        assert_eq!(NutrientUnit::from_header("Vitamin A (IU)"), NutrientUnit::InternationalUnits);
        assert_eq!(NutrientUnit::from_header("Protein"), NutrientUnit::Grams);
        assert_eq!(NutrientUnit::from_header("Fat (g)"), NutrientUnit::Grams);
    }

    #[test]
    fn converts_to_grams() {
        assert!(close(NutrientUnit::Milligrams.to_grams(1000.0, 0.3), 1.0));
        assert!(close(NutrientUnit::Micrograms.to_grams(2_000_000.0, 0.3), 2.0));
        assert!(close(NutrientUnit::InternationalUnits.to_grams(1_000_000.0, 0.3), 0.3));
        assert!(close(NutrientUnit::Grams.to_grams(12.5, 0.3), 12.5));
    }

    const UNITS: [NutrientUnit; 4] = [
        NutrientUnit::Grams,
        NutrientUnit::Milligrams,
        NutrientUnit::Micrograms,
        NutrientUnit::InternationalUnits,
    ];

    fn near(a: f64, b: f64, scale: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + scale)
    }

    proptest! {
        #[test]
        fn conversion_is_linear(
            a in -1.0e6f64..1.0e6,
            b in -1.0e6f64..1.0e6,
            k in -100.0f64..100.0,
        ) {
            let scale = (k * a).abs() + b.abs();
            for unit in UNITS {
                let combined = unit.to_grams(k * a + b, 0.3);
                let separate = k * unit.to_grams(a, 0.3) + unit.to_grams(b, 0.3);
                prop_assert!(near(combined, separate, scale), "{unit:?}: {combined} != {separate}");
            }
        }

        #[test]
        fn iu_scale_follows_factor(value in 0.0f64..1.0e7, factor in 0.0f64..10.0) {
            let grams = NutrientUnit::InternationalUnits.to_grams(value, factor);
            prop_assert!(near(grams, value / 1_000_000.0 * factor, value * factor));
            prop_assert!(near(NutrientUnit::Milligrams.to_grams(value, factor), value / 1_000.0, value));
            prop_assert!(near(NutrientUnit::Micrograms.to_grams(value, factor), value / 1_000_000.0, value));
        }
    }
}
