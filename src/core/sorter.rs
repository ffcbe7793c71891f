use crate::core::classifier;
use crate::core::parser;
use crate::domain::model::{Assessment, MassUnit};
use crate::utils::error::ParseError;

/// Runs one measurement string through parsing, unit normalisation and
/// classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sorter {
    mass_unit: MassUnit,
}

impl Sorter {
    pub fn new(mass_unit: MassUnit) -> Self {
        Self { mass_unit }
    }

    pub fn mass_unit(&self) -> MassUnit {
        self.mass_unit
    }

    pub fn sort(&self, raw: &str) -> Result<Assessment, ParseError> {
        tracing::debug!("Parsing measurements: '{}'", raw);
        let parsed = parser::parse(raw).inspect_err(|e| {
            tracing::warn!("Rejected input ({}): {}", e.kind(), e);
        })?;

        let spec = match self.mass_unit {
            MassUnit::Kilograms => parsed,
            unit => {
                let kg = unit.to_kilograms(parsed.mass());
                tracing::debug!("Normalised mass {} {:?} -> {} kg", parsed.mass(), unit, kg);
                parsed.with_mass(kg)?
            }
        };

        Ok(classifier::assess(&spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_sort_in_kilograms() {
        let assessment = Sorter::default().sort("50,30,20,5").unwrap();
        assert_eq!(assessment.category, Category::Standard);
        assert_eq!(assessment.package.mass(), 5.0);
    }

    #[test]
    fn test_sort_in_grams_matches_original_examples() {
        let sorter = Sorter::new(MassUnit::Grams);
        let cases = [
            ("50,30,20,5000", Category::Standard),
            ("150,30,20,5000", Category::Special),
            ("50,30,20,25000", Category::Special),
            ("150,30,20,25000", Category::Rejected),
            ("100,100,100,15000", Category::Special),
        ];
        for (raw, expected) in cases {
            assert_eq!(sorter.sort(raw).unwrap().category, expected, "input {}", raw);
        }
        assert_eq!(sorter.sort("1,1,1,20000").unwrap().package.mass(), 20.0);
    }

    #[test]
    fn test_sort_propagates_parse_errors() {
        let err = Sorter::default().sort("10,abc,10,1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let err = Sorter::new(MassUnit::Grams).sort("1,1,1,-1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMeasurement);
    }
}
