/// Yield prediction form pipeline
///
/// Nine raw string fields, validated as a whole before submission.
/// Validation stores error *kinds* per field; the screen localizes them at
/// render time, so switching language re-labels any errors on display.
/// The busy flag gates re-entrant submission, and a generation token makes
/// completions of superseded predictions stale.

use std::collections::BTreeMap;

use serde::Serialize;

/// Stable option keys for the three choice fields.
/// Display labels live in the localization table, parallel to these.
pub const SOIL_MOISTURE_LEVELS: [&str; 3] = ["low", "moderate", "high"];
pub const FERTILIZER_TYPES: [&str; 4] = ["none", "organic", "inorganic", "mixed"];
pub const VARIETIES: [&str; 4] = ["mu51", "kirikawadi", "suranimala", "swarna"];

/// The nine form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    PlantHeight,
    StemDiameter,
    LeafCount,
    PlantAge,
    Temperature,
    PlantingDensity,
    SoilMoisture,
    Fertilizer,
    Variety,
}

impl Field {
    /// Fields validated as positive numbers
    pub const NUMERIC: [Field; 6] = [
        Field::PlantHeight,
        Field::StemDiameter,
        Field::LeafCount,
        Field::PlantAge,
        Field::Temperature,
        Field::PlantingDensity,
    ];

    /// Fields validated as a non-empty choice
    pub const SELECT: [Field; 3] = [Field::SoilMoisture, Field::Fertilizer, Field::Variety];
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidNumber,
}

/// Raw form values exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub plant_height: String,
    pub stem_diameter: String,
    pub leaf_count: String,
    pub plant_age: String,
    pub temperature: String,
    pub planting_density: String,
    pub soil_moisture: String,
    pub fertilizer: String,
    pub variety: String,
}

impl FormData {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::PlantHeight => &self.plant_height,
            Field::StemDiameter => &self.stem_diameter,
            Field::LeafCount => &self.leaf_count,
            Field::PlantAge => &self.plant_age,
            Field::Temperature => &self.temperature,
            Field::PlantingDensity => &self.planting_density,
            Field::SoilMoisture => &self.soil_moisture,
            Field::Fertilizer => &self.fertilizer,
            Field::Variety => &self.variety,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::PlantHeight => &mut self.plant_height,
            Field::StemDiameter => &mut self.stem_diameter,
            Field::LeafCount => &mut self.leaf_count,
            Field::PlantAge => &mut self.plant_age,
            Field::Temperature => &mut self.temperature,
            Field::PlantingDensity => &mut self.planting_density,
            Field::SoilMoisture => &mut self.soil_moisture,
            Field::Fertilizer => &mut self.fertilizer,
            Field::Variety => &mut self.variety,
        };
        *slot = value;
    }
}

/// The structured record a real prediction backend would accept
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub plant_height_cm: f64,
    pub stem_diameter_cm: f64,
    pub leaf_count: f64,
    pub plant_age_months: f64,
    pub temperature_celsius: f64,
    pub planting_density_per_ha: f64,
    pub soil_moisture: String,
    pub fertilizer: String,
    pub variety: String,
}

/// State for the yield prediction form
#[derive(Debug, Default)]
pub struct YieldForm {
    data: FormData,
    errors: BTreeMap<Field, FieldError>,
    predicting: bool,
    /// Cancellation token: completions carrying an older value are stale
    generation: u64,
}

impl YieldForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw value of one field
    pub fn value(&self, field: Field) -> &str {
        self.data.get(field)
    }

    /// Validation error recorded for one field, if any
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn is_predicting(&self) -> bool {
        self.predicting
    }

    /// Overwrite one field. Any error recorded on that field is cleared
    /// immediately; errors on other fields are left alone until the next
    /// full validation pass.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.data.set(field, value);
        self.errors.remove(&field);
    }

    /// Recompute the error map over the full field set.
    /// Returns true iff the form is fully valid.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        for field in Field::NUMERIC {
            if let Some(error) = check_numeric(self.data.get(field)) {
                errors.insert(field, error);
            }
        }
        for field in Field::SELECT {
            if self.data.get(field).is_empty() {
                errors.insert(field, FieldError::Required);
            }
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and, when clean, enter the predicting state.
    ///
    /// Returns the generation token and the request record for the async
    /// task, or `None` when validation failed or a prediction is already
    /// running (the errors stay recorded for display).
    pub fn begin_predict(&mut self) -> Option<(u64, PredictionRequest)> {
        if self.predicting {
            return None;
        }
        if !self.validate() {
            return None;
        }
        let request = self.request()?;

        self.generation = self.generation.wrapping_add(1);
        self.predicting = true;
        Some((self.generation, request))
    }

    /// Apply a completion for the given token.
    /// Returns false (and changes nothing) when the token is stale.
    pub fn finish_predict(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.predicting {
            return false;
        }
        self.predicting = false;
        true
    }

    /// Clear all fields and all errors unconditionally. An in-flight
    /// prediction keeps running but its completion becomes stale.
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors.clear();
        self.predicting = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Build the backend record from the current values.
    /// `None` when any numeric field does not parse (unreachable after a
    /// clean validation pass).
    fn request(&self) -> Option<PredictionRequest> {
        Some(PredictionRequest {
            plant_height_cm: parse_positive(&self.data.plant_height)?,
            stem_diameter_cm: parse_positive(&self.data.stem_diameter)?,
            leaf_count: parse_positive(&self.data.leaf_count)?,
            plant_age_months: parse_positive(&self.data.plant_age)?,
            temperature_celsius: parse_positive(&self.data.temperature)?,
            planting_density_per_ha: parse_positive(&self.data.planting_density)?,
            soil_moisture: self.data.soil_moisture.clone(),
            fertilizer: self.data.fertilizer.clone(),
            variety: self.data.variety.clone(),
        })
    }
}

/// Validation rule for numeric fields: required, numeric, strictly positive
fn check_numeric(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required);
    }
    match parse_positive(value) {
        Some(_) => None,
        None => Some(FieldError::InvalidNumber),
    }
}

fn parse_positive(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(number) if number > 0.0 && number.is_finite() => Some(number),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A form with every field filled in validly
    fn filled_form() -> YieldForm {
        let mut form = YieldForm::new();
        form.set_field(Field::PlantHeight, "180".to_string());
        form.set_field(Field::StemDiameter, "2.5".to_string());
        form.set_field(Field::LeafCount, "45".to_string());
        form.set_field(Field::PlantAge, "8".to_string());
        form.set_field(Field::Temperature, "28".to_string());
        form.set_field(Field::PlantingDensity, "10000".to_string());
        form.set_field(Field::SoilMoisture, "moderate".to_string());
        form.set_field(Field::Fertilizer, "organic".to_string());
        form.set_field(Field::Variety, "mu51".to_string());
        form
    }

    #[test]
    fn test_empty_form_flags_every_field_required() {
        let mut form = YieldForm::new();
        assert!(!form.validate());

        for field in Field::NUMERIC.into_iter().chain(Field::SELECT) {
            assert_eq!(form.error(field), Some(FieldError::Required), "{field:?}");
        }
    }

    #[test]
    fn test_numeric_boundaries() {
        let mut form = filled_form();

        form.set_field(Field::PlantHeight, "0".to_string());
        assert!(!form.validate());
        assert_eq!(form.error(Field::PlantHeight), Some(FieldError::InvalidNumber));

        form.set_field(Field::PlantHeight, "-1".to_string());
        assert!(!form.validate());
        assert_eq!(form.error(Field::PlantHeight), Some(FieldError::InvalidNumber));

        form.set_field(Field::PlantHeight, "tall".to_string());
        assert!(!form.validate());
        assert_eq!(form.error(Field::PlantHeight), Some(FieldError::InvalidNumber));

        form.set_field(Field::PlantHeight, "NaN".to_string());
        assert!(!form.validate());
        assert_eq!(form.error(Field::PlantHeight), Some(FieldError::InvalidNumber));

        form.set_field(Field::PlantHeight, "0.0001".to_string());
        assert!(form.validate());
        assert_eq!(form.error(Field::PlantHeight), None);
    }

    #[test]
    fn test_fully_valid_form_passes() {
        let mut form = filled_form();
        assert!(form.validate());
        for field in Field::NUMERIC.into_iter().chain(Field::SELECT) {
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn test_edit_clears_only_that_fields_error() {
        let mut form = YieldForm::new();
        form.validate();
        assert!(form.error(Field::PlantHeight).is_some());
        assert!(form.error(Field::StemDiameter).is_some());

        form.set_field(Field::PlantHeight, "still not a number".to_string());

        // Cleared optimistically, without re-validation
        assert_eq!(form.error(Field::PlantHeight), None);
        assert!(form.error(Field::StemDiameter).is_some());
    }

    #[test]
    fn test_single_missing_field_yields_single_error() {
        let mut form = filled_form();
        form.set_field(Field::PlantHeight, String::new());

        assert!(form.begin_predict().is_none());
        assert!(!form.is_predicting());
        assert_eq!(form.error(Field::PlantHeight), Some(FieldError::Required));

        let other_errors = Field::NUMERIC
            .into_iter()
            .chain(Field::SELECT)
            .filter(|field| *field != Field::PlantHeight)
            .filter_map(|field| form.error(field))
            .count();
        assert_eq!(other_errors, 0);
    }

    #[test]
    fn test_predict_lifecycle_runs_idle_to_busy_to_idle() {
        let mut form = filled_form();

        let (generation, request) = form.begin_predict().unwrap();
        assert!(form.is_predicting());
        assert_eq!(request.plant_height_cm, 180.0);
        assert_eq!(request.variety, "mu51");

        // Busy state gates re-entrant submission
        assert!(form.begin_predict().is_none());

        assert!(form.finish_predict(generation));
        assert!(!form.is_predicting());
    }

    #[test]
    fn test_reset_restores_the_initial_state() {
        let mut form = filled_form();
        form.set_field(Field::PlantHeight, String::new());
        form.validate();

        form.reset();

        for field in Field::NUMERIC.into_iter().chain(Field::SELECT) {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
        assert!(!form.is_predicting());
    }

    #[test]
    fn test_reset_during_flight_makes_completion_stale() {
        let mut form = filled_form();
        let (generation, _) = form.begin_predict().unwrap();

        form.reset();

        assert!(!form.finish_predict(generation));
        assert!(!form.is_predicting());
        assert_eq!(form.value(Field::PlantHeight), "");
    }

    #[test]
    fn test_request_serializes_with_backend_field_names() {
        let mut form = filled_form();
        let (_, request) = form.begin_predict().unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["plant_height_cm"], 180.0);
        assert_eq!(json["planting_density_per_ha"], 10000.0);
        assert_eq!(json["soil_moisture"], "moderate");
    }

    #[test]
    fn test_option_keys_are_distinct() {
        for keys in [
            SOIL_MOISTURE_LEVELS.as_slice(),
            FERTILIZER_TYPES.as_slice(),
            VARIETIES.as_slice(),
        ] {
            let mut seen = keys.to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), keys.len());
        }
    }
}
