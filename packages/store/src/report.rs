//! Test report tables: patient inputs next to static normal-range reference
//! data. Pure presentation; the reference strings are fixed per disease.

use serde::Serialize;

use crate::features::{DiabetesForm, HeartDiseaseForm, ParkinsonsForm, PredictionForm};
use crate::models::Disease;

/// One line of the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub parameter: &'static str,
    pub value: String,
    pub normal_range: &'static str,
    pub unit: &'static str,
}

/// Detailed test report for one screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub disease: Disease,
    pub patient_name: String,
    pub age: String,
    pub rows: Vec<ReportRow>,
}

// (normal range, unit) per parameter, in form entry order.
const DIABETES_REFERENCE: [(&str, &str); 7] = [
    ("0-10", "Number"),
    ("70-125", "mg/dL"),
    ("120/80", "mmHg"),
    ("8-25", "mm"),
    ("25-250", "mIU/L"),
    ("18.5-24.9", "kg/m^2"),
    ("< 1", "No units"),
];

const HEART_DISEASE_REFERENCE: [(&str, &str); 13] = [
    ("1-120", "Years"),
    ("0 = Female, 1 = Male", "Female/Male"),
    (
        "0: Typical Angina, 1: Atypical Angina, 2: Non-Anginal Pain, 3: Asymptomatic",
        "Type",
    ),
    ("50-200", "mm Hg"),
    ("100-600", "mg/dl"),
    ("Yes: >120 mg/dl, No: <=120 mg/dl", "Yes/No"),
    (
        "0: Normal, 1: ST-T wave abnormality, 2: Left ventricular hypertrophy",
        "Type",
    ),
    ("60-220", "bpm (beats per minute)"),
    ("0: No, 1: Yes", "Yes/No"),
    ("0.0-6.0", "ST Depression"),
    ("0: Upsloping, 1: Flat, 2: Downsloping", "Type"),
    ("0-3", "Count"),
    ("0: Normal, 1: Fixed defect, 2: Reversible defect", "Type"),
];

const PARKINSONS_REFERENCE: [(&str, &str); 22] = [
    ("50-150", "Hz"),
    ("50-160", "Hz"),
    ("50-150", "Hz"),
    ("0-3", "%"),
    ("0-2", "Abs"),
    ("0-2", "No unit"),
    ("0-2", "No unit"),
    ("0-2", "No unit"),
    ("0-1", "No unit"),
    ("0-0.5", "dB"),
    ("0.1-0.5", "No unit"),
    ("0.1-0.5", "No unit"),
    ("0-1", "No unit"),
    ("0-1", "No unit"),
    ("0.1-0.5", "No unit"),
    ("0.1-0.5", "No unit"),
    ("0-0.5", "No unit"),
    ("0-0.5", "No unit"),
    ("0-1", "No unit"),
    ("0-2", "No unit"),
    ("0-2", "No unit"),
    ("0-1", "No unit"),
];

fn rows(
    entries: Vec<(&'static str, String)>,
    reference: &[(&'static str, &'static str)],
) -> Vec<ReportRow> {
    debug_assert_eq!(entries.len(), reference.len());
    entries
        .into_iter()
        .zip(reference)
        .map(|((parameter, value), (normal_range, unit))| ReportRow {
            parameter,
            value,
            normal_range,
            unit,
        })
        .collect()
}

fn female_male(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(v) if v == 0.0 => "Female".to_string(),
        Ok(_) => "Male".to_string(),
        Err(_) => raw.trim().to_string(),
    }
}

fn no_yes(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(v) if v == 1.0 => "Yes".to_string(),
        Ok(_) => "No".to_string(),
        Err(_) => raw.trim().to_string(),
    }
}

impl Report {
    /// Diabetes report. Age appears in the patient header, not the table.
    pub fn diabetes(patient_name: &str, form: &DiabetesForm) -> Self {
        let entries = form
            .entries()
            .into_iter()
            .take(DIABETES_REFERENCE.len())
            .map(|(parameter, value)| (parameter, value.to_string()))
            .collect();
        Self {
            disease: Disease::Diabetes,
            patient_name: patient_name.to_string(),
            age: form.age.clone(),
            rows: rows(entries, &DIABETES_REFERENCE),
        }
    }

    /// Heart disease report. Sex renders as Female/Male and the two boolean
    /// columns as No/Yes, matching the reference table wording.
    pub fn heart_disease(patient_name: &str, form: &HeartDiseaseForm) -> Self {
        let entries = form
            .entries()
            .into_iter()
            .map(|(parameter, value)| {
                let value = match parameter {
                    "Sex" => female_male(value),
                    "Fasting Blood Sugar" | "Exercise Angina" => no_yes(value),
                    _ => value.to_string(),
                };
                (parameter, value)
            })
            .collect();
        Self {
            disease: Disease::HeartDisease,
            patient_name: patient_name.to_string(),
            age: form.age.clone(),
            rows: rows(entries, &HEART_DISEASE_REFERENCE),
        }
    }

    /// Parkinson's report. Name and age come from standalone inputs; the 22
    /// voice measures are shown as entered.
    pub fn parkinsons(patient_name: &str, age: &str, form: &ParkinsonsForm) -> Self {
        let entries = form
            .entries()
            .into_iter()
            .map(|(parameter, value)| (parameter, value.to_string()))
            .collect();
        Self {
            disease: Disease::Parkinsons,
            patient_name: patient_name.to_string(),
            age: age.to_string(),
            rows: rows(entries, &PARKINSONS_REFERENCE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diabetes_report_has_seven_rows_with_age_in_the_header() {
        let form = DiabetesForm {
            pregnancies: "2".into(),
            glucose: "120".into(),
            blood_pressure: "70".into(),
            skin_thickness: "20".into(),
            insulin: "79".into(),
            bmi: "25.5".into(),
            diabetes_pedigree_function: "0.5".into(),
            age: "33".into(),
        };
        let report = Report::diabetes("Asha", &form);
        assert_eq!(report.patient_name, "Asha");
        assert_eq!(report.age, "33");
        assert_eq!(report.rows.len(), 7);
        assert_eq!(report.rows[0].parameter, "Pregnancies");
        assert_eq!(report.rows[1].value, "120");
        assert_eq!(report.rows[1].normal_range, "70-125");
        assert_eq!(report.rows[1].unit, "mg/dL");
        assert!(report.rows.iter().all(|r| r.parameter != "Age"));
    }

    #[test]
    fn heart_report_formats_sex_and_boolean_columns() {
        let form = HeartDiseaseForm {
            age: "54".into(),
            sex: "1".into(),
            cp: "2".into(),
            trestbps: "130".into(),
            chol: "246".into(),
            fbs: "0".into(),
            restecg: "1".into(),
            thalach: "150".into(),
            exang: "1".into(),
            oldpeak: "1.2".into(),
            slope: "1".into(),
            ca: "0".into(),
            thal: "2".into(),
        };
        let report = Report::heart_disease("Ravi", &form);
        assert_eq!(report.rows.len(), 13);
        assert_eq!(report.rows[1].parameter, "Sex");
        assert_eq!(report.rows[1].value, "Male");
        assert_eq!(report.rows[5].value, "No");
        assert_eq!(report.rows[8].value, "Yes");
        assert_eq!(report.rows[3].value, "130");
    }

    #[test]
    fn sex_zero_renders_female() {
        let form = HeartDiseaseForm {
            sex: "0".into(),
            ..HeartDiseaseForm::default()
        };
        let report = Report::heart_disease("", &form);
        assert_eq!(report.rows[1].value, "Female");
    }

    #[test]
    fn parkinsons_report_covers_all_voice_measures() {
        let mut form = ParkinsonsForm::default();
        form.fo = "119.992".into();
        form.shimmer_db = "0.426".into();
        let report = Report::parkinsons("Meera", "61", &form);
        assert_eq!(report.rows.len(), 22);
        assert_eq!(report.age, "61");
        assert_eq!(report.rows[0].parameter, "MDVP:Fo(Hz)");
        assert_eq!(report.rows[0].value, "119.992");
        assert_eq!(report.rows[9].parameter, "MDVP:Shimmer(dB)");
        assert_eq!(report.rows[9].unit, "dB");
    }
}
