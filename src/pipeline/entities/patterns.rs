//! Clinical vocabulary patterns for entity extraction.
//!
//! Each category has one compiled alternation over its known terms. The
//! vocabulary is deliberately conservative: matching a term a clinician
//! would not recognize is worse than missing one, since downstream rules
//! only fire on exact token overlap.

use std::sync::LazyLock;

use regex::Regex;

pub static SYMPTOM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(headache|fever|pain|cough|nausea|dizziness|fatigue|weakness|swelling|shortness of breath)\b",
    )
});

pub static DIAGNOSIS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(diabetes|hypertension|stroke|fracture|infection|cancer|asthma|arthritis|anemia|pneumonia|COPD|CHF|CAD|MI|CKD|HIV|TB|RA|OA|IBD|GERD|SLE|MS|ALS|ADHD|PTSD|COVID-19|covid|pregnancy|pacemaker)\b",
    )
});

pub static TEST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(MRI|CT scan|X-ray|ECG|blood test|ultrasound|EMG|NCS|bone density|endoscopy)\b",
    )
});

pub static MEDICATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(aspirin|metformin|lisinopril|atorvastatin|amoxicillin|ibuprofen|paracetamol|insulin|warfarin|prednisone|statin|beta blocker|ace inhibitor|antibiotic|antiviral|antifungal|antidepressant|antipsychotic|NSAID|PPI|SSRI|opioid|morphine|hydrocodone|tramadol|acetaminophen)\b",
    )
});

/// Severity is a qualified phrase ("severe pain"), not a bare qualifier,
/// so both words are captured and re-joined by the extractor.
pub static SEVERITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(severe|moderate|mild)\s+(pain|symptom|disease|injury)\b")
});

pub static URGENCY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(urgent|emergent|routine|immediate|stat)\b"));

pub static FUNCTIONAL_IMPACT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(limited mobility|unable to walk|bedridden|wheelchair|loss of function|functional impairment)\b",
    )
});

/// Vital signs show up as "<name>: <value> <unit>" lines in reports.
pub static VITAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:BP|blood pressure|HR|heart rate|temp(?:erature)?|SpO2|RR|respiratory rate)\s*:?\s*\d+(?:[./]\d+)?\s*[a-z/%°]*",
    )
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid clinical vocabulary pattern")
}
