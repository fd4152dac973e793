//! Fixed instruction text for the comparison task.
//!
//! The system instruction encodes the comparison policy itself, not UI copy:
//! it defines what counts as a defect and what must be excluded, so it is part
//! of the correctness contract. Only the output language is configurable
//! (Japanese in the reference deployment).

/// Default output language for all natural-language model output.
pub const DEFAULT_LANGUAGE: &str = "Japanese";

/// The per-request task prompt.
pub fn task_prompt(language: &str) -> String {
    format!(
        "Compare these two images. Perform a detailed visual analysis for missing \
         elements and physical damage. Return the result as a structured JSON report \
         in {language}."
    )
}

/// The system instruction defining the comparison policy.
pub fn system_instruction(language: &str) -> String {
    format!(
        "You are a high-precision automated optical inspection (AOI) expert. \
Your sole purpose is to compare a reference master image against a factory photo \
and detect manufacturing defects in a printed logo.

Task:
1. Analyze the reference image and understand its complete geometry, topology, and color.
2. Analyze the inspection photo, accounting for:
   - perspective distortion (tilt, rotation, zoom)
   - ambient lighting (glare, shadow, reflection)
   - camera sensor noise
3. Mentally align the inspection photo to the reference image.
4. Identify only physical discrepancies: missing or malformed ink, scratches, \
shape anomalies, wrong colors.

Critical rules:
- Never report lighting artifacts (reflections, uneven illumination) as defects.
- Never report perspective distortion as a shape defect.
- Focus exclusively on the presence and completeness of the printed elements.
- Be strict about missing or incomplete print elements (e.g. a partially \
missing letter, a vanished logo segment).
- Be lenient about minor color shifts caused by lighting.
- Produce all natural-language output in {language}.

Output:
- Verdict: PASS only if the physical print is 100% intact, otherwise FAIL.
- Defects: list every confirmed physical defect.
- Bounding boxes: for each defect, give a precise [ymin, xmin, ymax, xmax] on a 0-1000 scale."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_covers_exclusions_and_strictness() {
        let instruction = system_instruction(DEFAULT_LANGUAGE);
        assert!(instruction.contains("Never report lighting artifacts"));
        assert!(instruction.contains("Never report perspective distortion"));
        assert!(instruction.contains("strict about missing or incomplete print elements"));
        assert!(instruction.contains("lenient about minor color shifts"));
        assert!(instruction.contains("0-1000 scale"));
    }

    #[test]
    fn language_is_injected() {
        assert!(system_instruction("German").contains("output in German"));
        assert!(task_prompt("German").contains("in German"));
    }
}
