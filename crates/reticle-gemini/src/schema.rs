use serde_json::{Value, json};

/// Fixed instruction sent alongside every screenshot.
pub const ANALYSIS_PROMPT: &str = "\
Analyze this Counter-Strike 2 gameplay screenshot and extract the crosshair settings.
Look closely at the center of the screen. Estimate the numerical values for the crosshair configuration.
Return a JSON object matching the schema.
For colors, estimate the RGB values (0-255).
For boolean values like outline and dot, return true or false.
For 'cl_crosshairstyle', usually 4 is static, 5 is dynamic (spreads when shooting/moving). If you can't tell, default to 4.
For 'cl_crosshair_t', return true if it is a T-shaped crosshair (no top line), otherwise false.";

/// Strict response schema declared to the model. Outline thickness and
/// the T flag are the only non-required fields; the config model fills
/// them with explicit defaults when absent.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "cl_crosshairsize": { "type": "NUMBER", "description": "Length of the crosshair lines. Usually 0.5 to 10." },
            "cl_crosshairthickness": { "type": "NUMBER", "description": "Width of the crosshair lines. Usually 0.1 to 6." },
            "cl_crosshairgap": { "type": "NUMBER", "description": "Gap between the lines. Can be negative (e.g. -3) or positive." },
            "cl_crosshair_drawoutline": { "type": "BOOLEAN", "description": "True if there is a black outline around the crosshair." },
            "cl_crosshair_outlinethickness": { "type": "NUMBER", "description": "Thickness of the outline, usually 0 or 1." },
            "cl_crosshairdot": { "type": "BOOLEAN", "description": "True if there is a dot in the very center." },
            "cl_crosshaircolor_r": { "type": "INTEGER", "description": "Red color component 0-255." },
            "cl_crosshaircolor_g": { "type": "INTEGER", "description": "Green color component 0-255." },
            "cl_crosshaircolor_b": { "type": "INTEGER", "description": "Blue color component 0-255." },
            "cl_crosshairalpha": { "type": "INTEGER", "description": "Opacity 0-255. 255 is fully opaque." },
            "cl_crosshairstyle": { "type": "INTEGER", "description": "Style 4 (static) or 5 (dynamic)." },
            "cl_crosshair_t": { "type": "BOOLEAN", "description": "True if it is a T-crosshair." }
        },
        "required": [
            "cl_crosshairsize", "cl_crosshairthickness", "cl_crosshairgap",
            "cl_crosshair_drawoutline", "cl_crosshairdot",
            "cl_crosshaircolor_r", "cl_crosshaircolor_g", "cl_crosshaircolor_b",
            "cl_crosshairalpha", "cl_crosshairstyle"
        ]
    })
}

pub fn generation_config() -> Value {
    json!({
        "responseMimeType": "application/json",
        "responseSchema": response_schema()
    })
}

/// All harm categories at the least restrictive level; screenshots of
/// gameplay trip the default filters often enough to matter.
pub fn safety_settings() -> Value {
    json!([
        { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_NONE" }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_all_twelve_fields() {
        let schema = response_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 12);
    }

    #[test]
    fn outline_thickness_and_t_flag_are_not_required() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(required.len(), 10);
        assert!(!required.contains(&"cl_crosshair_outlinethickness"));
        assert!(!required.contains(&"cl_crosshair_t"));
    }

    #[test]
    fn every_safety_category_is_unblocked() {
        let settings = safety_settings();
        let settings = settings.as_array().unwrap();
        assert_eq!(settings.len(), 4);
        for setting in settings {
            assert_eq!(setting["threshold"], "BLOCK_NONE");
        }
    }
}
