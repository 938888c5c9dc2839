use serde::Serialize;

use crate::core::errors::Result;

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{Readability, SingleResult};
    use crate::scoring::ReadabilityScores;

    #[test]
    fn test_snapshot_json_uses_camel_case() {
        let snapshot = Readability::new(vec![SingleResult::new(
            "a.md",
            ReadabilityScores::uniform(1.0),
        )]);
        let json = to_json(&snapshot).unwrap();
        for key in [
            "fileResults",
            "averageResult",
            "fleschReadingEase",
            "gunningFog",
            "automatedReadabilityIndex",
            "daleChallReadabilityScore",
            "colemanLiauIndex",
            "readabilityScore",
        ] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key}");
        }

        let parsed: Readability = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
