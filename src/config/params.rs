use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigError,
    frontier::{DEFAULT_ALPHABET_SIZE, MAX_ALPHABET_SIZE, Strategy},
};

/// Bounds for synthesized quiz scenarios. All ranges are inclusive.
///
/// Every field has a default, so a JSON file only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioParams {
    /// Number of entries in a generated frontier.
    pub min_entries: u32,
    pub max_entries: u32,

    /// Number of nodes in a generated path.
    pub min_path_len: u32,
    pub max_path_len: u32,

    /// Accumulated cost of a generated path.
    pub min_path_cost: u32,
    pub max_path_cost: u32,

    /// Number of distinct node labels paths are drawn from.
    pub alphabet_size: u32,

    /// Questions are indexed in [`Strategy::ALL`] order.
    pub first_question: u32,
    pub last_question: u32,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        ScenarioParams {
            min_entries: 5,
            max_entries: 8,
            min_path_len: 2,
            max_path_len: 9,
            min_path_cost: 1,
            max_path_cost: 14,
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            first_question: 0,
            last_question: 4,
        }
    }
}

impl ScenarioParams {
    /// Reads parameters from a JSON file and validates them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("reading scenario parameters from {path:?}");
        let bytes = std::fs::read(path)?;
        Self::from_json(&bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let params: ScenarioParams = serde_json::from_slice(bytes)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_bounds()
            .inspect_err(|err| tracing::warn!("rejecting scenario parameters: {err}"))
    }

    fn check_bounds(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("entries", self.min_entries, self.max_entries),
            ("path_len", self.min_path_len, self.max_path_len),
            ("path_cost", self.min_path_cost, self.max_path_cost),
            ("question", self.first_question, self.last_question),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(ConfigError::EmptyRange { name, min, max });
            }
        }

        if self.min_entries == 0 {
            return Err(ConfigError::NoEntries);
        }
        if self.min_path_len == 0 {
            return Err(ConfigError::EmptyPaths);
        }
        if self.alphabet_size == 0 || self.alphabet_size > MAX_ALPHABET_SIZE {
            return Err(ConfigError::AlphabetSize {
                alphabet_size: self.alphabet_size,
                max: MAX_ALPHABET_SIZE,
            });
        }

        let max_question = Strategy::ALL.len() as u32 - 1;
        if self.last_question > max_question {
            return Err(ConfigError::QuestionOutOfRange {
                index: self.last_question,
                max: max_question,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ScenarioParams::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let params = ScenarioParams::from_json(br#"{"max_entries": 12, "first_question": 2}"#)
            .unwrap();
        assert_eq!(params.max_entries, 12);
        assert_eq!(params.first_question, 2);
        assert_eq!(params.min_entries, 5);
        assert_eq!(params.alphabet_size, 20);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ScenarioParams::from_json(br#"{"mastery": true}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_empty_range_rejected() {
        let params = ScenarioParams {
            min_path_cost: 10,
            max_path_cost: 3,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::EmptyRange {
                name: "path_cost",
                min: 10,
                max: 3
            })
        ));
    }

    #[test]
    fn test_zero_entries_rejected() {
        let params = ScenarioParams {
            min_entries: 0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::NoEntries)));
    }

    #[test]
    fn test_empty_paths_rejected() {
        let params = ScenarioParams {
            min_path_len: 0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::EmptyPaths)));
    }

    #[test]
    fn test_alphabet_bounds() {
        for alphabet_size in [0, 27] {
            let params = ScenarioParams {
                alphabet_size,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ConfigError::AlphabetSize { .. })
            ));
        }
    }

    #[test]
    fn test_question_out_of_range() {
        let params = ScenarioParams {
            last_question: 5,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::QuestionOutOfRange { index: 5, max: 4 })
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn warnings_for(params: &ScenarioParams) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(params.validate().is_err());
        });
        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_every_rejection_is_logged() {
        let rejected = [
            ScenarioParams {
                min_entries: 9,
                ..Default::default()
            },
            ScenarioParams {
                min_entries: 0,
                ..Default::default()
            },
            ScenarioParams {
                min_path_len: 0,
                ..Default::default()
            },
            ScenarioParams {
                alphabet_size: 27,
                ..Default::default()
            },
            ScenarioParams {
                last_question: 5,
                ..Default::default()
            },
        ];
        for params in &rejected {
            let log = warnings_for(params);
            assert_eq!(log.matches("rejecting scenario parameters").count(), 1);
            assert!(log.contains("WARN"));
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = ScenarioParams::load("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("fringe_quiz_params_test.json");
        std::fs::write(&path, r#"{"min_entries": 3, "max_entries": 3}"#).unwrap();
        let params = ScenarioParams::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(params.min_entries, 3);
        assert_eq!(params.max_entries, 3);
    }
}
