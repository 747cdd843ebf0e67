use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "Self::validate_self"))]
pub struct QueueOptions {
    /// Number of slots in the admissions queue. Fixed for the lifetime of a queue.
    #[serde(default = "QueueOptions::default_capacity")]
    #[validate(range(min = 1, max = 1_048_576))]
    pub capacity: u32,
    /// Maximum number of lines printed by a listing; `None` prints every record.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub render_limit: Option<u32>,
}

impl QueueOptions {
    fn default_capacity() -> u32 {
        64
    }
    fn validate_self(&self) -> Result<(), ValidationError> {
        match self.render_limit {
            Some(limit) if limit > self.capacity => {
                Err(ValidationError::new("render limit exceeds capacity"))
            }
            _ => Ok(()),
        }
    }
    pub fn check(&self) -> Result<(), OptionsError> {
        if let Err(err) = self.validate() {
            return Err(OptionsError::InvalidOptions {
                reason: err.to_string(),
            });
        }
        Ok(())
    }
    pub fn from_toml(s: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(s).map_err(|e| OptionsError::InvalidOptions {
            reason: e.to_string(),
        })?;
        options.check()?;
        Ok(options)
    }
}

impl Default for QueueOptions {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
            render_limit: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = QueueOptions::from_toml("").unwrap();
        assert_eq!(options, QueueOptions::default());
        assert_eq!(options.capacity, 64);
        assert_eq!(options.render_limit, None);
    }

    #[test]
    fn test_parse() {
        let options = QueueOptions::from_toml("capacity = 5\nrender_limit = 3\n").unwrap();
        assert_eq!(options.capacity, 5);
        assert_eq!(options.render_limit, Some(3));
    }

    #[test]
    fn test_invalid() {
        assert!(QueueOptions::from_toml("capacity = 0").is_err());
        assert!(QueueOptions::from_toml("capacity = 2000000").is_err());
        assert!(QueueOptions::from_toml("capacity = 4\nrender_limit = 0").is_err());
        assert!(QueueOptions::from_toml("capacity = 4\nrender_limit = 5").is_err());
        assert!(QueueOptions::from_toml("capacity = 4\nlimit = 2").is_err());
        let options = QueueOptions {
            capacity: 0,
            render_limit: None,
        };
        assert!(matches!(
            options.check(),
            Err(OptionsError::InvalidOptions { .. })
        ));
    }
}
