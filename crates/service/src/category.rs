use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::PermitError;

/// One of the two fixed permit classes. Each has its own store and default status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electrical,
    Structural,
}

impl Category {
    /// Every category, in the order `GET /` reports them.
    pub const ALL: [Category; 2] = [Category::Electrical, Category::Structural];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electrical => "electrical",
            Self::Structural => "structural",
        }
    }
}

impl FromStr for Category {
    type Err = PermitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electrical" => Ok(Self::Electrical),
            "structural" => Ok(Self::Structural),
            other => Err(PermitError::unknown_category(other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_only() {
        assert_eq!("electrical".parse::<Category>(), Ok(Category::Electrical));
        assert_eq!("structural".parse::<Category>(), Ok(Category::Structural));
        assert_eq!(
            "plumbing".parse::<Category>(),
            Err(PermitError::UnknownCategory("plumbing".into()))
        );
        // exact match, like the path segment switch
        assert!("Electrical".parse::<Category>().is_err());
    }

    #[test]
    fn all_is_ordered_and_serializes_lowercase() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["electrical", "structural"]);
        let json = serde_json::to_string(&Category::ALL).unwrap();
        assert_eq!(json, r#"["electrical","structural"]"#);
    }
}
