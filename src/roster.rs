//! Record-type roster: the ordered set of record types queried for every host.

use std::str::FromStr;

use hickory_proto::rr::RecordType;

use crate::error_handling::ConfigError;

/// Ordered, de-duplicated list of requested record types.
///
/// Built once at the configuration boundary. Tokens are trimmed and matched
/// case-insensitively; the first invalid token rejects the whole roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRoster {
    types: Vec<RecordType>,
}

impl RecordRoster {
    /// Parses a comma-separated list such as `"a, aaaa,MX"`.
    ///
    /// Empty tokens (e.g. a trailing comma) are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRecordType` for an unknown token and
    /// `ConfigError::EmptyRoster` when no token remains.
    pub fn parse(records: &str) -> Result<Self, ConfigError> {
        Self::from_tokens(records.split(','))
    }

    /// Builds a roster from individual tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            let record_type = parse_record_type(token)?;
            if !types.contains(&record_type) {
                types.push(record_type);
            }
        }

        if types.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        Ok(Self { types })
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.types.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, record_type: RecordType) -> bool {
        self.types.contains(&record_type)
    }
}

impl Default for RecordRoster {
    fn default() -> Self {
        Self {
            types: vec![RecordType::A, RecordType::AAAA],
        }
    }
}

impl FromStr for RecordRoster {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_record_type(token: &str) -> Result<RecordType, ConfigError> {
    let upper = token.to_ascii_uppercase();
    match RecordType::from_str(&upper) {
        // OPT is a pseudo-record and cannot be asked for.
        Ok(RecordType::OPT) | Ok(RecordType::Unknown(_)) | Err(_) => {
            Err(ConfigError::InvalidRecordType(token.to_string()))
        }
        Ok(record_type) => Ok(record_type),
    }
}
