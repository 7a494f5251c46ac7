use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ParameterName(String);

impl ParameterName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque cursor handed out by the store to resume a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextToken(String);

impl NextToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterType {
    String,
    #[default]
    SecureString,
    StringList,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "String",
            ParameterType::SecureString => "SecureString",
            ParameterType::StringList => "StringList",
        }
    }
}

impl FromStr for ParameterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(ParameterType::String),
            "SecureString" => Ok(ParameterType::SecureString),
            "StringList" => Ok(ParameterType::StringList),
            other => Err(format!(
                "Invalid parameter type '{other}'. Options: SecureString/String/StringList"
            )),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: ParameterName,
    parameter_type: ParameterType,
    value: String,
    version: i64,
    last_modified: Option<DateTime<Utc>>,
    arn: Option<String>,
}

impl Parameter {
    pub fn new(
        name: ParameterName,
        parameter_type: ParameterType,
        value: impl Into<String>,
        version: i64,
    ) -> Self {
        Self {
            name,
            parameter_type,
            value: value.into(),
            version,
            last_modified: None,
            arn: None,
        }
    }

    pub fn with_last_modified(mut self, last_modified: Option<DateTime<Utc>>) -> Self {
        self.last_modified = last_modified;
        self
    }

    pub fn with_arn(mut self, arn: Option<String>) -> Self {
        self.arn = arn;
        self
    }

    pub fn name(&self) -> &ParameterName {
        &self.name
    }

    pub fn parameter_type(&self) -> ParameterType {
        self.parameter_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn last_modified(&self) -> Option<&DateTime<Utc>> {
        self.last_modified.as_ref()
    }

    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Type: {}", self.parameter_type)?;
        writeln!(f, "Value: {}", self.value)?;
        writeln!(f, "Version: {}", self.version)?;
        match &self.last_modified {
            Some(ts) => writeln!(f, "LastModifiedDate: {}", ts.to_rfc3339())?,
            None => writeln!(f, "LastModifiedDate: N/A")?,
        }
        write!(f, "ARN: {}", self.arn.as_deref().unwrap_or("N/A"))
    }
}

/// One response of a path listing.
#[derive(Debug, Clone, Default)]
pub struct ParameterPage {
    pub names: Vec<ParameterName>,
    pub next_token: Option<NextToken>,
}

impl ParameterPage {
    pub fn new(names: Vec<ParameterName>, next_token: Option<NextToken>) -> Self {
        Self { names, next_token }
    }

    pub fn is_last(&self) -> bool {
        self.next_token.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parameter_type_from_str() {
        assert_eq!(
            ParameterType::from_str("SecureString").unwrap(),
            ParameterType::SecureString
        );
        assert_eq!(ParameterType::from_str("String").unwrap(), ParameterType::String);
        assert_eq!(
            ParameterType::from_str("StringList").unwrap(),
            ParameterType::StringList
        );
    }

    #[test]
    fn test_parameter_type_is_case_sensitive() {
        assert!(ParameterType::from_str("securestring").is_err());
        assert!(ParameterType::from_str("").is_err());
    }

    #[test]
    fn test_parameter_type_default_is_secure_string() {
        assert_eq!(ParameterType::default(), ParameterType::SecureString);
    }

    #[test]
    fn test_parameter_display() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let parameter = Parameter::new(
            ParameterName::new("/app/db/password"),
            ParameterType::SecureString,
            "hunter2",
            3,
        )
        .with_last_modified(Some(ts))
        .with_arn(Some(
            "arn:aws:ssm:eu-west-1:123456789012:parameter/app/db/password".to_string(),
        ));

        let rendered = parameter.to_string();
        assert_eq!(
            rendered,
            "Name: /app/db/password\n\
             Type: SecureString\n\
             Value: hunter2\n\
             Version: 3\n\
             LastModifiedDate: 2024-03-01T12:30:00+00:00\n\
             ARN: arn:aws:ssm:eu-west-1:123456789012:parameter/app/db/password"
        );
    }

    #[test]
    fn test_parameter_display_without_metadata() {
        let parameter = Parameter::new(
            ParameterName::new("/app/mode"),
            ParameterType::String,
            "prod",
            1,
        );
        let rendered = parameter.to_string();
        assert!(rendered.contains("LastModifiedDate: N/A"));
        assert!(rendered.ends_with("ARN: N/A"));
    }

    #[test]
    fn test_page_is_last() {
        assert!(ParameterPage::new(vec![], None).is_last());
        assert!(!ParameterPage::new(vec![], Some(NextToken::new("abc"))).is_last());
    }
}
