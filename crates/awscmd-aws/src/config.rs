//! AWS configuration: regions, credentials, shared profile files and the
//! aggregated [`SdkConfig`] handed to [`AwsClient`](crate::client::AwsClient).
//!
//! Nothing in here reads process state implicitly: environment lookups and
//! file contents are passed in, so the resolution chain can be tested.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Region used when nothing else names one.
pub const DEFAULT_REGION: &str = "us-east-1";

// ── Regions ─────────────────────────────────────────────────────────────

/// Standard AWS regions. Anything else is accepted with a warning.
pub const AWS_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ap-southeast-7",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ca-central-1",
    "ca-west-1",
    "eu-central-1",
    "eu-central-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-south-1",
    "eu-south-2",
    "eu-north-1",
    "il-central-1",
    "me-south-1",
    "me-central-1",
    "mx-central-1",
    "sa-east-1",
    // GovCloud
    "us-gov-east-1",
    "us-gov-west-1",
    // China
    "cn-north-1",
    "cn-northwest-1",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwsRegion {
    /// Region code (e.g., "us-east-1").
    pub name: String,
}

impl AwsRegion {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Regional endpoint for a service, by endpoint prefix.
    pub fn endpoint(&self, endpoint_prefix: &str) -> String {
        match endpoint_prefix {
            // S3 Vectors is only published on the dual-stack domain
            "s3vectors" => format!("https://s3vectors.{}.api.aws", self.name),
            _ if self.name.starts_with("cn-") => {
                format!("https://{}.{}.amazonaws.com.cn", endpoint_prefix, self.name)
            }
            _ => format!("https://{}.{}.amazonaws.com", endpoint_prefix, self.name),
        }
    }

    pub fn is_valid(&self) -> bool {
        AWS_REGIONS.contains(&self.name.as_str())
    }

    /// Partition for this region (aws, aws-cn, aws-us-gov).
    pub fn partition(&self) -> &str {
        if self.name.starts_with("cn-") {
            "aws-cn"
        } else if self.name.starts_with("us-gov-") {
            "aws-us-gov"
        } else {
            "aws"
        }
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

// ── Credentials ─────────────────────────────────────────────────────────

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Present for temporary credentials.
    pub session_token: Option<String>,
    pub expiration: Option<DateTime<Utc>>,
    /// Where the credentials came from, for diagnostics.
    pub provider_name: Option<String>,
}

// Keep secrets out of debug logs.
impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .field("expiration", &self.expiration)
            .field("provider_name", &self.provider_name)
            .finish()
    }
}

impl AwsCredentials {
    /// Long-term credentials.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: None,
            expiration: None,
            provider_name: Some("static".to_string()),
        }
    }

    pub fn new_temporary(
        access_key_id: &str,
        secret_access_key: &str,
        session_token: &str,
        expiration: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: Some(session_token.to_string()),
            expiration,
            provider_name: Some("static".to_string()),
        }
    }

    pub fn with_provider(mut self, provider: &str) -> Self {
        self.provider_name = Some(provider.to_string());
        self
    }

    pub fn is_expired(&self) -> bool {
        self.expiration.map_or(false, |exp| Utc::now() > exp)
    }

    pub fn is_temporary(&self) -> bool {
        self.session_token.is_some()
    }

    /// Read `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` /
    /// `AWS_SESSION_TOKEN` / `AWS_CREDENTIAL_EXPIRATION` through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = lookup("AWS_ACCESS_KEY_ID").filter(|v| !v.is_empty())?;
        let secret_key = lookup("AWS_SECRET_ACCESS_KEY").filter(|v| !v.is_empty())?;
        let session_token = lookup("AWS_SESSION_TOKEN").filter(|v| !v.is_empty());
        let expiration = lookup("AWS_CREDENTIAL_EXPIRATION")
            .filter(|v| !v.is_empty())
            .and_then(|raw| parse_expiration(&raw));
        Some(Self {
            access_key_id: access_key,
            secret_access_key: secret_key,
            session_token,
            expiration,
            provider_name: Some("environment".to_string()),
        })
    }
}

/// RFC 3339 expiry timestamp. Unparseable values are ignored with a warning.
fn parse_expiration(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            log::warn!("Ignoring AWS_CREDENTIAL_EXPIRATION '{}': {}", raw, e);
            None
        }
    }
}

// ── Shared profile files ────────────────────────────────────────────────

/// A named profile merged from `~/.aws/credentials` and `~/.aws/config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsProfile {
    pub name: String,
    pub region: Option<String>,
    pub credentials: Option<AwsCredentials>,
    pub endpoint_url: Option<String>,
}

type Sections = HashMap<String, HashMap<String, String>>;

/// Parsed contents of the shared credentials and config files.
#[derive(Debug, Clone, Default)]
pub struct SharedConfigFiles {
    credentials: Sections,
    config: Sections,
}

impl SharedConfigFiles {
    /// Load both files. A missing file counts as empty.
    pub fn load(credentials_path: Option<&Path>, config_path: Option<&Path>) -> io::Result<Self> {
        Ok(Self {
            credentials: read_sections(credentials_path, false)?,
            config: read_sections(config_path, true)?,
        })
    }

    pub fn from_strings(credentials: &str, config: &str) -> Self {
        Self {
            credentials: parse_ini(credentials, false),
            config: parse_ini(config, true),
        }
    }

    /// Path of the shared credentials file, honouring
    /// `AWS_SHARED_CREDENTIALS_FILE`.
    pub fn credentials_path<F>(lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("AWS_SHARED_CREDENTIALS_FILE")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".aws").join("credentials")))
    }

    /// Path of the shared config file, honouring `AWS_CONFIG_FILE`.
    pub fn config_path<F>(lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("AWS_CONFIG_FILE")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".aws").join("config")))
    }

    pub fn has_profile(&self, name: &str) -> bool {
        self.credentials.contains_key(name) || self.config.contains_key(name)
    }

    /// Merge a profile from both files. Keys in the credentials file win.
    pub fn profile(&self, name: &str) -> Option<AwsProfile> {
        if !self.has_profile(name) {
            return None;
        }
        let get = |key: &str| {
            self.credentials
                .get(name)
                .and_then(|section| section.get(key))
                .or_else(|| self.config.get(name).and_then(|section| section.get(key)))
                .filter(|v| !v.is_empty())
                .cloned()
        };

        let credentials = match (get("aws_access_key_id"), get("aws_secret_access_key")) {
            (Some(key), Some(secret)) => {
                let provider = format!("profile:{}", name);
                Some(match get("aws_session_token") {
                    Some(token) => AwsCredentials::new_temporary(&key, &secret, &token, None),
                    None => AwsCredentials::new(&key, &secret),
                }
                .with_provider(&provider))
            }
            _ => None,
        };

        Some(AwsProfile {
            name: name.to_string(),
            region: get("region"),
            credentials,
            endpoint_url: get("endpoint_url"),
        })
    }
}

fn read_sections(path: Option<&Path>, is_config: bool) -> io::Result<Sections> {
    let Some(path) = path else {
        return Ok(Sections::new());
    };
    match std::fs::read_to_string(path) {
        Ok(text) => {
            log::debug!("Loaded AWS shared file {}", path.display());
            Ok(parse_ini(&text, is_config))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Sections::new()),
        Err(e) => Err(e),
    }
}

/// Parse the AWS flavour of INI. In the config file non-default sections
/// are written `[profile name]`; in the credentials file just `[name]`.
fn parse_ini(text: &str, is_config: bool) -> Sections {
    let mut sections = Sections::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let header = header.trim();
            let name = match header.strip_prefix("profile ") {
                Some(name) if is_config => name.trim(),
                _ => header,
            };
            sections.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }
        let (Some(section), Some((key, value))) = (current.as_ref(), line.split_once('=')) else {
            continue;
        };
        if let Some(entries) = sections.get_mut(section) {
            entries.insert(key.trim().to_lowercase(), value.trim().to_string());
        }
    }
    sections
}

// ── Retry Configuration ─────────────────────────────────────────────────

/// Retry configuration following the AWS SDK standard retry mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetryConfig {
    /// Total attempts including the first (default: 3).
    pub max_attempts: u32,
    pub mode: RetryMode,
    /// Initial backoff duration in milliseconds (default: 500).
    pub initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds (default: 20_000).
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            mode: RetryMode::Standard,
            initial_backoff_ms: 500,
            max_backoff_ms: 20_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RetryMode {
    /// Exponential backoff with full jitter.
    Standard,
    /// Exponential backoff without jitter.
    Legacy,
}

// ── SDK Config ──────────────────────────────────────────────────────────

/// Everything needed to construct an [`AwsClient`](crate::client::AwsClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkConfig {
    pub region: AwsRegion,
    pub credentials: AwsCredentials,
    pub retry_config: RetryConfig,
    /// Endpoint override (LocalStack and friends).
    pub endpoint_url: Option<String>,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Appended to the User-Agent header.
    pub app_name: Option<String>,
}

impl SdkConfig {
    pub fn new(region: AwsRegion, credentials: AwsCredentials) -> Self {
        Self {
            region,
            credentials,
            retry_config: RetryConfig::default(),
            endpoint_url: None,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            app_name: None,
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        self.endpoint_url = endpoint_url.map(|url| url.trim_end_matches('/').to_string());
        self
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn with_app_name(mut self, app_name: &str) -> Self {
        self.app_name = Some(app_name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn region_endpoint_standard() {
        let r = AwsRegion::new("us-east-1");
        assert_eq!(
            r.endpoint("secretsmanager"),
            "https://secretsmanager.us-east-1.amazonaws.com"
        );
        assert_eq!(
            r.endpoint("datapipeline"),
            "https://datapipeline.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn region_endpoint_s3vectors() {
        let r = AwsRegion::new("eu-central-1");
        assert_eq!(r.endpoint("s3vectors"), "https://s3vectors.eu-central-1.api.aws");
    }

    #[test]
    fn region_endpoint_china() {
        let r = AwsRegion::new("cn-north-1");
        assert_eq!(
            r.endpoint("secretsmanager"),
            "https://secretsmanager.cn-north-1.amazonaws.com.cn"
        );
        assert_eq!(r.partition(), "aws-cn");
    }

    #[test]
    fn region_partition_govcloud() {
        assert_eq!(AwsRegion::new("us-gov-west-1").partition(), "aws-us-gov");
        assert_eq!(AwsRegion::default().partition(), "aws");
    }

    #[test]
    fn region_is_valid() {
        assert!(AwsRegion::new("us-east-1").is_valid());
        assert!(!AwsRegion::new("mars-central-1").is_valid());
    }

    #[test]
    fn credentials_from_lookup() {
        let env = HashMap::from([
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
        ]);
        let creds =
            AwsCredentials::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(creds.access_key_id, "AKIDEXAMPLE");
        assert!(!creds.is_temporary());
        assert_eq!(creds.provider_name.as_deref(), Some("environment"));
    }

    #[test]
    fn credentials_from_lookup_requires_both_keys() {
        let env = HashMap::from([("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")]);
        assert!(AwsCredentials::from_lookup(|k| env.get(k).map(|v| v.to_string())).is_none());
    }

    #[test]
    fn credentials_expiration_from_lookup() {
        let env = HashMap::from([
            ("AWS_ACCESS_KEY_ID", "ASIAEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", "tok"),
            ("AWS_CREDENTIAL_EXPIRATION", "2020-01-01T00:00:00Z"),
        ]);
        let creds =
            AwsCredentials::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(
            creds.expiration,
            Some(DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z").unwrap().with_timezone(&Utc))
        );
        assert!(creds.is_expired());
    }

    #[test]
    fn malformed_expiration_is_ignored() {
        let env = HashMap::from([
            ("AWS_ACCESS_KEY_ID", "ASIAEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_CREDENTIAL_EXPIRATION", "tomorrow"),
        ]);
        let creds =
            AwsCredentials::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert!(creds.expiration.is_none());
        assert!(!creds.is_expired());
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = AwsCredentials::new_temporary("AKID", "topsecret", "tok", None);
        let shown = format!("{:?}", creds);
        assert!(!shown.contains("topsecret"));
        assert!(!shown.contains("tok\""));
        assert!(creds.is_temporary());
        assert!(!creds.is_expired());
    }

    const CREDENTIALS: &str = "\
[default]
aws_access_key_id = AKIDDEFAULT
aws_secret_access_key = defaultsecret

[prod]
aws_access_key_id=AKIDPROD
aws_secret_access_key=prodsecret
aws_session_token=prodtoken
";

    const CONFIG: &str = "\
# shared config
[default]
region = us-west-2

[profile prod]
region = eu-west-1
endpoint_url = http://localhost:4566
";

    #[test]
    fn profile_merges_both_files() {
        let files = SharedConfigFiles::from_strings(CREDENTIALS, CONFIG);
        let prod = files.profile("prod").unwrap();
        assert_eq!(prod.region.as_deref(), Some("eu-west-1"));
        assert_eq!(prod.endpoint_url.as_deref(), Some("http://localhost:4566"));
        let creds = prod.credentials.unwrap();
        assert_eq!(creds.access_key_id, "AKIDPROD");
        assert_eq!(creds.session_token.as_deref(), Some("prodtoken"));
        assert_eq!(creds.provider_name.as_deref(), Some("profile:prod"));

        let default = files.profile("default").unwrap();
        assert_eq!(default.region.as_deref(), Some("us-west-2"));
        assert!(files.profile("staging").is_none());
    }

    #[test]
    fn config_profile_prefix_only_applies_to_config_file() {
        let files = SharedConfigFiles::from_strings("[profile odd]\naws_access_key_id=x\n", "");
        assert!(files.has_profile("profile odd"));
        assert!(!files.has_profile("odd"));
    }

    #[test]
    fn load_reads_files_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let creds_path = dir.path().join("credentials");
        let mut file = std::fs::File::create(&creds_path).unwrap();
        file.write_all(CREDENTIALS.as_bytes()).unwrap();

        let missing = dir.path().join("config");
        let files = SharedConfigFiles::load(Some(&creds_path), Some(&missing)).unwrap();
        let default = files.profile("default").unwrap();
        assert_eq!(default.credentials.unwrap().access_key_id, "AKIDDEFAULT");
        assert!(default.region.is_none());
    }

    #[test]
    fn shared_file_paths_honour_overrides() {
        let path = SharedConfigFiles::credentials_path(|k| {
            (k == "AWS_SHARED_CREDENTIALS_FILE").then(|| "/tmp/creds".to_string())
        });
        assert_eq!(path, Some(PathBuf::from("/tmp/creds")));
        let path =
            SharedConfigFiles::config_path(|k| (k == "AWS_CONFIG_FILE").then(|| "/tmp/cfg".to_string()));
        assert_eq!(path, Some(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn sdk_config_trims_endpoint() {
        let sdk = SdkConfig::new(AwsRegion::new("eu-west-1"), AwsCredentials::new("a", "b"))
            .with_endpoint_url(Some("http://localhost:4566/".into()));
        assert_eq!(sdk.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(sdk.retry_config, RetryConfig::default());
    }
}
