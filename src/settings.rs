//! Resolving region, credentials and endpoint for the AWS client.
//!
//! Order, first hit wins: command-line flags, environment variables, the
//! shared credentials/config files, then the built-in default region.

use crate::cli::GlobalArgs;
use anyhow::{anyhow, bail, Context, Result};
use awscmd_aws::config::DEFAULT_REGION;
use awscmd_aws::{AwsRegion, SdkConfig, SharedConfigFiles};

const DEFAULT_PROFILE: &str = "default";

/// Build the client configuration from the process environment and the
/// shared files on disk.
pub fn load(args: &GlobalArgs) -> Result<SdkConfig> {
    let lookup = |name: &str| std::env::var(name).ok();
    let credentials_path = SharedConfigFiles::credentials_path(lookup);
    let config_path = SharedConfigFiles::config_path(lookup);
    let files = SharedConfigFiles::load(credentials_path.as_deref(), config_path.as_deref())
        .context("failed to read the shared AWS configuration files")?;
    resolve(args, lookup, &files)
}

/// Resolve against an arbitrary environment and already-parsed files.
pub fn resolve<F>(args: &GlobalArgs, lookup: F, files: &SharedConfigFiles) -> Result<SdkConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let env = |name: &str| lookup(name).filter(|v| !v.is_empty());

    let named_profile = args.profile.clone().or_else(|| env("AWS_PROFILE"));
    let profile_name = named_profile.clone().unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    let profile = files.profile(&profile_name);
    if named_profile.is_some() && profile.is_none() {
        bail!(
            "profile '{}' was not found in the shared credentials or config file",
            profile_name
        );
    }

    let region = args
        .region
        .clone()
        .or_else(|| env("AWS_REGION"))
        .or_else(|| env("AWS_DEFAULT_REGION"))
        .or_else(|| profile.as_ref().and_then(|p| p.region.clone()))
        .unwrap_or_else(|| DEFAULT_REGION.to_string());
    let region = AwsRegion::new(&region);
    if !region.is_valid() {
        log::warn!(
            "'{}' is not a known AWS region; requests will be sent to {}",
            region.name,
            region.endpoint("<service>")
        );
    }

    // An explicit --profile beats credentials in the environment.
    let from_env = awscmd_aws::AwsCredentials::from_lookup(&lookup);
    let from_profile = profile.as_ref().and_then(|p| p.credentials.clone());
    let credentials = if args.profile.is_some() {
        from_profile.or(from_env)
    } else {
        from_env.or(from_profile)
    }
    .ok_or_else(|| {
        anyhow!(
            "no AWS credentials found: set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY, \
             or add keys to profile '{}'",
            profile_name
        )
    })?;
    log::debug!(
        "Using credentials from {} in region {}",
        credentials.provider_name.as_deref().unwrap_or("unknown source"),
        region.name
    );

    let endpoint_url = args
        .endpoint_url
        .clone()
        .or_else(|| env("AWS_ENDPOINT_URL"))
        .or_else(|| profile.as_ref().and_then(|p| p.endpoint_url.clone()));

    Ok(SdkConfig::new(region, credentials)
        .with_endpoint_url(endpoint_url)
        .with_app_name(env!("CARGO_PKG_NAME")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const CREDENTIALS: &str = "\
[default]
aws_access_key_id = AKIDDEFAULT
aws_secret_access_key = default-secret

[ops]
aws_access_key_id = AKIDOPS
aws_secret_access_key = ops-secret
aws_session_token = ops-token
";

    const CONFIG: &str = "\
[default]
region = eu-west-1

[profile ops]
region = ap-southeast-2
endpoint_url = http://localhost:4566
";

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn files() -> SharedConfigFiles {
        SharedConfigFiles::from_strings(CREDENTIALS, CONFIG)
    }

    #[test]
    fn default_profile_supplies_region_and_keys() {
        let config = resolve(&GlobalArgs::default(), env(&[]), &files()).unwrap();
        assert_eq!(config.region.name, "eu-west-1");
        assert_eq!(config.credentials.access_key_id, "AKIDDEFAULT");
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn flags_beat_environment() {
        let args = GlobalArgs {
            region: Some("us-west-2".into()),
            ..Default::default()
        };
        let config = resolve(&args, env(&[("AWS_REGION", "eu-central-1")]), &files()).unwrap();
        assert_eq!(config.region.name, "us-west-2");
    }

    #[test]
    fn environment_beats_profile() {
        let lookup = env(&[
            ("AWS_DEFAULT_REGION", "ca-central-1"),
            ("AWS_ACCESS_KEY_ID", "AKIDENV"),
            ("AWS_SECRET_ACCESS_KEY", "env-secret"),
        ]);
        let config = resolve(&GlobalArgs::default(), lookup, &files()).unwrap();
        assert_eq!(config.region.name, "ca-central-1");
        assert_eq!(config.credentials.access_key_id, "AKIDENV");
    }

    #[test]
    fn explicit_profile_beats_environment_keys() {
        let args = GlobalArgs {
            profile: Some("ops".into()),
            ..Default::default()
        };
        let lookup = env(&[("AWS_ACCESS_KEY_ID", "AKIDENV"), ("AWS_SECRET_ACCESS_KEY", "s")]);
        let config = resolve(&args, lookup, &files()).unwrap();
        assert_eq!(config.credentials.access_key_id, "AKIDOPS");
        assert_eq!(config.credentials.session_token.as_deref(), Some("ops-token"));
        assert_eq!(config.region.name, "ap-southeast-2");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn falls_back_to_default_region() {
        let files = SharedConfigFiles::from_strings(CREDENTIALS, "");
        let config = resolve(&GlobalArgs::default(), env(&[]), &files).unwrap();
        assert_eq!(config.region.name, DEFAULT_REGION);
    }

    #[test]
    fn unknown_region_is_accepted() {
        let args = GlobalArgs {
            region: Some("mars-north-1".into()),
            ..Default::default()
        };
        let config = resolve(&args, env(&[]), &files()).unwrap();
        assert_eq!(config.region.name, "mars-north-1");
    }

    #[test]
    fn missing_profile_is_an_error() {
        let err = resolve(&GlobalArgs::default(), env(&[("AWS_PROFILE", "nope")]), &files())
            .unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn missing_credentials_is_an_error() {
        let files = SharedConfigFiles::from_strings("", CONFIG);
        let err = resolve(&GlobalArgs::default(), env(&[]), &files).unwrap_err();
        assert!(err.to_string().contains("no AWS credentials"));
    }

    #[test]
    fn endpoint_flag_trailing_slash_trimmed() {
        let args = GlobalArgs {
            endpoint_url: Some("http://localhost:4566/".into()),
            ..Default::default()
        };
        let config = resolve(&args, env(&[]), &files()).unwrap();
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }
}
