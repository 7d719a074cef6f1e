//! AWS Signature Version 4.
//!
//! <https://docs.aws.amazon.com/general/latest/gr/sigv4_signing.html>
//!
//! 1. Create a canonical request
//! 2. Create the string to sign
//! 3. Calculate the signing key
//! 4. Add the signature to the request

use crate::config::AwsCredentials;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Hash of an empty payload.
pub const EMPTY_PAYLOAD_HASH: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Signs requests for one service in one region.
#[derive(Debug, Clone)]
pub struct SigV4Signer<'a> {
    credentials: &'a AwsCredentials,
    region: &'a str,
    service: &'a str,
}

/// Headers to attach to a request after signing, `authorization` included.
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    pub headers: BTreeMap<String, String>,
    pub signature: String,
}

impl<'a> SigV4Signer<'a> {
    pub fn new(credentials: &'a AwsCredentials, region: &'a str, service: &'a str) -> Self {
        Self {
            credentials,
            region,
            service,
        }
    }

    /// Sign a request.
    ///
    /// `path` is the raw (unencoded) request path, `query` the raw query
    /// parameters. `headers` must already carry `host`.
    pub fn sign(
        &self,
        method: &str,
        path: &str,
        query: &BTreeMap<String, String>,
        headers: &BTreeMap<String, String>,
        body: &str,
        timestamp: DateTime<Utc>,
    ) -> SignedHeaders {
        let date_stamp = timestamp.format("%Y%m%d").to_string();
        let amz_date = timestamp.format("%Y%m%dT%H%M%SZ").to_string();

        let mut signed = headers.clone();
        signed.insert("x-amz-date".to_string(), amz_date.clone());
        if let Some(ref token) = self.credentials.session_token {
            signed.insert("x-amz-security-token".to_string(), token.clone());
        }
        let payload_hash = sha256_hex(body);
        signed.insert("x-amz-content-sha256".to_string(), payload_hash.clone());

        let canonical_request = format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            method,
            uri_encode_path(path),
            canonical_query_string(query),
            canonical_headers(&signed),
            signed_header_names(&signed),
            payload_hash
        );

        let credential_scope = format!(
            "{}/{}/{}/aws4_request",
            date_stamp, self.region, self.service
        );
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            amz_date,
            credential_scope,
            sha256_hex(&canonical_request)
        );
        log::debug!("SigV4 canonical request:\n{}", canonical_request);

        let signing_key = self.derive_signing_key(&date_stamp);
        let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes()));

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM,
            self.credentials.access_key_id,
            credential_scope,
            signed_header_names(&signed),
            signature
        );
        signed.insert("authorization".to_string(), authorization);

        SignedHeaders {
            headers: signed,
            signature,
        }
    }

    /// kSigning = HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")
    fn derive_signing_key(&self, date_stamp: &str) -> Vec<u8> {
        let k_secret = format!("AWS4{}", self.credentials.secret_access_key);
        let k_date = hmac_sha256(k_secret.as_bytes(), date_stamp.as_bytes());
        let k_region = hmac_sha256(&k_date, self.region.as_bytes());
        let k_service = hmac_sha256(&k_region, self.service.as_bytes());
        hmac_sha256(&k_service, b"aws4_request")
    }
}

// ── Helper functions ────────────────────────────────────────────────────

/// Lowercased, trimmed, sorted `name:value\n` lines.
fn canonical_headers(headers: &BTreeMap<String, String>) -> String {
    let mut sorted: Vec<(String, String)> = headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.trim().to_string()))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
        .iter()
        .map(|(k, v)| format!("{}:{}\n", k, v))
        .collect()
}

fn signed_header_names(headers: &BTreeMap<String, String>) -> String {
    let mut names: Vec<String> = headers.keys().map(|k| k.to_lowercase()).collect();
    names.sort();
    names.join(";")
}

pub fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Percent-encode per SigV4: everything but unreserved characters.
pub fn uri_encode(input: &str) -> String {
    use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
    const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'_')
        .remove(b'.')
        .remove(b'~');
    utf8_percent_encode(input, UNRESERVED).to_string()
}

/// Encode a path segment by segment, keeping the slashes.
pub fn uri_encode_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.split('/')
        .map(uri_encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Sorted, encoded `k=v&k=v`. Used both for signing and for the URL sent.
pub fn canonical_query_string(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> AwsCredentials {
        AwsCredentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
    }

    fn fixed_time() -> DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(2015, 8, 30)
            .unwrap()
            .and_hms_opt(12, 36, 0)
            .unwrap()
            .and_utc()
    }

    fn host(h: &str) -> BTreeMap<String, String> {
        BTreeMap::from([("host".to_string(), h.to_string())])
    }

    #[test]
    fn sha256_empty_string() {
        assert_eq!(sha256_hex(""), EMPTY_PAYLOAD_HASH);
    }

    #[test]
    fn uri_encode_reserved() {
        assert_eq!(uri_encode("hello world"), "hello%20world");
        assert_eq!(uri_encode("arn:aws:iot/site"), "arn%3Aaws%3Aiot%2Fsite");
        assert_eq!(uri_encode("abcABC123-_.~"), "abcABC123-_.~");
    }

    #[test]
    fn uri_encode_path_keeps_slashes() {
        assert_eq!(uri_encode_path("/listWorkers"), "/listWorkers");
        assert_eq!(uri_encode_path("/a b/c"), "/a%20b/c");
        assert_eq!(uri_encode_path(""), "/");
    }

    #[test]
    fn canonical_query_sorted_and_encoded() {
        let params = BTreeMap::from([
            ("site".to_string(), "arn:x/1".to_string()),
            ("maxResults".to_string(), "10".to_string()),
        ]);
        assert_eq!(
            canonical_query_string(&params),
            "maxResults=10&site=arn%3Ax%2F1"
        );
    }

    #[test]
    fn canonical_headers_sorted() {
        let headers = BTreeMap::from([
            ("host".to_string(), "example.com".to_string()),
            ("x-amz-date".to_string(), " 20150830T123600Z ".to_string()),
            ("content-type".to_string(), "application/json".to_string()),
        ]);
        let lines: Vec<String> = canonical_headers(&headers).lines().map(String::from).collect();
        assert_eq!(lines[0], "content-type:application/json");
        assert_eq!(lines[1], "host:example.com");
        assert_eq!(lines[2], "x-amz-date:20150830T123600Z");
        assert_eq!(signed_header_names(&headers), "content-type;host;x-amz-date");
    }

    #[test]
    fn sign_adds_authorization_with_scope() {
        let creds = credentials();
        let signer = SigV4Signer::new(&creds, "us-east-1", "secretsmanager");
        let signed = signer.sign(
            "POST",
            "/",
            &BTreeMap::new(),
            &host("secretsmanager.us-east-1.amazonaws.com"),
            "{}",
            fixed_time(),
        );
        let auth = &signed.headers["authorization"];
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/secretsmanager/aws4_request"
        ));
        assert!(auth.contains("SignedHeaders=host;x-amz-content-sha256;x-amz-date"));
        assert_eq!(signed.headers["x-amz-date"], "20150830T123600Z");
        assert_eq!(signed.signature.len(), 64);
    }

    #[test]
    fn sign_is_deterministic() {
        let creds = credentials();
        let signer = SigV4Signer::new(&creds, "us-east-1", "service");
        let a = signer.sign("GET", "/", &BTreeMap::new(), &host("example.amazonaws.com"), "", fixed_time());
        let b = signer.sign("GET", "/", &BTreeMap::new(), &host("example.amazonaws.com"), "", fixed_time());
        assert_eq!(a.signature, b.signature);

        let query = BTreeMap::from([("site".to_string(), "s".to_string())]);
        let c = signer.sign("GET", "/", &query, &host("example.amazonaws.com"), "", fixed_time());
        assert_ne!(a.signature, c.signature);
    }

    #[test]
    fn sign_includes_session_token() {
        let creds = AwsCredentials::new_temporary("ASIAEXAMPLE", "secret", "sessiontoken123", None);
        let signer = SigV4Signer::new(&creds, "us-east-1", "datapipeline");
        let signed = signer.sign(
            "POST",
            "/",
            &BTreeMap::new(),
            &host("datapipeline.us-east-1.amazonaws.com"),
            "{}",
            fixed_time(),
        );
        assert_eq!(
            signed.headers.get("x-amz-security-token").map(String::as_str),
            Some("sessiontoken123")
        );
        assert!(signed.headers["authorization"].contains("x-amz-security-token"));
    }

    #[test]
    fn derive_signing_key_is_32_bytes() {
        let creds = credentials();
        let signer = SigV4Signer::new(&creds, "us-east-1", "service");
        assert_eq!(signer.derive_signing_key("20150830").len(), 32);
    }
}
