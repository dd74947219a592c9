//! Trust header detection.
//!
//! Header names are matched exactly as delivered. A header that is present
//! with an empty value counts as absent.

use std::collections::HashMap;
use std::fmt;

use crate::bitbucket::BITBUCKET_UUID_HEADER;
use crate::github::GITHUB_SIGNATURE_HEADER;

/// The webhook provider a request claims to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// `X-Hub-Signature` only.
    GitHub,
    /// `X-Hook-UUID` only.
    Bitbucket,
    /// Both trust headers.
    Ambiguous,
    /// Neither trust header.
    Unrecognized,
}

impl Provider {
    /// Short name used in log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Bitbucket => "bitbucket",
            Self::Ambiguous => "ambiguous",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The trust header values found on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustHeader<'a> {
    /// `X-Hub-Signature` value.
    GitHub {
        /// The `sha1=<hex>` signature.
        signature: &'a str,
    },
    /// `X-Hook-UUID` value.
    Bitbucket {
        /// The hook UUID.
        hook_uuid: &'a str,
    },
    /// Both headers were sent.
    Both {
        /// The `sha1=<hex>` signature.
        signature: &'a str,
        /// The hook UUID.
        hook_uuid: &'a str,
    },
    /// No trust header was sent.
    Absent,
}

impl<'a> TrustHeader<'a> {
    /// Inspect `headers` once and classify the request.
    #[must_use]
    pub fn detect(headers: &'a HashMap<String, String>) -> Self {
        let signature = present(headers, GITHUB_SIGNATURE_HEADER);
        let hook_uuid = present(headers, BITBUCKET_UUID_HEADER);

        match (signature, hook_uuid) {
            (Some(signature), Some(hook_uuid)) => Self::Both {
                signature,
                hook_uuid,
            },
            (Some(signature), None) => Self::GitHub { signature },
            (None, Some(hook_uuid)) => Self::Bitbucket { hook_uuid },
            (None, None) => Self::Absent,
        }
    }

    /// The provider this header set points at.
    #[must_use]
    pub fn provider(&self) -> Provider {
        match self {
            Self::GitHub { .. } => Provider::GitHub,
            Self::Bitbucket { .. } => Provider::Bitbucket,
            Self::Both { .. } => Provider::Ambiguous,
            Self::Absent => Provider::Unrecognized,
        }
    }
}

fn present<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}
