//! Classification of free-form command-line tokens.
//!
//! Besides regular clap options the tool accepts bare tokens, for example
//! `bump-version 1.2.3 +c +force`. Each token is trimmed and must be a
//! version literal or one of the `+` flags.

use crate::domain::Version;
use crate::error::{BumpError, Result};

/// Token that skips the monotonic-increase check
pub const FORCE_TOKEN: &str = "+force";

/// Token that requests a git commit after the manifest is written
pub const COMMIT_TOKEN: &str = "+c";

/// A classified command-line token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Version(Version),
    Force,
    Commit,
}

/// Requested new version and flags gathered from tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpArgs {
    pub new_version: Version,
    pub force: bool,
    pub commit: bool,
}

/// Classify a single token.
///
/// # Returns
/// * `Ok(Token)` - Version literal, force flag, or commit flag
/// * `Err(InvalidFormat)` - Version-shaped token whose numbers overflow
/// * `Err(InvalidArgument)` - Anything else
pub fn classify_token(raw: &str) -> Result<Token> {
    let token = raw.trim();

    if Version::is_literal(token) {
        return Version::parse(token).map(Token::Version);
    }

    match token {
        FORCE_TOKEN => Ok(Token::Force),
        COMMIT_TOKEN => Ok(Token::Commit),
        _ => Err(BumpError::invalid_argument(token)),
    }
}

/// Classify all tokens into [`BumpArgs`].
///
/// The first invalid token aborts. When several version literals are
/// given, the last one wins. No version literal at all is
/// [`BumpError::MissingVersion`].
pub fn parse_tokens<I, S>(tokens: I) -> Result<BumpArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut new_version = None;
    let mut force = false;
    let mut commit = false;

    for token in tokens {
        match classify_token(token.as_ref())? {
            Token::Version(version) => new_version = Some(version),
            Token::Force => force = true,
            Token::Commit => commit = true,
        }
    }

    let new_version = new_version.ok_or(BumpError::MissingVersion)?;

    Ok(BumpArgs {
        new_version,
        force,
        commit,
    })
}
