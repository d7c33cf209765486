use crate::client::ProfileSource;
use crate::error::FetchError;
use crate::types::ProfileLookup;

/// What to do when the profile loads but the repository listing doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReposFailurePolicy {
    /// Carry on with no repositories.
    #[default]
    Empty,
    /// Fail the whole lookup with `FetchError::ReposUnavailable`.
    Fail,
}

#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub per_page: u8,
    pub on_repos_failure: ReposFailurePolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            per_page: 100,
            on_repos_failure: ReposFailurePolicy::Empty,
        }
    }
}

/// Looks up a profile, then its repositories. The listing is only requested
/// once the profile lookup has succeeded.
pub fn fetch_profile(
    source: &dyn ProfileSource,
    handle: &str,
    options: FetchOptions,
) -> Result<ProfileLookup, FetchError> {
    if handle.is_empty() {
        return Err(FetchError::EmptyHandle);
    }

    let profile = source.fetch_user(handle)?;

    let repositories = match source.fetch_repositories(handle, options.per_page) {
        Ok(repos) => repos,
        Err(e) => match options.on_repos_failure {
            ReposFailurePolicy::Empty => {
                tracing::warn!(handle, error = %e, "repository listing failed, showing none");
                Vec::new()
            }
            ReposFailurePolicy::Fail => {
                return Err(match e {
                    FetchError::ReposUnavailable(_) => e,
                    other => FetchError::ReposUnavailable(other.to_string()),
                })
            }
        },
    };

    Ok(ProfileLookup {
        profile,
        repositories,
    })
}
