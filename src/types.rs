use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record from `/users/{handle}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
    pub html_url: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// The name if one is set, otherwise the login.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }
}

/// One entry from `/users/{handle}/repos`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A profile together with its repositories, in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLookup {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_profile_payload() {
        let body = r#"{
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "name": "The Octocat",
            "company": "@github",
            "blog": "https://github.blog",
            "location": "San Francisco",
            "bio": null,
            "public_repos": 8,
            "followers": 100,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z"
        }"#;

        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.display_name(), "The Octocat");
        assert_eq!(profile.bio, None);
        assert_eq!(profile.public_repos, 8);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
        assert_eq!(
            profile.created_at.map(|t| t.format("%Y-%m-%d").to_string()),
            Some("2011-01-25".to_string())
        );
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let mut profile = fixtures::profile("octocat");
        assert_eq!(profile.display_name(), "octocat");
        profile.name = Some(String::new());
        assert_eq!(profile.display_name(), "octocat");
    }

    #[test]
    fn deserializes_repository_list_in_order() {
        let body = r#"[
            {"id": 2, "name": "newest", "html_url": "https://github.com/o/newest",
             "description": "fresh", "stargazers_count": 5, "forks_count": 1,
             "language": "Rust", "updated_at": "2024-05-01T00:00:00Z"},
            {"id": 1, "name": "older", "html_url": "https://github.com/o/older",
             "description": null, "stargazers_count": 0, "forks_count": 0,
             "language": null}
        ]"#;

        let repos: Vec<Repository> = serde_json::from_str(body).unwrap();
        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["newest", "older"]);
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
        assert!(repos[1].updated_at.is_none());
    }
}
