use crate::session::{FetchStatus, SearchSession};
use crate::types::{Profile, Repository};

const RULE_WIDTH: usize = 60;

pub const LOADING: &str = "Loading user data...";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn profile_card(profile: &Profile) -> String {
    let mut lines = vec![
        rule(),
        format!("{} (@{})", profile.display_name(), profile.login),
        rule(),
    ];
    if let Some(bio) = non_empty(&profile.bio) {
        lines.push(bio.to_string());
    }
    lines.push(format!(
        "Followers: {}   Following: {}   Repos: {}",
        profile.followers, profile.following, profile.public_repos
    ));
    if let Some(location) = non_empty(&profile.location) {
        lines.push(format!("Location:  {}", location));
    }
    if let Some(blog) = non_empty(&profile.blog) {
        lines.push(format!("Blog:      {}", blog));
    }
    if let Some(joined) = profile.created_at {
        lines.push(format!("Joined:    {}", joined.format("%Y-%m-%d")));
    }
    lines.push(format!("Avatar:    {}", profile.avatar_url));
    lines.push(format!("Profile:   {}", profile.html_url));
    block(lines)
}

pub fn repository_card(repo: &Repository) -> String {
    let mut stats = format!("    ⭐ {}   🍴 {}", repo.stargazers_count, repo.forks_count);
    if let Some(lang) = &repo.language {
        stats.push_str(&format!("   💻 {}", lang));
    }
    if let Some(updated) = repo.updated_at {
        stats.push_str(&format!("   updated {}", updated.format("%Y-%m-%d")));
    }

    block(vec![
        format!("  {}", repo.name),
        format!(
            "    {}",
            non_empty(&repo.description).unwrap_or("No description")
        ),
        stats,
        format!("    {}", repo.html_url),
    ])
}

/// The whole view for the current state of `session`.
pub fn session_view(session: &SearchSession) -> String {
    match session.status() {
        FetchStatus::Idle => String::new(),
        FetchStatus::Loading => format!("{} (@{})\n", LOADING, session.handle()),
        FetchStatus::Error => format!("{}\n", session.error().unwrap_or_default()),
        FetchStatus::Success => {
            let Some(profile) = session.profile() else {
                return String::new();
            };
            let mut out = profile_card(profile);
            out.push_str(&format!(
                "\nRepositories ({})\n\n",
                session.repositories().len()
            ));
            for repo in session.displayed_repositories() {
                out.push_str(&repository_card(repo));
                out.push('\n');
            }
            if let Some(label) = session.toggle_label() {
                out.push_str(&format!("[{}]\n", label));
            }
            out
        }
    }
}
